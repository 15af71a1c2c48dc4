//! Auth Modal State
//!
//! Which panel of the login/signup modal is visible.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPanel {
    #[default]
    Closed,
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    panel: AuthPanel,
    signup_prompt: bool,
}

impl ModalState {
    pub fn panel(&self) -> AuthPanel {
        self.panel
    }

    pub fn is_open(&self) -> bool {
        self.panel != AuthPanel::Closed
    }

    /// "Sign up first" hint shown on the login panel
    pub fn signup_prompt(&self) -> bool {
        self.signup_prompt && self.panel == AuthPanel::Login
    }

    /// Prompt shows only for visitors that never registered on this browser
    pub fn open_login(&mut self, registered: bool) {
        self.panel = AuthPanel::Login;
        self.signup_prompt = !registered;
    }

    pub fn open_signup(&mut self) {
        self.panel = AuthPanel::Signup;
        self.signup_prompt = false;
    }

    /// Switch panels inside an open modal without touching the prompt
    pub fn switch_to_login(&mut self) {
        self.panel = AuthPanel::Login;
    }

    pub fn close(&mut self) {
        self.panel = AuthPanel::Closed;
    }
}
