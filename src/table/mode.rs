//! Mode Controller
//!
//! Edit and delete interactions are mutually exclusive on the table.

/// Exclusive table mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    None,
    Edit,
    Delete,
}

impl Mode {
    /// Class placed on the table container
    pub fn container_class(&self) -> Option<&'static str> {
        match self {
            Mode::None => None,
            Mode::Edit => Some("edit-mode"),
            Mode::Delete => Some("delete-mode"),
        }
    }
}

/// Result of a toggle, in the order the changes happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Entered `to`; `left` is the mode that was force-exited first
    Entered { to: Mode, left: Option<Mode> },
    Exited(Mode),
}

impl Transition {
    pub fn exited(&self, mode: Mode) -> bool {
        match self {
            Transition::Entered { left, .. } => *left == Some(mode),
            Transition::Exited(m) => *m == mode,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is(&self, mode: Mode) -> bool {
        self.mode == mode
    }

    pub fn toggle_edit(&mut self) -> Transition {
        self.toggle(Mode::Edit)
    }

    pub fn toggle_delete(&mut self) -> Transition {
        self.toggle(Mode::Delete)
    }

    /// Leave whatever mode is active
    pub fn reset(&mut self) -> Option<Transition> {
        match self.mode {
            Mode::None => None,
            mode => {
                self.mode = Mode::None;
                Some(Transition::Exited(mode))
            }
        }
    }

    fn toggle(&mut self, target: Mode) -> Transition {
        if self.mode == target {
            self.mode = Mode::None;
            return Transition::Exited(target);
        }
        let left = match self.mode {
            Mode::None => None,
            other => Some(other),
        };
        self.mode = target;
        Transition::Entered { to: target, left }
    }
}
