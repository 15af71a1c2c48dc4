//! Credential Validation
//!
//! Client-side checks run before the signup/login forms are submitted.

use regex::Regex;
use std::sync::OnceLock;

use crate::commands::{LoginArgs, SignupArgs};

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

pub fn is_valid_email(text: &str) -> bool {
    email_re().is_match(text)
}

/// At least 8 ASCII letters/digits, with one of each
pub fn is_strong_password(password: &str) -> bool {
    password.len() >= 8
        && password.chars().all(|c| c.is_ascii_alphanumeric())
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthField {
    Username,
    Email,
    Password,
    ConfirmPassword,
    Identifier,
    LoginPassword,
}

pub type FieldErrors = Vec<(AuthField, &'static str)>;

/// Inline message for one input, if validation flagged it
pub fn message_for(errors: &[(AuthField, &'static str)], field: AuthField) -> Option<&'static str> {
    errors.iter().find(|(f, _)| *f == field).map(|(_, msg)| *msg)
}

/// Raw signup form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupArgs, FieldErrors> {
        let username = self.username.trim();
        let email = self.email.trim();
        let password = self.password.trim();
        let mut errors = Vec::new();
        if username.is_empty() {
            errors.push((AuthField::Username, "Please enter a username."));
        }
        if !is_valid_email(email) {
            errors.push((AuthField::Email, "Please enter a valid email address."));
        }
        if !is_strong_password(password) {
            errors.push((
                AuthField::Password,
                "Password must be at least 8 characters long and include at least one letter and one number.",
            ));
        }
        if password != self.confirm.trim() {
            errors.push((AuthField::ConfirmPassword, "Passwords do not match."));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(SignupArgs {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginArgs, FieldErrors> {
        let identifier = self.identifier.trim();
        let password = self.password.trim();
        let mut errors = Vec::new();
        if identifier.is_empty() {
            errors.push((AuthField::Identifier, "Please enter your username or email."));
        }
        if password.is_empty() {
            errors.push((AuthField::LoginPassword, "Please enter your password."));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(LoginArgs { identifier: identifier.to_string(), password: password.to_string() })
    }
}
