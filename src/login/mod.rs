//! Sign-in form. Credentials are never checked, the form only insists both fields are filled.

use crate::log_info;
use crate::role::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
    Role,
    Submit,
}

impl LoginField {
    const ORDER: [LoginField; 4] = [
        LoginField::Email,
        LoginField::Password,
        LoginField::Role,
        LoginField::Submit,
    ];

    fn step(&self, direction: i32) -> LoginField {
        let len = Self::ORDER.len() as i32;
        let idx = Self::ORDER.iter().position(|f| f == self).unwrap_or(0) as i32;
        Self::ORDER[((idx + direction).rem_euclid(len)) as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Editing,
    SigningIn,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub focus: LoginField,
    pub show_password: bool,
    pub phase: LoginPhase,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_signing_in(&self) -> bool {
        self.phase == LoginPhase::SigningIn
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.step(1);
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.step(-1);
    }

    /// Type into the focused text field. Ignored everywhere else.
    pub fn handle_input(&mut self, ch: char) {
        if let Some(field) = self.focused_text_mut() {
            field.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_text_mut() {
            field.pop();
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        if self.is_signing_in() {
            return None;
        }
        match self.focus {
            LoginField::Email => Some(&mut self.email),
            LoginField::Password => Some(&mut self.password),
            LoginField::Role | LoginField::Submit => None,
        }
    }

    pub fn next_role(&mut self) {
        if !self.is_signing_in() {
            self.role = self.role.next();
        }
    }

    pub fn prev_role(&mut self) {
        if !self.is_signing_in() {
            self.role = self.role.prev();
        }
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Fill both fields with the selected role's demo credentials.
    pub fn fill_demo(&mut self) {
        if self.is_signing_in() {
            return;
        }
        let creds = self.role.profile().demo_credentials;
        self.email = creds.email.to_string();
        self.password = creds.password.to_string();
    }

    pub fn password_display(&self) -> String {
        if self.show_password {
            self.password.clone()
        } else {
            "•".repeat(self.password.chars().count())
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.is_signing_in() && !self.email.trim().is_empty() && !self.password.is_empty()
    }

    /// Enter the signing-in phase. Returns the role to finish with once the delay elapses.
    pub fn submit(&mut self) -> Option<Role> {
        if !self.can_submit() {
            return None;
        }
        log_info!("Signing in {} as {}", self.email.trim(), self.role);
        self.phase = LoginPhase::SigningIn;
        Some(self.role)
    }

    /// Called when the sign-in delay is over. Clears the form for the next session.
    pub fn complete(&mut self) -> Role {
        let role = self.role;
        *self = Self::default();
        role
    }
}
