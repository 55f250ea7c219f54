use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FormField {
    FullName,
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum FieldError {
    #[error("Full name is required")]
    FullNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Please confirm your password")]
    ConfirmationRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Form value plus the per-field errors of the last validation.
#[derive(Debug, Clone, Serialize)]
pub struct AccountForm {
    mode: AuthMode,
    pub full_name: String,
    pub email: String,
    #[serde(skip)]
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
    pub remember_me: bool,
    errors: BTreeMap<FormField, FieldError>,
}

impl AccountForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            full_name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            remember_me: false,
            errors: BTreeMap::new(),
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switching modes starts from an empty form.
    pub fn switch_mode(&mut self, mode: AuthMode) {
        let remember_me = self.remember_me;
        *self = Self::new(mode);
        self.remember_me = remember_me;
    }

    /// Editing a field clears its pending error.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::FullName => self.full_name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
        }
        self.errors.remove(&field);
    }

    pub fn errors(&self) -> &BTreeMap<FormField, FieldError> {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Replaces the stored errors with a fresh validation pass.
    pub fn validate(&mut self) -> Result<(), BTreeMap<FormField, FieldError>> {
        self.errors = self.check();
        debug!("Validated {:?} form: {} error(s)", self.mode, self.errors.len());
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors.clone())
        }
    }

    fn check(&self) -> BTreeMap<FormField, FieldError> {
        let sign_up = self.mode == AuthMode::SignUp;
        let mut errors = BTreeMap::new();

        if sign_up && self.full_name.trim().is_empty() {
            errors.insert(FormField::FullName, FieldError::FullNameRequired);
        }

        if self.email.trim().is_empty() {
            errors.insert(FormField::Email, FieldError::EmailRequired);
        } else if !is_valid_email(&self.email) {
            errors.insert(FormField::Email, FieldError::EmailInvalid);
        }

        if self.password.is_empty() {
            errors.insert(FormField::Password, FieldError::PasswordRequired);
        } else if sign_up && self.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.insert(FormField::Password, FieldError::PasswordTooShort);
        }

        if sign_up {
            if self.confirm_password.is_empty() {
                errors.insert(FormField::ConfirmPassword, FieldError::ConfirmationRequired);
            } else if self.password != self.confirm_password {
                errors.insert(FormField::ConfirmPassword, FieldError::PasswordMismatch);
            }
        }

        errors
    }
}
