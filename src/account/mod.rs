//! Sign-in / sign-up form state and validation. Nothing is authenticated.

pub mod form;

pub use form::{AccountForm, AuthMode, FieldError, FormField};
