use moodfood::account::{AccountForm, AuthMode, FieldError, FormField};

#[test]
fn test_sign_in_requires_email_and_password() {
    let mut form = AccountForm::new(AuthMode::SignIn);
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get(&FormField::Email), Some(&FieldError::EmailRequired));
    assert_eq!(errors.get(&FormField::Password), Some(&FieldError::PasswordRequired));
    assert!(!errors.contains_key(&FormField::FullName));
    assert!(!errors.contains_key(&FormField::ConfirmPassword));

    form.set_field(FormField::Email, "me@example.com");
    form.set_field(FormField::Password, "short");
    // No length rule when signing in.
    assert!(form.validate().is_ok());
}

#[test]
fn test_sign_up_rules() {
    let mut form = AccountForm::new(AuthMode::SignUp);
    form.set_field(FormField::FullName, "   ");
    form.set_field(FormField::Email, "not-an-email");
    form.set_field(FormField::Password, "1234567");
    form.set_field(FormField::ConfirmPassword, "");

    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get(&FormField::FullName), Some(&FieldError::FullNameRequired));
    assert_eq!(errors.get(&FormField::Email), Some(&FieldError::EmailInvalid));
    assert_eq!(errors.get(&FormField::Password), Some(&FieldError::PasswordTooShort));
    assert_eq!(errors.get(&FormField::ConfirmPassword), Some(&FieldError::ConfirmationRequired));

    form.set_field(FormField::FullName, "Sam Doe");
    form.set_field(FormField::Email, "sam@doe.io");
    form.set_field(FormField::Password, "longenough");
    form.set_field(FormField::ConfirmPassword, "longenougH");
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(form.error(FormField::ConfirmPassword), Some(FieldError::PasswordMismatch));
    assert_eq!(FieldError::PasswordMismatch.to_string(), "Passwords do not match");

    form.set_field(FormField::ConfirmPassword, "longenough");
    assert!(form.validate().is_ok());
}

#[test]
fn test_editing_clears_only_that_field() {
    let mut form = AccountForm::new(AuthMode::SignIn);
    let _ = form.validate();
    assert_eq!(form.errors().len(), 2);

    form.set_field(FormField::Email, "x");
    assert_eq!(form.error(FormField::Email), None);
    assert_eq!(form.error(FormField::Password), Some(FieldError::PasswordRequired));
}

#[test]
fn test_switching_mode_resets_form() {
    let mut form = AccountForm::new(AuthMode::SignIn);
    form.remember_me = true;
    form.set_field(FormField::Email, "me@example.com");
    let _ = form.validate();

    form.switch_mode(AuthMode::SignUp);
    assert_eq!(form.mode(), AuthMode::SignUp);
    assert!(form.email.is_empty());
    assert!(form.errors().is_empty());
    assert!(form.remember_me);
}
