//! The login form model.

use std::fmt::{Debug, Formatter};

use tracing::debug;
use validator::ValidateEmail;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::auth::password_policy;
use crate::auth::validation_errors::ValidationErrors;
use crate::auth::validation_message::ValidationMessage;

pub(crate) const MAX_IDENTIFIER_LENGTH: usize = 50;

/// The email and password entered on the login page.
///
/// Fields may hold anything between validations; the constraints are only checked by
/// [`LoginForm::validate`]. Both fields are wiped from memory when the form is dropped or reset.
#[derive(Clone, Eq, PartialEq, Default, Zeroize, ZeroizeOnDrop)]
pub(crate) struct LoginForm {
  pub(crate) identifier: String,
  pub(crate) secret: String,
}

impl LoginForm {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn set_identifier(&mut self, identifier: impl Into<String>) {
    self.identifier = identifier.into();
  }

  pub(crate) fn set_secret(&mut self, secret: impl Into<String>) {
    self.secret.zeroize();
    self.secret = secret.into();
  }

  /// Clears both fields, wiping their previous contents.
  pub(crate) fn reset(&mut self) {
    self.zeroize();
  }

  /// Validates the form.
  ///
  /// Each field is checked independently and every failed rule adds one message. If a field is
  /// empty (or whitespace only) it reports only the "required" message and its other rules are
  /// skipped. Lengths are counted in Unicode scalar values, not UTF-16 code units, so a character
  /// outside the Basic Multilingual Plane counts once.
  ///
  /// # Returns
  ///
  /// [`ValidationErrors`] grouping messages by field. Empty if the form is valid.
  ///
  pub(crate) fn validate(&self) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    self.validate_identifier(&mut errors);
    self.validate_secret(&mut errors);
    debug!(
      "Login form validated with {} error(s): {:?}",
      errors.len(),
      errors.messages()
    );
    errors
  }

  fn validate_identifier(&self, errors: &mut ValidationErrors) {
    if is_blank(&self.identifier) {
      errors.add(ValidationMessage::EmailRequired);
      return;
    }
    if !self.identifier.validate_email() {
      errors.add(ValidationMessage::InvalidEmail);
    }
    if self.identifier.chars().count() > MAX_IDENTIFIER_LENGTH {
      errors.add(ValidationMessage::EmailTooLong);
    }
  }

  fn validate_secret(&self, errors: &mut ValidationErrors) {
    if is_blank(&self.secret) {
      errors.add(ValidationMessage::PasswordRequired);
      return;
    }
    let length = self.secret.chars().count();
    if length < password_policy::MIN_LENGTH {
      errors.add(ValidationMessage::PasswordTooShort);
    }
    if length > password_policy::MAX_LENGTH {
      errors.add(ValidationMessage::PasswordTooLong);
    }
    if !password_policy::is_complex_enough(&self.secret) {
      errors.add(ValidationMessage::PasswordTooWeak);
    }
  }
}

// Whitespace only counts as empty.
fn is_blank(value: &str) -> bool {
  value.trim().is_empty()
}

impl Debug for LoginForm {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("LoginForm")
      .field("identifier", &self.identifier)
      .field("secret", &"<redacted>")
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use crate::auth::form_field::FormField;
  use crate::auth::login_form::LoginForm;
  use crate::auth::validation_message::ValidationMessage;

  fn form(identifier: &str, secret: &str) -> LoginForm {
    let mut form = LoginForm::new();
    form.set_identifier(identifier);
    form.set_secret(secret);
    form
  }

  #[test]
  fn valid_form_test() {
    let form = form("user@example.com", "Valid1Pwd!");
    assert!(form.validate().is_empty());
  }

  #[test]
  fn default_form_test() {
    let errors = LoginForm::default().validate();
    assert_eq!(&[ValidationMessage::EmailRequired], errors.get(FormField::Identifier));
    assert_eq!(&[ValidationMessage::PasswordRequired], errors.get(FormField::Secret));
  }

  #[test]
  fn empty_identifier_test() {
    let errors = form("", "Valid1Pwd!").validate();
    assert_eq!(&[ValidationMessage::EmailRequired], errors.get(FormField::Identifier));
    assert!(errors.get(FormField::Secret).is_empty());
  }

  #[test]
  fn whitespace_identifier_test() {
    let errors = form("   ", "Valid1Pwd!").validate();
    assert_eq!(&[ValidationMessage::EmailRequired], errors.get(FormField::Identifier));
  }

  #[test]
  fn malformed_identifier_test() {
    let errors = form("not-an-email", "Valid1Pwd!").validate();
    assert_eq!(&[ValidationMessage::InvalidEmail], errors.get(FormField::Identifier));
  }

  #[test]
  fn long_identifier_test() {
    let identifier = format!("{}@b.com", "a".repeat(51));
    let errors = form(&identifier, "Valid1Pwd!").validate();
    assert_eq!(&[ValidationMessage::EmailTooLong], errors.get(FormField::Identifier));
  }

  #[test]
  fn identifier_at_limit_test() {
    let identifier = format!("{}@b.com", "a".repeat(44));
    assert_eq!(50, identifier.chars().count());
    let errors = form(&identifier, "Valid1Pwd!").validate();
    assert!(errors.get(FormField::Identifier).is_empty());
  }

  #[test]
  fn empty_secret_test() {
    let errors = form("user@example.com", "").validate();
    assert_eq!(&[ValidationMessage::PasswordRequired], errors.get(FormField::Secret));
  }

  #[test]
  fn short_secret_test() {
    let errors = form("user@example.com", "Ab1!").validate();
    assert_eq!(
      &[ValidationMessage::PasswordTooShort, ValidationMessage::PasswordTooWeak],
      errors.get(FormField::Secret)
    );
  }

  #[test]
  fn long_secret_test() {
    let secret = format!("Ab1!{}", "x".repeat(47));
    assert_eq!(51, secret.chars().count());
    let errors = form("user@example.com", &secret).validate();
    assert_eq!(
      &[ValidationMessage::PasswordTooLong, ValidationMessage::PasswordTooWeak],
      errors.get(FormField::Secret)
    );
  }

  #[test]
  fn weak_secret_test() {
    let errors = form("user@example.com", "alllowercase1!").validate();
    assert_eq!(&[ValidationMessage::PasswordTooWeak], errors.get(FormField::Secret));
  }

  #[test]
  fn all_failures_collected_test() {
    let errors = form("not-an-email", "abc").validate();
    assert_eq!(
      vec![
        ValidationMessage::InvalidEmail,
        ValidationMessage::PasswordTooShort,
        ValidationMessage::PasswordTooWeak
      ],
      errors.messages()
    );
  }

  #[test]
  fn idempotent_validation_test() {
    let form = form("not-an-email", "Ab1!");
    assert_eq!(form.validate(), form.validate());
  }

  #[test]
  fn reset_test() {
    let mut form = form("user@example.com", "Valid1Pwd!");
    form.reset();
    assert!(form.identifier.is_empty());
    assert!(form.secret.is_empty());
  }

  #[test]
  fn debug_redacts_secret_test() {
    let output = format!("{:?}", form("user@example.com", "Valid1Pwd!"));
    assert!(output.contains("user@example.com"));
    assert!(!output.contains("Valid1Pwd!"));
  }

  #[test]
  fn astral_character_counts_once_test() {
    let errors = form("user@example.com", "Ab1!\u{1F600}").validate();
    assert_eq!(
      &[ValidationMessage::PasswordTooShort, ValidationMessage::PasswordTooWeak],
      errors.get(FormField::Secret)
    );
  }
}
