//! User facing messages produced by form validation.

use strum_macros::{Display, EnumIter};

use crate::auth::form_field::FormField;

#[derive(Copy, Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq, Display, EnumIter)]
pub(crate) enum ValidationMessage {
  #[strum(to_string = "Email is required")]
  EmailRequired,
  #[strum(to_string = "Invalid Email Address")]
  InvalidEmail,
  #[strum(to_string = "Email cannot be more than 50 characters")]
  EmailTooLong,
  #[strum(to_string = "Password is required")]
  PasswordRequired,
  #[strum(to_string = "Password must be at least 6 characters")]
  PasswordTooShort,
  #[strum(to_string = "Password cannot be more than 50 characters")]
  PasswordTooLong,
  #[strum(
    to_string = "Password must contain at least one uppercase letter, one lowercase letter, one digit and one special character"
  )]
  PasswordTooWeak,
}

impl ValidationMessage {
  /// The field this message is reported against.
  pub(crate) fn field(&self) -> FormField {
    match self {
      ValidationMessage::EmailRequired
      | ValidationMessage::InvalidEmail
      | ValidationMessage::EmailTooLong => FormField::Identifier,
      ValidationMessage::PasswordRequired
      | ValidationMessage::PasswordTooShort
      | ValidationMessage::PasswordTooLong
      | ValidationMessage::PasswordTooWeak => FormField::Secret,
    }
  }
}
