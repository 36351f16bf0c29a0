//! Fields of the login form.

use strum_macros::{Display, EnumIter, EnumString};

/// A field of the [`LoginForm`] that can carry validation messages.
///
/// The declaration order is the order in which fields are validated and reported.
///
/// [`LoginForm`]: crate::auth::login_form::LoginForm
#[derive(Copy, Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub(crate) enum FormField {
  #[strum(serialize = "email")]
  Identifier,
  #[strum(serialize = "password")]
  Secret,
}
