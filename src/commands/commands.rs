//! Events understood by the page host.

use strum_macros::{Display, EnumIter, EnumString};

#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub(crate) enum Commands {
  /// Sets the email field.
  EMAIL,
  /// Sets the password field.
  PASSWORD,
  /// Validates the form.
  SUBMIT,
  /// Clears the form.
  RESET,
  /// Scrolls the page to a position.
  SCROLL,
  /// Changes the viewport height.
  RESIZE,
  /// Lists the reveal targets and their state.
  ELEMENTS,
  /// Unloads the page.
  QUIT,
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use strum::IntoEnumIterator;

  use crate::commands::commands::Commands;

  #[test]
  fn round_trip_names_test() {
    Commands::iter().for_each(|c| assert_eq!(c, Commands::from_str(&c.to_string()).unwrap()));
  }

  #[test]
  fn case_insensitive_test() {
    assert_eq!(Commands::SCROLL, Commands::from_str("scroll").unwrap());
    assert_eq!(Commands::PASSWORD, Commands::from_str("Password").unwrap());
    assert!(Commands::from_str("login").is_err());
  }
}
