//! Password complexity rule.
//!
//! The rule is `^(?=.*[a-z])(?=.*[A-Z])(?=.*\d)(?=.*[^\da-zA-Z]).{6,50}$` applied to the whole
//! value. The `regex` crate has no look-around, so the rule is split into a length match over the
//! whole value and a set of character classes that must all be present.

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

pub(crate) const MIN_LENGTH: usize = 6;
pub(crate) const MAX_LENGTH: usize = 50;

// `.` does not match a newline, so a value containing one never satisfies the rule.
static LENGTH: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\A.{6,50}\z").expect("Length pattern should compile"));

static REQUIRED_CLASSES: Lazy<RegexSet> = Lazy::new(|| {
  RegexSet::new([r"[a-z]", r"[A-Z]", r"\d", r"[^\da-zA-Z]"])
    .expect("Character class patterns should compile")
});

/// Checks if `password` satisfies the complexity rule.
///
/// Requires at least one lowercase letter, one uppercase letter, one digit and one character that
/// is none of those, with a total length between [`MIN_LENGTH`] and [`MAX_LENGTH`].
pub(crate) fn is_complex_enough(password: &str) -> bool {
  LENGTH.is_match(password) && REQUIRED_CLASSES.matches(password).matched_all()
}
