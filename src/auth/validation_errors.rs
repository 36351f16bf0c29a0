//! Collected result of validating a form.

use std::collections::BTreeMap;

use crate::auth::form_field::FormField;
use crate::auth::validation_message::ValidationMessage;

/// Messages produced by validation, grouped by field.
///
/// Fields are kept in declaration order and messages in the order their rules were checked.
/// An empty collection means the form is valid.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ValidationErrors {
  errors: BTreeMap<FormField, Vec<ValidationMessage>>,
}

impl ValidationErrors {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn add(&mut self, message: ValidationMessage) {
    self.errors.entry(message.field()).or_default().push(message);
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.errors.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.errors.values().map(Vec::len).sum()
  }

  pub(crate) fn get(&self, field: FormField) -> &[ValidationMessage] {
    self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
  }

  /// All messages in field order, flattened.
  pub(crate) fn messages(&self) -> Vec<ValidationMessage> {
    self.errors.values().flatten().copied().collect()
  }
}
