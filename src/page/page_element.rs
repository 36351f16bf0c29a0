//! Elements of the page and their classes.

use std::collections::BTreeSet;

/// A single element of the page.
///
/// `offset_top` is the absolute vertical position of the element's top edge in pixels.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PageElement {
  pub(crate) id: String,
  classes: BTreeSet<String>,
  offset_top: f64,
}

impl PageElement {
  pub(crate) fn new(id: impl Into<String>, offset_top: f64) -> Self {
    PageElement {
      id: id.into(),
      classes: BTreeSet::new(),
      offset_top,
    }
  }

  pub(crate) fn with_class(mut self, class: impl Into<String>) -> Self {
    self.add_class(class);
    self
  }

  pub(crate) fn offset_top(&self) -> f64 {
    self.offset_top
  }

  /// Adds `class` to the element. Returns false if it was already present.
  pub(crate) fn add_class(&mut self, class: impl Into<String>) -> bool {
    self.classes.insert(class.into())
  }

  pub(crate) fn has_class(&self, class: &str) -> bool {
    self.classes.contains(class)
  }
}
