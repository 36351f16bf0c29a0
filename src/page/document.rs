//! Elements of a page, addressed by handles.

use crate::page::page_element::PageElement;

/// Stable reference to an element of a [`Document`].
#[derive(Copy, Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub(crate) struct ElementHandle(usize);

#[derive(Clone, Debug, Default)]
pub(crate) struct Document {
  elements: Vec<PageElement>,
}

impl Document {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn append(&mut self, element: PageElement) -> ElementHandle {
    self.elements.push(element);
    ElementHandle(self.elements.len() - 1)
  }

  pub(crate) fn get(&self, handle: ElementHandle) -> Option<&PageElement> {
    self.elements.get(handle.0)
  }

  pub(crate) fn get_mut(&mut self, handle: ElementHandle) -> Option<&mut PageElement> {
    self.elements.get_mut(handle.0)
  }

  pub(crate) fn len(&self) -> usize {
    self.elements.len()
  }

  /// Returns handles of all elements tagged with `class`, in document order.
  ///
  /// The result is a snapshot: elements tagged later are not included.
  pub(crate) fn select_by_class(&self, class: &str) -> Vec<ElementHandle> {
    self
      .elements
      .iter()
      .enumerate()
      .filter(|(_, e)| e.has_class(class))
      .map(|(i, _)| ElementHandle(i))
      .collect()
  }
}
