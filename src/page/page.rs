//! The page shown in the browser window.

use tracing::trace;

use crate::page::document::Document;
use crate::page::page_element::PageElement;
use crate::page::page_error::PageError;
use crate::page::scroll_listener::ScrollListener;
use crate::page::scroll_reveal::SCROLL_FADEIN_CLASS;
use crate::page::viewport::Viewport;

pub(crate) struct Page {
  document: Document,
  viewport: Viewport,
  scroll_listeners: Vec<Box<dyn ScrollListener>>,
}

impl Page {
  pub(crate) fn new(document: Document, viewport: Viewport) -> Self {
    Page {
      document,
      viewport,
      scroll_listeners: Vec::new(),
    }
  }

  /// Builds a page of reveal targets.
  ///
  /// Each offset in `target_offsets` becomes an element tagged with [`SCROLL_FADEIN_CLASS`],
  /// named `target-<n>` in order. The viewport starts at the top of the page.
  ///
  /// # Errors
  ///
  /// - [`PageError::InvalidViewportHeight`]: If `viewport_height` is negative or not finite.
  /// - [`PageError::InvalidOffset`]: If an offset is not finite.
  ///
  pub(crate) fn from_layout(
    viewport_height: f64,
    target_offsets: &[f64],
  ) -> Result<Self, PageError> {
    let viewport = Viewport::new(0.0, viewport_height)?;
    let mut document = Document::new();
    for (i, offset) in target_offsets.iter().enumerate() {
      if !offset.is_finite() {
        return Err(PageError::InvalidOffset(*offset));
      }
      let element =
        PageElement::new(format!("target-{}", i + 1), *offset).with_class(SCROLL_FADEIN_CLASS);
      document.append(element);
    }
    Ok(Page::new(document, viewport))
  }

  pub(crate) fn document(&self) -> &Document {
    &self.document
  }

  #[cfg(test)]
  pub(crate) fn document_mut(&mut self) -> &mut Document {
    &mut self.document
  }

  pub(crate) fn viewport(&self) -> &Viewport {
    &self.viewport
  }

  pub(crate) fn add_scroll_listener(&mut self, listener: Box<dyn ScrollListener>) {
    self.scroll_listeners.push(listener);
  }

  /// Scrolls to `scroll_top` and notifies scroll listeners in registration order.
  ///
  /// Listeners are notified even if the position did not change.
  pub(crate) fn scroll_to(&mut self, scroll_top: f64) -> Result<(), PageError> {
    self.viewport.set_scroll_top(scroll_top)?;
    trace!("Scrolled to {scroll_top}.");
    for listener in self.scroll_listeners.iter_mut() {
      listener.on_scroll(&self.viewport, &mut self.document);
    }
    Ok(())
  }

  /// Changes the viewport height. Resizing alone does not notify scroll listeners.
  pub(crate) fn resize(&mut self, height: f64) -> Result<(), PageError> {
    self.viewport.set_height(height)?;
    trace!("Viewport resized to {height}.");
    Ok(())
  }
}
