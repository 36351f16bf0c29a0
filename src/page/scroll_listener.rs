use crate::page::document::Document;
use crate::page::viewport::Viewport;

/// Behaviour invoked by the [`Page`] after every scroll.
///
/// [`Page`]: crate::page::page::Page
pub(crate) trait ScrollListener: Send + Sync {
  fn on_scroll(&mut self, viewport: &Viewport, document: &mut Document);
}
