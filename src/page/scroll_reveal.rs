//! Scroll triggered reveal of page elements.
//!
//! Elements tagged with [`SCROLL_FADEIN_CLASS`] start hidden. Once the page is scrolled far enough
//! that an element is [`REVEAL_OFFSET`] pixels inside the viewport, it receives
//! [`IS_FADEIN_CLASS`] and stays revealed for the rest of the page's life.

use strum_macros::Display;
use tracing::{debug, trace};

use crate::page::document::{Document, ElementHandle};
use crate::page::page::Page;
use crate::page::scroll_listener::ScrollListener;
use crate::page::viewport::Viewport;

pub(crate) const SCROLL_FADEIN_CLASS: &str = "scroll-fadein";
pub(crate) const IS_FADEIN_CLASS: &str = "is-fadein";
pub(crate) const REVEAL_OFFSET: f64 = 100.0;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
pub(crate) enum RevealState {
  #[strum(serialize = "hidden")]
  Hidden,
  #[strum(serialize = "revealed")]
  Revealed,
}

impl RevealState {
  pub(crate) fn of(document: &Document, handle: ElementHandle) -> Option<RevealState> {
    document.get(handle).map(|e| {
      if e.has_class(IS_FADEIN_CLASS) {
        RevealState::Revealed
      } else {
        RevealState::Hidden
      }
    })
  }
}

/// The scroll position past which an element at `offset_top` is revealed.
pub(crate) fn reveal_threshold(offset_top: f64, viewport_height: f64) -> f64 {
  offset_top - viewport_height + REVEAL_OFFSET
}

pub(crate) fn should_reveal(offset_top: f64, viewport: &Viewport) -> bool {
  viewport.scroll_top() > reveal_threshold(offset_top, viewport.height())
}

#[derive(Clone, Debug, Default)]
pub(crate) struct ScrollReveal {
  targets: Vec<ElementHandle>,
}

impl ScrollReveal {
  pub(crate) fn new(targets: Vec<ElementHandle>) -> Self {
    ScrollReveal { targets }
  }

  /// Sets up reveal for a freshly loaded page.
  ///
  /// Takes the elements currently tagged with [`SCROLL_FADEIN_CLASS`] as targets and registers
  /// the reveal as a scroll listener of the `page`. Elements tagged afterwards are not tracked.
  ///
  /// # Returns
  ///
  /// The number of tracked targets.
  ///
  pub(crate) fn attach(page: &mut Page) -> usize {
    let targets = page.document().select_by_class(SCROLL_FADEIN_CLASS);
    let count = targets.len();
    debug!("Attaching scroll reveal to {count} target(s).");
    page.add_scroll_listener(Box::new(ScrollReveal::new(targets)));
    count
  }

  /// Reveals every hidden target whose threshold is crossed.
  ///
  /// Already revealed targets are skipped, so a target is never hidden again whatever the
  /// viewport does.
  ///
  /// # Returns
  ///
  /// The number of targets revealed by this call.
  ///
  pub(crate) fn reveal(&self, viewport: &Viewport, document: &mut Document) -> usize {
    let mut revealed = 0;
    for handle in self.targets.iter() {
      let Some(element) = document.get_mut(*handle) else {
        continue;
      };
      if element.has_class(IS_FADEIN_CLASS) {
        continue;
      }
      if should_reveal(element.offset_top(), viewport) {
        trace!("Revealing element '{}'.", element.id);
        element.add_class(IS_FADEIN_CLASS);
        revealed += 1;
      }
    }
    revealed
  }
}

impl ScrollListener for ScrollReveal {
  // Every target is rechecked on every event; there is no debouncing.
  fn on_scroll(&mut self, viewport: &Viewport, document: &mut Document) {
    let revealed = self.reveal(viewport, document);
    if revealed > 0 {
      debug!("Revealed {revealed} element(s) at scroll position {}.", viewport.scroll_top());
    }
  }
}
