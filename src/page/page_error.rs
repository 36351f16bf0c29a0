//! Errors that can result from manipulating the page.

use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub(crate) enum PageError {
  #[error("Scroll position must be a non-negative number, got {0}!")]
  InvalidScrollPosition(f64),
  #[error("Viewport height must be a non-negative number, got {0}!")]
  InvalidViewportHeight(f64),
  #[error("Element offset must be a finite number, got {0}!")]
  InvalidOffset(f64),
}
