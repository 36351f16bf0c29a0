//! Viewport position and size.

use crate::page::page_error::PageError;

/// The visible part of the page.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub(crate) struct Viewport {
  scroll_top: f64,
  height: f64,
}

impl Viewport {
  pub(crate) fn new(scroll_top: f64, height: f64) -> Result<Self, PageError> {
    let mut viewport = Viewport::default();
    viewport.set_scroll_top(scroll_top)?;
    viewport.set_height(height)?;
    Ok(viewport)
  }

  pub(crate) fn scroll_top(&self) -> f64 {
    self.scroll_top
  }

  pub(crate) fn height(&self) -> f64 {
    self.height
  }

  pub(crate) fn set_scroll_top(&mut self, scroll_top: f64) -> Result<(), PageError> {
    if !scroll_top.is_finite() || scroll_top < 0.0 {
      return Err(PageError::InvalidScrollPosition(scroll_top));
    }
    self.scroll_top = scroll_top;
    Ok(())
  }

  pub(crate) fn set_height(&mut self, height: f64) -> Result<(), PageError> {
    if !height.is_finite() || height < 0.0 {
      return Err(PageError::InvalidViewportHeight(height));
    }
    self.height = height;
    Ok(())
  }
}
