//! Contains the page model and the scroll triggered reveal of page elements.
//!
//! The page owns its document and viewport. Behaviour reacting to scrolling is registered once,
//! when the page loads, as a [`ScrollListener`].
//!
//! [`ScrollListener`]: scroll_listener::ScrollListener
pub(crate) mod document;
pub(crate) mod page;
pub(crate) mod page_element;
pub(crate) mod page_error;
pub(crate) mod scroll_listener;
pub(crate) mod scroll_reveal;
pub(crate) mod viewport;
