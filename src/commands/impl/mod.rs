//! Contains actual implementations of commands.

pub(crate) mod elements;
pub(crate) mod email;
pub(crate) mod password;
pub(crate) mod quit;
pub(crate) mod reset;
pub(crate) mod resize;
pub(crate) mod scroll;
pub(crate) mod shared;
pub(crate) mod submit;
