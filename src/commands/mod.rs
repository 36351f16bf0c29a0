//! Contains the page events that can be sent to the host and their replies.

pub(crate) mod command;
pub(crate) mod commands;
pub(crate) mod executable;
pub(crate) mod r#impl;
pub(crate) mod reply;
pub(crate) mod reply_code;
