//! Contains the state of a loaded page and the processing of its events.
pub(crate) mod command_processor;
