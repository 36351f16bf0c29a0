//! Contains the reply sender.
//!
//! The reply sender is generic over the output it writes to. The page host writes replies to
//! stdout, tests collect them through a channel.
pub(crate) mod reply_sender;
