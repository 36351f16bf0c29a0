//! The command and its argument.

use std::str::FromStr;

use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::commands::commands::Commands;

#[derive(Clone, PartialEq, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Command {
  #[zeroize(skip)]
  pub(crate) command: Commands,
  pub(crate) argument: String,
}

impl Command {
  pub(crate) fn new(command: Commands, argument: impl Into<String>) -> Self {
    Command {
      command,
      argument: argument.into(),
    }
  }
}

// The argument may be a password.
impl std::fmt::Debug for Command {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let argument = match self.command {
      Commands::PASSWORD => "<redacted>",
      _ => self.argument.as_str(),
    };
    f.debug_struct("Command")
      .field("command", &self.command)
      .field("argument", &argument)
      .finish()
  }
}

impl FromStr for Command {
  type Err = anyhow::Error;

  #[tracing::instrument(skip(message))]
  fn from_str(message: &str) -> Result<Self, Self::Err> {
    trace!("Parsing message to command.");
    let message_trimmed = message.trim_end_matches(['\n', '\r']);
    let (command, argument) = message_trimmed
      .split_once(' ')
      .unwrap_or((message_trimmed, ""));
    let command = Command::new(command.parse()?, argument);
    trace!("Command parsed: {:?}", command);
    Ok(command)
  }
}
