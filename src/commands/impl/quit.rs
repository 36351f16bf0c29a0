use async_trait::async_trait;
use tracing::info;

use crate::commands::command::Command;
use crate::commands::commands::Commands;
use crate::commands::executable::Executable;
use crate::commands::reply::Reply;
use crate::commands::reply_code::ReplyCode;
use crate::handlers::reply_sender::ReplySend;
use crate::session::command_processor::CommandProcessor;

pub(crate) struct Quit;

#[async_trait]
impl Executable for Quit {
  async fn execute(
    command_processor: &mut CommandProcessor,
    command: &Command,
    reply_sender: &mut impl ReplySend,
  ) {
    debug_assert_eq!(command.command, Commands::QUIT);

    info!("Unloading page.");
    command_processor.unload();
    Quit::reply(Reply::new(ReplyCode::ClosingPage, "Goodbye"), reply_sender).await;
  }
}
