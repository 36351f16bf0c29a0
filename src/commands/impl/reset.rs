use async_trait::async_trait;

use crate::commands::command::Command;
use crate::commands::commands::Commands;
use crate::commands::executable::Executable;
use crate::commands::reply::Reply;
use crate::commands::reply_code::ReplyCode;
use crate::handlers::reply_sender::ReplySend;
use crate::session::command_processor::CommandProcessor;

pub(crate) struct Reset;

#[async_trait]
impl Executable for Reset {
  async fn execute(
    command_processor: &mut CommandProcessor,
    command: &Command,
    reply_sender: &mut impl ReplySend,
  ) {
    debug_assert_eq!(command.command, Commands::RESET);

    command_processor.login_form.reset();
    Reset::reply(Reply::new(ReplyCode::CommandOkay, "Form cleared"), reply_sender).await;
  }
}
