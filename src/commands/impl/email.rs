use async_trait::async_trait;

use crate::commands::command::Command;
use crate::commands::commands::Commands;
use crate::commands::executable::Executable;
use crate::commands::reply::Reply;
use crate::commands::reply_code::ReplyCode;
use crate::handlers::reply_sender::ReplySend;
use crate::session::command_processor::CommandProcessor;

pub(crate) struct Email;

#[async_trait]
impl Executable for Email {
  #[tracing::instrument(skip_all)]
  async fn execute(
    command_processor: &mut CommandProcessor,
    command: &Command,
    reply_sender: &mut impl ReplySend,
  ) {
    debug_assert_eq!(command.command, Commands::EMAIL);

    command_processor
      .login_form
      .set_identifier(command.argument.as_str());
    Email::reply(Reply::new(ReplyCode::CommandOkay, "Email set"), reply_sender).await;
  }
}
