use async_trait::async_trait;

use crate::commands::command::Command;
use crate::commands::commands::Commands;
use crate::commands::executable::Executable;
use crate::commands::reply::Reply;
use crate::commands::reply_code::ReplyCode;
use crate::handlers::reply_sender::ReplySend;
use crate::session::command_processor::CommandProcessor;

pub(crate) struct Password;

#[async_trait]
impl Executable for Password {
  #[tracing::instrument(skip_all)]
  async fn execute(
    command_processor: &mut CommandProcessor,
    command: &Command,
    reply_sender: &mut impl ReplySend,
  ) {
    debug_assert_eq!(command.command, Commands::PASSWORD);

    command_processor
      .login_form
      .set_secret(command.argument.as_str());
    Password::reply(Reply::new(ReplyCode::CommandOkay, "Password set"), reply_sender).await;
  }
}
