use async_trait::async_trait;

use crate::commands::command::Command;
use crate::commands::commands::Commands;
use crate::commands::executable::Executable;
use crate::commands::r#impl::shared::{map_page_error_to_reply, parse_pixels};
use crate::commands::reply::Reply;
use crate::commands::reply_code::ReplyCode;
use crate::handlers::reply_sender::ReplySend;
use crate::session::command_processor::CommandProcessor;

pub(crate) struct Resize;

#[async_trait]
impl Executable for Resize {
  #[tracing::instrument(skip(command_processor, reply_sender))]
  async fn execute(
    command_processor: &mut CommandProcessor,
    command: &Command,
    reply_sender: &mut impl ReplySend,
  ) {
    debug_assert_eq!(command.command, Commands::RESIZE);

    let reply = match parse_pixels(&command.argument) {
      Ok(height) => match command_processor.page.resize(height) {
        Ok(()) => Reply::new(
          ReplyCode::CommandOkay,
          format!(
            "Viewport height set to {}",
            command_processor.page.viewport().height()
          ),
        ),
        Err(e) => map_page_error_to_reply(e),
      },
      Err(reply) => reply,
    };
    Resize::reply(reply, reply_sender).await;
  }
}
