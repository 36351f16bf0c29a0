use async_trait::async_trait;

use crate::commands::command::Command;
use crate::commands::commands::Commands;
use crate::commands::executable::Executable;
use crate::commands::r#impl::shared::{count_revealed, map_page_error_to_reply, parse_pixels};
use crate::commands::reply::Reply;
use crate::commands::reply_code::ReplyCode;
use crate::handlers::reply_sender::ReplySend;
use crate::session::command_processor::CommandProcessor;

pub(crate) struct Scroll;

#[async_trait]
impl Executable for Scroll {
  /// Scrolls the page and replies with the number of elements revealed by this scroll.
  #[tracing::instrument(skip(command_processor, reply_sender))]
  async fn execute(
    command_processor: &mut CommandProcessor,
    command: &Command,
    reply_sender: &mut impl ReplySend,
  ) {
    debug_assert_eq!(command.command, Commands::SCROLL);

    let scroll_top = match parse_pixels(&command.argument) {
      Ok(s) => s,
      Err(reply) => {
        Scroll::reply(reply, reply_sender).await;
        return;
      }
    };

    let page = &mut command_processor.page;
    let before = count_revealed(page.document());
    if let Err(e) = page.scroll_to(scroll_top) {
      Scroll::reply(map_page_error_to_reply(e), reply_sender).await;
      return;
    }
    let revealed = count_revealed(page.document()) - before;
    let position = page.viewport().scroll_top();

    Scroll::reply(
      Reply::new(
        ReplyCode::CommandOkay,
        format!("Scrolled to {position}, revealed {revealed} element(s)"),
      ),
      reply_sender,
    )
    .await;
  }
}

#[cfg(test)]
mod tests {
  use tokio::sync::mpsc::channel;

  use crate::commands::command::Command;
  use crate::commands::commands::Commands;
  use crate::commands::executable::Executable;
  use crate::commands::r#impl::scroll::Scroll;
  use crate::commands::reply_code::ReplyCode;
  use crate::utils::test_utils::{
    TestReplySender, create_test_command_processor, receive_and_verify_reply,
  };

  #[tokio::test]
  async fn scroll_reveals_test() {
    let mut command_processor = create_test_command_processor();
    let (tx, mut rx) = channel(1024);
    let mut reply_sender = TestReplySender::new(tx);

    let command = Command::new(Commands::SCROLL, "0");
    Scroll::execute(&mut command_processor, &command, &mut reply_sender).await;
    receive_and_verify_reply(
      2,
      &mut rx,
      ReplyCode::CommandOkay,
      Some("Scrolled to 0, revealed 1 element(s)"),
    )
    .await;

    let command = Command::new(Commands::SCROLL, "1301");
    Scroll::execute(&mut command_processor, &command, &mut reply_sender).await;
    receive_and_verify_reply(
      2,
      &mut rx,
      ReplyCode::CommandOkay,
      Some("Scrolled to 1301, revealed 2 element(s)"),
    )
    .await;

    let command = Command::new(Commands::SCROLL, "0");
    Scroll::execute(&mut command_processor, &command, &mut reply_sender).await;
    receive_and_verify_reply(
      2,
      &mut rx,
      ReplyCode::CommandOkay,
      Some("Scrolled to 0, revealed 0 element(s)"),
    )
    .await;
  }

  #[tokio::test]
  async fn invalid_argument_test() {
    let mut command_processor = create_test_command_processor();
    let (tx, mut rx) = channel(1024);
    let mut reply_sender = TestReplySender::new(tx);

    let command = Command::new(Commands::SCROLL, "down");
    Scroll::execute(&mut command_processor, &command, &mut reply_sender).await;
    receive_and_verify_reply(2, &mut rx, ReplyCode::SyntaxErrorInParametersOrArguments, None).await;

    let command = Command::new(Commands::SCROLL, "-20");
    Scroll::execute(&mut command_processor, &command, &mut reply_sender).await;
    receive_and_verify_reply(2, &mut rx, ReplyCode::SyntaxErrorInParametersOrArguments, None).await;

    assert_eq!(0.0, command_processor.page.viewport().scroll_top());
  }
}
