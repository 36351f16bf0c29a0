use async_trait::async_trait;

use crate::commands::command::Command;
use crate::commands::commands::Commands;
use crate::commands::executable::Executable;
use crate::commands::reply::Reply;
use crate::commands::reply_code::ReplyCode;
use crate::handlers::reply_sender::ReplySend;
use crate::page::scroll_reveal::{RevealState, SCROLL_FADEIN_CLASS};
use crate::session::command_processor::CommandProcessor;

pub(crate) struct Elements;

#[async_trait]
impl Executable for Elements {
  /// Lists reveal targets as `<id> <offset> <state>`, in document order.
  async fn execute(
    command_processor: &mut CommandProcessor,
    command: &Command,
    reply_sender: &mut impl ReplySend,
  ) {
    debug_assert_eq!(command.command, Commands::ELEMENTS);

    let document = command_processor.page.document();
    let targets = document.select_by_class(SCROLL_FADEIN_CLASS);
    if targets.is_empty() {
      Elements::reply(
        Reply::new(ReplyCode::SystemStatus, "No reveal targets"),
        reply_sender,
      )
      .await;
      return;
    }

    let mut lines = Vec::with_capacity(targets.len() + 2);
    lines.push(format!("{} reveal target(s)", targets.len()));
    for handle in targets {
      let (Some(element), Some(state)) = (document.get(handle), RevealState::of(document, handle))
      else {
        continue;
      };
      lines.push(format!("{} {} {}", element.id, element.offset_top(), state));
    }
    lines.push("End".to_string());
    Elements::reply(
      Reply::new_multiline(ReplyCode::SystemStatus, lines),
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
  use crate::commands::r#impl::elements::Elements;
  use crate::commands::reply_code::ReplyCode;
  use crate::page::document::Document;
  use crate::page::page::Page;
  use crate::page::viewport::Viewport;
  use crate::session::command_processor::CommandProcessor;
  use crate::utils::test_utils::{
    TestReplySender, create_test_command_processor, receive_and_verify_reply,
  };

  #[tokio::test]
  async fn list_elements_test() {
    let mut command_processor = create_test_command_processor();
    command_processor.page.scroll_to(600.0).unwrap();
    let command = Command::new(Commands::ELEMENTS, "");

    let (tx, mut rx) = channel(1024);
    let mut reply_sender = TestReplySender::new(tx);
    Elements::execute(&mut command_processor, &command, &mut reply_sender).await;

    let reply = receive_and_verify_reply(2, &mut rx, ReplyCode::SystemStatus, None).await;
    assert_eq!(
      vec![
        "3 reveal target(s)",
        "target-1 400 revealed",
        "target-2 1200 revealed",
        "target-3 2000 hidden",
        "End"
      ],
      reply.lines()
    );
  }

  #[tokio::test]
  async fn no_elements_test() {
    let page = Page::new(Document::new(), Viewport::default());
    let mut command_processor = CommandProcessor::new(page);
    let command = Command::new(Commands::ELEMENTS, "");

    let (tx, mut rx) = channel(1024);
    let mut reply_sender = TestReplySender::new(tx);
    Elements::execute(&mut command_processor, &command, &mut reply_sender).await;

    receive_and_verify_reply(2, &mut rx, ReplyCode::SystemStatus, Some("No reveal targets")).await;
  }
}
