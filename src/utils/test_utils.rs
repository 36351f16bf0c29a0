use std::io::Error;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::time::timeout;

use crate::commands::reply::Reply;
use crate::commands::reply_code::ReplyCode;
use crate::handlers::reply_sender::ReplySend;
use crate::page::page::Page;
use crate::page::scroll_reveal::ScrollReveal;
use crate::session::command_processor::CommandProcessor;

pub(crate) struct TestReplySender {
  tx: Sender<Reply>,
}

impl TestReplySender {
  pub(crate) fn new(tx: Sender<Reply>) -> Self {
    TestReplySender { tx }
  }
}

#[async_trait]
impl ReplySend for TestReplySender {
  async fn send_control_message(&self, reply: Reply) {
    println!("TestReplySender: received reply: {}", reply.to_string().trim_end());
    self.tx.send(reply).await.unwrap();
  }

  async fn close(&mut self) -> Result<(), Error> {
    Ok(())
  }
}

/// A processor for a page with targets at 400, 1200 and 2000 pixels in an 800 pixel viewport.
pub(crate) fn create_test_command_processor() -> CommandProcessor {
  let mut page = Page::from_layout(800.0, &[400.0, 1200.0, 2000.0]).unwrap();
  ScrollReveal::attach(&mut page);
  CommandProcessor::new(page)
}

pub(crate) async fn receive_and_verify_reply(
  timeout_secs: u64,
  rx: &mut Receiver<Reply>,
  expected_code: ReplyCode,
  expected_message: Option<&str>,
) -> Reply {
  let reply = timeout(Duration::from_secs(timeout_secs), rx.recv())
    .await
    .expect("Reply should arrive in time!")
    .expect("Reply channel should be open!");
  assert_eq!(expected_code, reply.code);
  if let Some(message) = expected_message {
    assert_eq!(message, reply.lines()[0]);
  }
  reply
}
