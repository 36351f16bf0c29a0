use std::io::Error;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::commands::reply::Reply;

#[derive(Clone, Debug)]
pub(crate) struct ReplySender<T: AsyncWrite + Unpin + Send> {
  writer: Arc<Mutex<BufWriter<T>>>,
}

impl<T: AsyncWrite + Unpin + Send> ReplySender<T> {
  pub(crate) fn new(writer: T) -> Self {
    ReplySender {
      writer: Arc::new(Mutex::new(BufWriter::new(writer))),
    }
  }
}

#[async_trait]
impl<T: AsyncWrite + Unpin + Send> ReplySend for ReplySender<T> {
  #[tracing::instrument(skip_all)]
  async fn send_control_message(&self, reply: Reply) {
    debug!(
      "Sending reply: {} {}",
      reply.code as u16,
      reply.lines().first().map(String::as_str).unwrap_or_default()
    );
    let mut writer = self.writer.lock().await;
    if let Err(e) = writer.write_all(reply.to_string().as_bytes()).await {
      error!("Failed to send reply! Error: {}", e);
    };
    if let Err(e) = writer.flush().await {
      warn!("Failed to flush reply! Error: {}", e);
    }
  }

  async fn close(&mut self) -> Result<(), Error> {
    self.writer.lock().await.shutdown().await
  }
}

#[async_trait]
pub(crate) trait ReplySend: Sync + Send {
  async fn send_control_message(&self, reply: Reply);
  async fn close(&mut self) -> Result<(), Error>;
}
