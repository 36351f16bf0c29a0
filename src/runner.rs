//! Loads the page and feeds it events.

use config::Config;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use zeroize::Zeroize;

use crate::commands::reply::Reply;
use crate::commands::reply_code::ReplyCode;
use crate::global_context::CONFIG;
use crate::handlers::reply_sender::{ReplySend, ReplySender};
use crate::page::page::Page;
use crate::page::page_error::PageError;
use crate::page::scroll_reveal::ScrollReveal;
use crate::session::command_processor::CommandProcessor;

pub(crate) const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

/// Loads the page and processes events from stdin until the page is unloaded.
///
/// # Page setup
/// The page layout is read from config: `viewport_height` and the offsets of the reveal targets
/// in `reveal_targets`. Missing settings fall back to defaults, an invalid layout aborts. Scroll
/// reveal is attached once, right after the page is built.
///
/// # Event loop
/// Each line read from stdin is one event and replies are written to stdout. The loop ends on
/// `QUIT`, at the end of input, or on SIGINT.
///
pub(crate) async fn run() {
  let mut page = match load_page(&CONFIG) {
    Ok(p) => p,
    Err(e) => {
      error!("Failed to load page! {e}");
      return;
    }
  };
  let targets = ScrollReveal::attach(&mut page);
  info!(
    "Page loaded with {} element(s), {targets} reveal target(s).",
    page.document().len()
  );

  let cancellation_token = CancellationToken::new();
  let token = cancellation_token.clone();
  tokio::spawn(async move {
    match tokio::signal::ctrl_c().await {
      Ok(()) => {
        info!("Ctrl-c received!");
        token.cancel();
      }
      Err(e) => error!("Ctrl-c signal error! {e}"),
    }
  });

  let mut command_processor = CommandProcessor::new(page);
  let mut reply_sender = ReplySender::new(tokio::io::stdout());
  process_events(
    tokio::io::stdin(),
    &mut command_processor,
    &mut reply_sender,
    cancellation_token,
  )
  .await;

  if let Err(e) = reply_sender.close().await {
    warn!("Failed to close output! {e}");
  }
  info!("Page unloaded.");
}

/// Builds the page described by `config`.
///
/// Missing `viewport_height` falls back to [`DEFAULT_VIEWPORT_HEIGHT`] and missing
/// `reveal_targets` to an empty page, each with a warning.
///
/// # Errors
///
/// Any [`PageError`] from [`Page::from_layout`], e.g. for a negative viewport height.
///
fn load_page(config: &Config) -> Result<Page, PageError> {
  let viewport_height = match config.get_float("viewport_height") {
    Ok(h) => h,
    Err(_) => {
      warn!("No viewport height in config! Using {DEFAULT_VIEWPORT_HEIGHT}.");
      DEFAULT_VIEWPORT_HEIGHT
    }
  };
  let target_offsets = match config.get::<Vec<f64>>("reveal_targets") {
    Ok(o) => o,
    Err(_) => {
      warn!("No reveal targets in config!");
      Vec::new()
    }
  };
  Page::from_layout(viewport_height, &target_offsets)
}

/// Reads events line by line from `reader` and evaluates them.
///
/// A line that is not valid UTF-8 gets a syntax error reply and is skipped. Returns when the page
/// is unloaded, the input ends, reading fails or `token` is cancelled. The form is discarded in
/// every case.
#[tracing::instrument(skip_all)]
pub(crate) async fn process_events<R: AsyncRead + Unpin>(
  reader: R,
  command_processor: &mut CommandProcessor,
  reply_sender: &mut impl ReplySend,
  token: CancellationToken,
) {
  let mut reader = BufReader::new(reader);
  let mut buffer = Vec::new();
  while !command_processor.is_unloaded() {
    let read = tokio::select! {
      _ = token.cancelled() => {
        debug!("Event loop cancelled.");
        break;
      }
      read = reader.read_until(b'\n', &mut buffer) => read,
    };
    match read {
      Ok(0) => {
        debug!("End of input.");
        break;
      }
      Ok(_) => match String::from_utf8(std::mem::take(&mut buffer)) {
        Ok(line) => command_processor.evaluate(line, reply_sender).await,
        Err(e) => {
          debug!("Event is not valid UTF-8! {e}");
          e.into_bytes().zeroize();
          reply_sender
            .send_control_message(Reply::new(
              ReplyCode::SyntaxErrorCommandUnrecognized,
              "Command not parseable!",
            ))
            .await;
        }
      },
      Err(e) => {
        error!("Failed to read event! {e}");
        break;
      }
    }
  }
  buffer.zeroize();
  command_processor.unload();
}
