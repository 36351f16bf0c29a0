use tracing::debug;

use crate::commands::reply::Reply;
use crate::commands::reply_code::ReplyCode;
use crate::page::document::Document;
use crate::page::page_error::PageError;
use crate::page::scroll_reveal::IS_FADEIN_CLASS;

/// Parses a pixel amount argument.
pub(crate) fn parse_pixels(argument: &str) -> Result<f64, Reply> {
  let argument = argument.trim();
  if argument.is_empty() {
    return Err(Reply::new(
      ReplyCode::SyntaxErrorInParametersOrArguments,
      "No pixel amount supplied!",
    ));
  }
  argument.parse::<f64>().map_err(|e| {
    debug!("Failed to parse pixels '{argument}'! {e}");
    Reply::new(
      ReplyCode::SyntaxErrorInParametersOrArguments,
      "Pixel amount must be a number!",
    )
  })
}

pub(crate) fn map_page_error_to_reply(error: PageError) -> Reply {
  Reply::new(ReplyCode::SyntaxErrorInParametersOrArguments, error.to_string())
}

pub(crate) fn count_revealed(document: &Document) -> usize {
  document.select_by_class(IS_FADEIN_CLASS).len()
}

#[cfg(test)]
mod tests {
  use crate::commands::r#impl::shared::parse_pixels;
  use crate::commands::reply_code::ReplyCode;

  #[test]
  fn parse_pixels_test() {
    assert_eq!(Ok(250.0), parse_pixels("250"));
    assert_eq!(Ok(12.5), parse_pixels(" 12.5 "));
  }

  #[test]
  fn parse_pixels_invalid_test() {
    let reply = parse_pixels("abc").unwrap_err();
    assert_eq!(ReplyCode::SyntaxErrorInParametersOrArguments, reply.code);
    let reply = parse_pixels("").unwrap_err();
    assert_eq!("No pixel amount supplied!", reply.lines()[0]);
  }
}
