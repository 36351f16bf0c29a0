use std::fmt::{Display, Formatter};

use crate::commands::reply_code::ReplyCode;

/// A coded reply with one or more lines of text.
///
/// Single line replies are written as `NNN text`. Multi-line replies are written as `NNN-first`,
/// then each middle line as is, then `NNN last`. Every line ends with CRLF.
#[derive(PartialEq, Clone, Debug)]
pub(crate) struct Reply {
  pub(crate) code: ReplyCode,
  lines: Vec<String>,
}

impl Reply {
  pub(crate) fn new(code: ReplyCode, message: impl Into<String>) -> Self {
    Reply {
      code,
      lines: vec![message.into()],
    }
  }

  pub(crate) fn new_multiline(code: ReplyCode, lines: Vec<impl Into<String>>) -> Self {
    let lines = lines.into_iter().map(|l| l.into()).collect();
    Reply { code, lines }
  }

  pub(crate) fn lines(&self) -> &[String] {
    &self.lines
  }
}

impl Display for Reply {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let code = self.code as u16;
    let empty = String::new();
    if self.lines.len() < 2 {
      return write!(f, "{} {}\r\n", code, self.lines.first().unwrap_or(&empty));
    }
    let end = self.lines.len() - 1;
    write!(f, "{}-{}\r\n", code, self.lines[0])?;
    for line in self.lines[1..end].iter() {
      write!(f, "{}\r\n", line)?;
    }
    write!(f, "{} {}\r\n", code, self.lines[end])
  }
}
