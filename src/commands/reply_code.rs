//! Codes sent at the start of every reply.

use strum_macros::FromRepr;

#[derive(Copy, Clone, Debug, Eq, PartialEq, FromRepr)]
#[repr(u16)]
pub(crate) enum ReplyCode {
  CommandOkay = 200,
  SystemStatus = 211,
  ClosingPage = 221,
  FormAccepted = 250,
  FormRejected = 400,
  SyntaxErrorCommandUnrecognized = 500,
  SyntaxErrorInParametersOrArguments = 501,
}
