use async_trait::async_trait;
use strum::IntoEnumIterator;
use tracing::info;

use crate::auth::form_field::FormField;
use crate::auth::validation_errors::ValidationErrors;
use crate::commands::command::Command;
use crate::commands::commands::Commands;
use crate::commands::executable::Executable;
use crate::commands::reply::Reply;
use crate::commands::reply_code::ReplyCode;
use crate::handlers::reply_sender::ReplySend;
use crate::session::command_processor::CommandProcessor;

pub(crate) struct Submit;

#[async_trait]
impl Executable for Submit {
  /// Validates the form and replies with every failed rule, one per line as `field: message`.
  #[tracing::instrument(skip_all)]
  async fn execute(
    command_processor: &mut CommandProcessor,
    command: &Command,
    reply_sender: &mut impl ReplySend,
  ) {
    debug_assert_eq!(command.command, Commands::SUBMIT);

    let errors = command_processor.login_form.validate();
    if errors.is_empty() {
      info!("Login form submitted.");
      Submit::reply(Reply::new(ReplyCode::FormAccepted, "Form is valid"), reply_sender).await;
      return;
    }

    info!("Login form rejected with {} error(s).", errors.len());
    Submit::reply(errors_to_reply(&errors), reply_sender).await;
  }
}

fn errors_to_reply(errors: &ValidationErrors) -> Reply {
  let mut lines = Vec::with_capacity(errors.len() + 2);
  lines.push("Form is invalid".to_string());
  for field in FormField::iter() {
    errors
      .get(field)
      .iter()
      .for_each(|m| lines.push(format!("{}: {}", field, m)));
  }
  lines.push(format!("{} error(s)", errors.len()));
  Reply::new_multiline(ReplyCode::FormRejected, lines)
}
