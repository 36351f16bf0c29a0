//! Processes page events.

use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::auth::login_form::LoginForm;
use crate::commands::command::Command;
use crate::commands::commands::Commands;
use crate::commands::executable::Executable;
use crate::commands::r#impl::elements::Elements;
use crate::commands::r#impl::email::Email;
use crate::commands::r#impl::password::Password;
use crate::commands::r#impl::quit::Quit;
use crate::commands::r#impl::reset::Reset;
use crate::commands::r#impl::resize::Resize;
use crate::commands::r#impl::scroll::Scroll;
use crate::commands::r#impl::submit::Submit;
use crate::commands::reply::Reply;
use crate::commands::reply_code::ReplyCode;
use crate::handlers::reply_sender::ReplySend;
use crate::page::page::Page;

/// State of a loaded page.
///
/// Holds the login form and the page it is shown on. The two do not interact.
pub(crate) struct CommandProcessor {
  pub(crate) login_form: LoginForm,
  pub(crate) page: Page,
  unloaded: bool,
}

impl CommandProcessor {
  /// Constructs a processor for a freshly loaded `page` with an empty form.
  pub(crate) fn new(page: Page) -> Self {
    CommandProcessor {
      login_form: LoginForm::new(),
      page,
      unloaded: false,
    }
  }

  pub(crate) fn is_unloaded(&self) -> bool {
    self.unloaded
  }

  /// Discards the form. No further events are expected afterwards.
  pub(crate) fn unload(&mut self) {
    self.login_form.reset();
    self.unloaded = true;
  }

  /// Parses a line of input into command and then executes it.
  ///
  /// If parsing fails a reply is sent and this returns. Blank lines are ignored. The raw message
  /// is wiped after parsing as it may contain a password.
  ///
  #[tracing::instrument(skip_all)]
  pub(crate) async fn evaluate(&mut self, mut message: String, reply_sender: &mut impl ReplySend) {
    trace!("Evaluating command");
    let parsed = message.trim_start().parse::<Command>();
    let blank = message.trim().is_empty();
    message.zeroize();
    let command = match parsed {
      Ok(c) => c,
      Err(e) => {
        debug!("Failed to parse command! Error: {e}");
        if !blank {
          reply_sender
            .send_control_message(Reply::new(
              ReplyCode::SyntaxErrorCommandUnrecognized,
              "Command not parseable!",
            ))
            .await;
        }
        return;
      }
    };

    match command.command {
      Commands::EMAIL => Email::execute(self, &command, reply_sender).await,
      Commands::PASSWORD => Password::execute(self, &command, reply_sender).await,
      Commands::SUBMIT => Submit::execute(self, &command, reply_sender).await,
      Commands::RESET => Reset::execute(self, &command, reply_sender).await,
      Commands::SCROLL => Scroll::execute(self, &command, reply_sender).await,
      Commands::RESIZE => Resize::execute(self, &command, reply_sender).await,
      Commands::ELEMENTS => Elements::execute(self, &command, reply_sender).await,
      Commands::QUIT => Quit::execute(self, &command, reply_sender).await,
    };
  }
}
