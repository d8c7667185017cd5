use crate::error::Result;
use crate::messages::{COMMAND_NOT_RECOGNIZED, Issue};
use crate::storage::ObjectStore;
use crate::storage::constants::DEFAULT_REGION;

/// A tokenized input line: keyword followed by positional arguments.
///
/// Tokens are split on whitespace runs, so none of them is ever empty.
/// There is no quoting, an argument cannot contain spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

impl<'a> Command<'a> {
    /// Tokenize a line. A blank line has no command.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?;
        Some(Self {
            name,
            args: tokens.collect(),
        })
    }

    /// Positional argument `index`, or "" when it was not supplied.
    pub fn arg(&self, index: usize) -> &'a str {
        self.args.get(index).copied().unwrap_or_default()
    }
}

/// Routes shell commands to the operations of an [`ObjectStore`].
pub struct Dispatcher<S> {
    pub(crate) store: S,
    pub(crate) region: &'static str,
}

impl<S: ObjectStore> Dispatcher<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            region: DEFAULT_REGION,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one command line and produce the reply to print.
    ///
    /// Validation problems come back as `Ok` with a catalog sentence. An
    /// `Err` is a backend failure no command chose to translate.
    pub async fn dispatch(&self, line: &str) -> Result<String> {
        let Some(command) = Command::parse(line) else {
            return Ok(COMMAND_NOT_RECOGNIZED.to_string());
        };
        log::debug!(
            "dispatch command={} args={}",
            command.name,
            command.args.len()
        );

        match self.route(&command).await {
            Err(e) if e.is_permission_denied() => {
                log::warn!("command {} was denied: {e}", command.name);
                Ok(Issue::NotAuthorizedBucket.reply())
            }
            other => other,
        }
    }

    async fn route(&self, command: &Command<'_>) -> Result<String> {
        let argc = command.args.len();
        match command.name {
            "createdir" => {
                if argc < 1 {
                    return Ok(Issue::BucketNameEmpty.reply());
                }
                self.createdir(command.arg(0)).await
            }
            "upload" => {
                if argc < 2 {
                    return Ok(Issue::IncorrectParameterNumber.reply());
                }
                self.upload(command.arg(0), command.arg(1), command.arg(2))
                    .await
            }
            "download" => {
                if argc < 2 {
                    return Ok(Issue::IncorrectParameterNumber.reply());
                }
                self.download(command.arg(0), command.arg(1), command.arg(2))
                    .await
            }
            "delete" => {
                if argc < 2 {
                    return Ok(Issue::IncorrectParameterNumber.reply());
                }
                self.delete(command.arg(0), command.arg(1)).await
            }
            "deletedir" => {
                if argc < 1 {
                    return Ok(Issue::IncorrectParameterNumber.reply());
                }
                self.deletedir(command.arg(0)).await
            }
            // Arguments to find are discarded on purpose
            "find" => self.find("", "").await,
            "listdir" => self.listdir(command.arg(0)).await,
            _ => Ok(COMMAND_NOT_RECOGNIZED.to_string()),
        }
    }
}
