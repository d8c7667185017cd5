use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::messages::{FAREWELL, HELP, Issue, PROMPT};
use crate::storage::ObjectStore;
use std::io::{self, BufRead, Write};

/// Collapse whitespace runs into single spaces and trim both ends.
pub fn normalize_line(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The interactive read-dispatch-print loop.
pub struct Shell<S> {
    dispatcher: Dispatcher<S>,
}

impl<S: ObjectStore> Shell<S> {
    pub fn new(dispatcher: Dispatcher<S>) -> Self {
        Self { dispatcher }
    }

    /// Read commands from `input` until `exit` or end of input.
    ///
    /// A failing command is reported on `output` and the loop goes on; only
    /// failures to read or write the terminal end it early.
    pub async fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            match input.read_line(&mut line) {
                Ok(0) => {
                    writeln!(output)?;
                    writeln!(output, "{FAREWELL}")?;
                    return Ok(());
                }
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    log::warn!("unreadable input line: {e}");
                    writeln!(output, "{}", Issue::UnknownError.message())?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }

            let command = normalize_line(&line);
            match command.as_str() {
                "exit" => {
                    writeln!(output, "{FAREWELL}")?;
                    return Ok(());
                }
                "help" => {
                    for entry in HELP {
                        writeln!(output, "{entry}")?;
                    }
                }
                _ => match self.dispatcher.dispatch(&command).await {
                    Ok(reply) => writeln!(output, "{reply}")?,
                    Err(e) => {
                        log::error!("command '{command}' failed: {e}");
                        writeln!(output, "{e}")?;
                    }
                },
            }
        }
    }
}
