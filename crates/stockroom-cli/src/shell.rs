// Rust guideline compliant 2026-10-15

//! Interactive shell over a [`Session`].
//!
//! The shell reads one command per line, applies it to the session and
//! writes the rendered result. It works over any `BufRead`/`Write` pair so
//! tests can drive it with in-memory buffers.

use crate::command::{self, Command, HELP};
use crate::output::{OutputFormatter, TITLE};
use std::io::{self, BufRead, Write};
use stockroom_core::Session;

/// Whether the shell should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading.
    Quit,
}

/// Read-eval-render loop.
pub struct Shell<R, W> {
    session: Session,
    formatter: Box<dyn OutputFormatter>,
    input: R,
    output: W,
    interactive: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a non-interactive shell.
    pub fn new(session: Session, formatter: Box<dyn OutputFormatter>, input: R, output: W) -> Self {
        Self {
            session,
            formatter,
            input,
            output,
            interactive: false,
        }
    }

    /// Enables the banner and prompts.
    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the shell, returning the session and the output sink.
    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.output)
    }

    /// Runs until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        if self.interactive {
            writeln!(self.output, "{}", TITLE)?;
            writeln!(self.output, "Type 'help' for commands.")?;
        }

        let mut line = String::new();
        loop {
            if self.interactive {
                write!(self.output, "> ")?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("end of input");
                break;
            }

            let command = match command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    tracing::info!(error = %err, "rejected shell input");
                    let message = self.formatter.format_error(&err.to_string());
                    self.emit(&message)?;
                    continue;
                }
            };

            if self.execute(command)? == Flow::Quit {
                break;
            }
        }

        self.output.flush()
    }

    /// Applies one command to the session and writes its result.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        tracing::debug!(?command, "executing");

        let rendered = match command {
            Command::Name(value) => {
                self.session.set_name(value);
                None
            }
            Command::Category(value) => {
                self.session.set_category(value);
                None
            }
            Command::Price(value) => {
                self.session.set_price(value);
                None
            }
            Command::Submit => Some(self.submit(None)),
            Command::Add {
                name,
                category,
                price,
            } => Some(self.submit(Some((name, category, price)))),
            Command::Delete(id) => {
                let removed = self.session.delete(id);
                Some(self.formatter.format_deleted(id, removed))
            }
            Command::List => Some(self.formatter.format_list(self.session.records())),
            Command::Form => Some(
                self.formatter
                    .format_form(self.session.form(), self.session.focus()),
            ),
            Command::Categories => Some(
                self.formatter
                    .format_categories(self.session.categories()),
            ),
            Command::Help => Some(HELP.to_string()),
            Command::Quit => return Ok(Flow::Quit),
        };

        if let Some(text) = rendered {
            self.emit(&text)?;
        }
        Ok(Flow::Continue)
    }

    /// Submits the form, optionally filling it first, and renders the outcome.
    fn submit(&mut self, fields: Option<(String, String, String)>) -> String {
        let outcome = match fields {
            Some((name, category, price)) => self.session.add(name, category, price),
            None => self.session.submit(),
        };

        match outcome {
            Ok(record) => {
                tracing::info!(id = record.id, "item added");
                self.formatter.format_added(&record)
            }
            Err(_) => self.formatter.format_feedback(&self.session.feedback()),
        }
    }

    fn emit(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        writeln!(self.output, "{}", text)
    }
}
