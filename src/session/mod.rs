//! Interactive session loop.
//!
//! Each iteration prints the prompt, reads one line, and either reloads
//! the store (when another process rewrote the data file) or dispatches
//! the line to a command. Every mutating command saves the whole store
//! before returning, so nothing unsaved is ever held between iterations.

pub mod registry;

use std::fmt::Display;
use std::io::{BufRead, Write};

use tira_lib::{DataFile, InMemoryStore, Space};

use crate::cli::commands;
use crate::error::Result;
use crate::format;

pub use registry::{COMMANDS, Command, Invocation};

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// One interactive session over a data file.
///
/// Generic over the line source and sink so it can be driven from
/// in-memory buffers.
pub struct Session<R, W> {
    store: InMemoryStore,
    data_file: DataFile,
    space: Space,
    state: SessionState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    #[must_use]
    pub fn new(data_file: DataFile, store: InMemoryStore, space: Space, input: R, output: W) -> Self {
        Self {
            store,
            data_file,
            space,
            state: SessionState::Running,
            input,
            output,
        }
    }

    /// Load the data file and start a session on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file exists but cannot be loaded.
    pub fn open(mut data_file: DataFile, space: Space, input: R, output: W) -> Result<Self> {
        let store = data_file.load()?;
        Ok(Self::new(data_file, store, space, input, output))
    }

    /// Run until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns the first error that is not a user error: a data file that
    /// can no longer be loaded or saved, or failed terminal I/O.
    pub fn run(&mut self) -> Result<()> {
        while self.state == SessionState::Running {
            self.step()?;
        }
        tracing::debug!("session terminated");
        Ok(())
    }

    /// Process a single input line.
    ///
    /// # Errors
    ///
    /// Same as [`Session::run`].
    pub fn step(&mut self) -> Result<()> {
        let prompt = format::prompt(&self.space);
        write!(self.output, "\n{prompt}")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            self.terminate();
            return Ok(());
        };

        if self.reload_if_changed()? {
            return Ok(());
        }

        let invocation = Invocation::parse(&line);
        match self.dispatch(&invocation) {
            Err(e) if e.is_user_error() => {
                tracing::debug!(action = %invocation.action, error = %e, "command rejected");
                self.say(e)
            }
            other => other,
        }
    }

    fn dispatch(&mut self, invocation: &Invocation) -> Result<()> {
        let command = Command::resolve(&invocation.action)?;
        let text = invocation.text();
        tracing::debug!(command = command.name(), args = %text, "dispatching");
        commands::execute(command, self, &text)
    }

    /// Reload the store if the data file changed behind our back.
    ///
    /// Returns `true` when a reload happened and the current line must be
    /// dropped.
    fn reload_if_changed(&mut self) -> Result<bool> {
        if !self.data_file.has_external_change()? {
            return Ok(false);
        }

        let expected = format::format_system_time(self.data_file.baseline());
        let actual = format::format_system_time(self.data_file.modified()?);
        tracing::warn!(
            path = %self.data_file.path().display(),
            %expected,
            %actual,
            "data file modified externally, reloading"
        );

        self.say("The data file has been modified by another process.")?;
        self.say(format_args!("Expected timestamp:\t{expected}"))?;
        self.say(format_args!("Actual timestamp:\t{actual}"))?;
        self.store = self.data_file.load()?;
        self.say("Data has now been reloaded.")?;
        Ok(true)
    }

    /// Invalid UTF-8 is replaced rather than treated as a read failure.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    // ========================================================================
    // Handler API
    // ========================================================================

    /// Print one line.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the output cannot be written.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print `question` without a newline and read the answer.
    ///
    /// Returns `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the terminal cannot be read or written.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Save the whole store to the data file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file cannot be written.
    pub fn persist(&mut self) -> Result<()> {
        self.data_file.save(&self.store)
    }

    #[must_use]
    pub const fn store(&self) -> &InMemoryStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut InMemoryStore {
        &mut self.store
    }

    #[must_use]
    pub const fn space(&self) -> &Space {
        &self.space
    }

    pub fn set_space(&mut self, space: Space) {
        tracing::debug!(space = %space, "switched space");
        self.space = space;
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    pub fn terminate(&mut self) {
        self.state = SessionState::Terminated;
    }
}
