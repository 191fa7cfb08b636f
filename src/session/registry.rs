//! Command registry and input tokenization.
//!
//! A typed action selects the first command, in declaration order, whose
//! name starts with it. The order is part of the contract: `e` is `edit`,
//! not `exit`, and `s` is `show`.

use crate::error::{Result, TiraError};

/// An interactive command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Add,
    List,
    Show,
    Delete,
    Edit,
    Exit,
    Help,
    Space,
    Spaces,
    Find,
}

/// Registered commands in resolution order.
pub const COMMANDS: [(&str, Command); 10] = [
    ("add", Command::Add),
    ("list", Command::List),
    ("show", Command::Show),
    ("delete", Command::Delete),
    ("edit", Command::Edit),
    ("exit", Command::Exit),
    ("help", Command::Help),
    ("space", Command::Space),
    ("spaces", Command::Spaces),
    ("find", Command::Find),
];

impl Command {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::List => "list",
            Self::Show => "show",
            Self::Delete => "delete",
            Self::Edit => "edit",
            Self::Exit => "exit",
            Self::Help => "help",
            Self::Space => "space",
            Self::Spaces => "spaces",
            Self::Find => "find",
        }
    }

    /// Resolve a typed action to a command.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAction` if `action` is empty or no command name
    /// starts with it.
    pub fn resolve(action: &str) -> Result<Self> {
        if action.is_empty() {
            return Err(TiraError::InvalidAction {
                action: String::new(),
            });
        }

        COMMANDS
            .iter()
            .find(|(name, _)| name.starts_with(action))
            .map(|&(_, command)| command)
            .ok_or_else(|| TiraError::InvalidAction {
                action: action.to_string(),
            })
    }
}

/// One input line split into an action and its arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub action: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Split on whitespace; the first token is the action.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace().map(str::to_string);
        Self {
            action: tokens.next().unwrap_or_default(),
            args: tokens.collect(),
        }
    }

    /// Arguments re-joined with single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.args.join(" ")
    }
}
