//! Line command parsing for the interactive front-end.

use std::fmt::{Display, Formatter};

/// One user interaction read from a terminal line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sets the draft and submits it in one step.
    Add(String),
    Draft(String),
    Submit,
    /// 1-based row number as printed by `list`.
    Toggle(usize),
    /// 1-based row number as printed by `list`.
    Delete(usize),
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    UnknownCommand(String),
    InvalidRow(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command; type `help`"),
            Self::UnknownCommand(name) => write!(f, "unknown command `{name}`; type `help`"),
            Self::InvalidRow(value) => write!(f, "expected a row number >= 1, got `{value}`"),
        }
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "commands:
  add <title>    create a task
  draft <text>   edit the draft title
  submit         create a task from the draft
  toggle <n>     flip completion of row n
  delete <n>     delete row n (asks for confirmation)
  list           show the list
  quit           exit";

impl Command {
    /// Parses one input line. Titles keep their inner and trailing spacing.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim_start().trim_end_matches(['\n', '\r']);
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest),
            None => (line, ""),
        };

        match name {
            "" => Err(ParseError::Empty),
            "add" => Ok(Self::Add(rest.to_string())),
            "draft" => Ok(Self::Draft(rest.to_string())),
            "submit" => Ok(Self::Submit),
            "toggle" => parse_row(rest).map(Self::Toggle),
            "delete" | "rm" => parse_row(rest).map(Self::Delete),
            "list" | "ls" => Ok(Self::List),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_row(value: &str) -> Result<usize, ParseError> {
    let value = value.trim();
    match value.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row),
        _ => Err(ParseError::InvalidRow(value.to_string())),
    }
}
