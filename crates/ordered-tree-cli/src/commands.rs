//! Script-mode operations and their parser.

use thiserror::Error;

/// A single operation against the session tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Insert(i64),
    Delete(i64),
    Search(i64),
    Show,
    InOrder,
    Quit,
}

/// What the session did with an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    Output(String),
    Exit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{0}` needs an integer key")]
    MissingKey(&'static str),
    #[error("`{0}` is not a valid integer")]
    InvalidKey(String),
    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}

impl Action {
    /// Parses one whitespace-separated command, e.g. `insert 5` or `show`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut words = input.split_whitespace();
        let op = words.next().ok_or(ParseError::Empty)?;
        let action = match op.to_ascii_lowercase().as_str() {
            "insert" | "add" => Action::Insert(key_arg("insert", words.next())?),
            "delete" | "remove" => Action::Delete(key_arg("delete", words.next())?),
            "search" | "find" => Action::Search(key_arg("search", words.next())?),
            "show" | "tree" => Action::Show,
            "inorder" => Action::InOrder,
            "quit" | "exit" => Action::Quit,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };
        if let Some(extra) = words.next() {
            return Err(ParseError::TrailingInput(extra.to_string()));
        }
        Ok(action)
    }
}

/// Splits a `;`- or newline-separated script into actions.
pub fn parse_script(script: &str) -> Result<Vec<Action>, ParseError> {
    script
        .split([';', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(Action::parse)
        .collect()
}

fn key_arg(op: &'static str, word: Option<&str>) -> Result<i64, ParseError> {
    let word = word.ok_or(ParseError::MissingKey(op))?;
    word.parse()
        .map_err(|_| ParseError::InvalidKey(word.to_string()))
}
