//! The interactive numbered menu over one session.

use std::path::PathBuf;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use tracing::{debug, error};

use crate::commands::{Action, ActionResult};
use crate::session::Session;

const PROMPT: &str = "Choose an option: ";

const MENU: &str = "\
==================================================
 ORDERED TREE - INTERACTIVE MENU
==================================================
 1. Insert key
 2. Delete key
 3. Search key
 4. Show tree
 5. In-order traversal
 6. Quit
==================================================";

pub struct Menu {
    session: Session,
    editor: DefaultEditor,
    history_file: Option<PathBuf>,
}

impl Menu {
    pub fn new(session: Session) -> Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .max_history_size(1000)?
            .build();
        let mut editor = DefaultEditor::with_config(config)?;

        let history_file = history_file();
        if let Some(path) = &history_file {
            if path.exists() {
                let _ = editor.load_history(path);
            }
        }

        Ok(Self {
            session,
            editor,
            history_file,
        })
    }

    pub fn print_banner(&self) {
        println!("ordered-tree v{}", env!("CARGO_PKG_VERSION"));
    }

    /// Runs the menu loop until the user quits. `^C` cancels the current
    /// input, EOF ends the session.
    pub fn run(&mut self) -> Result<()> {
        loop {
            println!("\n{MENU}");
            let line = match self.editor.readline(PROMPT) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => {
                    error!("readline error: {e}");
                    break;
                }
            };
            let choice = line.trim();
            if choice.is_empty() {
                continue;
            }
            let _ = self.editor.add_history_entry(choice);

            let action = match choice {
                "1" => match self.prompt_key("insert") {
                    Some(key) => Action::Insert(key),
                    None => continue,
                },
                "2" => match self.prompt_key("delete") {
                    Some(key) => Action::Delete(key),
                    None => continue,
                },
                "3" => match self.prompt_key("search") {
                    Some(key) => Action::Search(key),
                    None => continue,
                },
                "4" => Action::Show,
                "5" => Action::InOrder,
                "6" => Action::Quit,
                other => {
                    println!("Invalid option `{other}`. Try again.");
                    continue;
                }
            };

            match self.session.apply(&action) {
                ActionResult::Exit => break,
                ActionResult::Output(text) => println!("\n{text}"),
            }
        }

        self.save_history();
        println!("Goodbye!");
        Ok(())
    }

    /// Asks for an integer key; bad input gets an error line and drops the
    /// user back to the menu.
    fn prompt_key(&mut self, verb: &str) -> Option<i64> {
        let line = match self.editor.readline(&format!("Enter the key to {verb}: ")) {
            Ok(line) => line,
            Err(_) => return None,
        };
        match line.trim().parse() {
            Ok(key) => Some(key),
            Err(_) => {
                println!("`{}` is not a valid integer.", line.trim());
                None
            }
        }
    }

    fn save_history(&mut self) {
        if let Some(path) = &self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Err(e) = self.editor.save_history(path) {
                debug!("failed to save history: {e}");
            }
        }
    }
}

/// History lives under the user's local data directory.
fn history_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("ordered-tree").join("history"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_file_is_under_the_data_dir() {
        let path = history_file();
        assert!(path.is_some());
        assert!(path.unwrap().ends_with("history"));
    }
}
