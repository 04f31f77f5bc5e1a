//! One menu session: the tree plus its display settings.

use ordered_tree::AvlTree;
use tracing::debug;

use crate::commands::{Action, ActionResult};

/// Display settings for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Echo the tree diagram after each successful mutation.
    pub echo_diagram: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { echo_diagram: true }
    }
}

/// The long-lived state of one interactive session. Constructed once at
/// startup and handed to every action; there is no global tree.
pub struct Session {
    tree: AvlTree<i64>,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            tree: AvlTree::new(),
            config,
        }
    }

    /// Inserts `keys` before the session starts taking input.
    pub fn seed(&mut self, keys: &[i64]) {
        for &key in keys {
            self.tree.insert(key);
        }
    }

    pub fn tree(&self) -> &AvlTree<i64> {
        &self.tree
    }

    /// Runs one action against the tree and renders its outcome.
    pub fn apply(&mut self, action: &Action) -> ActionResult {
        match *action {
            Action::Insert(key) => {
                if self.tree.insert(key) {
                    debug!(key, "inserted");
                    ActionResult::Output(self.with_diagram(format!("Inserted {key}.")))
                } else {
                    ActionResult::Output(format!("Key {key} is already in the tree."))
                }
            }
            Action::Delete(key) => {
                if self.tree.remove(&key) {
                    debug!(key, "deleted");
                    ActionResult::Output(self.with_diagram(format!("Deleted {key}.")))
                } else {
                    ActionResult::Output(format!("Key {key} not found."))
                }
            }
            Action::Search(key) => {
                if self.tree.contains(&key) {
                    ActionResult::Output(format!("Found {key}."))
                } else {
                    ActionResult::Output(format!("Key {key} not found."))
                }
            }
            Action::Show => {
                if self.tree.is_empty() {
                    ActionResult::Output("The tree is empty.".to_string())
                } else {
                    ActionResult::Output(self.tree.diagram())
                }
            }
            Action::InOrder => {
                if self.tree.is_empty() {
                    ActionResult::Output("The tree is empty.".to_string())
                } else {
                    ActionResult::Output(format!("In-order: {:?}", self.tree.in_order()))
                }
            }
            Action::Quit => ActionResult::Exit,
        }
    }

    fn with_diagram(&self, message: String) -> String {
        if self.config.echo_diagram && !self.tree.is_empty() {
            format!("{message}\n{}", self.tree.diagram())
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_session() -> Session {
        Session::new(SessionConfig {
            echo_diagram: false,
        })
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut session = quiet_session();
        assert_eq!(
            session.apply(&Action::Insert(5)),
            ActionResult::Output("Inserted 5.".to_string())
        );
        assert_eq!(
            session.apply(&Action::Insert(5)),
            ActionResult::Output("Key 5 is already in the tree.".to_string())
        );
        assert_eq!(session.tree().len(), 1);
    }

    #[test]
    fn delete_and_search_report_missing_keys() {
        let mut session = quiet_session();
        session.seed(&[1, 2]);
        assert_eq!(
            session.apply(&Action::Delete(9)),
            ActionResult::Output("Key 9 not found.".to_string())
        );
        assert_eq!(
            session.apply(&Action::Delete(2)),
            ActionResult::Output("Deleted 2.".to_string())
        );
        assert_eq!(
            session.apply(&Action::Search(1)),
            ActionResult::Output("Found 1.".to_string())
        );
        assert_eq!(
            session.apply(&Action::Search(2)),
            ActionResult::Output("Key 2 not found.".to_string())
        );
    }

    #[test]
    fn show_and_inorder_notice_an_empty_tree() {
        let mut session = quiet_session();
        assert_eq!(
            session.apply(&Action::Show),
            ActionResult::Output("The tree is empty.".to_string())
        );
        session.seed(&[2, 1, 3]);
        assert_eq!(
            session.apply(&Action::InOrder),
            ActionResult::Output("In-order: [1, 2, 3]".to_string())
        );
    }

    #[test]
    fn mutations_echo_the_diagram_when_enabled() {
        let mut session = Session::new(SessionConfig { echo_diagram: true });
        let ActionResult::Output(text) = session.apply(&Action::Insert(5)) else {
            panic!("insert should produce output");
        };
        assert_eq!(text, "Inserted 5.\n5 (h=1, bf=0)\nL=∅\nR=∅");
    }

    #[test]
    fn quit_exits() {
        let mut session = quiet_session();
        assert_eq!(session.apply(&Action::Quit), ActionResult::Exit);
    }
}
