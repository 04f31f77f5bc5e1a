//! Human-readable tree rendering.

use std::fmt::Display;

use crate::node::Node;
use crate::tree::AvlTree;

impl<K: Display> AvlTree<K> {
    /// Renders the tree one node per line: the key, its cached height and
    /// its balance factor, indented two spaces per level under `L=` / `R=`
    /// branch markers. Absent children print as `∅`, as does the empty
    /// tree. This is the only formatting the menu layer depends on.
    ///
    /// ```
    /// use ordered_tree::AvlTree;
    ///
    /// let tree: AvlTree<i32> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(
    ///     tree.diagram(),
    ///     "2 (h=2, bf=0)\nL=1 (h=1, bf=0)\n  L=∅\n  R=∅\nR=3 (h=1, bf=0)\n  L=∅\n  R=∅"
    /// );
    /// ```
    pub fn diagram(&self) -> String {
        match self.root() {
            None => "∅".to_string(),
            Some(root) => render(root, ""),
        }
    }
}

fn render<K: Display>(node: &Node<K>, tab: &str) -> String {
    let child_tab = format!("{tab}  ");
    let left = match node.left.as_deref() {
        None => "∅".to_string(),
        Some(child) => render(child, &child_tab),
    };
    let right = match node.right.as_deref() {
        None => "∅".to_string(),
        Some(child) => render(child, &child_tab),
    };
    format!(
        "{} (h={}, bf={})\n{tab}L={left}\n{tab}R={right}",
        node.key,
        node.height,
        node.balance_factor()
    )
}
