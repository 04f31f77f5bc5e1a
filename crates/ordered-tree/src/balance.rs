//! Rotation primitives and the four-case rebalance dispatchers.

use std::cmp::Ordering;

use crate::node::{Link, Node};

/// Right rotation around `z`. Requires a left child.
///
/// `y = z.left` becomes the subtree root, `y`'s old right subtree moves
/// under `z`. Heights are recomputed child first; `z` is `y`'s child after
/// the turn, so a stale `z` would corrupt `y`'s height.
pub(crate) fn rotate_right<K>(mut z: Box<Node<K>>) -> Box<Node<K>> {
    let mut y = z.left.take().expect("left child exists");
    z.left = y.right.take();
    z.update_height();
    y.right = Some(z);
    y.update_height();
    y
}

/// Left rotation around `z`. Mirror of [`rotate_right`].
pub(crate) fn rotate_left<K>(mut z: Box<Node<K>>) -> Box<Node<K>> {
    let mut y = z.right.take().expect("right child exists");
    z.right = y.left.take();
    z.update_height();
    y.left = Some(z);
    y.update_height();
    y
}

/// Restores balance at `node` after an insertion into one of its subtrees.
///
/// `key_vs_child` is the ordering of the newly inserted key against the root
/// of the subtree it descended into. When `node` is imbalanced no rotation
/// has happened below it during this insertion, so that child root is still
/// in place and the ordering selects between the straight and the double
/// rotation.
pub(crate) fn rebalance_after_insert<K>(
    mut node: Box<Node<K>>,
    key_vs_child: Ordering,
) -> Box<Node<K>> {
    let bf = node.balance_factor();
    if bf > 1 {
        if key_vs_child == Ordering::Less {
            // Left-Left
            rotate_right(node)
        } else {
            // Left-Right
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
    } else if bf < -1 {
        if key_vs_child == Ordering::Greater {
            // Right-Right
            rotate_left(node)
        } else {
            // Right-Left
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    } else {
        node
    }
}

/// Restores balance at `node` after a removal from one of its subtrees.
///
/// Unlike the insertion path, the case is selected by the taller child's own
/// balance factor: the removed key is gone and says nothing about the shape
/// left behind. A zero child balance takes the straight rotation.
pub(crate) fn rebalance_after_remove<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let bf = node.balance_factor();
    if bf > 1 {
        if balance_of(&node.left) >= 0 {
            // Left-Left
            rotate_right(node)
        } else {
            // Left-Right
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
    } else if bf < -1 {
        if balance_of(&node.right) <= 0 {
            // Right-Right
            rotate_left(node)
        } else {
            // Right-Left
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    } else {
        node
    }
}

fn balance_of<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::height;

    fn leaf(key: i32) -> Box<Node<i32>> {
        Box::new(Node::new(key))
    }

    #[test]
    fn rotate_right_reparents_inner_subtree() {
        // 3 <- 1(right: 2) rotated right: 1 becomes root, 2 moves under 3.
        let mut z = leaf(3);
        let mut y = leaf(1);
        y.right = Some(leaf(2));
        y.update_height();
        z.left = Some(y);
        z.update_height();

        let root = rotate_right(z);
        assert_eq!(root.key, 1);
        assert_eq!(root.right.as_ref().map(|n| n.key), Some(3));
        assert_eq!(
            root.right.as_ref().and_then(|n| n.left.as_ref()).map(|n| n.key),
            Some(2)
        );
        assert_eq!(root.height, 3);
        assert_eq!(height(&root.right), 2);
    }

    #[test]
    fn rotate_left_reparents_inner_subtree() {
        let mut z = leaf(1);
        let mut y = leaf(3);
        y.left = Some(leaf(2));
        y.update_height();
        z.right = Some(y);
        z.update_height();

        let root = rotate_left(z);
        assert_eq!(root.key, 3);
        assert_eq!(root.left.as_ref().map(|n| n.key), Some(1));
        assert_eq!(
            root.left.as_ref().and_then(|n| n.right.as_ref()).map(|n| n.key),
            Some(2)
        );
    }
}
