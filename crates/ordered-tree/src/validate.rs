//! Structural self-checks, used by the test suites after every mutation.

use thiserror::Error;

use crate::node::Node;
use crate::tree::AvlTree;

/// The first invariant a [`AvlTree::check_invariants`] walk found violated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("cached height {cached}, computed {computed}")]
    StaleHeight { cached: u32, computed: u32 },
    #[error("balance factor {0} outside {{-1, 0, 1}}")]
    OutOfBalance(i32),
    #[error("in-order keys not strictly ascending")]
    OrderViolation,
    #[error("len {len}, counted {counted} nodes")]
    LenMismatch { len: usize, counted: usize },
}

impl<K: Ord> AvlTree<K> {
    /// Recomputes every height and balance factor from the leaves up, then
    /// sweeps the in-order sequence and the key count. O(n); meant for
    /// tests and debugging, the operations themselves never need it.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if let Some(root) = self.root() {
            checked_height(root)?;
        }
        let mut counted = 0;
        let mut prev: Option<&K> = None;
        for key in self.iter() {
            if let Some(prev) = prev {
                if prev >= key {
                    return Err(InvariantViolation::OrderViolation);
                }
            }
            prev = Some(key);
            counted += 1;
        }
        if counted != self.len() {
            return Err(InvariantViolation::LenMismatch {
                len: self.len(),
                counted,
            });
        }
        Ok(())
    }
}

fn checked_height<K>(node: &Node<K>) -> Result<u32, InvariantViolation> {
    let lh = node
        .left
        .as_deref()
        .map(checked_height)
        .transpose()?
        .unwrap_or(0);
    let rh = node
        .right
        .as_deref()
        .map(checked_height)
        .transpose()?
        .unwrap_or(0);
    let computed = 1 + lh.max(rh);
    if node.height != computed {
        return Err(InvariantViolation::StaleHeight {
            cached: node.height,
            computed,
        });
    }
    let bf = lh as i32 - rh as i32;
    if !(-1..=1).contains(&bf) {
        return Err(InvariantViolation::OutOfBalance(bf));
    }
    Ok(computed)
}
