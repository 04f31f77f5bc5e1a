//! Self-balancing ordered binary search tree (AVL) over owned child links.
//!
//! Insertion and deletion recurse down to the edit point and rebalance on
//! the unwind: each frame returns the (possibly rotated) subtree root to
//! its caller, which re-links it, so restructuring is pure ownership
//! transfer and no node is ever reachable from two parents. The strict
//! height-balance invariant keeps every descent, and the recursion depth
//! itself, logarithmic.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | [`Node`] storage, child [`Link`]s, cached-height helpers |
//! | [`balance`](self) | rotations and the four-case rebalance dispatchers (crate-private) |
//! | [`tree`] | [`AvlTree`] API and the recursive insert/remove walks |
//! | [`diagram`](self) | per-node `key (h=.., bf=..)` rendering for display |
//! | [`validate`] | [`InvariantViolation`] and the O(n) self-check |

mod balance;
mod diagram;
pub mod node;
pub mod tree;
pub mod validate;

pub use node::{Link, Node};
pub use tree::{AvlTree, Iter};
pub use validate::InvariantViolation;
