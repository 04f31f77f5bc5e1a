//! Tree node storage: key, owned child links, cached height.

/// An owned subtree. `None` is the empty subtree with height 0.
pub type Link<K> = Option<Box<Node<K>>>;

/// A single tree node.
///
/// Children are exclusively owned by their parent; restructuring moves
/// subtrees between owners, it never aliases them. The cached `height` is
/// only valid once [`Node::update_height`] has run after the last edit to
/// either child.
#[derive(Clone, Debug)]
pub struct Node<K> {
    pub key: K,
    pub left: Link<K>,
    pub right: Link<K>,
    /// Cached subtree height, `1` for a leaf.
    pub height: u32,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Balance factor: left height minus right height.
    pub fn balance_factor(&self) -> i32 {
        height(&self.left) as i32 - height(&self.right) as i32
    }

    /// Recomputes the cached height from the children's cached heights.
    ///
    /// Must run on every node whose children changed, before its balance
    /// factor is read or the node is handed back to its own parent.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }
}

/// Height of a possibly empty subtree.
pub fn height<K>(link: &Link<K>) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}
