// =====================================================================
// File: index/node.rs
//
// Description:
//   Defines the node representation (`Node`) shared by leaves and
//   internal nodes of the B+ tree, and the `NodeId` handle used to
//   address nodes inside the tree's arena. Each node maintains:
//
//   - `keys`: Ordered, fixed-width key buffers stored within the node.
//   - `children`: Child handles (empty for leaves).
//   - `records`: Data values (empty for internal nodes), one per key.
//   - `parent`: Back-link to the containing node (`None` for the root).
//   - `next`: Leaf sibling link, used to walk leaves in key order.
//
// Notes:
//   * A node is addressed only through its `NodeId`; the tree's arena
//     (`tree.rs`) owns every node's storage. This file contains only
//     the node representation and small helpers — insertion, deletion,
//     and traversal live in `tree.rs`.
// =====================================================================

/// Handle to a node living in a `BPlusTree`'s arena.
pub type NodeId = usize;

/// A B+ tree node: the same shape serves leaves and internal nodes,
/// distinguished by `is_leaf`.
#[derive(Debug, Clone)]
pub struct Node {
    pub is_leaf: bool,
    pub keys: Vec<Vec<u8>>,
    /// Child handles. Empty on leaves. `len() == keys.len() + 1` on
    /// internal nodes.
    pub children: Vec<NodeId>,
    /// Stored values. Empty on internal nodes. `len() == keys.len()`
    /// on leaves, one record per key in the same order.
    pub records: Vec<i64>,
    pub parent: Option<NodeId>,
    /// Leaf-only sibling link to the next leaf in key order.
    pub next: Option<NodeId>,
}

impl Node {
    /// Creates a new, empty leaf node.
    ///
    /// # Example
    /// ```
    /// use bplustree::index::Node;
    /// let leaf = Node::new_leaf();
    /// assert!(leaf.is_leaf);
    /// assert!(leaf.keys.is_empty());
    /// ```
    pub fn new_leaf() -> Self {
        Self {
            is_leaf: true,
            keys: Vec::new(),
            children: Vec::new(),
            records: Vec::new(),
            parent: None,
            next: None,
        }
    }

    /// Creates a new, empty internal node.
    pub fn new_internal() -> Self {
        Self {
            is_leaf: false,
            keys: Vec::new(),
            children: Vec::new(),
            records: Vec::new(),
            parent: None,
            next: None,
        }
    }

    /// Number of keys currently stored.
    pub fn num_keys(&self) -> usize {
        self.keys.len()
    }

    /// Binary search helper: returns the index of the key if found,
    /// or the position where it should be inserted otherwise.
    ///
    /// # Returns
    ///
    /// The index of the first key that is `>= key`. If all stored keys
    /// are less than `key`, returns `self.keys.len()`.
    pub fn lower_bound(&self, key: &[u8]) -> usize {
        self.keys
            .binary_search_by(|k| k.as_slice().cmp(key))
            .unwrap_or_else(|pos| pos)
    }

    /// Smallest index `i` such that `key < keys[i]`, or `self.keys.len()`
    /// if no such index exists.
    ///
    /// This is the routing rule for internal-node descent: a key equal
    /// to a separator must follow the *right* child, not the left one,
    /// so this differs from [`lower_bound`](Self::lower_bound) (which
    /// routes an exact match to its own index) on ties.
    pub fn upper_bound(&self, key: &[u8]) -> usize {
        self.keys.partition_point(|k| k.as_slice() <= key)
    }

    /// Index of `key` among this node's keys, if present exactly.
    pub fn find_key_index(&self, key: &[u8]) -> Option<usize> {
        let idx = self.lower_bound(key);
        if idx < self.keys.len() && self.keys[idx] == key {
            Some(idx)
        } else {
            None
        }
    }

    /// Index of `child` among this node's children.
    ///
    /// Panics if `child` is not actually a child of this node — that
    /// would mean the parent/child back-links have desynchronized,
    /// which is a bug in the tree rather than a case calling code
    /// should recover from.
    pub fn child_index(&self, child: NodeId) -> usize {
        self.children
            .iter()
            .position(|&c| c == child)
            .unwrap_or_else(|| panic!("node {child} is not a child of its claimed parent"))
    }
}
