// =====================================================================
// File: session.rs
//
// Description:
// Defines the `Session` struct, which represents a running CLI
// context wrapping the active in-memory B+ tree.
//
// Responsibilities:
// - Maintain a single runtime context for command execution.
// - Own the `BPlusTree` the CLI's commands operate on.
//
// Each client session corresponds to a single REPL run.
// =====================================================================

use crate::index::BPlusTree;
use crate::keycodec::{DEFAULT_KEY_LENGTH, DEFAULT_ORDER};

/// Represents a single in-memory session: the live tree plus the
/// verbose-output toggle the CLI's `v` command flips.
pub struct Session {
    pub tree: BPlusTree,
    pub verbose: bool,
    /// The key width as requested at construction, before
    /// `BPlusTree::new` widens it to make room for the sentinel byte.
    /// `reset()` must reuse this raw value rather than `tree.key_length()`
    /// (already widened), or every reset would widen the key by one more
    /// byte than the last.
    raw_key_length: usize,
}

impl Session {
    /// Creates a new session with a tree at the default order and key
    /// width.
    ///
    /// # Example
    /// ```
    /// use bplustree::Session;
    /// let session = Session::new();
    /// assert!(session.tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_order(DEFAULT_ORDER)
    }

    /// Creates a new session with a tree at the given order (clamped
    /// into range by `BPlusTree::new`) and the default key width.
    pub fn with_order(order: usize) -> Self {
        Self {
            tree: BPlusTree::new(order, DEFAULT_KEY_LENGTH),
            verbose: false,
            raw_key_length: DEFAULT_KEY_LENGTH,
        }
    }

    /// Replaces the session's tree with a fresh, empty one at the
    /// same order and key width.
    pub fn reset(&mut self) {
        let order = self.tree.order();
        self.tree.destroy();
        self.tree = BPlusTree::new(order, self.raw_key_length);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// =====================================================================
// Unit Tests for Session
// =====================================================================
