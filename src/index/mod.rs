// =====================================================================
// File: index/mod.rs
//
//! The `index` module contains the B+ tree implementation used for
//! in-memory, ordered indexing of fixed-width keys to integer records.
//!
//! Structure:
//! - `node.rs`  : Defines the [`Node`] structure, its arena handle
//!                ([`NodeId`]), and small helpers.
//! - `tree.rs`  : Defines [`BPlusTree`] and its algorithms (insert,
//!                search, delete, diagnostics).
//! - `tests.rs` : Unit tests for the B+ tree (compiled only in test
//!                mode).
//! - `proptest.rs` : Property-based invariant checks, randomized
//!                against a reference map (compiled only in test mode).
//!
//! This organization separates the small `Node` definition from the
//! larger `BPlusTree` implementation for readability, while tests are
//! isolated to avoid cluttering the main code paths.
// =====================================================================

pub mod node;
pub mod tree;

pub use self::node::{Node, NodeId};
pub use self::tree::BPlusTree;


#[cfg(test)]
mod proptest;
