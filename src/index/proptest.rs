// =====================================================================
// File: index/proptest.rs
//
// Description:
//   Property-based checks for the B+ tree's invariants (depth
//   equality, fill bounds, parent-link consistency, leaf-chain order)
//   under randomized insert/delete sequences, diffed against a
//   `BTreeMap` oracle. Uses `quickcheck`'s `Arbitrary` + attribute-macro
//   pattern.
// =====================================================================
use std::collections::BTreeMap;

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use super::BPlusTree;
use crate::keycodec::encode_int_key;

const KEY_LENGTH: usize = 5;
const ORDER: usize = 4;

#[derive(Debug, Clone)]
enum Op {
    Insert(i64, i64),
    Delete(i64),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        let key = i64::arbitrary(g) % 500;
        if bool::arbitrary(g) {
            Op::Insert(key, i64::arbitrary(g))
        } else {
            Op::Delete(key)
        }
    }
}

#[derive(Debug, Clone)]
struct OpSequence(Vec<Op>);

impl Arbitrary for OpSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 200;
        OpSequence((0..len).map(|_| Op::arbitrary(g)).collect())
    }
}

fn apply(tree: &mut BPlusTree, oracle: &mut BTreeMap<Vec<u8>, i64>, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::Insert(k, v) => {
                let encoded = encode_int_key(k, KEY_LENGTH);
                oracle.entry(encoded.clone()).or_insert(v);
                tree.insert_key(encoded, v);
            }
            Op::Delete(k) => {
                let encoded = encode_int_key(k, KEY_LENGTH);
                oracle.remove(&encoded);
                tree.delete_key(&encoded);
            }
        }
    }
}

#[quickcheck]
fn matches_btreemap_oracle_after_every_op(OpSequence(ops): OpSequence) -> bool {
    let mut tree = BPlusTree::new(ORDER, KEY_LENGTH);
    let mut oracle: BTreeMap<Vec<u8>, i64> = BTreeMap::new();

    for op in &ops {
        apply(&mut tree, &mut oracle, std::slice::from_ref(op));
        if tree.audit().is_err() {
            return false;
        }
    }

    oracle.iter().all(|(k, v)| tree.find_key(k) == Some(*v))
}

#[quickcheck]
fn leaf_chain_matches_oracle_order(OpSequence(ops): OpSequence) -> bool {
    let mut tree = BPlusTree::new(ORDER, KEY_LENGTH);
    let mut oracle: BTreeMap<Vec<u8>, i64> = BTreeMap::new();
    apply(&mut tree, &mut oracle, &ops);

    let expected: Vec<Vec<u8>> = oracle.keys().cloned().collect();
    expected == tree.leaf_chain_keys()
}

#[quickcheck]
fn insert_then_delete_always_removes_key(OpSequence(ops): OpSequence, extra_key: i64, extra_value: i64) -> bool {
    let mut tree = BPlusTree::new(ORDER, KEY_LENGTH);
    let mut oracle: BTreeMap<Vec<u8>, i64> = BTreeMap::new();
    apply(&mut tree, &mut oracle, &ops);

    // Deleting a key right after (re-)inserting it must remove it,
    // whether or not it already existed before this pair of calls.
    let encoded = encode_int_key(extra_key, KEY_LENGTH);
    tree.insert_key(encoded.clone(), extra_value);
    tree.delete_key(&encoded);

    tree.find_key(&encoded).is_none() && tree.audit().is_ok()
}
