//! Integration tests for persistent collections
//!
//! Tests LtVec and LtSet with structural sharing and immutability.

use zhuyin_foundation::VocabId;
use zhuyin_foundation::collections::{LtSet, LtVec};

// =============================================================================
// LtVec
// =============================================================================

#[test]
fn vector_empty() {
    let v: LtVec<VocabId> = LtVec::new();
    assert!(v.is_empty());
    assert_eq!(v.first(), None);
}

#[test]
fn vector_of_ids() {
    let v: LtVec<VocabId> = ["dog", "cat"].into_iter().map(VocabId::from).collect();

    assert_eq!(v.len(), 2);
    assert_eq!(v.first().map(VocabId::as_str), Some("dog"));
    assert_eq!(v.last().map(VocabId::as_str), Some("cat"));
}

#[test]
fn vector_clone_shares_contents() {
    let v: LtVec<u32> = (0..1000).collect();
    let v2 = v.clone();

    assert_eq!(v, v2);
    assert_eq!(v2.get(999), Some(&999));
}

#[test]
fn vector_iteration_order() {
    let v: LtVec<_> = ["ㄅ", "ㄆ", "ㄇ"].into_iter().collect();
    let collected: Vec<_> = v.iter().copied().collect();
    assert_eq!(collected, vec!["ㄅ", "ㄆ", "ㄇ"]);

    let mut via_ref = Vec::new();
    for symbol in &v {
        via_ref.push(*symbol);
    }
    assert_eq!(via_ref, collected);
}

// =============================================================================
// LtSet
// =============================================================================

#[test]
fn set_membership_by_id() {
    let s: LtSet<VocabId> = ["dog", "cat"].into_iter().map(VocabId::from).collect();
    assert!(s.contains(&VocabId::new("dog")));
    assert!(!s.contains(&VocabId::new("bird")));
}

#[test]
fn set_insert_leaves_original() {
    let s1 = LtSet::new().insert(VocabId::new("sun"));
    let s2 = s1.insert(VocabId::new("moon"));

    assert_eq!(s1.len(), 1);
    assert_eq!(s2.len(), 2);
}

#[test]
fn set_extend_matches_collect() {
    let a: LtSet<_> = [1, 2, 3].into_iter().collect();
    let expected: LtSet<_> = [4, 3, 2, 1].into_iter().collect();
    assert_eq!(a.extend([3, 4]), expected);
    assert_eq!(a.len(), 3);
}
