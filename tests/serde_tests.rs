//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use symgroup::{Bijection, BijectionGroup, Group};

#[test]
fn bijection_roundtrip() {
    let f = Bijection::from_pairs([(1, 2), (2, 3), (3, 1)]);
    let json = serde_json::to_string(&f).unwrap();
    assert_eq!(json, "[[1,2],[2,3],[3,1]]");
    let g: Bijection<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(f, g);
}

#[test]
fn empty_bijection_roundtrip() {
    let f = Bijection::<u8>::from_pairs([]);
    let json = serde_json::to_string(&f).unwrap();
    assert_eq!(json, "[]");
    let g: Bijection<u8> = serde_json::from_str(&json).unwrap();
    assert_eq!(f, g);
}

#[test]
fn string_domain_roundtrip() {
    let group = BijectionGroup::new(["x".to_string(), "y".to_string()]);
    for f in group.elements() {
        let json = serde_json::to_string(&f).unwrap();
        let g: Bijection<String> = serde_json::from_str(&json).unwrap();
        assert!(group.contains(&g));
        assert_eq!(f, g);
    }
}

#[test]
fn deserialized_elements_compose() {
    let group = BijectionGroup::new([1u8, 2, 3]);
    let f: Bijection<u8> = serde_json::from_str("[[3,1],[1,2],[2,3]]").unwrap();
    let inv = group.inverse_of(&f);
    assert_eq!(group.binary_operation(&f, &inv), group.identity());
}
