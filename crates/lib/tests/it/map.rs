//! DotMap integration tests: the public dotted-path contract.

use dotmap::{DotMap, Value};

// ===== BASIC OPERATIONS =====

#[test]
fn test_basic_operations() {
    let mut map = DotMap::new();

    assert!(map.is_empty());
    assert_eq!(map.len(), 0);

    assert!(map.set("name", "Alice").is_none());
    assert!(map.set("age", 30).is_none());
    assert!(!map.is_empty());
    assert_eq!(map.len(), 2);

    assert!(map.contains_key("name"));
    assert!(!map.contains_key("nonexistent"));

    assert_eq!(map.get_as::<String>("name"), Some("Alice".to_string()));
    assert_eq!(map.get_as::<i64>("age"), Some(30));

    map.clear();
    assert!(map.is_empty());
}

#[test]
fn test_leaf_value_roundtrip() {
    let mut map = DotMap::new();
    map.set("b", true);
    map.set("i", 42);
    map.set("f", 2.5);
    map.set("s", "text");
    map.set("n", Value::Null);

    assert_eq!(map["b"], true);
    assert_eq!(map["i"], 42);
    assert_eq!(map.get_as::<f64>("f"), Some(2.5));
    assert_eq!(map["s"], "text");
    assert!(map["n"].is_null());
}

// ===== DOTTED PATH SEMANTICS =====

#[test]
fn test_dotted_assignment_builds_nested_maps() {
    let mut map = DotMap::new();
    map.set_path("a.b.c", 5).unwrap();

    assert_eq!(map["a"]["b"]["c"], 5);
    assert!(map.get("a").unwrap().as_map().is_some());
    assert!(map.get("a.b").unwrap().as_map().is_some());
    assert_eq!(map.get_as::<i64>("a.b.c"), Some(5));
}

#[test]
fn test_dotted_assignment_overwrites_scalar_prefix() {
    let mut map = DotMap::new();
    map.set("a", 5);
    map.set_path("a.b", 1).unwrap();

    // Overwrite, not merge: the prior 5 is discarded entirely
    let nested = map.get_map("a").unwrap();
    assert_eq!(nested.len(), 1);
    assert_eq!(map.get_as::<i64>("a.b"), Some(1));
}

#[test]
fn test_update_merges_multiple_sources() {
    let mut map = DotMap::new();
    map.update([("a.b", 1)])
        .unwrap()
        .update([("a.c", 2)])
        .unwrap();

    let expected = DotMap::new().with("a.b", 1).with("a.c", 2);
    assert_eq!(map, expected);
}

#[test]
fn test_update_later_pairs_win() {
    let mut map = DotMap::new();
    map.update([("k", 1), ("k", 2)]).unwrap();
    assert_eq!(map["k"], 2);
}

#[test]
fn test_nested_map_leaf_stays_dotted_capable() {
    let mut inner = DotMap::new();
    inner.set("x", 1);

    let mut map = DotMap::new();
    map.set_path("outer", inner).unwrap();
    map.set_path("outer.y.z", 2).unwrap();

    assert_eq!(map.get_as::<i64>("outer.x"), Some(1));
    assert_eq!(map.get_as::<i64>("outer.y.z"), Some(2));
}

#[test]
fn test_clone_is_independent() {
    let mut original = DotMap::new();
    original.set_path("a.b", 1).unwrap();

    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.set("top", "only-in-copy");
    assert!(!original.contains_key("top"));

    // Ownership makes clones fully independent, nested levels included
    copy.set_path("a.b", 99).unwrap();
    assert_eq!(original.get_as::<i64>("a.b"), Some(1));
}

// ===== AUTO-VIVIFICATION =====

#[test]
fn test_vivifying_read_chain_never_fails() {
    let map = DotMap::auto();
    let leaf = &map["x"]["y"]["z"];
    let empty = leaf.as_map().unwrap();
    assert!(empty.is_empty());
    assert!(empty.is_vivifying());
}

#[test]
fn test_vivifying_mutable_chain_materializes_levels() {
    let mut map = DotMap::auto();
    *map.at("x.y.z").unwrap() = Value::Int(7);

    assert_eq!(map["x"]["y"]["z"], 7);
    assert!(map.get_map("x.y").unwrap().is_vivifying());
}

#[test]
fn test_vivification_applies_to_flat_access_too() {
    let map = DotMap::auto();
    // Single missing key, no dotted path involved
    assert!(map["missing"].as_map().unwrap().is_empty());
}

// ===== ERRORS =====

#[test]
fn test_missing_key_errors_carry_the_name() {
    let mut map = DotMap::new();

    let err = map.try_get("profile.name").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.key(), Some("profile.name"));
    assert!(err.to_string().contains("profile.name"));

    let err = map.try_remove("gone").unwrap_err();
    assert_eq!(err.key(), Some("gone"));
}

#[test]
fn test_crate_error_predicates() {
    let mut map = DotMap::new();
    let err: dotmap::Error = map.try_get("nope").unwrap_err().into();
    assert!(err.is_not_found());
    assert!(!err.is_serialization_error());

    let err: dotmap::Error = map.set_path("", 1).unwrap_err().into();
    assert!(!err.is_not_found());
}

// ===== ITERATION AND DISPLAY =====

#[test]
fn test_iteration() {
    let mut map = DotMap::new();
    map.set("a", 1);
    map.set("b", 2);

    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    assert_eq!(keys, ["a", "b"]);

    let total: i64 = map.values().filter_map(Value::as_int).sum();
    assert_eq!(total, 3);

    let collected: Vec<(String, Value)> = map.clone().into_iter().collect();
    assert_eq!(collected.len(), 2);
}

#[test]
fn test_display_is_deterministic() {
    let mut map = DotMap::new();
    map.update([("z", 26), ("a", 1)]).unwrap();
    assert_eq!(map.to_string(), "{a: 1, z: 26}");
}
