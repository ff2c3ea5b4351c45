//! Proxy integration tests: forwarding, write-through, and the reserved
//! surface.

use std::collections::{BTreeMap, HashMap};

use dotmap::{DotMap, MapStore, Proxy, Value};

#[test]
fn test_proxy_reads_forward_to_target() {
    let target = HashMap::from([("a".to_string(), Value::Int(1))]);
    let proxy = Proxy::new(target);

    assert_eq!(proxy.get("a"), Some(&Value::Int(1)));
    assert_eq!(proxy["a"], 1);
    assert!(proxy.has("a"));
    assert!(!proxy.has("b"));
    assert_eq!(proxy.len(), 1);
    assert!(!proxy.is_empty());
}

#[test]
fn test_proxy_writes_mutate_borrowed_target() {
    let mut target = HashMap::from([("a".to_string(), Value::Int(1))]);

    {
        let mut proxy = Proxy::new(&mut target);
        proxy.set("a", 2);
        proxy.set("b", "new");
    }

    assert_eq!(target["a"], 2);
    assert_eq!(target["b"], "new");
}

#[test]
fn test_proxy_delete_forwards() {
    let mut target = HashMap::from([("a".to_string(), Value::Int(1))]);
    let mut proxy = Proxy::new(&mut target);

    assert_eq!(proxy.delete("a"), Some(Value::Int(1)));
    assert!(proxy.delete("a").is_none());

    let err = proxy.try_delete("a").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.key(), Some("a"));
}

#[test]
fn test_proxy_missing_key_errors_carry_the_name() {
    let proxy = Proxy::new(HashMap::<String, Value>::new());
    let err = proxy.try_get("ghost").unwrap_err();
    assert_eq!(err.key(), Some("ghost"));
}

#[test]
fn test_proxy_over_dotmap() {
    let mut map = DotMap::new();
    map.set_path("nested.x", 1).unwrap();
    map.set("flat", 2);

    let mut proxy = Proxy::new(&mut map);
    // MapStore access is flat: direct entries only
    assert_eq!(proxy.get("flat"), Some(&Value::Int(2)));
    assert!(proxy.get("nested.x").is_none());
    assert!(proxy.get("nested").is_some());

    proxy.set("flat", 3);
    drop(proxy);
    assert_eq!(map["flat"], 3);
}

#[test]
fn test_proxy_over_btreemap() {
    let target = BTreeMap::from([
        ("b".to_string(), Value::Int(2)),
        ("a".to_string(), Value::Int(1)),
    ]);
    let proxy = Proxy::new(target);

    let keys: Vec<&str> = proxy.keys().collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(proxy.to_string(), "{a: 1, b: 2}");
}

#[test]
fn test_proxy_reserved_surface_is_not_forwarded() {
    let mut proxy = Proxy::new(HashMap::<String, Value>::new());
    proxy.set("target", "a data key, not the proxy's own state");

    // The accessors still reach the real target, and the data key is
    // ordinary data
    assert_eq!(proxy.target().len(), 1);
    assert!(proxy.has("target"));

    let target = proxy.into_inner();
    assert!(target.contains_key("target"));
}

#[test]
fn test_proxy_equality_forwards_to_target() {
    let a = Proxy::new(HashMap::from([("k".to_string(), Value::Int(1))]));
    let b = Proxy::new(HashMap::from([("k".to_string(), Value::Int(1))]));
    assert_eq!(a, b);
}

#[test]
fn test_proxy_index_mut_writes_in_place() {
    let mut target = HashMap::from([("n".to_string(), Value::Int(1))]);
    let mut proxy = Proxy::new(&mut target);
    proxy["n"] = Value::Int(5);
    drop(proxy);
    assert_eq!(target["n"], 5);
}

#[test]
#[should_panic(expected = "ghost")]
fn test_proxy_index_panics_on_missing_key() {
    let proxy = Proxy::new(HashMap::<String, Value>::new());
    let _ = &proxy["ghost"];
}

#[test]
fn test_mapstore_default_methods() {
    let mut map = DotMap::new();
    map.set("k", 1);
    let store: &mut dyn MapStore = &mut map;
    assert!(store.contains_key("k"));
    assert!(!store.is_empty());
}
