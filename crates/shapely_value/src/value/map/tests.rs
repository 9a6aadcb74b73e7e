use super::*;
use pretty_assertions::assert_eq;

fn keys(map: &MapValue) -> Vec<Value> {
    map.iter().map(|(k, _)| k.clone()).collect()
}

#[test]
fn test_insertion_order_is_kept() {
    let map: MapValue = [
        (Value::int(3), Value::string("c")),
        (Value::int(1), Value::string("a")),
        (Value::int(2), Value::string("b")),
    ]
    .into_iter()
    .collect();

    assert_eq!(keys(&map), vec![Value::int(3), Value::int(1), Value::int(2)]);
    assert_eq!(map.len(), 3);
}

#[test]
fn test_reinsert_replaces_in_place() {
    let mut map = MapValue::new();
    assert_eq!(map.insert(Value::string("a"), Value::int(1)), None);
    assert_eq!(map.insert(Value::string("b"), Value::int(2)), None);
    assert_eq!(
        map.insert(Value::string("a"), Value::int(10)),
        Some(Value::int(1))
    );

    assert_eq!(keys(&map), vec![Value::string("a"), Value::string("b")]);
    assert_eq!(map.get(&Value::string("a")), Some(&Value::int(10)));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_get_missing_key() {
    let map: MapValue = [(Value::int(1), Value::int(1))].into_iter().collect();
    assert_eq!(map.get(&Value::int(2)), None);
    assert!(!map.is_empty());
    assert!(MapValue::new().is_empty());
}

#[test]
fn test_equality_ignores_order() {
    let a: MapValue = [
        (Value::int(1), Value::Bool(true)),
        (Value::int(2), Value::Bool(false)),
    ]
    .into_iter()
    .collect();
    let b: MapValue = [
        (Value::int(2), Value::Bool(false)),
        (Value::int(1), Value::Bool(true)),
    ]
    .into_iter()
    .collect();
    let c: MapValue = [(Value::int(1), Value::Bool(true))].into_iter().collect();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_drain_into_empties_mapping() {
    let mut map: MapValue = [
        (Value::int(1), Value::string("a")),
        (Value::int(2), Value::string("b")),
    ]
    .into_iter()
    .collect();

    let mut out = Vec::new();
    map.drain_into(&mut out);

    assert!(map.is_empty());
    assert_eq!(map.get(&Value::int(1)), None);
    assert_eq!(
        out,
        vec![
            Value::int(1),
            Value::string("a"),
            Value::int(2),
            Value::string("b"),
        ]
    );
}
