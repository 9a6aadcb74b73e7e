use super::*;
use crate::{parse, parse_args, parse_with, HighRankDims, ParseOptions};
use pretty_assertions::assert_eq;
use shapely_value::{DenseTensor, TensorLike, Value};
use std::sync::Arc;

fn tensor(dims: &[usize]) -> Value {
    Value::tensor(DenseTensor::zeros(dims))
}

#[test]
fn test_element_count() {
    assert_eq!(element_count(&[2, 3]), 6);
    assert_eq!(element_count(&[7]), 7);
    assert_eq!(element_count(&[4, 0, 9]), 0);
    assert_eq!(element_count(&[-1, 5, 6]), 30);
    assert_eq!(element_count(&[i64::MAX, 2]), i64::MAX.unsigned_abs());
}

#[test]
fn test_total_element_count_sums_tensors() {
    let value = Value::map([
        (Value::string("a"), tensor(&[2, 3])),
        (Value::string("b"), Value::list(vec![tensor(&[4]), Value::int(1)])),
        (Value::string("c"), tensor(&[5, 0])),
    ]);
    let shape = parse(&value, Some(4));
    assert_eq!(shape.tensor_count(), 3);
    assert_eq!(shape.total_element_count(), 6 + 4);
}

#[test]
fn test_repeated_tensor_counted_once() {
    let shared: Arc<dyn TensorLike> = Arc::new(DenseTensor::zeros(&[10, 10]));
    let value = Value::tuple(vec![
        Value::shared_tensor(Arc::clone(&shared)),
        Value::shared_tensor(shared),
        tensor(&[3]),
    ]);
    let shape = parse(&value, Some(4));

    assert_eq!(shape.total_element_count(), 103);
    let counts = shape.tensor_element_counts();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get(&shape.tensors()[0].id()), Some(&100));
    assert_eq!(counts.get(&shape.tensors()[1].id()), Some(&3));
}

#[test]
fn test_no_tensors() {
    let shape = parse(&Value::list(vec![Value::int(1)]), Some(4));
    assert_eq!(shape.total_element_count(), 0);
    assert!(shape.tensor_element_counts().is_empty());
    assert_eq!(
        shape.single_tensor_dimensions(),
        Err(ShapeError::InvariantViolation { found: 0 })
    );
}

#[test]
fn test_single_tensor_dimensions() {
    let value = Value::list(vec![Value::string("x"), tensor(&[8, 16, 3])]);
    let shape = parse(&value, Some(4));
    assert_eq!(shape.single_tensor_dimensions(), Ok(&[8, 16, 3][..]));
}

#[test]
fn test_single_tensor_dimensions_rejects_many() {
    let shape = parse_args(&[tensor(&[1]), tensor(&[2])], Some(4));
    let Err(err) = shape.single_tensor_dimensions() else {
        panic!("expected an error for two tensors");
    };
    assert_eq!(err, ShapeError::InvariantViolation { found: 2 });
    assert!(err.to_string().contains("found 2"));
}

#[test]
fn test_single_tensor_through_shared_references() {
    let t = tensor(&[6]);
    let shape = parse(&Value::list(vec![t.clone(), t]), Some(4));
    assert_eq!(shape.single_tensor_dimensions(), Ok(&[6][..]));
}

#[test]
fn test_entries_follow_first_seen_order() {
    let shape = parse_args(&[tensor(&[1]), tensor(&[2, 2])], Some(4));
    let summary: Vec<_> = shape
        .tensors()
        .iter()
        .map(|entry| (entry.id().index(), entry.dims().to_vec(), entry.elements()))
        .collect();
    assert_eq!(summary, vec![(0, vec![1], 1), (1, vec![2, 2], 4)]);
}

#[test]
fn test_counts_use_collapsed_dims() {
    let options = ParseOptions::new()
        .with_threshold(4)
        .with_high_rank(HighRankDims::Collapse);
    let shape = parse_with(&tensor(&[2, 3, 4, 5]), &options);
    assert_eq!(shape.single_tensor_dimensions(), Ok(&[-1, 4, 5][..]));
    assert_eq!(shape.total_element_count(), 20);
}

#[test]
fn test_display_and_render_agree() {
    let shape = parse(&Value::list(vec![Value::int(1); 9]), Some(3));
    assert_eq!(shape.render(), "L(9) [1, 1, 1]");
    assert_eq!(shape.to_string(), shape.render());
    assert_eq!(shape.threshold(), 3);
    assert_eq!(shape.clone().into_root(), *shape.root());
}
