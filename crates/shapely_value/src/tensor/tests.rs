use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_new_checks_element_count() {
    let t = DenseTensor::new(&[2, 3], vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0]);
    assert_eq!(t.map(|t| t.shape().into_vec()), Some(vec![2, 3]));

    assert_eq!(DenseTensor::new(&[2, 3], vec![1.0; 5]), None);
    assert_eq!(DenseTensor::new(&[usize::MAX, 2], vec![]), None);
}

#[test]
fn test_zeros() {
    let t = DenseTensor::zeros(&[4, 0, 2]);
    assert_eq!(t.shape().as_slice(), &[4, 0, 2]);
    assert!(t.data().is_empty());

    let t = DenseTensor::zeros(&[2, 2]);
    assert_eq!(t.data(), &[0.0; 4]);
}

#[test]
fn test_scalar_has_empty_shape() {
    let t = DenseTensor::scalar(3.5);
    assert!(t.shape().is_empty());
    assert_eq!(t.data(), &[3.5]);
}

#[test]
fn test_display() {
    assert_eq!(DenseTensor::scalar(3.0).to_string(), "tensor(3.0)");
    assert_eq!(DenseTensor::zeros(&[2, 3]).to_string(), "tensor(shape=[2, 3])");
}
