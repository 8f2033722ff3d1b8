use base::{Tensor, TensorError};

#[test]
fn test_tensor_new_valid() {
    let tensor = Tensor::new(vec![2, 2, 3], vec![0u8; 12]).unwrap();
    assert_eq!(tensor.shape, vec![2, 2, 3]);
    assert_eq!(tensor.ndim(), 3);
    assert_eq!(tensor.len(), 12);
}

#[test]
fn test_tensor_new_shape_mismatch() {
    let result = Tensor::new(vec![2, 3], vec![1u8, 2, 3]);
    assert_eq!(result.unwrap_err(), TensorError::ShapeMismatch { expected: 6, got: 3 });
}

#[test]
fn test_tensor_new_overflow() {
    let result = Tensor::<f32>::new(vec![usize::MAX, 2], vec![]);
    assert!(matches!(result, Err(TensorError::ShapeOverflow)));
}

#[test]
fn test_tensor_zeros() {
    let tensor = Tensor::<u16>::zeros(vec![4, 4, 1]).unwrap();
    assert_eq!(tensor.data, vec![0; 16]);
    assert!(!tensor.is_empty());
}
