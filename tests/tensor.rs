use spatial_dropout3d::{Error, Tensor};

#[test]
fn test_tensor_creation_from_vec() {
    let vec = vec![1.0, 2.0, 3.0, 4.0];
    let tensor = Tensor::<f32>::from_vec(vec.clone(), &[4]).expect("Failed to create tensor");

    assert_eq!(tensor.shape(), &[4]);
    assert_eq!(tensor.to_vec(), vec);
}

#[test]
fn test_tensor_creation_5d() {
    let vec: Vec<f64> = (0..96).map(|i| i as f64).collect();
    let tensor = Tensor::from_vec(vec, &[2, 3, 2, 2, 4]).expect("Failed to create tensor");

    assert_eq!(tensor.shape(), &[2, 3, 2, 2, 4]);
    assert_eq!(tensor.rank(), 5);
    assert_eq!(tensor.len(), 96);
}

#[test]
fn test_tensor_shape_mismatch() {
    let result = Tensor::<f32>::from_vec(vec![1.0, 2.0, 3.0], &[4]);

    assert!(
        matches!(result, Err(Error::ShapeMismatch { .. })),
        "Should fail when shape doesn't match vector length"
    );
}

#[test]
fn test_tensor_zeros() {
    let tensor = Tensor::<f64>::zeros(&[1, 2, 2, 2, 1]);

    assert_eq!(tensor.len(), 8);
    assert!(tensor.to_vec().iter().all(|&x| x == 0.0), "All values should be zero");
}

#[test]
fn test_tensor_reshape() {
    let tensor = Tensor::<f32>::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3])
        .expect("Failed to create tensor");

    let reshaped = tensor.reshape(&[1, 1, 2, 3, 1]).expect("Reshape failed");
    assert_eq!(reshaped.shape(), &[1, 1, 2, 3, 1]);
    assert_eq!(reshaped.to_vec(), tensor.to_vec());

    assert!(tensor.reshape(&[4, 2]).is_err());
}

#[test]
fn test_tensor_overflowing_shape_is_mismatch() {
    let result = Tensor::<f32>::from_vec(vec![], &[usize::MAX, 2]);
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));

    let tensor = Tensor::<f32>::from_vec(vec![1.0, 2.0], &[2]).unwrap();
    assert!(matches!(
        tensor.reshape(&[usize::MAX, 2]),
        Err(Error::ShapeMismatch { .. })
    ));
}

#[test]
fn test_tensor_from_ndarray() {
    let array = ndarray::ArrayD::<f64>::zeros(ndarray::IxDyn(&[1, 2, 1, 1, 2]));
    let tensor = Tensor::from(array.clone());

    assert_eq!(tensor.data(), &array);
    assert_eq!(tensor, Tensor::new(array));
}
