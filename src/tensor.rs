use crate::precision::Precision;
use crate::{Error, Result};
use ndarray::{Array, ArrayD, IxDyn};

/// Number of elements in `shape`, or `None` if it overflows `usize`.
fn element_count(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tensor<T: Precision = f32> {
    data: ArrayD<T>,
}

impl<T: Precision> Tensor<T> {
    pub fn new(data: ArrayD<T>) -> Self {
        Self { data }
    }

    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> Result<Self> {
        if element_count(shape) != Some(vec.len()) {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                actual: vec![vec.len()],
            });
        }

        let data = Array::from_shape_vec(IxDyn(shape), vec)
            .map_err(|e| Error::Layer(format!("Tensor construction failed: {}", e)))?;
        Ok(Self { data })
    }

    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: ArrayD::zeros(IxDyn(shape)),
        }
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    pub fn data(&self) -> &ArrayD<T> {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn reshape(&self, new_shape: &[usize]) -> Result<Self> {
        if element_count(new_shape) != Some(self.len()) {
            return Err(Error::ShapeMismatch {
                expected: new_shape.to_vec(),
                actual: self.shape().to_vec(),
            });
        }

        let reshaped = self
            .data
            .clone()
            .into_shape_with_order(IxDyn(new_shape))
            .map_err(|e| Error::Layer(format!("Reshape failed: {}", e)))?;
        Ok(Self { data: reshaped })
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().copied().collect()
    }
}

impl<T: Precision> From<ArrayD<T>> for Tensor<T> {
    fn from(data: ArrayD<T>) -> Self {
        Self::new(data)
    }
}
