pub mod spatial_dropout3d;

use crate::precision::Precision;
use crate::{Result, Tensor};

/// Transforms a tensor of precision `T` into a tensor of the same precision.
pub trait Layer<T: Precision>: std::fmt::Debug + Send + Sync {
    fn forward(&self, input: &Tensor<T>) -> Result<Tensor<T>>;
    fn name(&self) -> &str;
    fn output_shape(&self, input_shape: &[usize]) -> Result<Vec<usize>>;
}

pub use spatial_dropout3d::SpatialDropout3DImpl;
