use crate::format::Layout;
use crate::precision::Precision;
use crate::{Error, Result, Tensor};
use log::trace;
use std::marker::PhantomData;

const VOLUME_RANK: usize = 5;

/// Numeric spatial dropout over 5-D volumes.
///
/// Inference only: `forward` passes its input through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialDropout3DImpl<T: Precision> {
    name: String,
    drop_probability: f64,
    layout: Layout,
    _precision: PhantomData<T>,
}

impl<T: Precision> SpatialDropout3DImpl<T> {
    pub fn new(initial_drop_probability: f64, layout: Layout) -> Self {
        Self {
            name: "spatial_dropout3d".to_string(),
            drop_probability: initial_drop_probability,
            layout,
            _precision: PhantomData,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn drop_probability(&self) -> f64 {
        self.drop_probability
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn channel_axis(&self) -> usize {
        self.layout.channel_axis(VOLUME_RANK)
    }

    fn check_rank(&self, shape: &[usize]) -> Result<()> {
        if shape.len() != VOLUME_RANK {
            return Err(Error::Layer(format!(
                "SpatialDropout3D expects 5D input, got {:?}",
                shape
            )));
        }
        Ok(())
    }
}

impl<T: Precision> super::Layer<T> for SpatialDropout3DImpl<T> {
    fn forward(&self, input: &Tensor<T>) -> Result<Tensor<T>> {
        self.check_rank(input.shape())?;
        trace!(
            "{}: forward {:?} ({:?}, channel axis {})",
            self.name,
            input.shape(),
            self.layout,
            self.channel_axis()
        );
        Ok(input.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn output_shape(&self, input_shape: &[usize]) -> Result<Vec<usize>> {
        self.check_rank(input_shape)?;
        Ok(input_shape.to_vec())
    }
}
