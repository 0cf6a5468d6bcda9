//! The `SpatialDropout3D` layer descriptor.
//!
//! A descriptor validates its parameters once, at construction, and can then be
//! built any number of times into an executable [`Layer`] for a given input
//! shape. Building never fails and never validates rank; shape checks belong to
//! whoever propagates shapes through the model.

use crate::config::{LayerConfig, SpatialDropout3DConfig, CLASS_NAME};
use crate::format::{dim_ordering_to_format, DataFormat, Layout};
use crate::layers::{Layer, SpatialDropout3DImpl};
use crate::precision::Precision;
use crate::shape::Shape;
use crate::{Error, Result};
use log::debug;
use serde_json::Value;
use std::marker::PhantomData;

pub const DEFAULT_DROP_PROBABILITY: f64 = 0.5;
pub const DEFAULT_NAME: &str = "spatial_dropout3d";

#[derive(Debug, Clone, PartialEq)]
pub struct SpatialDropout3D<T: Precision = f32> {
    name: String,
    drop_probability: f64,
    format: DataFormat,
    declared_input_shape: Option<Vec<usize>>,
    _precision: PhantomData<T>,
}

impl<T: Precision> SpatialDropout3D<T> {
    /// Creates a descriptor, failing on an unknown `format` or a drop
    /// probability outside `[0, 1]`. `format` is matched case-insensitively.
    pub fn new(
        drop_probability: f64,
        format: &str,
        declared_input_shape: Option<Vec<usize>>,
    ) -> Result<Self> {
        let format = DataFormat::from_str(format)?;
        Self::with_format(drop_probability, format, declared_input_shape)
    }

    /// Same as [`SpatialDropout3D::new`] with p = 0.5, `channel_first` and no
    /// declared input shape.
    pub fn create_default() -> Self {
        Self::default()
    }

    /// Creates a descriptor from a legacy `th`/`tf` dim-ordering token.
    pub fn from_dim_ordering(
        drop_probability: f64,
        dim_ordering: &str,
        declared_input_shape: Option<Vec<usize>>,
    ) -> Result<Self> {
        let format = dim_ordering_to_format(dim_ordering)?;
        Self::new(drop_probability, format, declared_input_shape)
    }

    pub fn with_format(
        drop_probability: f64,
        format: DataFormat,
        declared_input_shape: Option<Vec<usize>>,
    ) -> Result<Self> {
        if !drop_probability.is_finite() || !(0.0..=1.0).contains(&drop_probability) {
            return Err(Error::Configuration(format!(
                "Drop probability must be in [0, 1], got {}",
                drop_probability
            )));
        }

        debug!(
            "{}: p={} format={} input_shape={:?} dtype={}",
            DEFAULT_NAME,
            drop_probability,
            format,
            declared_input_shape,
            T::DTYPE
        );

        Ok(Self {
            name: DEFAULT_NAME.to_string(),
            drop_probability,
            format,
            declared_input_shape,
            _precision: PhantomData,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn drop_probability(&self) -> f64 {
        self.drop_probability
    }

    pub fn format(&self) -> DataFormat {
        self.format
    }

    pub fn layout(&self) -> Layout {
        self.format.layout()
    }

    pub fn declared_input_shape(&self) -> Option<&[usize]> {
        self.declared_input_shape.as_deref()
    }

    /// Declared input shape with an unknown batch dimension in front.
    pub fn batch_input_shape(&self) -> Option<Shape> {
        self.declared_input_shape
            .as_deref()
            .map(|dims| Shape::with_batch(None, dims))
    }

    pub fn compute_output_shape(&self, input_shape: &Shape) -> Shape {
        input_shape.clone()
    }

    /// Builds a fresh numeric layer for an input of `input_shape`.
    pub fn build(&self, input_shape: &Shape) -> Box<dyn Layer<T>> {
        debug!(
            "{}: building for input {} ({:?}, p={})",
            self.name,
            input_shape,
            self.layout(),
            self.drop_probability
        );
        Box::new(self.bind())
    }

    pub(crate) fn bind(&self) -> SpatialDropout3DImpl<T> {
        SpatialDropout3DImpl::new(self.drop_probability, self.layout())
            .with_name(self.name.clone())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_config(&value)
    }

    pub fn from_config(value: &Value) -> Result<Self> {
        let layer_config: LayerConfig = serde_json::from_value(value.clone())?;
        if layer_config.class_name != CLASS_NAME {
            return Err(Error::UnsupportedLayer(layer_config.class_name));
        }

        let config = layer_config.config;

        if let Some(dtype) = config.dtype.as_deref() {
            if dtype != T::DTYPE {
                return Err(Error::Configuration(format!(
                    "Layer dtype {} does not match {}",
                    dtype,
                    T::DTYPE
                )));
            }
        }

        let format = match (config.data_format.as_deref(), config.dim_ordering.as_deref()) {
            (Some(data_format), _) => DataFormat::from_keras_str(data_format)?,
            (None, Some(dim_ordering)) => {
                DataFormat::from_str(dim_ordering_to_format(dim_ordering)?)?
            }
            (None, None) => DataFormat::default(),
        };

        let declared_input_shape = match config.batch_input_shape {
            Some(shape) => Some(
                shape
                    .sample_dims()
                    .iter()
                    .copied()
                    .collect::<Option<Vec<usize>>>()
                    .ok_or_else(|| {
                        Error::Configuration(format!(
                            "batch_input_shape must be known past the batch axis, got {}",
                            shape
                        ))
                    })?,
            ),
            None => None,
        };

        let descriptor = Self::with_format(config.rate, format, declared_input_shape)?;
        Ok(match config.name {
            Some(name) => descriptor.with_name(name),
            None => descriptor,
        })
    }

    pub fn to_config(&self) -> Value {
        let layer_config = LayerConfig {
            class_name: CLASS_NAME.to_string(),
            config: SpatialDropout3DConfig {
                name: Some(self.name.clone()),
                rate: self.drop_probability,
                data_format: Some(self.format.keras_name().to_string()),
                dim_ordering: None,
                batch_input_shape: self.batch_input_shape(),
                dtype: Some(T::DTYPE.to_string()),
            },
        };

        serde_json::json!(layer_config)
    }
}

impl<T: Precision> Default for SpatialDropout3D<T> {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            drop_probability: DEFAULT_DROP_PROBABILITY,
            format: DataFormat::default(),
            declared_input_shape: None,
            _precision: PhantomData,
        }
    }
}
