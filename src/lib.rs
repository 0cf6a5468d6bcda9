//! # Spatial Dropout 3D
//!
//! A Keras-style `SpatialDropout3D` layer descriptor. The descriptor validates
//! its configuration eagerly, propagates shapes, and builds an executable layer
//! bound to a numeric precision.
//!
//! ## Example
//!
//! ```rust,ignore
//! use spatial_dropout3d::{Shape, SpatialDropout3D};
//!
//! let descriptor = SpatialDropout3D::<f32>::new(0.3, "channel_last", None)?;
//! let layer = descriptor.build(&Shape::with_batch(None, &[4, 8, 8, 3]));
//! let output = layer.forward(&input)?;
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod format;
pub mod layers;
pub mod precision;
pub mod shape;
pub mod tensor;

pub use descriptor::SpatialDropout3D;
pub use error::{Error, Result};
pub use format::{DataFormat, Layout};
pub use layers::Layer;
pub use precision::Precision;
pub use shape::Shape;
pub use tensor::Tensor;
