//! Numeric precision binding for layers.
//!
//! Descriptors and layers are generic over `T: Precision`; the descriptor never
//! inspects values of `T`, it only threads the choice through to the layer it
//! builds.

use num_traits::Float;
use std::fmt::Debug;

pub trait Precision: Float + Debug + Default + Send + Sync + 'static {
    /// Short dtype tag, as Keras prints it.
    const DTYPE: &'static str;
}

impl Precision for f32 {
    const DTYPE: &'static str = "float32";
}

impl Precision for f64 {
    const DTYPE: &'static str = "float64";
}
