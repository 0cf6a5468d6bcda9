//! Keras-style layer configuration.
//!
//! Mirrors the `{"class_name": ..., "config": {...}}` objects found in a
//! `.keras` archive's `config.json`, restricted to the fields
//! `SpatialDropout3D` understands.

use crate::shape::Shape;
use serde::{Deserialize, Serialize};

pub const CLASS_NAME: &str = "SpatialDropout3D";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub class_name: String,
    pub config: SpatialDropout3DConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialDropout3DConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default = "default_rate")]
    pub rate: f64,

    /// `channels_first`/`channels_last`; `channel_first`/`channel_last` are
    /// accepted as well.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_format: Option<String>,

    /// Legacy `th`/`tf` token, consulted only when `data_format` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dim_ordering: Option<String>,

    #[serde(default, alias = "batch_shape", skip_serializing_if = "Option::is_none")]
    pub batch_input_shape: Option<Shape>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dtype: Option<String>,
}

fn default_rate() -> f64 {
    0.5
}

impl Default for SpatialDropout3DConfig {
    fn default() -> Self {
        Self {
            name: None,
            rate: default_rate(),
            data_format: None,
            dim_ordering: None,
            batch_input_shape: None,
            dtype: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_missing() {
        let config: LayerConfig =
            serde_json::from_str(r#"{"class_name": "SpatialDropout3D", "config": {}}"#).unwrap();

        assert_eq!(config.class_name, CLASS_NAME);
        assert_eq!(config.config, SpatialDropout3DConfig::default());
    }

    #[test]
    fn test_null_data_format_is_absent() {
        let config: SpatialDropout3DConfig =
            serde_json::from_str(r#"{"rate": 0.2, "data_format": null}"#).unwrap();

        assert_eq!(config.rate, 0.2);
        assert_eq!(config.data_format, None);
    }

    #[test]
    fn test_batch_shape_alias() {
        let config: SpatialDropout3DConfig =
            serde_json::from_str(r#"{"batch_shape": [null, 3, 4, 4, 4]}"#).unwrap();

        assert_eq!(
            config.batch_input_shape,
            Some(Shape::with_batch(None, &[3, 4, 4, 4]))
        );
    }
}
