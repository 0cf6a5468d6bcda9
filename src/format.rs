//! Data-format tokens and the canonical layouts they map to.

use crate::{Error, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataFormat {
    #[default]
    ChannelFirst,
    ChannelLast,
}

/// Canonical memory layout handed to the numeric layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Channel axis immediately after the batch axis.
    NCHW,
    /// Channel axis last.
    NHWC,
}

const FORMATS: &[(&str, DataFormat)] = &[
    ("channel_first", DataFormat::ChannelFirst),
    ("channel_last", DataFormat::ChannelLast),
];

// Keras config spellings, only accepted when reading layer configs.
const KERAS_FORMATS: &[(&str, DataFormat)] = &[
    ("channels_first", DataFormat::ChannelFirst),
    ("channels_last", DataFormat::ChannelLast),
];

const DIM_ORDERINGS: &[(&str, DataFormat)] = &[
    ("th", DataFormat::ChannelFirst),
    ("tf", DataFormat::ChannelLast),
];

fn lookup(table: &[(&str, DataFormat)], token: &str) -> Option<DataFormat> {
    let normalized = token.to_lowercase();
    table
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, format)| *format)
}

impl DataFormat {
    pub fn from_str(s: &str) -> Result<Self> {
        lookup(FORMATS, s)
            .ok_or_else(|| Error::Configuration(format!("Unsupported data format: {}", s)))
    }

    /// Like [`DataFormat::from_str`] but also accepts `channels_first` and
    /// `channels_last`.
    pub fn from_keras_str(s: &str) -> Result<Self> {
        lookup(FORMATS, s)
            .or_else(|| lookup(KERAS_FORMATS, s))
            .ok_or_else(|| Error::Configuration(format!("Unsupported data format: {}", s)))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataFormat::ChannelFirst => "channel_first",
            DataFormat::ChannelLast => "channel_last",
        }
    }

    pub fn keras_name(&self) -> &'static str {
        match self {
            DataFormat::ChannelFirst => "channels_first",
            DataFormat::ChannelLast => "channels_last",
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            DataFormat::ChannelFirst => Layout::NCHW,
            DataFormat::ChannelLast => Layout::NHWC,
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translates a legacy `th`/`tf` dim-ordering token into its format string.
pub fn dim_ordering_to_format(dim_ordering: &str) -> Result<&'static str> {
    lookup(DIM_ORDERINGS, dim_ordering)
        .map(|format| format.as_str())
        .ok_or_else(|| {
            Error::Configuration(format!("Unsupported dim ordering: {}", dim_ordering))
        })
}

impl Layout {
    /// Channel axis for a tensor of the given rank.
    pub fn channel_axis(&self, rank: usize) -> usize {
        match self {
            Layout::NCHW => 1,
            Layout::NHWC => rank.saturating_sub(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str_case_insensitive() {
        assert_eq!(DataFormat::from_str("Channel_First").unwrap(), DataFormat::ChannelFirst);
        assert_eq!(DataFormat::from_str("CHANNEL_LAST").unwrap(), DataFormat::ChannelLast);
    }

    #[test]
    fn test_keras_spellings_only_in_keras_lookup() {
        assert!(DataFormat::from_str("channels_last").is_err());
        assert_eq!(
            DataFormat::from_keras_str("channels_last").unwrap(),
            DataFormat::ChannelLast
        );
        assert_eq!(
            DataFormat::from_keras_str("channel_first").unwrap(),
            DataFormat::ChannelFirst
        );
    }

    #[test]
    fn test_dim_ordering() {
        assert_eq!(dim_ordering_to_format("th").unwrap(), "channel_first");
        assert_eq!(dim_ordering_to_format("TF").unwrap(), "channel_last");

        let err = dim_ordering_to_format("xy").unwrap_err();
        assert!(err.to_string().contains("xy"));
    }

    #[test]
    fn test_channel_axis() {
        assert_eq!(Layout::NCHW.channel_axis(5), 1);
        assert_eq!(Layout::NHWC.channel_axis(5), 4);
    }
}
