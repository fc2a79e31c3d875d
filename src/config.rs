use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tuning knobs for a [`StreamingEncoder`](crate::StreamingEncoder).
///
/// Hosts typically use the defaults; embedding environments that feed larger
/// transfer units can raise the buffer limits to match.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EncoderConfig {
    /// Variable-bitrate quality target on the codec's -1.0..=1.0 scale.
    #[serde(default = "default_quality")]
    pub quality: f32,

    /// Largest accepted single chunk, in bytes.
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,

    /// Maximum number of chunks buffered between encode passes.
    #[serde(default = "default_max_pending_chunks")]
    pub max_pending_chunks: usize,
}

fn default_quality() -> f32 {
    0.5
}

fn default_max_chunk_size() -> usize {
    // One transfer unit of 16384 stereo 16-bit frames, plus a 44-byte WAV header.
    16384 * 4 + 44
}

fn default_max_pending_chunks() -> usize {
    1024
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            quality: default_quality(),
            max_chunk_size: default_max_chunk_size(),
            max_pending_chunks: default_max_pending_chunks(),
        }
    }
}

impl EncoderConfig {
    /// Validate the configuration before a session is opened with it.
    pub fn validate(&self) -> Result<()> {
        if !(-1.0..=1.0).contains(&self.quality) {
            return Err(Error::EncoderInit(format!(
                "quality {} is outside the -1.0..=1.0 range",
                self.quality
            )));
        }

        if self.max_chunk_size == 0 {
            return Err(Error::EncoderInit(
                "max_chunk_size must be nonzero".to_string(),
            ));
        }

        if self.max_pending_chunks == 0 {
            return Err(Error::EncoderInit(
                "max_pending_chunks must be nonzero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EncoderConfig::default();

        assert_eq!(config.quality, 0.5);
        assert_eq!(config.max_chunk_size, 65580);
        assert_eq!(config.max_pending_chunks, 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_quality() {
        let config = EncoderConfig {
            quality: 1.5,
            ..EncoderConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EncoderConfig = serde_json::from_str(r#"{"quality": 0.25}"#).unwrap();

        assert_eq!(config.quality, 0.25);
        assert_eq!(config.max_pending_chunks, 1024);
    }
}
