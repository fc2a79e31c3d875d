use crate::error::WavHeaderError;

/// How far into the first chunk the `data` sub-chunk marker may start.
const DATA_SCAN_WINDOW: usize = 100;

/// Byte offset of the channel-count field in a canonical PCM WAV header.
const CHANNELS_OFFSET: usize = 22;

/// Byte offset of the sample-rate field in a canonical PCM WAV header.
const SAMPLE_RATE_OFFSET: usize = 24;

/// Stream parameters read once from the head of a canonical PCM WAV file.
///
/// Only canonical headers are handled: `RIFF` magic at the start and a `data`
/// sub-chunk beginning within the first [`DATA_SCAN_WINDOW`] bytes, with the
/// `fmt ` fields at their usual fixed offsets. That covers WAV files produced
/// by the common writers; exotic layouts (extra chunks before `fmt `, WAVE_FORMAT_EXTENSIBLE)
/// are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Offset of the first PCM payload byte within the first chunk.
    pub data_offset: usize,
    /// Samples per second per channel.
    pub sample_rate: u32,
    /// Interleaved channel count.
    pub channels: u16,
}

impl WavHeader {
    /// Parse the header from the first chunk of the first segment.
    pub fn parse(chunk: &[u8]) -> Result<Self, WavHeaderError> {
        if chunk.len() < 4 {
            return Err(WavHeaderError::TooShort(chunk.len()));
        }

        if &chunk[..4] != b"RIFF" {
            return Err(WavHeaderError::MissingRiffMagic);
        }

        let scan_end = DATA_SCAN_WINDOW.min(chunk.len().saturating_sub(3));
        let data_offset = (0..scan_end)
            .find(|&i| &chunk[i..i + 4] == b"data")
            // The payload starts past the marker and the 4-byte chunk size.
            .map(|i| i + 8)
            .ok_or(WavHeaderError::DataChunkNotFound(DATA_SCAN_WINDOW))?;

        if chunk.len() < SAMPLE_RATE_OFFSET + 4 || chunk.len() < data_offset {
            return Err(WavHeaderError::TooShort(chunk.len()));
        }

        let sample_rate = u32::from_le_bytes([
            chunk[SAMPLE_RATE_OFFSET],
            chunk[SAMPLE_RATE_OFFSET + 1],
            chunk[SAMPLE_RATE_OFFSET + 2],
            chunk[SAMPLE_RATE_OFFSET + 3],
        ]);

        // The fmt channel count is a 16-bit field. The source this replaces
        // read only the low byte; parsing both bytes is identical for every
        // channel count the encoder accepts (see DESIGN.md).
        let channels = u16::from_le_bytes([chunk[CHANNELS_OFFSET], chunk[CHANNELS_OFFSET + 1]]);

        Ok(Self {
            data_offset,
            sample_rate,
            channels,
        })
    }
}
