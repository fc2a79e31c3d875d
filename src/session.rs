use std::num::{NonZeroU8, NonZeroU32};

use vorbis_rs::{VorbisBitrateManagementStrategy, VorbisEncoder, VorbisEncoderBuilder};

use crate::config::EncoderConfig;
use crate::error::{Error, Result};
use crate::sink::OutputSink;
use crate::wav::WavHeader;

/// Value of the fixed ENCODER comment tag stamped on every stream.
const ENCODER_TAG: &str = concat!("oggpress ", env!("CARGO_PKG_VERSION"));

/// One open encoder pipeline: Vorbis analysis plus the Ogg muxer, writing
/// finished pages into an [`OutputSink`] as they complete.
///
/// The codec library picks a random stream serial per encoder instance, so
/// sessions opened back to back within one process get distinct identities.
pub struct EncodeSession {
    encoder: VorbisEncoder<OutputSink>,
    data_offset: usize,
    channels: usize,
}

impl EncodeSession {
    /// Open a session for the parsed stream parameters.
    ///
    /// Building the encoder immediately emits the identification, comment and
    /// setup header packets into the sink, flushed onto their own pages ahead
    /// of any audio. The `LOOPSTART`/`LOOPLENGTH` tags are pass-through
    /// metadata for downstream loop-aware players; no validation is applied.
    pub fn open(
        header: &WavHeader,
        config: &EncoderConfig,
        loop_start: Option<&str>,
        loop_length: Option<&str>,
        sink: OutputSink,
    ) -> Result<Self> {
        config.validate()?;

        let sample_rate = NonZeroU32::new(header.sample_rate)
            .ok_or_else(|| Error::EncoderInit("sample rate must be nonzero".to_string()))?;
        let channels = u8::try_from(header.channels)
            .ok()
            .and_then(NonZeroU8::new)
            .ok_or_else(|| {
                Error::EncoderInit(format!("unsupported channel count {}", header.channels))
            })?;

        let mut builder = VorbisEncoderBuilder::new(sample_rate, channels, sink)
            .map_err(|e| Error::EncoderInit(e.to_string()))?;
        builder.bitrate_management_strategy(VorbisBitrateManagementStrategy::QualityVbr {
            target_quality: config.quality,
        });
        builder
            .comment_tag("ENCODER", ENCODER_TAG)
            .map_err(|e| Error::EncoderInit(e.to_string()))?;
        if let Some(value) = loop_start {
            builder
                .comment_tag("LOOPSTART", value)
                .map_err(|e| Error::EncoderInit(e.to_string()))?;
        }
        if let Some(value) = loop_length {
            builder
                .comment_tag("LOOPLENGTH", value)
                .map_err(|e| Error::EncoderInit(e.to_string()))?;
        }

        let encoder = builder
            .build()
            .map_err(|e| Error::EncoderInit(e.to_string()))?;

        tracing::info!(
            "Encode session opened: {} Hz, {} channel(s), quality {}",
            header.sample_rate,
            header.channels,
            config.quality
        );

        Ok(Self {
            encoder,
            data_offset: header.data_offset,
            channels: header.channels as usize,
        })
    }

    /// Offset of the PCM payload within the first chunk of the first segment.
    pub fn data_offset(&self) -> usize {
        self.data_offset
    }

    /// Feed one chunk of interleaved 16-bit little-endian PCM.
    ///
    /// Completed Ogg pages land in the sink as the analysis pipeline drains.
    /// Trailing bytes that do not complete an interleaved frame are dropped.
    pub fn encode_pcm_chunk(&mut self, pcm: &[u8]) -> Result<()> {
        let planes = deinterleave(pcm, self.channels);
        if planes[0].is_empty() {
            return Ok(());
        }

        self.encoder.encode_audio_block(&planes)?;
        Ok(())
    }

    /// Signal end-of-input, drain the remaining packets including the
    /// end-of-stream page, and tear the codec state down.
    pub fn finish(self) -> Result<()> {
        self.encoder.finish()?;
        tracing::info!("Encode session closed");
        Ok(())
    }
}

/// Split interleaved 16-bit little-endian PCM into per-channel planes of
/// floats in [-1.0, 1.0), scaled by 1/32768.
fn deinterleave(pcm: &[u8], channels: usize) -> Vec<Vec<f32>> {
    let frame_bytes = channels * 2;
    let frames = pcm.len() / frame_bytes;

    let mut planes = vec![Vec::with_capacity(frames); channels];
    for frame in pcm.chunks_exact(frame_bytes) {
        for (ch, plane) in planes.iter_mut().enumerate() {
            let sample = i16::from_le_bytes([frame[ch * 2], frame[ch * 2 + 1]]);
            plane.push(f32::from(sample) / 32768.0);
        }
    }

    planes
}
