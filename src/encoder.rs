use crate::buffer::SegmentBuffer;
use crate::config::EncoderConfig;
use crate::error::{Error, Result, WavHeaderError};
use crate::session::EncodeSession;
use crate::sink::OutputSink;
use crate::wav::WavHeader;

/// Streaming WAV to Ogg Vorbis converter driven by host-initiated passes.
///
/// This object ties the pieces together:
/// - Buffers raw WAV chunks pushed by the host
/// - Opens an encode session on the first segment (header parse + codec init)
/// - Feeds buffered chunks through the session on every pass
/// - Finalizes the stream on the last segment
///
/// The protocol mirrors the host loop it was built for: push some chunks, run
/// a pass, clear the buffer, repeat until the last segment, then collect the
/// Ogg bytes with [`take_output`](Self::take_output). A single pass may carry
/// both flags for single-segment files. At most one session is open per
/// instance; instances are independent.
pub struct StreamingEncoder {
    config: EncoderConfig,
    buffer: SegmentBuffer,
    session: Option<EncodeSession>,
    sink: OutputSink,
}

impl StreamingEncoder {
    pub fn new() -> Self {
        Self::with_config(EncoderConfig::default())
    }

    pub fn with_config(config: EncoderConfig) -> Self {
        let buffer = SegmentBuffer::new(config.max_chunk_size, config.max_pending_chunks);
        Self {
            config,
            buffer,
            session: None,
            sink: OutputSink::new(),
        }
    }

    /// Buffer one raw chunk for the next encode pass.
    pub fn push_chunk(&mut self, chunk: Vec<u8>) -> Result<()> {
        self.buffer.push(chunk)
    }

    /// Release all buffered chunks. Call after each pass to bound memory.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Number of chunks waiting for the next pass.
    pub fn buffered_chunks(&self) -> usize {
        self.buffer.len()
    }

    /// Whether an encode session is currently open.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Bytes of encoded output accumulated so far.
    pub fn output_len(&self) -> usize {
        self.sink.len()
    }

    /// Take the accumulated Ogg Vorbis bytes, leaving the sink empty.
    pub fn take_output(&mut self) -> Vec<u8> {
        self.sink.take()
    }

    /// Drain the buffered chunks through the encoder.
    ///
    /// `first_segment` parses the WAV header from the first buffered chunk,
    /// resets the output sink and opens the session (emitting the Vorbis
    /// header pages). `last_segment` finalizes the stream and releases the
    /// codec state. A pass with neither flag encodes an interior segment. A
    /// failed header parse aborts the pass with nothing emitted and no state
    /// changed.
    pub fn run_encode_pass(
        &mut self,
        first_segment: bool,
        last_segment: bool,
        loop_start: Option<&str>,
        loop_length: Option<&str>,
    ) -> Result<()> {
        if first_segment {
            if self.session.is_some() {
                return Err(Error::SessionAlreadyOpen);
            }

            let first = self
                .buffer
                .chunks()
                .first()
                .ok_or(Error::InvalidHeader(WavHeaderError::TooShort(0)))?;
            let header = WavHeader::parse(first)?;

            // Fresh sink for the new stream; the session writes its header
            // pages into it as part of opening.
            self.sink.take();
            self.session = Some(EncodeSession::open(
                &header,
                &self.config,
                loop_start,
                loop_length,
                self.sink.clone(),
            )?);
        }

        let session = self.session.as_mut().ok_or(Error::SessionNotOpen)?;

        let skip = if first_segment {
            session.data_offset()
        } else {
            0
        };
        for (index, chunk) in self.buffer.chunks().iter().enumerate() {
            let pcm = if index == 0 && skip > 0 {
                chunk.get(skip..).unwrap_or_default()
            } else {
                chunk.as_slice()
            };
            session.encode_pcm_chunk(pcm)?;
        }

        if last_segment {
            if let Some(session) = self.session.take() {
                session.finish()?;
            }
            tracing::debug!("Last segment processed, {} output bytes", self.sink.len());
        }

        Ok(())
    }
}

impl Default for StreamingEncoder {
    fn default() -> Self {
        Self::new()
    }
}
