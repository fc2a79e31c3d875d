use wasm_bindgen::prelude::*;

use crate::config::EncoderConfig;
use crate::encoder::StreamingEncoder;

/// JavaScript-facing wrapper around [`StreamingEncoder`].
///
/// Mirrors the host protocol: push chunks of the WAV file as they arrive,
/// drive encode passes with the segment flags, clear the buffer between
/// passes, and collect the Ogg bytes once the last segment is done (the host
/// typically wraps them in a Blob for playback).
#[wasm_bindgen]
pub struct WavEncoder {
    inner: StreamingEncoder,
}

#[wasm_bindgen]
impl WavEncoder {
    /// Create an encoder, optionally configured from a JSON object string
    /// (`quality`, `max_chunk_size`, `max_pending_chunks`; missing fields take
    /// their defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WavEncoder, JsError> {
        let config: EncoderConfig = match config_json {
            Some(json) => serde_json::from_str(&json)?,
            None => EncoderConfig::default(),
        };
        config.validate()?;

        Ok(Self {
            inner: StreamingEncoder::with_config(config),
        })
    }

    /// Buffer one raw chunk of the WAV input.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> Result<(), JsError> {
        self.inner.push_chunk(chunk.to_vec())?;
        Ok(())
    }

    /// Encode the buffered chunks. See [`StreamingEncoder::run_encode_pass`].
    pub fn run_encode_pass(
        &mut self,
        first_segment: bool,
        last_segment: bool,
        loop_start: Option<String>,
        loop_length: Option<String>,
    ) -> Result<(), JsError> {
        self.inner.run_encode_pass(
            first_segment,
            last_segment,
            loop_start.as_deref(),
            loop_length.as_deref(),
        )?;
        Ok(())
    }

    /// Release the buffered chunks; call after each pass.
    pub fn clear_buffer(&mut self) {
        self.inner.clear_buffer();
    }

    /// Take the Ogg Vorbis bytes accumulated so far.
    pub fn take_output(&mut self) -> Vec<u8> {
        self.inner.take_output()
    }

    pub fn output_len(&self) -> usize {
        self.inner.output_len()
    }

    pub fn is_open(&self) -> bool {
        self.inner.is_open()
    }
}
