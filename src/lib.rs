//! Streaming WAV to Ogg Vorbis encoder.
//!
//! A host pushes raw chunks of a little-endian PCM WAV file, drives encode
//! passes with `first_segment`/`last_segment` flags, and collects the growing
//! Ogg Vorbis stream from an append-only sink. Large inputs are fed in pieces
//! so memory stays bounded: push a few chunks, run a pass, clear the buffer,
//! repeat.
//!
//! The codec work (psychoacoustic analysis, bitrate management, Ogg paging)
//! is done by libvorbis through [`vorbis_rs`]; this crate supplies the
//! segment buffering, the one-shot WAV header parse, and the session
//! lifecycle around it.
//!
//! ```no_run
//! use oggpress::StreamingEncoder;
//!
//! # fn main() -> oggpress::Result<()> {
//! let wav_bytes: Vec<u8> = std::fs::read("input.wav").unwrap();
//!
//! let mut encoder = StreamingEncoder::new();
//! encoder.push_chunk(wav_bytes)?;
//! encoder.run_encode_pass(true, true, None, None)?;
//!
//! let ogg = encoder.take_output();
//! # Ok(())
//! # }
//! ```
//!
//! The optional `wasm` feature exports the same protocol to JavaScript via
//! `wasm-bindgen`, for browser hosts that assemble the output into a playable
//! Blob.

pub mod buffer;
pub mod config;
pub mod encoder;
pub mod error;
pub mod session;
pub mod sink;
#[cfg(feature = "wasm")]
pub mod wasm;
pub mod wav;

pub use buffer::SegmentBuffer;
pub use config::EncoderConfig;
pub use encoder::StreamingEncoder;
pub use error::{Error, Result, WavHeaderError};
pub use session::EncodeSession;
pub use sink::OutputSink;
pub use wav::WavHeader;
