use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while buffering segments or driving an encode session.
#[derive(Debug, Error)]
pub enum Error {
    /// The first chunk of the first segment is not a usable canonical WAV header.
    #[error(transparent)]
    InvalidHeader(#[from] WavHeaderError),

    /// A pushed chunk exceeds the configured per-chunk size limit.
    #[error("chunk of {len} bytes exceeds the {max} byte limit")]
    OversizeChunk { len: usize, max: usize },

    /// The segment buffer already holds the configured maximum number of chunks.
    #[error("segment buffer is full ({capacity} pending chunks)")]
    BufferFull { capacity: usize },

    /// An encode pass was requested but no session is open.
    #[error("no encode session is open")]
    SessionNotOpen,

    /// A first-segment pass was requested while a session is still open.
    #[error("an encode session is already open")]
    SessionAlreadyOpen,

    /// The codec library rejected the session parameters.
    #[error("encoder initialization failed: {0}")]
    EncoderInit(String),

    /// The codec library failed while encoding or finalizing audio.
    #[error("vorbis encoding failed: {0}")]
    Encode(#[from] vorbis_rs::VorbisError),
}

/// Reasons a WAV header parse can fail, distinguished so callers can tell a
/// missing RIFF magic from a missing `data` sub-chunk.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WavHeaderError {
    #[error("first chunk is missing the RIFF magic")]
    MissingRiffMagic,

    #[error("no `data` sub-chunk within the first {0} bytes")]
    DataChunkNotFound(usize),

    #[error("first chunk is too short to hold a WAV header ({0} bytes)")]
    TooShort(usize),
}
