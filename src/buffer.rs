use crate::error::{Error, Result};

/// Accumulates raw byte chunks pushed by the host between encode passes.
///
/// Chunks are kept in insertion order, which is the temporal order of the
/// audio they carry. The buffer enforces a hard capacity on both the number
/// of pending chunks and the size of each chunk; input past either limit is
/// rejected and logged, never silently written past the end of anything.
///
/// The host is expected to clear the buffer after every encode pass. Skipping
/// the clear does not corrupt state, it just fills the buffer up.
#[derive(Debug)]
pub struct SegmentBuffer {
    chunks: Vec<Vec<u8>>,
    max_chunk_size: usize,
    max_pending_chunks: usize,
}

impl SegmentBuffer {
    pub fn new(max_chunk_size: usize, max_pending_chunks: usize) -> Self {
        Self {
            chunks: Vec::new(),
            max_chunk_size,
            max_pending_chunks,
        }
    }

    /// Append one chunk, taking ownership of its bytes.
    ///
    /// Rejects chunks larger than the per-chunk limit and pushes into a full
    /// buffer; in both cases the buffer is left unchanged.
    pub fn push(&mut self, chunk: Vec<u8>) -> Result<()> {
        if chunk.len() > self.max_chunk_size {
            tracing::warn!(
                "Dropping oversize chunk: {} bytes exceeds the {} byte limit",
                chunk.len(),
                self.max_chunk_size
            );
            return Err(Error::OversizeChunk {
                len: chunk.len(),
                max: self.max_chunk_size,
            });
        }

        if self.chunks.len() >= self.max_pending_chunks {
            tracing::warn!(
                "Dropping chunk: segment buffer already holds {} pending chunks",
                self.chunks.len()
            );
            return Err(Error::BufferFull {
                capacity: self.max_pending_chunks,
            });
        }

        self.chunks.push(chunk);
        Ok(())
    }

    /// All buffered chunks in insertion order, without clearing them.
    pub fn chunks(&self) -> &[Vec<u8>] {
        &self.chunks
    }

    /// Release every buffered chunk.
    pub fn clear(&mut self) {
        self.chunks.clear();
    }

    /// Number of pending chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Total bytes currently buffered.
    pub fn total_bytes(&self) -> usize {
        self.chunks.iter().map(Vec::len).sum()
    }
}
