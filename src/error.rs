// src/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndianError {
    #[error("Buffer too short: needed {needed} bytes, found {available}")]
    BufferTooShort { needed: usize, available: usize },

    #[error("Element count {count} out of range for buffer of {len} elements")]
    CountOutOfRange { count: usize, len: usize },

    #[error("Invalid element width: {0} bytes")]
    InvalidWidth(usize),

    #[error("Buffer of {len} bytes ends in a partial {width}-byte element")]
    PartialElement { len: usize, width: usize },
}

pub type Result<T> = std::result::Result<T, EndianError>;

/// Fail with `BufferTooShort` unless `bytes` holds at least `needed` bytes
pub(crate) fn ensure_len(bytes: &[u8], needed: usize) -> Result<()> {
    if bytes.len() < needed {
        return Err(EndianError::BufferTooShort {
            needed,
            available: bytes.len(),
        });
    }
    Ok(())
}

/// Fail with `CountOutOfRange` unless `count` elements fit in a slice of `len`
pub(crate) fn ensure_count(count: usize, len: usize) -> Result<()> {
    if count > len {
        return Err(EndianError::CountOutOfRange { count, len });
    }
    Ok(())
}
