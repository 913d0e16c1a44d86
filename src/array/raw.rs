// src/array/raw.rs
use crate::error::{EndianError, Result};

/// Reverse every `width`-byte group of a raw byte buffer
///
/// Useful for flipping a block of on-disk samples before it is reinterpreted
/// as typed values. A width of 1 is a no-op.
///
/// # Arguments
///
/// * `bytes` - Raw buffer holding whole elements back to back
/// * `width` - Element width in bytes: 1, 2, 4, 8 or 16
///
/// # Errors
///
/// `InvalidWidth` for any other width, `PartialElement` when the buffer
/// length is not a multiple of `width`. The buffer is not modified on error.
pub fn swap_raw_in_place(bytes: &mut [u8], width: usize) -> Result<()> {
    if !matches!(width, 1 | 2 | 4 | 8 | 16) {
        return Err(EndianError::InvalidWidth(width));
    }

    if bytes.len() % width != 0 {
        return Err(EndianError::PartialElement {
            len: bytes.len(),
            width,
        });
    }

    if width == 1 {
        return Ok(());
    }

    for chunk in bytes.chunks_exact_mut(width) {
        chunk.reverse();
    }
    Ok(())
}
