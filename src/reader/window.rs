// src/reader/window.rs
//! Tag-scanning window readers
//!
//! Chunk scanners slide a small byte window over a stream while looking for
//! section markers. These readers combine bytes from that window using only
//! byte-indexed access, so the window may start at any address. Their offsets
//! are fixed by the scanning convention and are *not* general field decoders:
//!
//! | reader      | formula                                    | bytes used |
//! |-------------|--------------------------------------------|------------|
//! | `read_le16` | `b[1] + (b[2] << 8)`                       | 3          |
//! | `read_le32` | `(b[0] << 8) + (b[1] << 16) + (b[2] << 24)`| 3          |
//! | `read_be16` | `(b[0] << 8) + b[1]`                       | 2          |
//! | `read_be32` | `(b[0] << 24) + (b[1] << 16) + (b[2] << 8)`| 3          |
//!
//! For whole fields starting at offset 0 use the `read_field_*` family.

use crate::error::{ensure_len, Result};

pub const LE16_WINDOW: usize = 3;
pub const LE32_WINDOW: usize = 3;
pub const BE16_WINDOW: usize = 2;
pub const BE32_WINDOW: usize = 3;

/// Little-endian 16-bit value from window bytes 1 and 2
///
/// # Panics
///
/// Panics if `bytes` is shorter than 3 bytes.
#[inline]
pub fn read_le16(bytes: &[u8]) -> u16 {
    u16::from(bytes[1]) + (u16::from(bytes[2]) << 8)
}

/// Little-endian 32-bit value with window bytes 0..3 in the upper three
/// bytes; the low byte is always zero
///
/// # Panics
///
/// Panics if `bytes` is shorter than 3 bytes.
#[inline]
pub fn read_le32(bytes: &[u8]) -> u32 {
    (u32::from(bytes[0]) << 8) + (u32::from(bytes[1]) << 16) + (u32::from(bytes[2]) << 24)
}

/// Big-endian 16-bit value from window bytes 0 and 1
///
/// # Panics
///
/// Panics if `bytes` is shorter than 2 bytes.
#[inline]
pub fn read_be16(bytes: &[u8]) -> u16 {
    (u16::from(bytes[0]) << 8) + u16::from(bytes[1])
}

/// Big-endian 32-bit value with window bytes 0..3 in the upper three bytes;
/// the low byte is always zero
///
/// # Panics
///
/// Panics if `bytes` is shorter than 3 bytes.
#[inline]
pub fn read_be32(bytes: &[u8]) -> u32 {
    (u32::from(bytes[0]) << 24) + (u32::from(bytes[1]) << 16) + (u32::from(bytes[2]) << 8)
}

pub fn try_read_le16(bytes: &[u8]) -> Result<u16> {
    ensure_len(bytes, LE16_WINDOW)?;
    Ok(read_le16(bytes))
}

pub fn try_read_le32(bytes: &[u8]) -> Result<u32> {
    ensure_len(bytes, LE32_WINDOW)?;
    Ok(read_le32(bytes))
}

pub fn try_read_be16(bytes: &[u8]) -> Result<u16> {
    ensure_len(bytes, BE16_WINDOW)?;
    Ok(read_be16(bytes))
}

pub fn try_read_be32(bytes: &[u8]) -> Result<u32> {
    ensure_len(bytes, BE32_WINDOW)?;
    Ok(read_be32(bytes))
}
