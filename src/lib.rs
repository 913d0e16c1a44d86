// src/lib.rs
//! # audio-endian
//!
//! Byte-order primitives for binary audio file parsers (WAV, AIFF, AU, CAF
//! and friends). Every multi-byte field a parser touches goes through one of
//! these functions, so they are small, total and exhaustively tested.
//!
//! ## Features
//!
//! - 🔁 **Scalar swaps**: `swap16`/`swap32`/`swap64`, hardware-backed or portable
//! - 🧭 **Host/disk conversion**: `le_to_host_32`, `host_to_be_16`, ...
//! - 🏷️ **Markers**: `make_marker(b'R', b'I', b'F', b'F')` as a `const`
//! - 🧩 **Unaligned reads**: tag-scanning windows and full-width fields
//! - 📦 **Bulk swaps**: in place or copying, for i16/i32/i64/f32/f64
//!
//! ## Quick Start
//!
//! ### Recognising a chunk and reading its size
//!
//! ```rust
//! use audio_endian::*;
//!
//! const RIFF: u32 = make_marker(b'R', b'I', b'F', b'F');
//!
//! let header = [b'R', b'I', b'F', b'F', 0x24, 0x08, 0x00, 0x00];
//!
//! let tag = u32::from_ne_bytes([header[0], header[1], header[2], header[3]]);
//! assert_eq!(tag, RIFF);
//!
//! let size = read_field_le32(&header[4..]);
//! assert_eq!(size, 0x0824);
//! ```
//!
//! ### Fixing up a block of samples
//!
//! ```rust
//! use audio_endian::*;
//!
//! // Big-endian 16-bit PCM as it sits in an AIFF SSND chunk
//! let raw = [0x00u8, 0x01, 0x7F, 0xFF, 0x80, 0x00];
//!
//! let samples: Vec<i16> = decode_values(&raw, 3, ByteOrder::Big).unwrap();
//! assert_eq!(samples, vec![1, i16::MAX, i16::MIN]);
//!
//! // Or swap a buffer that was filled in host order
//! let mut buffer: Vec<i16> = raw
//!     .chunks_exact(2)
//!     .map(|c| i16::from_ne_bytes([c[0], c[1]]))
//!     .collect();
//! convert_array_in_place(&mut buffer, ByteOrder::Big);
//! assert_eq!(buffer, samples);
//! ```

// Modules
pub mod array;
pub mod convert;
pub mod error;
pub mod marker;
pub mod reader;
pub mod swap;
pub mod types;

// Re-export commonly used items at the crate root for convenience
pub use error::{EndianError, Result};

pub use types::{ByteOrder, Endianness};

pub use swap::{swap16, swap32, swap64, SwapBytes};

pub use marker::{make_marker, marker_from_tag, marker_to_tag};

pub use convert::{
    be_to_host_16, be_to_host_32, be_to_host_64, convert_array_in_place, from_host,
    host_to_be_16, host_to_be_32, host_to_be_64, host_to_le_16, host_to_le_32, host_to_le_64,
    le_to_host_16, le_to_host_32, le_to_host_64, to_host,
};

pub use reader::{
    decode_values, encode_values, read_be16, read_be32, read_field_be16, read_field_be32,
    read_field_be64, read_field_le16, read_field_le32, read_field_le64, read_field_u16,
    read_field_u32, read_field_u64, read_le16, read_le32, try_read_be16, try_read_be32,
    try_read_field_u16, try_read_field_u32, try_read_field_u64, try_read_le16, try_read_le32,
    try_write_field_u16, try_write_field_u32, try_write_field_u64, write_field_u16,
    write_field_u32, write_field_u64,
};

pub use array::{
    swap_array_in_place, swap_copy, swap_f32_array, swap_f32_copy, swap_f64_array,
    swap_f64_copy, swap_i16_array, swap_i16_copy, swap_i32_array, swap_i32_copy,
    swap_i64_array, swap_i64_copy, swap_raw_in_place, try_swap_array_in_place, try_swap_copy,
};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use audio_endian::prelude::*;
    //! ```

    pub use crate::error::{EndianError, Result};
    pub use crate::marker::make_marker;
    pub use crate::swap::SwapBytes;
    pub use crate::types::{ByteOrder, Endianness};
    pub use crate::{convert_array_in_place, decode_values, encode_values, to_host, from_host};
}

/// Byte order of the target this crate was compiled for
pub const HOST_ENDIANNESS: Endianness = Endianness::HOST;

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");


// Benchmark helpers (only compiled for benchmarks)
#[cfg(feature = "bench")]
pub mod bench_helpers {
    /// Deterministic sample block for swap benchmarks
    pub fn sample_block_i16(count: usize) -> Vec<i16> {
        (0..count).map(|i| (i as i16).wrapping_mul(31)).collect()
    }

    pub fn sample_block_f64(count: usize) -> Vec<f64> {
        (0..count).map(|i| (i as f64 * 0.01).sin()).collect()
    }
}
