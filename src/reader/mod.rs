// src/reader/mod.rs
//! Reading numeric values out of raw byte buffers
//!
//! Three families, none of which require the buffer to be aligned:
//!
//! - Window readers ([`read_le16`], [`read_le32`], [`read_be16`],
//!   [`read_be32`]) used while scanning for chunk tags. They follow a fixed
//!   3-byte window convention and are not general field decoders.
//! - Field readers and writers (`read_field_*`, `write_field_*`) that decode
//!   a complete 16/32/64-bit field starting at offset 0.
//! - [`decode_values`] / [`encode_values`] for whole blocks of samples.
//!
//! # Examples
//!
//! ```
//! use audio_endian::reader::{read_be32, read_field_be32};
//!
//! let bytes = [0x12u8, 0x34, 0x56, 0x78];
//!
//! // Window reader: top three bytes only
//! assert_eq!(read_be32(&bytes), 0x1234_5600);
//!
//! // Field reader: the whole field
//! assert_eq!(read_field_be32(&bytes), 0x1234_5678);
//! ```

mod decode;
mod field;
mod window;

pub use decode::{decode_values, encode_values};
pub use field::*;
pub use window::*;
