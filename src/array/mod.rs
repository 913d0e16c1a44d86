// src/array/mod.rs
//! Bulk byte swapping over caller-owned buffers
//!
//! Every operation works on the first `count` elements of a slice and never
//! allocates. A `count` larger than the slice panics on the bounds check;
//! the `try_` variants report it as [`EndianError::CountOutOfRange`] instead.
//!
//! - [`swap_array_in_place`] / [`swap_copy`] - generic over [`SwapBytes`]
//! - `swap_{i16,i32,i64,f32,f64}_{array,copy}` - typed entry points
//! - [`swap_raw_in_place`] - reverse fixed-width groups of a raw byte buffer
//!
//! # Examples
//!
//! ```
//! use audio_endian::array::{swap_f32_array, swap_i16_copy};
//!
//! let src = [0x0102i16, 0x0304];
//! let mut dest = [0i16; 2];
//! swap_i16_copy(&mut dest, &src, 2);
//! assert_eq!(dest, [0x0201, 0x0403]);
//!
//! let mut samples = [0.25f32, -1.0];
//! swap_f32_array(&mut samples, 2);
//! swap_f32_array(&mut samples, 2);
//! assert_eq!(samples, [0.25, -1.0]);
//! ```
//!
//! [`EndianError::CountOutOfRange`]: crate::EndianError::CountOutOfRange
//! [`SwapBytes`]: crate::SwapBytes

mod copy;
mod in_place;
mod raw;

pub use copy::*;
pub use in_place::*;
pub use raw::swap_raw_in_place;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_place_then_copy_roundtrip() {
        let original = vec![1i32, -2, 0x0102_0304, i32::MIN, i32::MAX];

        let mut swapped = original.clone();
        swap_i32_array(&mut swapped, original.len());

        let mut restored = vec![0i32; original.len()];
        swap_i32_copy(&mut restored, &swapped, original.len());

        assert_eq!(restored, original);
    }

    #[test]
    fn test_raw_and_typed_agree() {
        let values = [0x1122_3344_5566_7788i64, -1, 42];
        let mut bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
        swap_raw_in_place(&mut bytes, 8).unwrap();

        let mut typed = values;
        swap_i64_array(&mut typed, 3);

        let from_raw: Vec<i64> = bytes
            .chunks_exact(8)
            .map(|chunk| i64::from_ne_bytes(chunk.try_into().unwrap()))
            .collect();
        assert_eq!(from_raw, typed.to_vec());
    }
}
