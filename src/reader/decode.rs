// src/reader/decode.rs
use bytemuck::Pod;

use crate::array::swap_array_in_place;
use crate::convert::from_host;
use crate::error::{ensure_len, EndianError, Result};
use crate::swap::SwapBytes;
use crate::types::{ByteOrder, Endianness};

/// Decode `count` on-disk values into host order
///
/// `bytes` may start at any address; each element is copied out with an
/// unaligned read before the byte order is fixed up in bulk.
///
/// # Arguments
///
/// * `bytes` - Raw on-disk data, at least `count * size_of::<T>()` bytes
/// * `count` - Number of values to decode
/// * `order` - Byte order of the stored values
///
/// # Example
///
/// ```
/// use audio_endian::{decode_values, ByteOrder};
///
/// let data = [0x00u8, 0x01, 0xFF, 0xFE];
/// let values: Vec<i16> = decode_values(&data, 2, ByteOrder::Big).unwrap();
/// assert_eq!(values, vec![1, -2]);
/// ```
pub fn decode_values<T: SwapBytes + Pod>(bytes: &[u8], count: usize, order: ByteOrder) -> Result<Vec<T>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let size = std::mem::size_of::<T>();
    let byte_count = count.checked_mul(size).ok_or(EndianError::CountOutOfRange {
        count,
        len: bytes.len() / size,
    })?;
    ensure_len(bytes, byte_count)?;

    log::trace!("decoding {} values of {} bytes ({})", count, size, order);

    let mut values: Vec<T> = bytes[..byte_count]
        .chunks_exact(size)
        .map(bytemuck::pod_read_unaligned)
        .collect();
    if !Endianness::HOST.matches(order) {
        swap_array_in_place(&mut values, count);
    }
    Ok(values)
}

/// Encode host values into their on-disk byte representation
///
/// # Example
///
/// ```
/// use audio_endian::{encode_values, ByteOrder};
///
/// let bytes = encode_values(&[1u16, 0x0203], ByteOrder::Little);
/// assert_eq!(bytes, vec![0x01, 0x00, 0x03, 0x02]);
/// ```
pub fn encode_values<T: SwapBytes + Pod>(values: &[T], order: ByteOrder) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(std::mem::size_of_val(values));
    for &value in values {
        bytes.extend_from_slice(bytemuck::bytes_of(&from_host(value, order)));
    }
    bytes
}
