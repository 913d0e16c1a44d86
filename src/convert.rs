// src/convert.rs
//! Conversion between host order and on-disk order
//!
//! Converting is its own inverse: a value is either already in the right
//! order or it needs one swap. Every `host_to_*` function is therefore
//! defined as a call to the matching `*_to_host` function.

use crate::array::swap_array_in_place;
use crate::swap::{swap16, swap32, swap64, SwapBytes};
use crate::types::{ByteOrder, Endianness};

impl Endianness {
    /// Convert a 16-bit value between `order` and this host's order
    pub const fn convert16(self, order: ByteOrder, x: u16) -> u16 {
        if self.matches(order) {
            x
        } else {
            swap16(x)
        }
    }

    /// Convert a 32-bit value between `order` and this host's order
    pub const fn convert32(self, order: ByteOrder, x: u32) -> u32 {
        if self.matches(order) {
            x
        } else {
            swap32(x)
        }
    }

    /// Convert a 64-bit value between `order` and this host's order
    pub const fn convert64(self, order: ByteOrder, x: u64) -> u64 {
        if self.matches(order) {
            x
        } else {
            swap64(x)
        }
    }

    /// Convert any swappable value between `order` and this host's order
    pub fn convert<T: SwapBytes>(self, order: ByteOrder, x: T) -> T {
        if self.matches(order) {
            x
        } else {
            x.swap_bytes()
        }
    }
}

#[inline]
pub const fn le_to_host_16(x: u16) -> u16 {
    Endianness::HOST.convert16(ByteOrder::Little, x)
}

#[inline]
pub const fn le_to_host_32(x: u32) -> u32 {
    Endianness::HOST.convert32(ByteOrder::Little, x)
}

#[inline]
pub const fn le_to_host_64(x: u64) -> u64 {
    Endianness::HOST.convert64(ByteOrder::Little, x)
}

#[inline]
pub const fn be_to_host_16(x: u16) -> u16 {
    Endianness::HOST.convert16(ByteOrder::Big, x)
}

#[inline]
pub const fn be_to_host_32(x: u32) -> u32 {
    Endianness::HOST.convert32(ByteOrder::Big, x)
}

#[inline]
pub const fn be_to_host_64(x: u64) -> u64 {
    Endianness::HOST.convert64(ByteOrder::Big, x)
}

#[inline]
pub const fn host_to_le_16(x: u16) -> u16 {
    le_to_host_16(x)
}

#[inline]
pub const fn host_to_le_32(x: u32) -> u32 {
    le_to_host_32(x)
}

#[inline]
pub const fn host_to_le_64(x: u64) -> u64 {
    le_to_host_64(x)
}

#[inline]
pub const fn host_to_be_16(x: u16) -> u16 {
    be_to_host_16(x)
}

#[inline]
pub const fn host_to_be_32(x: u32) -> u32 {
    be_to_host_32(x)
}

#[inline]
pub const fn host_to_be_64(x: u64) -> u64 {
    be_to_host_64(x)
}

/// Convert a value stored in `order` into host order
///
/// # Example
///
/// ```
/// use audio_endian::{to_host, ByteOrder};
///
/// let raw = i16::from_ne_bytes([0x01, 0x00]);
/// assert_eq!(to_host(raw, ByteOrder::Little), 1);
/// ```
pub fn to_host<T: SwapBytes>(x: T, order: ByteOrder) -> T {
    Endianness::HOST.convert(order, x)
}

/// Convert a host value into `order` for writing back to disk
pub fn from_host<T: SwapBytes>(x: T, order: ByteOrder) -> T {
    to_host(x, order)
}

/// Convert a whole buffer between `order` and host order in place
///
/// Does nothing when `order` is the host's native order, otherwise swaps
/// every element.
///
/// # Arguments
///
/// * `buffer` - Values as read from (or about to be written to) disk
/// * `order` - Byte order of the on-disk representation
pub fn convert_array_in_place<T: SwapBytes>(buffer: &mut [T], order: ByteOrder) {
    if Endianness::HOST.matches(order) {
        return;
    }
    log::trace!(
        "converting {} elements of {} bytes from {} on a {} host",
        buffer.len(),
        T::WIDTH,
        order,
        Endianness::HOST
    );
    swap_array_in_place(buffer, buffer.len());
}
