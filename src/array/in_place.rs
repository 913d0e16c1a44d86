// src/array/in_place.rs
use crate::error::{ensure_count, Result};
use crate::swap::SwapBytes;

/// Swap the byte order of the first `count` elements of `buffer` in place
///
/// Elements are visited from index `count - 1` down to `0`. Elements past
/// `count` are left untouched.
///
/// # Panics
///
/// Panics if `count > buffer.len()`.
///
/// # Example
///
/// ```
/// use audio_endian::swap_array_in_place;
///
/// let mut data = [0x0102u16, 0x0304, 0x0506];
/// swap_array_in_place(&mut data, 2);
/// assert_eq!(data, [0x0201, 0x0403, 0x0506]);
/// ```
pub fn swap_array_in_place<T: SwapBytes>(buffer: &mut [T], count: usize) {
    for value in buffer[..count].iter_mut().rev() {
        *value = value.swap_bytes();
    }
}

/// Checked form of [`swap_array_in_place`]
///
/// Leaves `buffer` untouched and returns `CountOutOfRange` if `count`
/// exceeds its length.
pub fn try_swap_array_in_place<T: SwapBytes>(buffer: &mut [T], count: usize) -> Result<()> {
    ensure_count(count, buffer.len())?;
    swap_array_in_place(buffer, count);
    Ok(())
}

pub fn swap_i16_array(buffer: &mut [i16], count: usize) {
    swap_array_in_place(buffer, count);
}

pub fn swap_i32_array(buffer: &mut [i32], count: usize) {
    swap_array_in_place(buffer, count);
}

pub fn swap_i64_array(buffer: &mut [i64], count: usize) {
    swap_array_in_place(buffer, count);
}

/// Swap `f32` samples by their bit patterns
pub fn swap_f32_array(buffer: &mut [f32], count: usize) {
    swap_array_in_place(buffer, count);
}

/// Swap `f64` samples by their bit patterns
pub fn swap_f64_array(buffer: &mut [f64], count: usize) {
    swap_array_in_place(buffer, count);
}
