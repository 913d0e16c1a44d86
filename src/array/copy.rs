// src/array/copy.rs
use crate::error::{ensure_count, Result};
use crate::swap::SwapBytes;

/// Write the byte-swapped value of each of the first `count` elements of
/// `src` into the same slot of `dest`
///
/// `dest` and `src` cannot overlap; to swap a buffer onto itself use
/// [`swap_array_in_place`](super::swap_array_in_place).
///
/// # Panics
///
/// Panics if `count` exceeds the length of either slice.
///
/// # Example
///
/// ```
/// use audio_endian::swap_copy;
///
/// let src = [0x1122_3344u32, 0x5566_7788];
/// let mut dest = [0u32; 2];
/// swap_copy(&mut dest, &src, 2);
/// assert_eq!(dest, [0x4433_2211, 0x8877_6655]);
/// ```
pub fn swap_copy<T: SwapBytes>(dest: &mut [T], src: &[T], count: usize) {
    let dest = &mut dest[..count];
    let src = &src[..count];
    for (out, value) in dest.iter_mut().zip(src).rev() {
        *out = value.swap_bytes();
    }
}

/// Checked form of [`swap_copy`]
pub fn try_swap_copy<T: SwapBytes>(dest: &mut [T], src: &[T], count: usize) -> Result<()> {
    ensure_count(count, src.len())?;
    ensure_count(count, dest.len())?;
    swap_copy(dest, src, count);
    Ok(())
}

pub fn swap_i16_copy(dest: &mut [i16], src: &[i16], count: usize) {
    swap_copy(dest, src, count);
}

pub fn swap_i32_copy(dest: &mut [i32], src: &[i32], count: usize) {
    swap_copy(dest, src, count);
}

pub fn swap_i64_copy(dest: &mut [i64], src: &[i64], count: usize) {
    swap_copy(dest, src, count);
}

pub fn swap_f32_copy(dest: &mut [f32], src: &[f32], count: usize) {
    swap_copy(dest, src, count);
}

pub fn swap_f64_copy(dest: &mut [f64], src: &[f64], count: usize) {
    swap_copy(dest, src, count);
}
