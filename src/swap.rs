// src/swap.rs
//! Scalar byte-swap primitives
//!
//! [`swap16`], [`swap32`] and [`swap64`] reverse the bytes of an unsigned
//! integer. By default they lower to the CPU's byte-swap instruction; with the
//! `portable-swap` feature they use the explicit shuffle formulas
//! ([`shuffle16`], [`shuffle32`], [`shuffle64`]) instead. Both paths are
//! involutions and agree on every input.

/// Reverse the bytes of a 16-bit value
#[inline]
pub const fn swap16(x: u16) -> u16 {
    if cfg!(feature = "portable-swap") {
        shuffle16(x)
    } else {
        x.swap_bytes()
    }
}

/// Reverse the bytes of a 32-bit value
#[inline]
pub const fn swap32(x: u32) -> u32 {
    if cfg!(feature = "portable-swap") {
        shuffle32(x)
    } else {
        x.swap_bytes()
    }
}

/// Reverse the bytes of a 64-bit value
#[inline]
pub const fn swap64(x: u64) -> u64 {
    if cfg!(feature = "portable-swap") {
        shuffle64(x)
    } else {
        x.swap_bytes()
    }
}

/// Byte shuffle for 16 bits, no hardware support required
#[inline]
pub const fn shuffle16(x: u16) -> u16 {
    ((x >> 8) & 0xFF) | ((x & 0xFF) << 8)
}

/// Byte shuffle for 32 bits, no hardware support required
#[inline]
pub const fn shuffle32(x: u32) -> u32 {
    ((x >> 24) & 0xFF)
        | ((x >> 8) & 0xFF00)
        | ((x & 0xFF00) << 8)
        | ((x & 0xFF) << 24)
}

/// Byte shuffle for 64 bits, built from two 32-bit shuffles
#[inline]
pub const fn shuffle64(x: u64) -> u64 {
    let low = shuffle32(x as u32) as u64;
    let high = shuffle32((x >> 32) as u32) as u64;
    (low << 32) | high
}

/// A fixed-width value whose byte order can be reversed
///
/// Implemented for the 16/32/64-bit integers and for `f32`/`f64`. The float
/// implementations only ever move the bit pattern (`to_bits`/`from_bits`), so
/// NaN payloads and subnormals survive a swap unchanged.
///
/// # Example
///
/// ```
/// use audio_endian::SwapBytes;
///
/// assert_eq!(0x1234u16.swap_bytes(), 0x3412);
/// let x = 1.5f32;
/// assert_eq!(x.swap_bytes().swap_bytes().to_bits(), x.to_bits());
/// ```
pub trait SwapBytes: Copy {
    /// Width of the value in bytes
    const WIDTH: usize;

    fn swap_bytes(self) -> Self;
}

macro_rules! impl_swap_bytes {
    ($($t:ty => $bits:ty, $swap:ident);* $(;)?) => {
        $(
            impl SwapBytes for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                #[inline]
                fn swap_bytes(self) -> Self {
                    $swap(self as $bits) as $t
                }
            }
        )*
    };
}

impl_swap_bytes! {
    u16 => u16, swap16;
    i16 => u16, swap16;
    u32 => u32, swap32;
    i32 => u32, swap32;
    u64 => u64, swap64;
    i64 => u64, swap64;
}

impl SwapBytes for f32 {
    const WIDTH: usize = 4;

    #[inline]
    fn swap_bytes(self) -> Self {
        f32::from_bits(swap32(self.to_bits()))
    }
}

impl SwapBytes for f64 {
    const WIDTH: usize = 8;

    #[inline]
    fn swap_bytes(self) -> Self {
        f64::from_bits(swap64(self.to_bits()))
    }
}
