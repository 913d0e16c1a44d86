// src/marker.rs
//! Four-byte section markers
//!
//! WAV, AIFF and most other chunked formats tag sections with four
//! consecutive bytes (`RIFF`, `FORM`, `data`...). A marker packs those bytes
//! into a `u32` in host order, so it compares equal to the same four bytes
//! read from a buffer in host order.

use crate::types::Endianness;

impl Endianness {
    /// Pack four bytes into a marker for this host order
    ///
    /// Little hosts put `a` in the low byte, big hosts put it in the high byte.
    pub const fn marker(self, a: u8, b: u8, c: u8, d: u8) -> u32 {
        let (a, b, c, d) = (a as u32, b as u32, c as u32, d as u32);
        match self {
            Endianness::Little => a | (b << 8) | (c << 16) | (d << 24),
            Endianness::Big => (a << 24) | (b << 16) | (c << 8) | d,
        }
    }
}

/// Build a marker constant from four byte values in host order
///
/// # Example
///
/// ```
/// use audio_endian::make_marker;
///
/// const RIFF: u32 = make_marker(b'R', b'I', b'F', b'F');
/// assert_eq!(RIFF, u32::from_ne_bytes(*b"RIFF"));
/// ```
pub const fn make_marker(a: u8, b: u8, c: u8, d: u8) -> u32 {
    Endianness::HOST.marker(a, b, c, d)
}

/// Build a marker from a four-character tag such as `b"fmt "`
pub const fn marker_from_tag(tag: &[u8; 4]) -> u32 {
    make_marker(tag[0], tag[1], tag[2], tag[3])
}

/// Recover the four tag bytes of a host-order marker
pub const fn marker_to_tag(marker: u32) -> [u8; 4] {
    match Endianness::HOST {
        Endianness::Little => marker.to_le_bytes(),
        Endianness::Big => marker.to_be_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_riff_marker_per_host() {
        assert_eq!(Endianness::Little.marker(0x52, 0x49, 0x46, 0x46), 0x4646_4952);
        assert_eq!(Endianness::Big.marker(0x52, 0x49, 0x46, 0x46), 0x5249_4646);
    }

    #[test]
    fn test_marker_matches_host_read() {
        for tag in [b"RIFF", b"WAVE", b"fmt ", b"data", b"FORM", b"AIFF", b"SSND"] {
            assert_eq!(marker_from_tag(tag), u32::from_ne_bytes(*tag));
            assert_eq!(make_marker(tag[0], tag[1], tag[2], tag[3]), u32::from_ne_bytes(*tag));
        }
    }

    #[test]
    fn test_marker_tag_roundtrip() {
        let marker = marker_from_tag(b"COMM");
        assert_eq!(&marker_to_tag(marker), b"COMM");
        assert_eq!(marker_to_tag(make_marker(0, 0xFF, 1, 0x80)), [0, 0xFF, 1, 0x80]);
    }

    #[test]
    fn test_marker_orders_are_swaps() {
        let little = Endianness::Little.marker(1, 2, 3, 4);
        let big = Endianness::Big.marker(1, 2, 3, 4);
        assert_eq!(little, 0x0403_0201);
        assert_eq!(big, 0x0102_0304);
        assert_eq!(little.swap_bytes(), big);
    }

    #[test]
    fn test_markers_usable_in_match() {
        const DATA: u32 = make_marker(b'd', b'a', b't', b'a');
        const FMT: u32 = make_marker(b'f', b'm', b't', b' ');

        let found = u32::from_ne_bytes(*b"data");
        let kind = match found {
            FMT => "format",
            DATA => "samples",
            _ => "unknown",
        };
        assert_eq!(kind, "samples");
    }
}
