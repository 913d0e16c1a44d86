// src/types.rs

/// Byte order of the CPU running this code
///
/// Exactly one value is active per build, available as [`Endianness::HOST`].
/// Everything host-dependent in this crate is written as ordinary logic over
/// an `Endianness` value, so the opposite host can be exercised in tests on
/// any machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Byte order of the target this crate was compiled for
    #[cfg(target_endian = "little")]
    pub const HOST: Endianness = Endianness::Little;

    /// Byte order of the target this crate was compiled for
    #[cfg(target_endian = "big")]
    pub const HOST: Endianness = Endianness::Big;

    pub const fn is_little(self) -> bool {
        matches!(self, Endianness::Little)
    }

    pub const fn is_big(self) -> bool {
        matches!(self, Endianness::Big)
    }

    /// True when data stored in `order` is already in this host's layout
    pub const fn matches(self, order: ByteOrder) -> bool {
        matches!(
            (self, order),
            (Endianness::Little, ByteOrder::Little) | (Endianness::Big, ByteOrder::Big)
        )
    }

    /// The on-disk order that needs no conversion on this host
    pub const fn native_order(self) -> ByteOrder {
        match self {
            Endianness::Little => ByteOrder::Little,
            Endianness::Big => ByteOrder::Big,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endianness::Little => "little-endian",
            Endianness::Big => "big-endian",
        }
    }
}

/// Byte order of a field as stored on disk
///
/// Chosen by the file format, never by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// Map a format's "big endian" flag to a byte order
    ///
    /// # Example
    ///
    /// ```
    /// use audio_endian::ByteOrder;
    ///
    /// assert_eq!(ByteOrder::from_big_endian_flag(true), ByteOrder::Big);
    /// assert_eq!(ByteOrder::from_big_endian_flag(false), ByteOrder::Little);
    /// ```
    pub const fn from_big_endian_flag(is_big_endian: bool) -> Self {
        if is_big_endian {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }

    pub const fn is_big_endian(self) -> bool {
        matches!(self, ByteOrder::Big)
    }

    pub const fn opposite(self) -> Self {
        match self {
            ByteOrder::Little => ByteOrder::Big,
            ByteOrder::Big => ByteOrder::Little,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::Little => "le",
            ByteOrder::Big => "be",
        }
    }
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
