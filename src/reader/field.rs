// src/reader/field.rs
use byteorder::{BigEndian, ByteOrder as _, LittleEndian};

use crate::error::{ensure_len, Result};
use crate::types::ByteOrder;

/// Full-width little-endian 16-bit field at offset 0
#[inline]
pub fn read_field_le16(bytes: &[u8]) -> u16 {
    LittleEndian::read_u16(bytes)
}

/// Full-width little-endian 32-bit field at offset 0
#[inline]
pub fn read_field_le32(bytes: &[u8]) -> u32 {
    LittleEndian::read_u32(bytes)
}

/// Full-width little-endian 64-bit field at offset 0
#[inline]
pub fn read_field_le64(bytes: &[u8]) -> u64 {
    LittleEndian::read_u64(bytes)
}

/// Full-width big-endian 16-bit field at offset 0
#[inline]
pub fn read_field_be16(bytes: &[u8]) -> u16 {
    BigEndian::read_u16(bytes)
}

/// Full-width big-endian 32-bit field at offset 0
#[inline]
pub fn read_field_be32(bytes: &[u8]) -> u32 {
    BigEndian::read_u32(bytes)
}

/// Full-width big-endian 64-bit field at offset 0
#[inline]
pub fn read_field_be64(bytes: &[u8]) -> u64 {
    BigEndian::read_u64(bytes)
}

/// Read a 16-bit field stored in `order`
///
/// # Panics
///
/// Panics if `bytes` is shorter than 2 bytes.
pub fn read_field_u16(bytes: &[u8], order: ByteOrder) -> u16 {
    match order {
        ByteOrder::Little => read_field_le16(bytes),
        ByteOrder::Big => read_field_be16(bytes),
    }
}

/// Read a 32-bit field stored in `order`
///
/// # Panics
///
/// Panics if `bytes` is shorter than 4 bytes.
pub fn read_field_u32(bytes: &[u8], order: ByteOrder) -> u32 {
    match order {
        ByteOrder::Little => read_field_le32(bytes),
        ByteOrder::Big => read_field_be32(bytes),
    }
}

/// Read a 64-bit field stored in `order`
///
/// # Panics
///
/// Panics if `bytes` is shorter than 8 bytes.
pub fn read_field_u64(bytes: &[u8], order: ByteOrder) -> u64 {
    match order {
        ByteOrder::Little => read_field_le64(bytes),
        ByteOrder::Big => read_field_be64(bytes),
    }
}

pub fn try_read_field_u16(bytes: &[u8], order: ByteOrder) -> Result<u16> {
    ensure_len(bytes, 2)?;
    Ok(read_field_u16(bytes, order))
}

pub fn try_read_field_u32(bytes: &[u8], order: ByteOrder) -> Result<u32> {
    ensure_len(bytes, 4)?;
    Ok(read_field_u32(bytes, order))
}

pub fn try_read_field_u64(bytes: &[u8], order: ByteOrder) -> Result<u64> {
    ensure_len(bytes, 8)?;
    Ok(read_field_u64(bytes, order))
}

/// Store a 16-bit host value into `buf[..2]` in `order`
///
/// # Panics
///
/// Panics if `buf` is shorter than 2 bytes.
pub fn write_field_u16(buf: &mut [u8], order: ByteOrder, value: u16) {
    match order {
        ByteOrder::Little => LittleEndian::write_u16(buf, value),
        ByteOrder::Big => BigEndian::write_u16(buf, value),
    }
}

/// Store a 32-bit host value into `buf[..4]` in `order`
///
/// # Panics
///
/// Panics if `buf` is shorter than 4 bytes.
pub fn write_field_u32(buf: &mut [u8], order: ByteOrder, value: u32) {
    match order {
        ByteOrder::Little => LittleEndian::write_u32(buf, value),
        ByteOrder::Big => BigEndian::write_u32(buf, value),
    }
}

/// Store a 64-bit host value into `buf[..8]` in `order`
///
/// # Panics
///
/// Panics if `buf` is shorter than 8 bytes.
pub fn write_field_u64(buf: &mut [u8], order: ByteOrder, value: u64) {
    match order {
        ByteOrder::Little => LittleEndian::write_u64(buf, value),
        ByteOrder::Big => BigEndian::write_u64(buf, value),
    }
}

pub fn try_write_field_u16(buf: &mut [u8], order: ByteOrder, value: u16) -> Result<()> {
    ensure_len(buf, 2)?;
    write_field_u16(buf, order, value);
    Ok(())
}

pub fn try_write_field_u32(buf: &mut [u8], order: ByteOrder, value: u32) -> Result<()> {
    ensure_len(buf, 4)?;
    write_field_u32(buf, order, value);
    Ok(())
}

pub fn try_write_field_u64(buf: &mut [u8], order: ByteOrder, value: u64) -> Result<()> {
    ensure_len(buf, 8)?;
    write_field_u64(buf, order, value);
    Ok(())
}
