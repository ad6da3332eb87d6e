//! Bit-level layout of RFC9562 version 4 and version 7 UUIDs.
//!
//! These functions write and read the fixed fields of a 16-byte UUID buffer. Version and variant
//! stamps only touch their own bits, so they can be applied after the random and timestamp fields
//! are filled without masking the source data first.

use crate::Error;

/// Largest value the 48-bit `unix_ts_ms` field can hold.
pub const MAX_UNIX_TS_MS: u64 = (1 << 48) - 1;

/// Number of nanoseconds in one millisecond.
pub const NANOS_PER_MILLI: u32 = 1_000_000;

/// Overwrites the high nibble of byte 6 with `version`, preserving the low nibble.
pub fn stamp_version(bytes: &mut [u8; 16], version: u8) {
    debug_assert!(version < 16);
    bytes[6] = (bytes[6] & 0x0f) | (version << 4);
}

/// Overwrites the top two bits of byte 8 with `10`, preserving the low six bits.
pub fn stamp_variant(bytes: &mut [u8; 16]) {
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
}

/// Writes the low 48 bits of `unix_ts_ms` into bytes 0-5, most significant byte first.
pub fn write_unix_ts_ms(bytes: &mut [u8; 16], unix_ts_ms: u64) {
    bytes[..6].copy_from_slice(&(unix_ts_ms & MAX_UNIX_TS_MS).to_be_bytes()[2..]);
}

/// Converts the nanoseconds elapsed within the current millisecond into a 12-bit fraction of a
/// millisecond.
///
/// The result never decreases as `sub_ms_nanos` grows, which keeps UUIDs created within the same
/// millisecond in creation order.
pub const fn sub_ms_fraction(sub_ms_nanos: u32) -> u16 {
    debug_assert!(sub_ms_nanos < NANOS_PER_MILLI);
    ((sub_ms_nanos as u64 * 4096) / NANOS_PER_MILLI as u64) as u16
}

/// ORs the 12-bit `rand_a` field into a cleared low nibble of byte 6 and all of byte 7.
pub fn write_rand_a(bytes: &mut [u8; 16], rand_a: u16) {
    bytes[6] = (bytes[6] & 0xf0) | ((rand_a >> 8) as u8 & 0x0f);
    bytes[7] = rand_a as u8;
}

/// Returns the version nibble (high nibble of byte 6).
pub const fn version_nibble(bytes: &[u8; 16]) -> u8 {
    bytes[6] >> 4
}

/// Returns `true` if the top two bits of byte 8 are `10`.
pub const fn has_rfc_variant(bytes: &[u8; 16]) -> bool {
    bytes[8] & 0xc0 == 0x80
}

/// Returns the 48-bit `unix_ts_ms` field stored in bytes 0-5.
pub fn read_unix_ts_ms(bytes: &[u8; 16]) -> u64 {
    let mut buffer = [0u8; 8];
    buffer[2..].copy_from_slice(&bytes[..6]);
    u64::from_be_bytes(buffer)
}

/// Accepts only version 4 or 7 UUIDs of the RFC variant.
pub fn validate(bytes: &[u8; 16]) -> Result<(), Error> {
    match version_nibble(bytes) {
        4 | 7 => {}
        other => return Err(Error::UnsupportedVersion(other)),
    }
    if !has_rfc_variant(bytes) {
        return Err(Error::UnsupportedVariant);
    }
    Ok(())
}
