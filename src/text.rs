//! Textual representations: 8-4-4-4-12 hex, compact 32-digit hex, and `urn:uuid:` URN.

use crate::Error;
use fstr::FStr;

/// Prefix of the URN form.
pub const URN_PREFIX: &str = "urn:uuid:";

/// Positions of hyphens in the 8-4-4-4-12 form.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Returns the 8-4-4-4-12 lowercase hexadecimal representation of `bytes`.
pub fn encode(bytes: &[u8; 16]) -> FStr<36> {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut buffer = [0u8; 36];
    let mut buf_iter = buffer.iter_mut();
    for (i, e) in bytes.iter().enumerate() {
        for digit in [DIGITS[(e >> 4) as usize], DIGITS[(e & 15) as usize]] {
            if let Some(dst) = buf_iter.next() {
                *dst = digit;
            }
        }
        if i == 3 || i == 5 || i == 7 || i == 9 {
            if let Some(dst) = buf_iter.next() {
                *dst = b'-';
            }
        }
    }
    debug_assert!(buffer.is_ascii());
    // SAFETY: the buffer consists of ASCII hex digits and hyphens only
    unsafe { FStr::from_inner_unchecked(buffer) }
}

/// Returns the `urn:uuid:` prefixed representation of `bytes`.
pub fn encode_urn(bytes: &[u8; 16]) -> FStr<45> {
    let mut buffer = [0u8; 45];
    buffer[..9].copy_from_slice(URN_PREFIX.as_bytes());
    buffer[9..].copy_from_slice(encode(bytes).as_bytes());
    debug_assert!(buffer.is_ascii());
    // SAFETY: the buffer consists of the ASCII prefix and an ASCII hex string
    unsafe { FStr::from_inner_unchecked(buffer) }
}

/// Decodes any of the three accepted textual forms into 16 bytes.
///
/// The form is selected by the length of `src` alone. Version and variant bits are not checked
/// here.
pub fn decode(src: &str) -> Result<[u8; 16], Error> {
    let src = src.as_bytes();
    match src.len() {
        32 => decode_hex(&[src]),
        36 => decode_hyphenated(src),
        45 => match src.strip_prefix(URN_PREFIX.as_bytes()) {
            Some(rest) => decode_hyphenated(rest),
            None => Err(Error::InvalidFormat),
        },
        _ => Err(Error::InvalidLength),
    }
}

/// Decodes the 8-4-4-4-12 form after checking hyphen placement.
fn decode_hyphenated(src: &[u8]) -> Result<[u8; 16], Error> {
    if src.len() != 36 || HYPHENS.iter().any(|&i| src[i] != b'-') {
        return Err(Error::InvalidFormat);
    }
    decode_hex(&[
        &src[..8],
        &src[9..13],
        &src[14..18],
        &src[19..23],
        &src[24..],
    ])
}

/// Decodes pairs of hex digits taken from `groups` in order.
fn decode_hex(groups: &[&[u8]]) -> Result<[u8; 16], Error> {
    let mut dst = [0u8; 16];
    let mut n = 0;
    for pair in groups.iter().flat_map(|g| g.chunks(2)) {
        let (&[hi, lo], Some(e)) = (pair, dst.get_mut(n)) else {
            return Err(Error::InvalidLength);
        };
        *e = (hex_digit(hi)? << 4) | hex_digit(lo)?;
        n += 1;
    }
    if n != dst.len() {
        return Err(Error::InvalidLength);
    }
    Ok(dst)
}

fn hex_digit(c: u8) -> Result<u8, Error> {
    char::from(c)
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or(Error::InvalidHex)
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, encode_urn};
    use crate::Error;

    const BYTES: [u8; 16] = [
        0x53, 0xbf, 0xe5, 0x50, 0x41, 0x65, 0x4f, 0x81, 0xa8, 0xe7, 0xc2, 0x60, 0x95, 0x79, 0xcc,
        0xc0,
    ];

    /// Encodes canonical and URN forms
    #[test]
    fn encodes_canonical_and_urn_forms() {
        assert_eq!(
            &encode(&BYTES) as &str,
            "53bfe550-4165-4f81-a8e7-c2609579ccc0"
        );
        assert_eq!(
            &encode_urn(&BYTES) as &str,
            "urn:uuid:53bfe550-4165-4f81-a8e7-c2609579ccc0"
        );
        assert_eq!(
            &encode(&[0xff; 16]) as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
    }

    /// Decodes all three textual forms to the same bytes
    #[test]
    fn decodes_all_three_textual_forms_to_the_same_bytes() {
        let cases = [
            "53bfe550-4165-4f81-a8e7-c2609579ccc0",
            "53bfe55041654f81a8e7c2609579ccc0",
            "urn:uuid:53bfe550-4165-4f81-a8e7-c2609579ccc0",
            "53BFE550-4165-4F81-A8E7-C2609579CCC0",
            "53BFE55041654F81A8E7C2609579CCC0",
            "urn:uuid:53Bfe550-4165-4f81-A8e7-c2609579CCc0",
        ];
        for e in cases {
            assert_eq!(decode(e), Ok(BYTES), "{e}");
        }
    }

    /// Selects the textual form by length
    #[test]
    fn selects_the_textual_form_by_length() {
        let cases = [
            ("", Error::InvalidLength),
            ("53bfe55041654f81a8e7c2609579ccc", Error::InvalidLength),
            ("53bfe55041654f81a8e7c2609579ccc00", Error::InvalidLength),
            ("53bfe550-4165-4f81-a8e7-c2609579ccc", Error::InvalidLength),
            ("53bfe550-4165-4f81-a8e7-c2609579ccc00", Error::InvalidLength),
            ("{53bfe550-4165-4f81-a8e7-c2609579ccc0}", Error::InvalidLength),
            (" 53bfe550-4165-4f81-a8e7-c2609579ccc0", Error::InvalidLength),
            ("urn:uuid:53bfe55041654f81a8e7c2609579ccc0", Error::InvalidLength),
        ];
        for (text, err) in cases {
            assert_eq!(decode(text), Err(err), "{text:?}");
        }
    }

    /// Rejects misplaced hyphens and prefixes
    #[test]
    fn rejects_misplaced_hyphens_and_prefixes() {
        let cases = [
            "53bfe5504-165-4f81-a8e7-c2609579ccc0",
            "53bfe550-41654f81-a8e7-c2609579ccc0a",
            "53bfe550-4165-4f81-a8e7_c2609579ccc0",
            "53bfe550-4165-4f8-1a8e7-c2609579ccc0",
            "+53bfe550-4165-4f81-a8e7-c2609579ccc",
            "urn:uuid:53bfe5504-165-4f81-a8e7-c2609579ccc0",
            "urn:guid:53bfe550-4165-4f81-a8e7-c2609579ccc0",
            "URN:UUID:53bfe550-4165-4f81-a8e7-c2609579ccc0",
            "urn:uuid-53bfe550-4165-4f81-a8e7-c2609579ccc0",
        ];
        for e in cases {
            assert_eq!(decode(e), Err(Error::InvalidFormat), "{e}");
        }
    }

    /// Rejects non-hex digits
    #[test]
    fn rejects_non_hex_digits() {
        let cases = [
            "53bfe55g-4165-4f81-a8e7-c2609579ccc0",
            "53bfe550-4165-4f81-a8e7-c2609579ccc ",
            "53bfe550-4165-4f81-a8e7--2609579ccc0",
            "53bfe550-4165-4f81-a8e7-+2609579ccc0",
            "53bfe550-4165-4f81a8e7c2609579cc",
            "urn:uuid:53bfe550-4165-4f81-a8e7-c2609579cccx",
            "53bfe550-4165-4f81-a8e7-c2609579cc\u{e9}",
        ];
        for e in cases {
            assert_eq!(decode(e), Err(Error::InvalidHex), "{e}");
        }
    }
}
