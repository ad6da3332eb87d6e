/// Error returned by UUID generation and parsing.
///
/// Parsing never hands back a partially decoded value: on failure the caller receives only the
/// error kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum Error {
    /// The random source could not supply the requested bytes.
    #[error("random source failure")]
    RandomSourceFailure,

    /// The input is not 32, 36, or 45 characters long.
    #[error("invalid length")]
    InvalidLength,

    /// Hyphens or the `urn:uuid:` prefix are missing or misplaced.
    #[error("invalid format")]
    InvalidFormat,

    /// A character expected to be a hexadecimal digit is not one.
    #[error("invalid hexadecimal digit")]
    InvalidHex,

    /// The version nibble is neither 4 nor 7. Carries the offending nibble.
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    /// The variant bits are not `10`.
    #[error("unsupported variant")]
    UnsupportedVariant,
}
