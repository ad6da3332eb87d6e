use core::{fmt, str};

use crate::{layout, text, Error};
use fstr::FStr;

/// Represents a Universally Unique IDentifier.
///
/// The value is a plain 16-byte big-endian array. Equality, ordering, and hashing are those of the
/// byte array, so version 7 UUIDs sort by their embedded timestamp first.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUID byte array from UUIDv7 field values.
    ///
    /// # Panics
    ///
    /// Panics if any argument is out of the range of the corresponding field.
    pub const fn from_fields_v7(unix_ts_ms: u64, rand_a: u16, rand_b: u64) -> Self {
        assert!(
            unix_ts_ms < 1 << 48 && rand_a < 1 << 12 && rand_b < 1 << 62,
            "invalid field value"
        );

        Self([
            (unix_ts_ms >> 40) as u8,
            (unix_ts_ms >> 32) as u8,
            (unix_ts_ms >> 24) as u8,
            (unix_ts_ms >> 16) as u8,
            (unix_ts_ms >> 8) as u8,
            unix_ts_ms as u8,
            0x70 | (rand_a >> 8) as u8,
            rand_a as u8,
            0x80 | (rand_b >> 56) as u8,
            (rand_b >> 48) as u8,
            (rand_b >> 40) as u8,
            (rand_b >> 32) as u8,
            (rand_b >> 24) as u8,
            (rand_b >> 16) as u8,
            (rand_b >> 8) as u8,
            rand_b as u8,
        ])
    }

    /// Parses any of the accepted textual forms and validates the version and variant bits.
    ///
    /// The form is detected by length:
    ///
    /// - 32 characters: hex digits only, e.g. `53bfe55041654f81a8e7c2609579ccc0`;
    /// - 36 characters: 8-4-4-4-12 hex groups, e.g. `53bfe550-4165-4f81-a8e7-c2609579ccc0`;
    /// - 45 characters: URN, e.g. `urn:uuid:53bfe550-4165-4f81-a8e7-c2609579ccc0`.
    ///
    /// Hex digits are case-insensitive. Only version 4 and 7 UUIDs of the `10` variant are
    /// accepted, so the Nil UUID written out in text is rejected too.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid47::{Error, Uuid};
    ///
    /// let x = Uuid::parse("urn:uuid:53bfe550-4165-4f81-a8e7-c2609579ccc0")?;
    /// assert_eq!(x, Uuid::parse("53BFE55041654F81A8E7C2609579CCC0")?);
    /// assert_eq!(x.version(), Some(4));
    ///
    /// assert_eq!(
    ///     Uuid::parse("53bfe550-4165-5f81-a8e7-c2609579ccc0"),
    ///     Err(Error::UnsupportedVersion(5))
    /// );
    /// # Ok::<(), uuid47::Error>(())
    /// ```
    pub fn parse(src: &str) -> Result<Self, Error> {
        let bytes = text::decode(src)?;
        layout::validate(&bytes)?;
        Ok(Self(bytes))
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// This method is primarily for `no_std` environments where heap-allocated string types are
    /// not readily available. Use the [`fmt::Display`] trait usually to get the canonical
    /// representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid47::Uuid;
    ///
    /// let x = "01809424-3e59-7c05-9219-566f82fff672".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "01809424-3e59-7c05-9219-566f82fff672");
    /// assert_eq!(format!("{y}"), "01809424-3e59-7c05-9219-566f82fff672");
    /// # Ok::<(), uuid47::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        text::encode(&self.0)
    }

    /// Returns the `urn:uuid:` prefixed representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid47::Uuid;
    ///
    /// let x = "01809424-3e59-7c05-9219-566f82fff672".parse::<Uuid>()?;
    /// assert_eq!(
    ///     &x.encode_urn() as &str,
    ///     "urn:uuid:01809424-3e59-7c05-9219-566f82fff672"
    /// );
    /// # Ok::<(), uuid47::Error>(())
    /// ```
    pub fn encode_urn(&self) -> FStr<45> {
        text::encode_urn(&self.0)
    }

    /// Reports the variant field value of the UUID or, if appropriate, "NIL" or "MAX".
    pub fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            _ if self == &Self::NIL => Variant::Nil,
            _ if self == &Self::MAX => Variant::Max,
            0b0000..=0b0111 => Variant::Var0,
            0b1000..=0b1011 => Variant::Var10,
            0b1100..=0b1101 => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID if the variant field value is `10`.
    pub fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(layout::version_nibble(&self.0)),
            _ => None,
        }
    }

    /// Returns the `unix_ts_ms` field value if the UUID is a version 7 UUID of the `10` variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid47::Uuid;
    ///
    /// let x = "017f22e2-79b0-7cc3-98c4-dc0c0c07398f".parse::<Uuid>()?;
    /// assert_eq!(x.unix_ts_ms(), Some(0x017f_22e2_79b0));
    /// # Ok::<(), uuid47::Error>(())
    /// ```
    pub fn unix_ts_ms(&self) -> Option<u64> {
        match self.version() {
            Some(7) => Some(layout::read_unix_ts_ms(&self.0)),
            _ => None,
        }
    }
}

/// UUID variants defined by RFC9562, plus the special Nil and Max UUIDs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// Nil UUID.
    Nil,
    /// The variant field value is `0`.
    Var0,
    /// The variant field value is `10`.
    Var10,
    /// The variant field value is `110`.
    Var110,
    /// The variant field value is `111` (reserved for future definition).
    VarReserved,
    /// Max UUID.
    Max,
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from any of the accepted textual forms. See [`Uuid::parse()`].
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse(src)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = Error;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::parse(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{Error, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = Error;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    /// Human-readable formats map an empty string and a null value to the Nil UUID; any other
    /// string goes through [`Uuid::parse()`].
    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_option(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            if value.is_empty() {
                return Ok(Uuid::NIL);
            }
            Uuid::parse(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Uuid::NIL)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Uuid::NIL)
        }

        fn visit_some<D: Deserializer<'de>>(
            self,
            deserializer: D,
        ) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_str(self)
        }
    }

}
