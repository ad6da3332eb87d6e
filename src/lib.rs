//! Generation, formatting, and parsing of RFC9562 UUID version 4 and version 7
//!
//! ```rust
//! let uuid = uuid47::uuid7()?;
//! println!("{uuid}"); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuid47::uuid4()?;
//! println!("{}", uuid.encode_urn()); // e.g., "urn:uuid:2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//!
//! let parsed: uuid47::Uuid = "urn:uuid:53bfe550-4165-4f81-a8e7-c2609579ccc0".parse()?;
//! assert_eq!(parsed.to_string(), "53bfe550-4165-4f81-a8e7-c2609579ccc0");
//! # Ok::<(), uuid47::Error>(())
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562.html).
//!
//! # Field and bit layout
//!
//! UUIDv7 identifiers produced by this library have the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in
//!   milliseconds, most significant byte first.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 12-bit `rand_a` field holds the elapsed fraction of the current millisecond,
//!   `sub_ms_nanos * 4096 / 1_000_000`, so that UUIDs generated within the same
//!   millisecond keep their creation order.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 62 `rand_b` bits are filled with a cryptographically strong random
//!   number.
//!
//! No state is shared between calls. If the system clock moves backwards, so do the
//! timestamps of subsequently generated UUIDs.
//!
//! UUIDv4 identifiers consist of 122 random bits besides the `ver` field set at
//! `0100` and the `var` field set at `10`.
//!
//! # Textual representations
//!
//! [`Uuid`] displays as the 8-4-4-4-12 lowercase hexadecimal string. The parser accepts
//! that form, the 32-digit form without hyphens, and the `urn:uuid:` prefixed form, all
//! with case-insensitive hex digits, and only admits version 4 and 7 UUIDs of the `10`
//! variant.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` enables the system clock, the [`uuid4()`] and [`uuid7()`] entry points, and
//!   conversions to and from `String`. Without it, the crate is `no_std` and callers
//!   supply their own [`generator::TimeSource`].
//!
//! Optional features:
//!
//! - `serde` enables serialization and deserialization of [`Uuid`] via serde. The
//!   empty string and null deserialize to [`Uuid::NIL`].
//! - `uuid` enables conversion between [`Uuid`] and `uuid::Uuid`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::Error;

mod id;
pub use id::{Uuid, Variant};

mod layout;
mod text;

pub mod generator;
pub use generator::Generator;

mod entry;
#[cfg(feature = "std")]
pub use entry::{uuid4, uuid7};
