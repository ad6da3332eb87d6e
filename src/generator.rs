//! UUID generator and related types.

use crate::{layout, Error, Uuid};

pub mod with_rand08;

/// A trait that defines the random byte source interface for [`Generator`].
///
/// The source is expected to be cryptographically secure. A failure is surfaced to the caller as
/// [`Error::RandomSourceFailure`] and is never retried by the generator.
pub trait RandSource {
    /// Fills `dest` with random data, or returns [`Error::RandomSourceFailure`].
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

/// A trait that defines the clock interface for [`Generator`].
pub trait TimeSource {
    /// Returns the current Unix timestamp in milliseconds and the nanoseconds elapsed within that
    /// millisecond (less than `1_000_000`).
    fn now(&mut self) -> (u64, u32);
}

/// The default [`TimeSource`] that uses [`std::time::SystemTime`].
///
/// A system clock set before the Unix epoch reads as the epoch itself.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
impl TimeSource for StdSystemTime {
    fn now(&mut self) -> (u64, u32) {
        use std::time;
        let since_epoch = time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .unwrap_or_else(|err| {
                log::warn!("system clock is {:?} behind the Unix epoch", err.duration());
                time::Duration::ZERO
            });
        (
            since_epoch.as_millis() as u64,
            since_epoch.subsec_nanos() % layout::NANOS_PER_MILLI,
        )
    }
}

/// Represents a UUID generator that binds a random source and a clock.
///
/// The generator holds no state of its own between calls: every UUID is built in a fresh 16-byte
/// buffer from the random source and, for version 7, the clock. Version 7 UUIDs created within the
/// same millisecond stay in creation order through the sub-millisecond fraction stored in the
/// `rand_a` field. A system clock that moves backwards is not corrected for.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use uuid47::Generator;
///
/// let mut g = Generator::with_rand08(OsRng);
/// println!("{}", g.generate_v4()?);
/// println!("{}", g.generate_v7()?);
/// # Ok::<(), uuid47::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R, T> {
    rand_source: R,
    time_source: T,
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R: RandSource> Generator<R, StdSystemTime> {
    /// Creates a generator object with a specified random source. The generator reads the system
    /// clock.
    pub const fn new(rand_source: R) -> Self {
        Self::with_rand_and_time_sources(rand_source, StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Creates a generator object with specified random and time sources.
    pub const fn with_rand_and_time_sources(rand_source: R, time_source: T) -> Self {
        Self {
            rand_source,
            time_source,
        }
    }

    /// Generates a new UUIDv4 object.
    ///
    /// All bits but the 4 version bits and the 2 variant bits come from the random source.
    pub fn generate_v4(&mut self) -> Result<Uuid, Error> {
        let mut bytes = [0u8; 16];
        self.rand_source.try_fill_bytes(&mut bytes)?;
        layout::stamp_version(&mut bytes, 4);
        layout::stamp_variant(&mut bytes);
        Ok(Uuid::from(bytes))
    }

    /// Generates a new UUIDv7 object from the current time of the time source.
    pub fn generate_v7(&mut self) -> Result<Uuid, Error> {
        let (unix_ts_ms, sub_ms_nanos) = self.time_source.now();
        self.generate_v7_core(unix_ts_ms, sub_ms_nanos)
    }

    /// Generates a new UUIDv7 object from the `unix_ts_ms` and `sub_ms_nanos` passed.
    ///
    /// Only the low 48 bits of `unix_ts_ms` are stored. `sub_ms_nanos` is scaled to the 12-bit
    /// `rand_a` field, and the 62-bit `rand_b` field comes from the random source.
    ///
    /// # Panics
    ///
    /// Panics if `sub_ms_nanos` is not less than `1_000_000`.
    pub fn generate_v7_core(&mut self, unix_ts_ms: u64, sub_ms_nanos: u32) -> Result<Uuid, Error> {
        assert!(
            sub_ms_nanos < layout::NANOS_PER_MILLI,
            "`sub_ms_nanos` must be less than one millisecond"
        );

        let mut bytes = [0u8; 16];
        layout::write_unix_ts_ms(&mut bytes, unix_ts_ms);
        layout::write_rand_a(&mut bytes, layout::sub_ms_fraction(sub_ms_nanos));
        self.rand_source.try_fill_bytes(&mut bytes[8..])?;
        layout::stamp_version(&mut bytes, 7);
        layout::stamp_variant(&mut bytes);
        Ok(Uuid::from(bytes))
    }
}
