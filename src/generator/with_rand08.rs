//! Integration with `rand` (v0.8) crate.

use super::{Generator, RandSource};
use crate::Error;
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        let len = dest.len();
        self.0.try_fill_bytes(dest).map_err(|err| {
            log::error!("could not read {} random bytes: {}", len, err);
            Error::RandomSourceFailure
        })
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<T: RngCore> Generator<Adapter<T>, super::StdSystemTime> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}
