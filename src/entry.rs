//! Entry point functions backed by operating system entropy.

#![cfg(feature = "std")]
#![cfg_attr(docsrs, doc(cfg(feature = "std")))]

use crate::{Error, Generator, Uuid};
use rand::rngs::OsRng;

/// Generates a UUIDv4 object.
///
/// Random bits are read from the operating system. Each call is independent and needs no
/// locking.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid47::uuid4()?;
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// assert_eq!(uuid.version(), Some(4));
/// # Ok::<(), uuid47::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::RandomSourceFailure`] if the operating system cannot supply random bytes.
pub fn uuid4() -> Result<Uuid, Error> {
    Generator::with_rand08(OsRng).generate_v4()
}

/// Generates a UUIDv7 object.
///
/// The first 48 bits hold the current Unix time in milliseconds and the next 12 bits the elapsed
/// fraction of that millisecond, so UUIDs created one after another sort in creation order as
/// long as the system clock does not move backwards.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid47::uuid7()?;
/// println!("{uuid}"); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuid47::uuid7()?.to_string();
/// # Ok::<(), uuid47::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::RandomSourceFailure`] if the operating system cannot supply random bytes.
pub fn uuid7() -> Result<Uuid, Error> {
    Generator::with_rand08(OsRng).generate_v7()
}

#[cfg(test)]
mod tests_v7 {
    use super::uuid7;
    use crate::Variant;

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<String> = {
        (0..N_SAMPLES).map(|_| uuid7().unwrap().into()).collect()
    });

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-7[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Generates non-decreasing string representation by creation time
    #[test]
    fn generates_non_decreasing_string_representation_by_creation_time() {
        // the 60-bit time prefix (timestamp, version, and fraction) never decreases while the
        // system clock runs forward
        SAMPLES.with(|samples| {
            for i in 1..N_SAMPLES {
                assert!(samples[i - 1][..18] <= samples[i][..18]);
            }
        });
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        use std::time;
        for _ in 0..10_000 {
            let ts_now = (time::SystemTime::now()
                .duration_since(time::UNIX_EPOCH)
                .expect("clock may have gone backwards")
                .as_millis()) as i64;
            let mut timestamp = 0i64;
            for e in uuid7().unwrap().as_bytes().iter().take(6) {
                timestamp = timestamp * 256 + *e as i64;
            }
            assert!((ts_now - timestamp).abs() < 16);
        }
    }

    /// Sets constant bits and random bits properly
    #[test]
    fn sets_constant_bits_and_random_bits_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 128];
            for e in samples {
                let mut it = bins.iter_mut().rev();
                for c in e.chars().rev() {
                    if let Some(mut num) = c.to_digit(16) {
                        for _ in 0..4 {
                            *it.next().unwrap() += num & 1;
                            num >>= 1;
                        }
                    }
                }
            }
            bins
        });

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], n, "version bit 50");
        assert_eq!(bins[51], n, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in 66..128 {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {i}: {p}");
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for _ in 0..1_000 {
            let e = uuid7().unwrap();
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(7));
        }
    }

    /// Generates no duplicates under multithreading
    #[test]
    fn generates_no_duplicates_under_multithreading() -> Result<(), Box<dyn std::error::Error>> {
        use std::{collections::HashSet, sync::mpsc, thread};

        let (tx, rx) = mpsc::channel();
        for _ in 0..4 {
            let tx = tx.clone();
            thread::Builder::new()
                .spawn(move || {
                    for _ in 0..10_000 {
                        tx.send(uuid7().unwrap()).unwrap();
                    }
                })
                .map_err(|err| format!("failed to spawn thread: {err:?}"))?;
        }
        drop(tx);

        let mut s = HashSet::new();
        while let Ok(e) = rx.recv() {
            s.insert(e);
        }

        assert_eq!(s.len(), 4 * 10_000);
        Ok(())
    }
}


#[cfg(test)]
mod tests_collision {
    use super::{uuid4, uuid7};
    use std::collections::HashSet;

    /// Generates 1M identifiers of each version without collision
    #[test]
    fn generates_1m_identifiers_of_each_version_without_collision() {
        const N: usize = 1_000_000;
        let mut s = HashSet::with_capacity(2 * N);
        for _ in 0..N {
            s.insert(uuid4().unwrap());
            s.insert(uuid7().unwrap());
        }
        assert_eq!(s.len(), 2 * N);
    }
}
