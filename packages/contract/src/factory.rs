//! Random courier generation.
//!
//! Every scenario starts from a freshly generated [`Courier`] so that
//! scenarios never collide on logins, even when run repeatedly against the
//! same service. Randomness comes from an injectable [`Rng`], so a seeded
//! generator reproduces a run exactly.

use clients::courier::v1::Courier;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// The length of each generated field.
pub const FIELD_LEN: usize = 10;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Generate a string of `len` ASCII letters drawn uniformly from `A-Za-z`.
pub fn alphabetic(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect()
}

/// Produces couriers with independently random login, password and first
/// name.
#[derive(Debug)]
pub struct CourierFactory<R = StdRng> {
    rng: R,
}

impl CourierFactory<StdRng> {
    /// A factory seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// A factory that produces the same couriers for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for CourierFactory<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> CourierFactory<R> {
    /// A factory drawing from the provided generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a new courier.
    pub fn generate(&mut self) -> Courier {
        Courier::builder()
            .login(alphabetic(&mut self.rng, FIELD_LEN))
            .password(alphabetic(&mut self.rng, FIELD_LEN))
            .first_name(alphabetic(&mut self.rng, FIELD_LEN))
            .build()
    }
}
