use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Smallest generated element.
pub const MIN_ELEMENT: i64 = 10;
/// Largest generated element.
pub const MAX_ELEMENT: i64 = 99;

/// Random input generator for sorting runs.
///
/// Uses the xoshiro256** PRNG for reproducible arrays when seeded.
///
/// # Examples
///
/// ```
/// use algoviz_sorting::fuzzer::Fuzzer;
///
/// let mut a = Fuzzer::from_u64(7);
/// let mut b = Fuzzer::from_u64(7);
/// assert_eq!(a.array(16), b.array(16));
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Seeds from a single integer, spreading it over the full seed.
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for chunk in bytes.chunks_mut(8) {
            chunk.copy_from_slice(&seed.to_le_bytes());
        }
        Self::new(Some(bytes))
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    /// `size` elements drawn from [`MIN_ELEMENT`, `MAX_ELEMENT`].
    pub fn array(&mut self, size: usize) -> Vec<i64> {
        (0..size)
            .map(|_| self.random_int(MIN_ELEMENT, MAX_ELEMENT))
            .collect()
    }
}
