//! Seeded random stream owned by a single generation run.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// Reproducible integer source. Two instances built from the same seed and
/// asked the same sequence of questions give the same answers.
#[derive(Clone, Debug)]
pub struct RandomSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomSource {
    pub fn from_seed(seed: u64) -> Self {
        Self { seed, rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Independent stream for a consumer that must not disturb the main run.
    pub fn from_stream(seed: u64, stream: u64) -> Self {
        Self::from_seed(mix_seed_stream(seed, stream))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[low, high)`. An empty range yields `low` and
    /// leaves the stream untouched.
    pub fn next_int(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        let span = (i64::from(high) - i64::from(low)) as u64;
        let offset = self.rng.next_u64() % span;
        (i64::from(low) + offset as i64) as i32
    }

    pub fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.rng.next_u64() as usize % len
    }

    /// `true` with probability `percent / 100`.
    pub fn chance(&mut self, percent: u32) -> bool {
        self.next_int(0, 100) < percent as i32
    }

    pub fn coin_flip(&mut self) -> bool {
        self.next_int(0, 2) == 1
    }
}

pub(crate) fn mix_seed_stream(seed: u64, stream: u64) -> u64 {
    let mut mixed = seed ^ stream.wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    mixed ^ (mixed >> 33)
}

static ENTROPY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Seed drawn from the environment for "random seed" requests. Only used to
/// pick the seed; every draw after that comes from the seeded stream.
pub fn entropy_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = ENTROPY_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
