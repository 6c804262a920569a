use std::{
    process,
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};
use wyrand::WyRand;

static SOURCE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A source of uniform random indices for character selection and shuffling.
///
/// The default implementation is a fast non-cryptographic generator. Callers
/// generating secrets for security-sensitive use should implement this trait
/// over a cryptographically secure generator instead; the selection algorithm
/// itself does not change.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// A uniform value in `[0, bound)`. `bound` must be nonzero.
    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

/// The default [`RandomSource`], backed by [`WyRand`].
pub struct WyRandSource(WyRand);
impl WyRandSource {
    /// A source with a fixed seed, for deterministic output.
    pub fn seeded(seed: u64) -> WyRandSource {
        WyRandSource(WyRand::new(seed))
    }
}
impl Default for WyRandSource {
    fn default() -> WyRandSource {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(0x9E3779B97F4A7C15);
        // Nanosecond clocks can be coarse; the counter and process id keep
        // rapid-fire default sources from sharing a seed.
        let tick = SOURCE_COUNTER.fetch_add(1, Ordering::Relaxed);
        let seed = nanos
            ^ tick.wrapping_mul(0x9E3779B97F4A7C15)
            ^ u64::from(process::id()).wrapping_mul(0xA0761D6478BD642F);
        WyRandSource(WyRand::new(seed))
    }
}
impl RandomSource for WyRandSource {
    fn next_u64(&mut self) -> u64 {
        self.0.rand()
    }
}
