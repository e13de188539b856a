//! Seeded selection source
//!
//! `SplitMix64` (Steele, Lea & Flood) is small, fast and fully specified,
//! so a seed maps to the same output stream on every platform and across
//! releases of this crate. `StdRng` gives no such guarantee.
//!
//! Each step:
//! ```text
//! state = state + 0x9E3779B97F4A7C15
//! z = (state ^ (state >> 30)) * 0xBF58476D1CE4E5B9
//! z = (z ^ (z >> 27)) * 0x94D049BB133111EB
//! out = z ^ (z >> 31)
//! ```
//! All arithmetic wraps modulo 2^64.

use rand::{Error, RngCore, SeedableRng};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 generator
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    #[inline]
    pub const fn new(seed: u64) -> Self {
        SplitMix64 { state: seed }
    }
}

impl RngCore for SplitMix64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        SplitMix64::new(u64::from_le_bytes(seed))
    }

    /// The seed is the initial state, unexpanded
    fn seed_from_u64(state: u64) -> Self {
        SplitMix64::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_outputs() {
        let mut rng = SplitMix64::seed_from_u64(0);
        assert_eq!(rng.next_u64(), 0xe220_a839_7b1d_cdaf);
        assert_eq!(rng.next_u64(), 0x6e78_9e6a_a1b9_65f4);
    }

    #[test]
    fn test_seed_forms_agree() {
        let a = SplitMix64::seed_from_u64(1337);
        let b = SplitMix64::from_seed(1337u64.to_le_bytes());
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_bytes_uses_little_endian_words() {
        let mut words = SplitMix64::new(42);
        let first = words.next_u64().to_le_bytes();

        let mut rng = SplitMix64::new(42);
        let mut buf = [0u8; 5];
        rng.fill_bytes(&mut buf);
        assert_eq!(buf, first[..5]);
    }

    #[test]
    fn test_next_u32_takes_high_bits() {
        let mut a = SplitMix64::new(7);
        let mut b = SplitMix64::new(7);
        assert_eq!(a.next_u32(), (b.next_u64() >> 32) as u32);
    }
}
