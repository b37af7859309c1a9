// crates/garden-layout/src/bloom.rs
//! Entrance animation timing, derived from the flower id alone so a flower
//! blooms the same way on every reload.

use crate::rng::{make_rng, seed_from_id, SeededRng};

const BLOOM_DELAY_SALT: i32 = 0x5EED_B10A;
const BLOOM_DURATION_SALT: i32 = 0x2545_F491;

pub const MAX_BLOOM_DELAY_SECS: f32 = 1.0;
pub const MIN_BLOOM_DURATION_SECS: f32 = 1.0;
pub const MAX_BLOOM_DURATION_SECS: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomTiming {
    pub delay: f32,
    pub duration: f32,
}

/// Seconds before the flower starts blooming, in `[0, 1)`.
pub fn derive_bloom_delay(flower_id: &str) -> f32 {
    let mut rng = make_rng(seed_from_id(flower_id) ^ BLOOM_DELAY_SALT);
    rng.next_f32() * MAX_BLOOM_DELAY_SECS
}

/// Seconds the bloom animation runs, in `[1, 2)`.
pub fn derive_bloom_duration(flower_id: &str) -> f32 {
    duration_from(&mut make_rng(seed_from_id(flower_id) ^ BLOOM_DURATION_SALT))
}

// `1 + u` rounds up to 2.0 for the largest draws; keep the upper bound open.
fn duration_from(rng: &mut SeededRng) -> f32 {
    let below_max = f32::from_bits(MAX_BLOOM_DURATION_SECS.to_bits() - 1);
    rng.range(MIN_BLOOM_DURATION_SECS, MAX_BLOOM_DURATION_SECS).min(below_max)
}

pub fn bloom_timing(flower_id: &str) -> BloomTiming {
    BloomTiming {
        delay: derive_bloom_delay(flower_id),
        duration: derive_bloom_duration(flower_id),
    }
}
