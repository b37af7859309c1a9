// crates/garden-layout/src/rng.rs
//! Seeded randomness for layout scattering.
//!
//! Every flower gets its own generator derived from its id, and every
//! purpose (jitter, bloom timing, cell shuffle) gets its own instance.
//! There is no process-wide random state.

use tracing::trace;

const ID_HASH_MULTIPLIER: i32 = 31;
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;
const TWO_POW_24: f32 = 16_777_216.0;

/// Rolling hash of the id's UTF-16 code units, wrapped to `i32`.
///
/// Must agree with web clients, which hash UTF-16 units, not UTF-8 bytes.
pub fn seed_from_id(id: &str) -> i32 {
    let seed = id.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(ID_HASH_MULTIPLIER).wrapping_add(unit as i32)
    });
    trace!(id, seed, "derived seed from flower id");
    seed
}

/// Mulberry32: one `u32` of state, avalanche mixing on every draw.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: i32) -> Self {
        Self { state: seed as u32 }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / TWO_POW_32
    }

    /// Uniform in `[0, 1)` with the top 24 bits, exact in `f32`.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / TWO_POW_24
    }

    /// Uniform between `lo` and `hi`.
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }
}

pub fn make_rng(seed: i32) -> SeededRng {
    SeededRng::new(seed)
}

/// Fisher-Yates, walking from the back.
pub fn shuffle<T>(items: &mut [T], rng: &mut SeededRng) {
    for i in (1..items.len()).rev() {
        let j = rng.index(i + 1);
        items.swap(i, j);
    }
}
