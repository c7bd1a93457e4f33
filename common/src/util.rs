use serde::{Deserialize, Serialize};

// Deterministic xorshift generator. The whole simulation is seedable, so a
// game can be replayed exactly from its seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PseudoRandom {
    state: u64,
}

impl PseudoRandom {
    pub fn new(seed: u64) -> Self {
        // xorshift cannot leave a zero state
        let state = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };
        PseudoRandom { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        // xorshift64
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Random f32 in [0.0, 1.0)
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits for an even mantissa-sized distribution
        ((self.next_u64() >> 40) as f32) / 16777216.0
    }

    /// Uniform f32 in [lo, hi)
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }
}
