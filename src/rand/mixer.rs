//! Fallback generator: hardware entropy folded into a multiplicative state.
//!
//! Not cryptographic. Used only when the OS generator is unavailable or
//! when `--hw` asks for it.

use ::rand::RngCore;
use ::rand::rand_core::impls;
use zeroize::Zeroize;

use super::hw;

/// Odd 64-bit multipliers; entropy picks one per step.
const MULTIPLIERS: [u64; 8] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xd6e8_feb8_6659_fd93,
    0xff51_afd7_ed55_8ccd,
    0xc4ce_b9fe_1a85_ec53,
    0x2545_f491_4f6c_dd1d,
    0x5851_f42d_4c95_7f2d,
];

const WEYL: u64 = 0x9e37_79b9_7f4a_7c15;

pub struct Mixer {
    state: u64,
}

impl Mixer {
    pub fn new() -> Self {
        Mixer {
            state: hw::entropy() ^ WEYL,
        }
    }

    #[cfg(test)]
    fn with_seed(seed: u64) -> Self {
        Mixer { state: seed ^ WEYL }
    }

    pub fn source_name() -> &'static str {
        hw::source_name()
    }

    #[inline(always)]
    fn step(&mut self, ent: u64) -> u64 {
        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;

        // Rotate, multiply, fold entropy; the Weyl step keeps the state off zero.
        self.state = (self.state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent)
            .wrapping_add(WEYL);

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl Default for Mixer {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Mixer {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.step(hw::entropy())
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl Drop for Mixer {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
