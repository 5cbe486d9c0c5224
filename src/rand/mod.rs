//! Random number sources.
//!
//! [`Rng`] prefers the OS CSPRNG and falls back to the hardware-entropy
//! [`Mixer`] when the OS source cannot be read. Both implement
//! [`RngCore`], so sampling goes through `rand`'s uniform distributions and
//! slice helpers. There is no global RNG state; callers pass `&mut Rng`.

mod hw;
mod mixer;
mod os;

use ::rand::RngCore;
use ::rand::rand_core::impls;
use tracing::{debug, warn};

pub use mixer::Mixer;

// =============================================================================
// Source selection
// =============================================================================

pub enum Rng {
    Os,
    Hardware(Mixer),
}

impl Rng {
    /// OS CSPRNG when a first read succeeds, the hardware mixer otherwise.
    pub fn new() -> Self {
        match os::try_next() {
            Ok(_) => {
                debug!(source = os::source_name(), "random source selected");
                Rng::Os
            }
            Err(reason) => {
                warn!(%reason, "OS random source unavailable, using hardware entropy mixer");
                Rng::hardware()
            }
        }
    }

    /// Force the non-cryptographic fallback.
    pub fn hardware() -> Self {
        debug!(source = Mixer::source_name(), "random source selected");
        Rng::Hardware(Mixer::new())
    }

    pub fn is_secure(&self) -> bool {
        matches!(self, Rng::Os)
    }

    pub fn source_name(&self) -> &'static str {
        match self {
            Rng::Os => os::source_name(),
            Rng::Hardware(_) => Mixer::source_name(),
        }
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Rng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Rng::Os => match os::try_next() {
                Ok(word) => word,
                Err(reason) => {
                    warn!(%reason, "OS random source failed, switching to hardware entropy mixer");
                    let mut mixer = Mixer::new();
                    let word = mixer.next_u64();
                    *self = Rng::Hardware(mixer);
                    word
                }
            },
            Rng::Hardware(mixer) => mixer.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}
