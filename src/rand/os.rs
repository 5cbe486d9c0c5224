//! Operating system CSPRNG.

use ::rand::TryRngCore;
use ::rand::rngs::OsRng;

pub fn source_name() -> &'static str {
    "OS CSPRNG"
}

/// One draw from the OS generator, or the reason it is unavailable.
#[inline]
pub fn try_next() -> Result<u64, String> {
    OsRng.try_next_u64().map_err(|e| e.to_string())
}
