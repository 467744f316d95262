//! Consensus constants and the opaque 256-bit hash type.

pub mod constants;
pub mod hash;

pub use constants::{HASH_SIZE, MAX_POINT_INDEX, POINT_INDEX_SIZE};
pub use hash::{hash256_from_hex, hash256_to_hex, Hash256, HexError, NULL_HASH};
