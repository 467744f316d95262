//! Consensus-wide constants shared across serialization and validation.

/// Width of a transaction digest, in bytes (network rule).
pub const HASH_SIZE: usize = 32;
/// Width of an output index on the wire, in bytes (network rule).
pub const POINT_INDEX_SIZE: usize = 4;
/// The output index carried by a null point. Inputs that create new value
/// instead of spending a prior output set this together with a zero hash.
pub const MAX_POINT_INDEX: u32 = 0xffff_ffff;
