//! The point codec and its byte-level serialization primitives.

pub mod encoding;
pub mod hash;
pub mod point;

pub use encoding::{ByteReader, ByteWriter};
pub use hash::{sha256, sha256d};
pub use point::Point;
