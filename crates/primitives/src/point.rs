//! Transaction output reference ("point") and its wire codec.

use std::fmt;
use std::io::Read;

use emberd_consensus::{
    hash256_to_hex, Hash256, HASH_SIZE, MAX_POINT_INDEX, NULL_HASH, POINT_INDEX_SIZE,
};

use crate::encoding::{ByteReader, ByteWriter};

/// A reference to one output of a prior transaction.
///
/// Two sentinel shapes must not be conflated: the default point
/// (zero hash, index 0) is merely unpopulated and fails
/// [`Point::is_valid`], while the null point (zero hash, all-ones
/// index) is the coinbase-style marker tested by [`Point::is_null`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Point {
    pub hash: Hash256,
    pub index: u32,
}

impl Point {
    pub fn new(hash: Hash256, index: u32) -> Self {
        Self { hash, index }
    }

    /// The sentinel carried by inputs that spend no prior output.
    pub fn null() -> Self {
        Self {
            hash: NULL_HASH,
            index: MAX_POINT_INDEX,
        }
    }

    /// Serialized width on the wire. Never varies per instance.
    pub const fn fixed_size() -> usize {
        HASH_SIZE + POINT_INDEX_SIZE
    }

    /// Returns the point to its default (unpopulated) state.
    pub fn reset(&mut self) {
        self.hash = NULL_HASH;
        self.index = 0;
    }

    /// True once the point differs from the default in either field.
    pub fn is_valid(&self) -> bool {
        self.index != 0 || self.hash != NULL_HASH
    }

    /// True for the coinbase-style null reference.
    pub fn is_null(&self) -> bool {
        self.index == MAX_POINT_INDEX && self.hash == NULL_HASH
    }

    /// Decodes from a raw buffer. See [`Point::from_reader`].
    pub fn from_data(&mut self, data: &[u8]) -> bool {
        self.from_stream(data)
    }

    /// Decodes from any byte stream. See [`Point::from_reader`].
    pub fn from_stream<R: Read>(&mut self, stream: R) -> bool {
        let mut reader = ByteReader::new(stream);
        self.from_reader(&mut reader)
    }

    /// Decodes hash then index from the reader.
    ///
    /// All-or-nothing: on short input the point is left in the default
    /// state and false is returned. Exactly 36 bytes are consumed on
    /// success; any remainder belongs to the enclosing structure.
    pub fn from_reader<R: Read>(&mut self, reader: &mut ByteReader<R>) -> bool {
        self.reset();

        self.hash = reader.read_hash();
        self.index = reader.read_u32_le();

        let ok = reader.is_ok();
        if !ok {
            self.reset();
        }
        ok
    }

    /// Encodes into a fresh buffer of exactly [`Point::fixed_size`] bytes.
    pub fn to_data(&self) -> Vec<u8> {
        let mut sink = ByteWriter::with_capacity(Self::fixed_size());
        self.to_writer(&mut sink);
        let data = sink.into_inner();
        debug_assert_eq!(data.len(), Self::fixed_size());
        data
    }

    /// Writes hash then index, in that fixed order.
    pub fn to_writer(&self, sink: &mut ByteWriter) {
        sink.write_hash(&self.hash);
        sink.write_u32_le(self.index);
    }
}

/// Two-line diagnostic rendering. Never parsed back.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\thash = {}", hash256_to_hex(&self.hash))?;
        write!(f, "\tindex = {}", self.index)
    }
}
