//! Sequential fixed-width reads and writes over byte sources and sinks.

use std::io::Read;

use emberd_consensus::{Hash256, NULL_HASH};

/// Checked sequential reader over any byte source.
///
/// Failure is sticky: once a read comes up short the reader stays failed
/// and every later read returns a zeroed value without touching the
/// source. Callers inspect [`ByteReader::is_ok`] after a read, or once
/// after a batch of reads. Nothing here panics or returns early, so
/// batch-decoding loops can check-and-continue cheaply.
pub struct ByteReader<R: Read> {
    source: R,
    failed: bool,
}

impl<R: Read> ByteReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            failed: false,
        }
    }

    /// True until any read has come up short.
    pub fn is_ok(&self) -> bool {
        !self.failed
    }

    fn fill(&mut self, buf: &mut [u8]) {
        if self.failed || self.source.read_exact(buf).is_err() {
            self.failed = true;
            buf.fill(0);
        }
    }

    pub fn read_u8(&mut self) -> u8 {
        let mut buf = [0u8; 1];
        self.fill(&mut buf);
        buf[0]
    }

    pub fn read_u32_le(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill(&mut buf);
        u32::from_le_bytes(buf)
    }

    pub fn read_u64_le(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill(&mut buf);
        u64::from_le_bytes(buf)
    }

    /// Consumes exactly 32 bytes in source order; the zero hash on failure.
    pub fn read_hash(&mut self) -> Hash256 {
        let mut hash = NULL_HASH;
        self.fill(&mut hash);
        hash
    }

    pub fn read_bytes(&mut self, len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        self.fill(&mut bytes);
        bytes
    }
}

/// Unchecked sequential writer into a growable byte sink.
///
/// The sink is in-memory and growth is unbounded, so writes cannot fail.
#[derive(Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u32_le(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64_le(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_hash(&mut self, hash: &Hash256) {
        self.buf.extend_from_slice(hash);
    }
}
