//! The opaque digest type and its diagnostic hex helpers.

use crate::constants::HASH_SIZE;

/// A 256-bit digest stored as raw bytes in wire order.
pub type Hash256 = [u8; HASH_SIZE];

/// The all-zero hash carried by default-constructed and null points.
pub const NULL_HASH: Hash256 = [0u8; HASH_SIZE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    InvalidLength,
    InvalidHex,
}

impl std::fmt::Display for HexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexError::InvalidLength => write!(f, "hex string is not 64 characters"),
            HexError::InvalidHex => write!(f, "invalid hex digit"),
        }
    }
}

impl std::error::Error for HexError {}

/// Renders a digest as lowercase hex in stored byte order.
pub fn hash256_to_hex(hash: &Hash256) -> String {
    let mut out = String::with_capacity(HASH_SIZE * 2);
    for byte in hash.iter() {
        out.push(hex_digit(byte >> 4));
        out.push(hex_digit(byte & 0x0f));
    }
    out
}

fn hex_digit(value: u8) -> char {
    match value {
        0..=9 => (b'0' + value) as char,
        _ => (b'a' + (value - 10)) as char,
    }
}

/// Parses 64 hex characters into a digest, stored byte order.
pub fn hash256_from_hex(input: &str) -> Result<Hash256, HexError> {
    let hex = input.trim();
    if !hex.is_ascii() {
        return Err(HexError::InvalidHex);
    }
    if hex.len() != HASH_SIZE * 2 {
        return Err(HexError::InvalidLength);
    }

    let mut bytes = [0u8; HASH_SIZE];
    for (i, byte_out) in bytes.iter_mut().enumerate() {
        let start = i * 2;
        *byte_out =
            u8::from_str_radix(&hex[start..start + 2], 16).map_err(|_| HexError::InvalidHex)?;
    }

    Ok(bytes)
}
