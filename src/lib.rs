//! # LZ78 - Dictionary Compression
//!
//! A byte-oriented LZ78 compressor. The encoder walks the input once, matching
//! the longest prefix already in its dictionary and emitting it as a record:
//! a reference to an existing entry plus the symbol that extends it. The
//! decoder grows an identical dictionary from record order alone.
//!
//! Each record is 3 bytes on the wire: a big-endian 16-bit reference index
//! followed by the raw symbol. There is no header.
//!
//! ## Example
//!
//! ```
//! use lz78_rs::{compress, decompress};
//!
//! let wire = compress(b"abracadabra").unwrap();
//! assert_eq!(wire.len() % 3, 0);
//!
//! let restored = decompress(&wire).unwrap();
//! assert_eq!(restored, b"abracadabra");
//! ```
//!
//! ## Limits
//!
//! - The dictionary grows for the whole call and is never pruned
//! - At most 65535 entries fit the index field; encoding more fails with
//!   [`Lz78Error::CapacityExceeded`]

mod decoder;
mod encoder;
mod error;
mod hash_table;
mod id_gen;
mod phrase;
mod record;
mod stats;
mod trie;

#[cfg(test)]
mod tests;

pub use decoder::Decoder;
pub use encoder::{Encoder, MatchStrategy, MAX_ENTRIES};
pub use error::{CorruptStream, Lz78Error, Result};
pub use record::{read_records, write_records, Record, RecordIter, RECORD_WIDTH};
pub use stats::CompressionStats;

/// Encodes `input` into records with the default encoder.
pub fn encode(input: &[u8]) -> Result<Vec<Record>> {
    Encoder::new().encode(input)
}

/// Decodes records back into the original bytes.
pub fn decode(records: &[Record]) -> Result<Vec<u8>> {
    Decoder::new().decode(records)
}

/// Encodes `input` straight to wire bytes.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    Encoder::new().encode_to_bytes(input)
}

/// Decodes wire bytes back into the original bytes.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    Decoder::new().decode_bytes(bytes)
}
