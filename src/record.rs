use crate::error::{CorruptStream, Result};
use std::iter::FusedIterator;
use std::slice::ChunksExact;

/// Width in bytes of one serialized record.
pub const RECORD_WIDTH: usize = 3;

/// One wire unit: a reference to an existing dictionary entry plus the
/// symbol that extends it.
///
/// `index == 0` means the entry is the single symbol alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Record {
    pub index: u16,
    pub symbol: u8,
}

impl Record {
    pub fn new(index: u16, symbol: u8) -> Self {
        Self { index, symbol }
    }

    /// A record that starts a fresh single-symbol entry.
    pub fn literal(symbol: u8) -> Self {
        Self { index: 0, symbol }
    }

    pub fn is_literal(&self) -> bool {
        self.index == 0
    }

    /// Serializes as big-endian index followed by the raw symbol.
    pub fn to_bytes(self) -> [u8; RECORD_WIDTH] {
        let [high, low] = self.index.to_be_bytes();
        [high, low, self.symbol]
    }

    pub fn from_bytes(bytes: [u8; RECORD_WIDTH]) -> Self {
        Self {
            index: u16::from_be_bytes([bytes[0], bytes[1]]),
            symbol: bytes[2],
        }
    }
}

impl From<(u16, u8)> for Record {
    fn from((index, symbol): (u16, u8)) -> Self {
        Self { index, symbol }
    }
}

/// Concatenates the wire form of every record.
pub fn write_records(records: &[Record]) -> Vec<u8> {
    let mut out = Vec::with_capacity(records.len() * RECORD_WIDTH);
    for record in records {
        out.extend_from_slice(&record.to_bytes());
    }
    out
}

/// Parses a whole wire buffer.
///
/// Nothing is parsed if the buffer ends in a partial record.
pub fn read_records(bytes: &[u8]) -> Result<Vec<Record>> {
    Ok(RecordIter::new(bytes)?.collect())
}

/// Borrowing iterator over records of a length-checked wire buffer.
#[derive(Debug, Clone)]
pub struct RecordIter<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl<'a> RecordIter<'a> {
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() % RECORD_WIDTH != 0 {
            return Err(CorruptStream::TruncatedRecord { len: bytes.len() }.into());
        }
        Ok(Self {
            chunks: bytes.chunks_exact(RECORD_WIDTH),
        })
    }
}

impl Iterator for RecordIter<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks
            .next()
            .map(|chunk| Record::from_bytes([chunk[0], chunk[1], chunk[2]]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for RecordIter<'_> {}

impl FusedIterator for RecordIter<'_> {}
