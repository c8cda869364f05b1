use crate::record::{Record, RECORD_WIDTH};

/// Statistics about one compression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Number of source bytes
    pub source_length: usize,
    /// Number of wire bytes
    pub encoded_length: usize,
    /// Number of records (and dictionary entries) produced
    pub records: usize,
}

impl CompressionStats {
    pub fn from_records(source: &[u8], records: &[Record]) -> Self {
        Self {
            source_length: source.len(),
            encoded_length: records.len() * RECORD_WIDTH,
            records: records.len(),
        }
    }

    /// Returns the encoded size as a percentage of the source size.
    pub fn compression_ratio(&self) -> f64 {
        if self.source_length == 0 {
            0.0
        } else {
            (self.encoded_length as f64 / self.source_length as f64) * 100.0
        }
    }

    /// Bytes saved by encoding; negative when the encoding expanded the input.
    pub fn space_saving(&self) -> i64 {
        self.source_length as i64 - self.encoded_length as i64
    }
}
