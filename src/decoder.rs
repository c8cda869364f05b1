use crate::error::{CorruptStream, Result};
use crate::record::{Record, RecordIter};
use tracing::{debug, warn};

/// An entry of the reconstructed dictionary: a span of the output.
///
/// Each entry is written to the output contiguously when created, so the
/// output doubles as the dictionary's storage.
#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

/// LZ78 decoder.
///
/// Rebuilds the dictionary in record order; it never searches it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Decoder;

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes a record sequence.
    ///
    /// Fails with [`CorruptStream::DanglingReference`] if a record points at an
    /// entry that does not exist yet. No partial output is returned.
    pub fn decode(&self, records: &[Record]) -> Result<Vec<u8>> {
        self.run(records.iter().copied(), records.len())
    }

    /// Decodes a wire buffer.
    ///
    /// Fails with [`CorruptStream::TruncatedRecord`] if the length is not a
    /// whole number of records.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let records = RecordIter::new(bytes).inspect_err(|_| {
            warn!(len = bytes.len(), "rejecting truncated stream");
        })?;
        let count = records.len();
        self.run(records, count)
    }

    fn run<I: Iterator<Item = Record>>(&self, records: I, count: usize) -> Result<Vec<u8>> {
        let mut entries: Vec<Span> = Vec::with_capacity(count);
        let mut output = Vec::with_capacity(count);

        for (record_no, record) in records.enumerate() {
            let start = output.len();
            if !record.is_literal() {
                let Some(&prefix) = entries.get(usize::from(record.index) - 1) else {
                    warn!(
                        record = record_no,
                        index = record.index,
                        entries = entries.len(),
                        "rejecting dangling reference"
                    );
                    return Err(CorruptStream::DanglingReference {
                        record: record_no,
                        index: record.index,
                        entries: entries.len(),
                    }
                    .into());
                };
                output.extend_from_within(prefix.start..prefix.start + prefix.len);
            }
            output.push(record.symbol);
            entries.push(Span {
                start,
                len: output.len() - start,
            });
        }

        debug!(
            records = entries.len(),
            output_len = output.len(),
            "decoded"
        );
        Ok(output)
    }
}
