use crate::error::Result;
use crate::hash_table::HashTable;
use crate::id_gen::IndexAllocator;
use crate::phrase::PhraseTable;
use crate::record::{write_records, Record};
use crate::trie::TrieTable;
use tracing::{debug, trace, warn};

/// Largest dictionary index the 16-bit wire field can carry.
pub const MAX_ENTRIES: u16 = u16::MAX;

/// How the encoder searches its dictionary for the longest known prefix.
///
/// Both strategies emit identical records for every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    /// Whole-slice membership tests against a hash map.
    Hash,
    /// Symbol-by-symbol walk down a trie.
    #[default]
    Trie,
}

/// Greedy LZ78 encoder.
///
/// Holds configuration only; every call to [`Encoder::encode`] builds and
/// drops its own dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    strategy: MatchStrategy,
    max_entries: u16,
}

impl Encoder {
    /// Creates an encoder using the trie strategy and the full index range.
    pub fn new() -> Self {
        Self {
            strategy: MatchStrategy::default(),
            max_entries: MAX_ENTRIES,
        }
    }

    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Caps the number of dictionary entries (and therefore records) one
    /// encode call may create.
    pub fn with_max_entries(mut self, max_entries: u16) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    pub fn max_entries(&self) -> u16 {
        self.max_entries
    }

    /// Encodes `input` into records.
    ///
    /// Fails with [`crate::Lz78Error::CapacityExceeded`] if the input needs
    /// more than `max_entries` dictionary entries.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<Record>> {
        match self.strategy {
            MatchStrategy::Hash => self.run(HashTable::new(), input),
            MatchStrategy::Trie => self.run(TrieTable::new(), input),
        }
    }

    /// Encodes `input` straight to wire bytes.
    pub fn encode_to_bytes(&self, input: &[u8]) -> Result<Vec<u8>> {
        let records = self.encode(input)?;
        Ok(write_records(&records))
    }

    fn run<'a, T: PhraseTable<'a>>(&self, mut table: T, input: &'a [u8]) -> Result<Vec<Record>> {
        let mut ids = IndexAllocator::new(self.max_entries);
        let mut records = Vec::new();
        let mut pos = 0;

        while pos < input.len() {
            let rest = &input[pos..];
            let phrase = table.longest_phrase(rest);

            let index = ids.allocate().inspect_err(|_| {
                warn!(
                    position = pos,
                    limit = self.max_entries,
                    "dictionary capacity exhausted"
                );
            })?;

            let record = Record::new(phrase.reference, rest[phrase.len - 1]);
            trace!(index, reference = record.index, symbol = record.symbol, "record");
            records.push(record);

            table.insert(rest, phrase, index);
            pos += phrase.len;
        }

        debug!(
            input_len = input.len(),
            records = records.len(),
            indices = ids.issued(),
            entries = table.len(),
            strategy = ?self.strategy,
            "encoded"
        );
        Ok(records)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
