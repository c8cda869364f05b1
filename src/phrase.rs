/// The next phrase found at the head of the remaining input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Phrase<P> {
    /// Symbols consumed by this phrase (always >= 1).
    pub len: usize,
    /// Index of the entry this phrase extends, or 0 for a fresh symbol.
    pub reference: u16,
    /// Table-specific handle on the matched prefix.
    pub prefix: P,
}

/// Encoder-side dictionary: answers longest-prefix queries and records new
/// entries.
///
/// Tables borrow their keys from the input, so one table lives for one
/// encode call.
pub(crate) trait PhraseTable<'a> {
    type Prefix: Copy;

    /// Extends a candidate one symbol at a time while the candidate is a known
    /// entry and input remains, then returns the phrase ending one symbol past
    /// the match.
    ///
    /// A phrase of length 1 always has `reference == 0`, even when that single
    /// symbol is a known entry (happens on the last symbol of the input).
    ///
    /// `rest` must be non-empty.
    fn longest_phrase(&self, rest: &'a [u8]) -> Phrase<Self::Prefix>;

    /// Records `rest[..phrase.len]` under `index`.
    ///
    /// Already-known phrases keep their original index.
    fn insert(&mut self, rest: &'a [u8], phrase: Phrase<Self::Prefix>, index: u16);

    /// Number of distinct entries stored.
    fn len(&self) -> usize;
}
