use crate::phrase::{Phrase, PhraseTable};
use ahash::AHashMap as HashMap;

/// Phrase table keyed on whole byte slices.
///
/// Every candidate is a full membership test, so extending a match of
/// length `n` hashes `O(n^2)` symbols.
#[derive(Debug, Default)]
pub(crate) struct HashTable<'a> {
    entries: HashMap<&'a [u8], u16>,
}

impl HashTable<'_> {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl<'a> PhraseTable<'a> for HashTable<'a> {
    type Prefix = ();

    fn longest_phrase(&self, rest: &'a [u8]) -> Phrase<()> {
        debug_assert!(!rest.is_empty(), "Phrase lookup needs input");

        let mut len = 1;
        let mut reference = 0;
        while len < rest.len() {
            match self.entries.get(&rest[..len]) {
                Some(&index) => {
                    reference = index;
                    len += 1;
                }
                None => break,
            }
        }

        Phrase {
            len,
            reference,
            prefix: (),
        }
    }

    fn insert(&mut self, rest: &'a [u8], phrase: Phrase<()>, index: u16) {
        self.entries.entry(&rest[..phrase.len]).or_insert(index);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
