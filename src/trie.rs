use crate::phrase::{Phrase, PhraseTable};
use ahash::AHashMap as HashMap;
use slotmap::{DefaultKey, SlotMap};
use std::marker::PhantomData;

/// A dictionary entry in the trie. The root stands for the empty phrase.
#[derive(Debug)]
struct TrieNode {
    index: u16,
}

/// Phrase table stored as a trie.
///
/// Nodes live in a SlotMap arena; edges are indexed by `(parent, symbol)`,
/// so extending a match costs one lookup per symbol.
#[derive(Debug)]
pub(crate) struct TrieTable<'a> {
    nodes: SlotMap<DefaultKey, TrieNode>,
    edges: HashMap<(DefaultKey, u8), DefaultKey>,
    root: DefaultKey,
    _input: PhantomData<&'a [u8]>,
}

impl TrieTable<'_> {
    pub(crate) fn new() -> Self {
        let mut nodes = SlotMap::new();
        let root = nodes.insert(TrieNode { index: 0 });
        Self {
            nodes,
            edges: HashMap::default(),
            root,
            _input: PhantomData,
        }
    }
}

impl Default for TrieTable<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PhraseTable<'a> for TrieTable<'a> {
    type Prefix = DefaultKey;

    fn longest_phrase(&self, rest: &'a [u8]) -> Phrase<DefaultKey> {
        debug_assert!(!rest.is_empty(), "Phrase lookup needs input");

        let mut node = self.root;
        let mut len = 1;
        while len < rest.len() {
            match self.edges.get(&(node, rest[len - 1])) {
                Some(&child) => {
                    node = child;
                    len += 1;
                }
                None => break,
            }
        }

        Phrase {
            len,
            reference: self.nodes[node].index,
            prefix: node,
        }
    }

    fn insert(&mut self, rest: &'a [u8], phrase: Phrase<DefaultKey>, index: u16) {
        let key = (phrase.prefix, rest[phrase.len - 1]);
        if self.edges.contains_key(&key) {
            return;
        }
        let child = self.nodes.insert(TrieNode { index });
        self.edges.insert(key, child);
    }

    fn len(&self) -> usize {
        self.edges.len()
    }
}
