//! A prefix index (trie) over a dictionary
//!
//! The index is built once from a word list and is immutable afterwards.
//! Every node knows which letters continue a valid prefix, which is what the
//! [generator](crate::generate) uses to prune its search.

use crate::types::{Letter, LetterSet};
use smallvec::SmallVec;
use std::{fmt, num::NonZeroU32};

/// Arena position of a non-root node, the root lives at 0 and is never a child
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
struct NodeId(NonZeroU32);

impl NodeId {
    const fn get(self) -> usize {
        self.0.get() as usize
    }
}

#[derive(Clone, Debug)]
struct Node {
    children: [Option<NodeId>; Letter::COUNT],
    letters: LetterSet,
    is_word: bool,
}

const _: () = assert!(
    std::mem::size_of::<Node>() == 112,
    "Node should be 112 bytes"
);

impl Node {
    const fn new() -> Self {
        Self {
            children: [None; Letter::COUNT],
            letters: LetterSet::new(),
            is_word: false,
        }
    }
}

/// Prefix index over a list of words
///
/// Words are case-normalized, `"Catch"` and `"CATCH"` are the same entry.
/// Words that contain anything other than ASCII letters are skipped, they can never be
/// spelled on a board.
///
/// The empty string is a valid entry and marks the root as a word;
/// callers that do not want this must filter it out before building.
///
/// # Examples
///
/// ```rust
/// # use letterbox_automaton::index::Index;
/// let index = Index::build(["cat", "catch"]);
/// assert!(index.contains("CAT"));
/// assert!(!index.contains("ca"));
///
/// let ca = index.root().walk("ca").unwrap();
/// assert!(!ca.is_word());
/// assert_eq!(ca.letters().iter().map(char::from).collect::<String>(), "t");
/// ```
#[derive(Clone)]
pub struct Index {
    nodes: Vec<Node>,
    words: usize,
}

impl Index {
    /// Create an index that contains no words
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            words: 0,
        }
    }

    /// Build an index from a word list
    ///
    /// The shape of the index does not depend on the order of the words.
    ///
    /// # Panics
    ///
    /// Panics if the dictionary needs more than `u32::MAX` nodes
    #[must_use]
    pub fn build<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut index = Self::new();
        let mut skipped = 0_usize;
        for word in words {
            if !index.insert(word.as_ref()) {
                skipped += 1;
            }
        }
        log::debug!(
            "Indexed {} words in {} nodes, skipped {} entries with non-letter characters",
            index.words,
            index.nodes.len(),
            skipped
        );
        index
    }

    fn insert(&mut self, word: &str) -> bool {
        let letters = match word
            .bytes()
            .map(Letter::try_new)
            .collect::<Option<SmallVec<[Letter; 32]>>>()
        {
            Some(letters) => letters,
            None => return false,
        };

        let mut current = 0;
        for letter in letters {
            let slot = letter.index();
            let existing = self.nodes[current].children[slot];
            current = match existing {
                Some(child) => child.get(),
                None => {
                    let id = u32::try_from(self.nodes.len())
                        .ok()
                        .and_then(NonZeroU32::new)
                        .map(NodeId)
                        .expect("dictionary index cannot hold more than u32::MAX nodes");
                    self.nodes.push(Node::new());
                    let node = &mut self.nodes[current];
                    node.children[slot] = Some(id);
                    node.letters = node.letters.add(letter);
                    id.get()
                }
            };
        }

        let node = &mut self.nodes[current];
        if !node.is_word {
            node.is_word = true;
            self.words += 1;
        }
        true
    }

    /// The node for the empty prefix
    #[must_use]
    pub const fn root(&self) -> Prefix<'_> {
        Prefix { index: self, id: 0 }
    }

    /// Find the node for the given prefix, if any word starts with it
    #[must_use]
    pub fn find(&self, prefix: impl AsRef<[u8]>) -> Option<Prefix<'_>> {
        self.root().walk(prefix)
    }

    /// Test if the word is part of the dictionary
    #[must_use]
    pub fn contains(&self, word: impl AsRef<[u8]>) -> bool {
        self.find(word).map_or(false, Prefix::is_word)
    }

    /// Number of distinct words in the index
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words
    }

    /// Returns true iff the index contains no words
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes, including the root
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for Index {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Index {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::build(iter)
    }
}

impl fmt::Debug for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Index")
            .field("words", &self.words)
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

/// A node in the [`Index`], representing one dictionary prefix
#[derive(Clone, Copy)]
pub struct Prefix<'a> {
    index: &'a Index,
    id: usize,
}

impl<'a> Prefix<'a> {
    fn node(self) -> &'a Node {
        &self.index.nodes[self.id]
    }

    /// Move to the node that extends this prefix by `letter`, O(1)
    #[must_use]
    pub fn child(self, letter: Letter) -> Option<Self> {
        self.node().children[letter.index()].map(|id| Self {
            index: self.index,
            id: id.get(),
        })
    }

    /// Follow all bytes of `suffix`, returns None if any byte leaves the dictionary
    #[must_use]
    pub fn walk(self, suffix: impl AsRef<[u8]>) -> Option<Self> {
        suffix
            .as_ref()
            .iter()
            .try_fold(self, |node, &b| node.child(Letter::try_new(b)?))
    }

    /// Returns true iff this prefix is a complete dictionary word
    #[must_use]
    pub fn is_word(self) -> bool {
        self.node().is_word
    }

    /// The letters that continue this prefix to another valid prefix
    #[must_use]
    pub fn letters(self) -> LetterSet {
        self.node().letters
    }

    /// Returns false if no dictionary word extends this prefix
    #[must_use]
    pub fn has_children(self) -> bool {
        !self.node().letters.is_empty()
    }

    /// Iterate over all child nodes together with their letter, in alphabetical order
    pub fn children(self) -> impl Iterator<Item = (Letter, Prefix<'a>)> {
        self.letters()
            .iter()
            .filter_map(move |letter| Some((letter, self.child(letter)?)))
    }
}

impl fmt::Debug for Prefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prefix")
            .field("id", &self.id)
            .field("is_word", &self.is_word())
            .field("letters", &self.letters())
            .finish()
    }
}
