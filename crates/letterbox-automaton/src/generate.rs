//! Generate all dictionary words that can be spelled on a board
//!
//! A word can be spelled if no two consecutive letters come from the same side.
//! The same side may be used again after a letter from another side.

use crate::{
    index::{Index, Prefix},
    types::{Letter, Side},
    Sides, MIN_WORD_LEN,
};
use fst::{IntoStreamer, Set};
use smallvec::SmallVec;
use std::collections::BTreeSet;

/// How a search over the index ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// Every reachable prefix was visited, the candidates are complete
    Exhausted,
    /// The search stopped after visiting the maximum number of nodes,
    /// the candidates found so far are incomplete
    Truncated {
        /// number of nodes visited before stopping
        visited: u64,
    },
}

/// The result of a [`Generator`] run
#[derive(Clone, Debug)]
pub struct Candidates {
    words: BTreeSet<String>,
    visited: u64,
    status: SearchStatus,
}

impl Candidates {
    /// All words found, lowercase and in alphabetical order
    #[must_use]
    pub const fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    /// Take the words that were found
    #[must_use]
    pub fn into_words(self) -> BTreeSet<String> {
        self.words
    }

    /// Whether the search ran to completion
    #[must_use]
    pub const fn status(&self) -> SearchStatus {
        self.status
    }

    /// Returns true iff the search was stopped early and the words are incomplete
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        matches!(self.status, SearchStatus::Truncated { .. })
    }

    /// Number of index nodes that were visited
    #[must_use]
    pub const fn visited(&self) -> u64 {
        self.visited
    }
}

/// Depth-first search over an [`Index`], restricted by the [`Sides`] of a board
///
/// # Examples
///
/// ```rust
/// # use letterbox_automaton::{generate::{Generator, SearchStatus}, index::Index, Sides};
/// let index = Index::build(["catch", "tact", "door"]);
/// let sides: Sides = "cgr dhb uft oal".parse().unwrap();
///
/// let candidates = Generator::new(&sides, &index).run();
/// assert_eq!(candidates.status(), SearchStatus::Exhausted);
/// assert_eq!(candidates.words().len(), 2);
///
/// let truncated = Generator::new(&sides, &index).max_visits(3).run();
/// assert!(truncated.is_truncated());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Generator<'a> {
    sides: &'a Sides,
    index: &'a Index,
    max_visits: Option<u64>,
}

/// A pending node on the search stack
#[derive(Clone, Copy, Debug)]
struct Step<'a> {
    node: Prefix<'a>,
    letter: Letter,
    side: Side,
    /// length of the word before `letter` is added
    depth: usize,
}

impl<'a> Generator<'a> {
    /// Create a search without a limit on the number of visited nodes
    #[must_use]
    pub const fn new(sides: &'a Sides, index: &'a Index) -> Self {
        Self {
            sides,
            index,
            max_visits: None,
        }
    }

    /// Stop the search after visiting `max_visits` nodes of the index
    ///
    /// A stopped search reports [`SearchStatus::Truncated`].
    #[must_use]
    pub const fn max_visits(mut self, max_visits: u64) -> Self {
        self.max_visits = Some(max_visits);
        self
    }

    /// Run the search
    #[must_use]
    pub fn run(&self) -> Candidates {
        let mut stack = SmallVec::<[Step<'a>; 64]>::new();
        let mut word = Vec::<u8>::with_capacity(32);
        let mut words = BTreeSet::new();
        let mut visited = 0_u64;
        let mut status = SearchStatus::Exhausted;

        // the first letter may come from any side
        self.push_steps(&mut stack, self.index.root(), None, 0);

        while let Some(step) = stack.pop() {
            if self.max_visits.map_or(false, |max| visited >= max) {
                status = SearchStatus::Truncated { visited };
                break;
            }
            visited += 1;

            word.truncate(step.depth);
            word.push(step.letter.to_byte());

            log::trace!(
                "Visiting '{}', took '{}' from {}",
                String::from_utf8_lossy(&word),
                step.letter,
                step.side
            );

            if step.node.is_word() && word.len() >= MIN_WORD_LEN {
                let _ = words.insert(word.iter().copied().map(char::from).collect::<String>());
            }

            // no dictionary word continues this prefix
            if !step.node.has_children() {
                continue;
            }

            self.push_steps(&mut stack, step.node, Some(step.side), word.len());
        }

        log::debug!(
            "Generated {} candidate words for {} after visiting {} nodes ({:?})",
            words.len(),
            self.sides,
            visited,
            status
        );

        Candidates {
            words,
            visited,
            status,
        }
    }

    fn push_steps<const N: usize>(
        &self,
        stack: &mut SmallVec<[Step<'a>; N]>,
        node: Prefix<'a>,
        last: Option<Side>,
        depth: usize,
    ) {
        // pushed in reverse so that sides and letters are popped in board order
        for side in Side::ALL.into_iter().rev() {
            if Some(side) == last {
                continue;
            }
            for letter in self.sides.group(side).into_iter().rev() {
                match node.child(letter) {
                    Some(child) => stack.push(Step {
                        node: child,
                        letter,
                        side,
                        depth,
                    }),
                    None => log::trace!("No word continues with '{}' from {}", letter, side),
                }
            }
        }
    }
}

/// Find all words of the index that can be spelled on the board
///
/// Searches without a visit limit, see [`Generator`] for a bounded search.
#[must_use]
pub fn generate(sides: &Sides, index: &Index) -> BTreeSet<String> {
    Generator::new(sides, index).run().into_words()
}

/// Find all words of an FST set that can be spelled on the board
///
/// Returns the same words as [`generate`] for a set that holds the same lowercase words.
///
/// # Errors
///
/// Returns an error if a matching key of the set is not valid UTF-8
pub fn generate_fst<D>(sides: &Sides, set: &Set<D>) -> fst::Result<BTreeSet<String>>
where
    D: AsRef<[u8]>,
{
    let words = set.search(sides).into_stream().into_strs()?;
    log::debug!("Found {} candidate words for {} in the FST", words.len(), sides);
    Ok(words.into_iter().collect())
}
