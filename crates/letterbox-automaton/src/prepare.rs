//! Various methods to prepare a raw word list for the [`Index`](crate::index::Index)
//! or for an FST that can be searched with the [`Sides`](crate::Sides) automaton

use crate::MIN_WORD_LEN;
use fst::Set;
use std::{collections::HashSet, fmt::Display};

/// Clean a word list by removing all words that can never be a candidate
///
/// Words are trimmed and lowercased. Words that are too short, or that contain anything but
/// ASCII letters, are removed, as are duplicates. The order of the first occurrence is kept.
pub fn clean_word_list<I>(words: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn valid_word(word: &str) -> bool {
        word.len() >= MIN_WORD_LEN && word.bytes().all(|b| b.is_ascii_alphabetic())
    }

    let mut seen = HashSet::with_capacity(1024);
    let mut cleaned = Vec::with_capacity(1024);
    let mut dropped = 0_usize;

    for word in words {
        let word = word.as_ref().trim();
        if !valid_word(word) {
            dropped += 1;
            continue;
        }

        let word = word.to_ascii_lowercase();
        if seen.insert(word.clone()) {
            cleaned.push(word);
        }
    }

    log::debug!(
        "Kept {} words, dropped {} invalid or short entries",
        cleaned.len(),
        dropped
    );

    cleaned
}

/// Build an FST set from a word list
///
/// The words are lowercased, sorted, and deduplicated first, so any order is accepted.
///
/// # Errors
///
/// [`BuildFstError`] if the FST could not be constructed
pub fn build_fst<I, K>(words: I) -> Result<Set<Vec<u8>>, BuildFstError>
where
    I: IntoIterator<Item = K>,
    K: AsRef<[u8]>,
{
    let mut words = words
        .into_iter()
        .map(|w| w.as_ref().to_ascii_lowercase())
        .collect::<Vec<_>>();
    words.sort_unstable();
    words.dedup();

    Set::from_iter(words).map_err(BuildFstError)
}

#[derive(Debug)]
/// Word list could not be turned into an FST
pub struct BuildFstError(fst::Error);

impl Display for BuildFstError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad("The word list could not be compiled into an FST")
    }
}

impl std::error::Error for BuildFstError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}
