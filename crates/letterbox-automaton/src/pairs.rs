//! Chain candidate words into two-word solutions

use crate::types::{Letter, LetterSet};
use std::{cmp::Reverse, collections::HashSet};

#[derive(Clone, Copy, Debug)]
struct Entry<'w> {
    word: &'w str,
    letters: LetterSet,
    first: Letter,
    last: Letter,
}

impl<'w> Entry<'w> {
    fn new(word: &'w str) -> Option<Self> {
        let bytes = word.as_bytes();
        Some(Self {
            word,
            letters: LetterSet::from_word(bytes)?,
            first: Letter::try_new(*bytes.first()?)?,
            last: Letter::try_new(*bytes.last()?)?,
        })
    }
}

/// Find all ordered pairs of words that chain into a solution
///
/// A pair `(a, b)` is a solution if `a` ends with the letter that `b` starts with,
/// both words together are at least as long as the `alphabet`,
/// and together they use every distinct letter of the `alphabet` and no other letter.
/// Letters may repeat within and across the words.
///
/// Words are compared case-insensitively and deduplicated, a word never pairs with itself.
/// Empty words and words with characters other than [a-zA-Z] are ignored.
///
/// Solutions are ordered by the length of the first word, longest first, and otherwise
/// keep the order of the input.
///
/// # Examples
///
/// ```rust
/// # use letterbox_automaton::pairs::find_pairs;
/// let solutions = find_pairs(&["vanquished", "disozonize"], "vanquishedoz");
/// assert_eq!(solutions, [("vanquished", "disozonize")]);
///
/// assert!(find_pairs(&["CAT", "DOG"], "CATDOG").is_empty());
/// ```
#[must_use]
pub fn find_pairs<'w, I, S>(words: I, alphabet: impl AsRef<[u8]>) -> Vec<(&'w str, &'w str)>
where
    I: IntoIterator<Item = &'w S>,
    S: AsRef<str> + ?Sized + 'w,
{
    let alphabet = alphabet.as_ref();
    let target = alphabet
        .iter()
        .copied()
        .filter_map(Letter::try_new)
        .collect::<LetterSet>();

    // the first spelling of a word wins, later ones in another case are dropped
    let mut seen = HashSet::<String>::new();
    let mut entries = words
        .into_iter()
        .map(S::as_ref)
        .filter(|word| seen.insert(word.to_ascii_lowercase()))
        .filter_map(Entry::new)
        .collect::<Vec<_>>();

    // stable, equal lengths keep the input order
    entries.sort_by_key(|e| Reverse(e.word.len()));

    let mut starting_with = vec![Vec::new(); Letter::COUNT];
    for (idx, entry) in entries.iter().enumerate() {
        starting_with[entry.first.index()].push(idx);
    }

    let mut pairs = Vec::new();
    for (i, head) in entries.iter().enumerate() {
        for &j in &starting_with[head.last.index()] {
            if i == j {
                continue;
            }

            let tail = &entries[j];
            // the candidates are sorted by length, no later tail can be long enough
            if head.word.len() + tail.word.len() < alphabet.len() {
                break;
            }

            if head.letters.union(tail.letters) == target {
                pairs.push((head.word, tail.word));
            }
        }
    }

    log::debug!(
        "Found {} solutions among {} candidate words",
        pairs.len(),
        entries.len()
    );

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_pair() {
        let alphabet = ["v", "a", "n", "q", "u", "i", "s", "h", "e", "d", "o", "z"].concat();
        let solutions = find_pairs(&["vanquished", "disozonize"], &alphabet);

        assert!(!solutions.is_empty());
        for (first, second) in &solutions {
            assert_eq!(first.as_bytes().last(), second.as_bytes().first());
            let letters = LetterSet::from_word(format!("{first}{second}")).unwrap();
            assert_eq!(letters.len(), 12);
        }
        assert_eq!(solutions, [("vanquished", "disozonize")]);
    }

    #[test]
    fn test_no_matching_boundary() {
        assert!(find_pairs(&["CAT", "DOG"], "CATDOG").is_empty());
    }

    #[test]
    fn test_not_all_letters_used() {
        let words = ["CAT", "DOG", "RAT", "DOOR", "BUN", "FUN", "PIXEL"];
        let solutions = find_pairs(&words, "CATDOGRBUNF");
        assert!(solutions.is_empty());
    }

    #[test]
    fn test_repeated_letters_on_board() {
        // seven distinct letters, placed twelve times
        let solutions = find_pairs(&["tracod", "dogcart"], "doorratcatdg");
        assert_eq!(solutions, [("dogcart", "tracod"), ("tracod", "dogcart")]);
    }

    #[test]
    fn test_length_covers_every_placed_letter() {
        // all distinct letters are used, but the words are shorter than the board
        let solutions = find_pairs(&["abca", "acb"], "abcabcabcabc");
        assert!(solutions.is_empty());
    }

    #[test]
    fn test_letters_outside_alphabet() {
        let solutions = find_pairs(&["fghijklx", "xabcdef"], "abcdefghijkl");
        assert!(solutions.is_empty());
    }

    #[test]
    fn test_longest_first() {
        let words = ["fghijkl", "labcdef", "lkjabcdef"];
        let solutions = find_pairs(&words, "abcdefghijkl");
        assert_eq!(
            solutions,
            [
                ("lkjabcdef", "fghijkl"),
                ("fghijkl", "lkjabcdef"),
                ("fghijkl", "labcdef"),
                ("labcdef", "fghijkl"),
            ]
        );
        assert!(solutions
            .windows(2)
            .all(|w| w[0].0.len() >= w[1].0.len()));
    }

    #[test]
    fn test_never_pairs_with_itself() {
        assert!(find_pairs(&["tact"], "tac").is_empty());
        assert!(find_pairs(&["tact", "tact"], "tac").is_empty());
    }

    #[test]
    fn test_never_pairs_with_itself_in_another_case() {
        assert!(find_pairs(&["tact", "TACT"], "tac").is_empty());
        assert!(find_pairs(&["Tact", "tAcT", "TACT"], "tac").is_empty());

        // the first spelling is the one that is kept
        let solutions = find_pairs(&["Vanquished", "vanquished", "disozonize"], "vanquishedoz");
        assert_eq!(solutions, [("Vanquished", "disozonize")]);
    }

    #[test]
    fn test_case_insensitive() {
        let solutions = find_pairs(&["Vanquished", "DISOZONIZE"], "vanquishedoz");
        assert_eq!(solutions, [("Vanquished", "DISOZONIZE")]);
    }

    #[test]
    fn test_ignore_malformed_words() {
        let solutions = find_pairs(&["", "can't", "tact", "tac-t"], "tac");
        assert!(solutions.is_empty());
    }

    #[test]
    fn test_empty() {
        assert!(find_pairs(Vec::<String>::new().iter(), "abcdefghijkl").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let words = ["fghijkl", "labcdef", "lkjabcdef", "tracod", "dogcart"];
        assert_eq!(
            find_pairs(&words, "abcdefghijkl"),
            find_pairs(&words, "abcdefghijkl")
        );
    }
}
