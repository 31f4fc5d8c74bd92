/*!
Building blocks to solve letter box puzzles.

Twelve letters sit on the four sides of a square, three per side.
A solution is a chain of words where consecutive letters of a word never come from the same side,
each word starts with the last letter of the previous one, and all twelve letters are used.
This crate finds all such chains of exactly two words.

The pipeline has three steps:

1. Build an [`Index`](index::Index) from a word list.
2. [Generate](generate::generate) every dictionary word that can be spelled on the board.
3. [Pair](pairs::find_pairs) those words into solutions.

# Example

```rust
use letterbox_automaton::{generate, index::Index, pairs, Sides};

// Build the index from a word list - we use some random words
let index = Index::build(["vanquished", "disozonize", "catch", "door"]);

// The four sides of the board
let sides: Sides = "szq udn vei aho".parse()?;

// All words that can be spelled without using two letters from the same side in a row
let words = generate::generate(&sides, &index);
assert!(words.contains("vanquished"));
assert!(words.contains("disozonize"));
assert!(!words.contains("door"));

// Chain the words into solutions that use every letter on the board
let solutions = pairs::find_pairs(&words, sides.letters());
assert_eq!(solutions, [("vanquished", "disozonize")]);
# Ok::<(), letterbox_automaton::SidesError>(())
```

The [`Sides`] also implement [`fst::Automaton`], so a prebuilt [`fst::Set`] can be searched
directly with [`generate::generate_fst`].
*/

#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![warn(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_crate_dependencies,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

use fst::Automaton;
use std::{fmt, str::FromStr};

pub mod generate;
pub mod index;
pub mod pairs;
pub mod prepare;
pub mod types;

use types::{Letter, LetterSet, Side};

/// Words shorter than this are never reported as candidates
pub const MIN_WORD_LEN: usize = 4;

/// Number of letters on one side of the board
pub const SIDE_LEN: usize = 3;

/// Number of letters on the board
pub const BOARD_LEN: usize = Side::COUNT * SIDE_LEN;

/// The four sides of the board, three letters each
///
/// Letters are case-normalized to lowercase.
/// Letters are not required to be distinct, a letter that is placed on two sides
/// can be drawn from either of them.
///
/// # Examples
///
/// ```rust
/// # use letterbox_automaton::Sides;
/// let sides = Sides::new(["cgr", "dhb", "uft", "oal"]).unwrap();
/// assert_eq!(&sides.letters(), b"cgrdhbuftoal");
///
/// let same: Sides = "CGR,DHB,UFT,OAL".parse().unwrap();
/// assert_eq!(sides, same);
///
/// assert!("cgr dhb uft".parse::<Sides>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sides {
    groups: [[Letter; SIDE_LEN]; Side::COUNT],
    letters: [LetterSet; Side::COUNT],
}

const _: () = assert!(
    std::mem::size_of::<Sides>() == 28,
    "Sides should be 28 bytes"
);

impl Sides {
    /// Create the sides from exactly four groups of exactly three ASCII letters
    ///
    /// # Errors
    ///
    /// [`SidesError`] if there are not four groups, a group does not have three letters,
    /// or a group contains anything other than [a-zA-Z]
    pub fn new<I>(sides: I) -> Result<Self, SidesError>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut groups = [[Letter::from_index(0); SIDE_LEN]; Side::COUNT];
        let mut count = 0;

        for (side, group) in sides.into_iter().enumerate() {
            count += 1;
            let Some(target) = groups.get_mut(side) else {
                continue;
            };

            let group = group.as_ref();
            if group.len() != SIDE_LEN {
                return Err(SidesError::SideLength {
                    side,
                    len: group.len(),
                });
            }

            for (slot, &byte) in target.iter_mut().zip(group) {
                *slot = Letter::try_new(byte).ok_or(SidesError::InvalidLetter { side, byte })?;
            }
        }

        if count != Side::COUNT {
            return Err(SidesError::SideCount(count));
        }

        let letters = groups.map(|group| group.into_iter().collect::<LetterSet>());
        Ok(Self { groups, letters })
    }

    /// The three letters on a side
    #[must_use]
    pub const fn group(&self, side: Side) -> [Letter; SIDE_LEN] {
        self.groups[side.index()]
    }

    /// The three letters on a side, as a set
    #[must_use]
    pub const fn side_letters(&self, side: Side) -> LetterSet {
        self.letters[side.index()]
    }

    /// All distinct letters on the board
    #[must_use]
    pub const fn alphabet(&self) -> LetterSet {
        self.letters[0]
            .union(self.letters[1])
            .union(self.letters[2])
            .union(self.letters[3])
    }

    /// All twelve letters on the board, side by side, as lowercase bytes
    #[must_use]
    pub fn letters(&self) -> [u8; BOARD_LEN] {
        let mut letters = [0; BOARD_LEN];
        for (slot, (_, letter)) in letters.iter_mut().zip(self.iter()) {
            *slot = letter.to_byte();
        }
        letters
    }

    /// Iterate over all placed letters together with their side, in board order
    pub fn iter(&self) -> impl Iterator<Item = (Side, Letter)> + '_ {
        Side::ALL
            .into_iter()
            .flat_map(move |side| self.group(side).into_iter().map(move |l| (side, l)))
    }

    /// Bit mask of all sides that hold `letter`
    fn sides_of(&self, letter: Letter) -> u8 {
        Side::ALL
            .into_iter()
            .filter(|&side| self.side_letters(side).contains(letter))
            .fold(0, |mask, side| mask | side.bit())
    }
}

impl FromStr for Sides {
    type Err = SidesError;

    /// Parse four groups separated by commas or whitespace, e.g. `"cgr,dhb,uft,oal"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|group| !group.is_empty()),
        )
    }
}

impl fmt::Display for Sides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, group) in self.groups.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            for letter in group {
                fmt::Display::fmt(letter, f)?;
            }
        }
        Ok(())
    }
}

/// The sides of a board are malformed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidesError {
    /// There must be exactly four sides, contains the number that was given
    SideCount(usize),
    /// A side must have exactly three letters
    SideLength {
        /// 0-based index of the offending side
        side: usize,
        /// number of letters that were given
        len: usize,
    },
    /// Only the letters [a-zA-Z] can be placed on a side
    InvalidLetter {
        /// 0-based index of the offending side
        side: usize,
        /// the offending byte
        byte: u8,
    },
}

impl fmt::Display for SidesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SideCount(count) => write!(
                f,
                "A board has {} sides, but {} were given",
                Side::COUNT,
                count
            ),
            Self::SideLength { side, len } => write!(
                f,
                "Side {} must have {} letters, but has {}",
                side + 1,
                SIDE_LEN,
                len
            ),
            Self::InvalidLetter { side, byte } => write!(
                f,
                "Side {} contains {:?}, only the letters a to z are allowed",
                side + 1,
                char::from(*byte)
            ),
        }
    }
}

impl std::error::Error for SidesError {}

/// The state to use during automaton matching
///
/// Cannot be used directly, but it is returned from [`fst::Set::search_with_state`].
#[derive(Copy, Clone, Debug)]
pub struct WalkState {
    /// The sides that the previous letter might have been drawn from
    sides: u8,
    len: u32,
}

impl Automaton for Sides {
    type State = Option<WalkState>;

    fn start(&self) -> Self::State {
        Some(WalkState { sides: 0, len: 0 })
    }

    fn is_match(&self, state: &Self::State) -> bool {
        state.map_or(false, |s| s.len as usize >= MIN_WORD_LEN)
    }

    fn accept(&self, state: &Self::State, byte: u8) -> Self::State {
        // we are already a non-match
        let state = (*state)?;

        // byte is invalid, i.e. not [a-zA-Z]
        let letter = Letter::try_new(byte)?;

        // a single possible previous side is blocked, several leave every side open
        let blocked = if state.sides.is_power_of_two() {
            state.sides
        } else {
            0
        };

        let sides = self.sides_of(letter) & !blocked;
        // letter is not on the board or only on the side we just came from
        if sides == 0 {
            return None;
        }

        Some(WalkState {
            sides,
            len: state.len.saturating_add(1),
        })
    }

    fn can_match(&self, state: &Self::State) -> bool {
        state.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fst::{IntoStreamer, Set};

    #[test]
    fn test_parse_sides() {
        let sides: Sides = "cgr dhb uft oal".parse().unwrap();
        assert_eq!(&sides.letters(), b"cgrdhbuftoal");
        assert_eq!(sides.to_string(), "cgr,dhb,uft,oal");
        assert_eq!(sides.alphabet().len(), 12);

        let upper: Sides = " CGR, DHB ,UFT,OAL ".parse().unwrap();
        assert_eq!(sides, upper);
    }

    #[test]
    fn test_too_few_sides() {
        assert_eq!(
            "cgr,dhb,uft".parse::<Sides>(),
            Err(SidesError::SideCount(3))
        );
        assert_eq!("".parse::<Sides>(), Err(SidesError::SideCount(0)));
    }

    #[test]
    fn test_too_many_sides() {
        assert_eq!(
            Sides::new(["abc", "def", "ghi", "jkl", "mno"]),
            Err(SidesError::SideCount(5))
        );
    }

    #[test]
    fn test_side_length() {
        assert_eq!(
            Sides::new(["abc", "de", "ghi", "jkl"]),
            Err(SidesError::SideLength { side: 1, len: 2 })
        );
        assert_eq!(
            Sides::new(["abc", "def", "ghi", ""]),
            Err(SidesError::SideLength { side: 3, len: 0 })
        );
    }

    #[test]
    fn test_invalid_letter() {
        let err = Sides::new(["abc", "def", "g1i", "jkl"]).unwrap_err();
        assert_eq!(err, SidesError::InvalidLetter { side: 2, byte: b'1' });
        assert_eq!(
            err.to_string(),
            "Side 3 contains '1', only the letters a to z are allowed"
        );
    }

    #[test]
    fn test_duplicate_letters_are_kept() {
        let sides = Sides::new(["doa", "rbc", "eof", "ghi"]).unwrap();
        assert_eq!(sides.alphabet().len(), 11);
        assert_eq!(sides.letters().len(), BOARD_LEN);
        assert_eq!(sides.sides_of(Letter::try_new(b'o').unwrap()), 0b101);
    }

    fn search(sides: &Sides, words: &[&str]) -> Vec<String> {
        let set = Set::from_iter(words).unwrap();
        set.search(sides).into_stream().into_strs().unwrap()
    }

    #[test]
    fn test_automaton_side_rule() {
        let sides: Sides = "cgr dhb uft oal".parse().unwrap();
        assert_eq!(
            search(&sides, &["catch", "door", "rat", "tact"]),
            ["catch", "tact"]
        );

        let sides: Sides = "chr dgb uft oal".parse().unwrap();
        assert!(search(&sides, &["catch", "door"]).is_empty());
    }

    #[test]
    fn test_automaton_min_length() {
        let sides: Sides = "cgr dhb uft oal".parse().unwrap();
        assert_eq!(search(&sides, &["cat", "cathode"]), Vec::<String>::new());
        assert_eq!(search(&sides, &["bath", "cat"]), ["bath"]);
    }

    #[test]
    fn test_automaton_letter_on_two_sides() {
        // 'o' is on the first and the third side, "door" can use both
        let sides = Sides::new(["doa", "rbc", "eof", "ghi"]).unwrap();
        assert_eq!(search(&sides, &["door"]), ["door"]);

        // with 'o' only on one side, the double letter is impossible
        let sides = Sides::new(["doa", "rbc", "eif", "ghj"]).unwrap();
        assert!(search(&sides, &["door"]).is_empty());
    }
}
