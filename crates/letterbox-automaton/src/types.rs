//! Small value types shared by the index, the generator, and the pair solver

use std::fmt;

/// A letter that can be placed on the board, only ASCII letters, i.e. [a-z]
///
/// Upper and lower case map to the same letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Letter(u8);

impl Letter {
    /// Number of distinct letters
    pub const COUNT: usize = 26;

    /// Create a new letter
    ///
    /// Returns None if the byte is not in [a-zA-Z]
    #[must_use]
    pub const fn try_new(b: u8) -> Option<Self> {
        match b {
            b'a'..=b'z' => Some(Self(b - b'a')),
            b'A'..=b'Z' => Some(Self(b - b'A')),
            _ => None,
        }
    }

    /// The dense index of this letter, in 0..26
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The canonical lowercase byte of this letter
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        b'a' + self.0
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::COUNT);
        // index is always below 26
        #[allow(clippy::cast_possible_truncation)]
        Self(index as u8)
    }
}

impl From<Letter> for u8 {
    fn from(letter: Letter) -> Self {
        letter.to_byte()
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        Self::from(letter.to_byte())
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&char::from(*self), f)
    }
}

/// A set of letters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Collect the letters of a word into a set
    ///
    /// Returns None if the word contains anything other than [a-zA-Z]
    #[must_use]
    pub fn from_word(word: impl AsRef<[u8]>) -> Option<Self> {
        word.as_ref()
            .iter()
            .try_fold(Self::new(), |set, &b| Letter::try_new(b).map(|l| set.add(l)))
    }

    /// Test if a letter is contained in this set, O(1)
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        (self.0 >> letter.0) & 1 == 1
    }

    /// Add a letter to this set, O(1)
    #[must_use]
    pub const fn add(self, letter: Letter) -> Self {
        Self(self.0 | (1 << letter.0))
    }

    /// Union of both sets, O(1)
    #[must_use]
    pub const fn union(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }

    /// Number of distinct letters in this set, O(1)
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true iff the set is empty
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over all letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        (0..Letter::COUNT)
            .filter(move |&idx| (self.0 >> idx) & 1 == 1)
            .map(Letter::from_index)
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<T: IntoIterator<Item = Letter>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), Self::add)
    }
}

/// One of the four sides of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Side(u8);

impl Side {
    /// Number of sides on a board
    pub const COUNT: usize = 4;

    /// All sides, in board order
    pub const ALL: [Self; Self::COUNT] = [Self(0), Self(1), Self(2), Self(3)];

    /// The index of this side, in 0..4
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn bit(self) -> u8 {
        1 << self.0
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "side {}", self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_try_new() {
        assert_eq!(Letter::try_new(b'a'), Some(Letter(0)));
        assert_eq!(Letter::try_new(b'z'), Some(Letter(25)));
        assert_eq!(Letter::try_new(b'A'), Some(Letter(0)));
        assert_eq!(Letter::try_new(b'Z'), Some(Letter(25)));
        assert_eq!(Letter::try_new(b' '), None);
        assert_eq!(Letter::try_new(b'0'), None);
        assert_eq!(Letter::try_new(b'\''), None);
        assert_eq!(Letter::try_new(b'-'), None);
    }

    #[test]
    fn test_letter_is_lowercase() {
        assert_eq!(u8::from(Letter(0)), b'a');
        assert_eq!(char::from(Letter(25)), 'z');
        assert_eq!(Letter::try_new(b'Q').map(Letter::to_byte), Some(b'q'));
        assert_eq!(Letter(7).to_string(), "h");
    }

    #[test]
    fn test_set() {
        let set = LetterSet::new();
        assert!(set.is_empty());
        assert!(!set.contains(Letter(0)));

        let set = set.add(Letter(0)).add(Letter(1));
        assert!(set.contains(Letter(0)));
        assert!(set.contains(Letter(1)));
        assert!(!set.contains(Letter(2)));
        assert_eq!(set.len(), 2);

        // set semantics
        let set = set.add(Letter(0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_set_from_word() {
        let set = LetterSet::from_word("Door").unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().map(char::from).collect::<String>(), "dor");

        assert_eq!(LetterSet::from_word(""), Some(LetterSet::new()));
        assert_eq!(LetterSet::from_word("can't"), None);
    }

    #[test]
    fn test_set_union() {
        let lhs = LetterSet::from_word("vanquished").unwrap();
        let rhs = LetterSet::from_word("disozonize").unwrap();
        assert_eq!(lhs.union(rhs).len(), 12);
        assert_eq!(lhs.union(rhs), rhs.union(lhs));
        assert_eq!(lhs.union(LetterSet::new()), lhs);
    }

    #[test]
    fn test_side_bits_are_distinct() {
        let mask = Side::ALL.iter().fold(0_u8, |mask, side| mask | side.bit());
        assert_eq!(mask, 0b1111);
        assert_eq!(Side::ALL[2].to_string(), "side 3");
    }
}
