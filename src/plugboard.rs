//! Plugboard: symmetric pairwise letter swaps.
//!
//! Construction is lenient. Pair strings that are not exactly two letters
//! are dropped without error so that partially typed input never rejects a
//! configuration. When a letter is reused, the later pair wins and the
//! letter's earlier partner goes back to mapping to itself, which keeps the
//! mapping an involution.

use tracing::debug;

use crate::alphabet::{self, SIZE};

/// Total letter mapping, each letter to itself or to its cable partner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    mapping: [u8; SIZE],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::empty()
    }
}

impl Plugboard {
    /// Plugboard with no cables.
    pub fn empty() -> Self {
        let mut mapping = [0u8; SIZE];
        for (i, slot) in mapping.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Plugboard { mapping }
    }

    /// Builds a plugboard from raw pair strings such as `"AQ"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Plugboard;
    ///
    /// let board = Plugboard::new(&["aq", "B?", "TOO", "bt"]);
    /// assert_eq!(board.swap('A'), 'Q');
    /// assert_eq!(board.swap('T'), 'B');
    /// assert_eq!(board.pairs(), vec![('A', 'Q'), ('B', 'T')]);
    /// ```
    pub fn new<S: AsRef<str>>(pairs: &[S]) -> Self {
        let mut board = Self::empty();
        for raw in pairs {
            let raw = raw.as_ref();
            match parse_pair(raw) {
                Some((a, b)) => board.connect(a, b),
                None => debug!(pair = raw, "dropping malformed plugboard pair"),
            }
        }
        board
    }

    fn connect(&mut self, a: usize, b: usize) {
        for letter in [a, b] {
            let old = self.mapping[letter] as usize;
            if old != letter {
                debug!(
                    letter = %alphabet::letter_at(letter),
                    previous = %alphabet::letter_at(old),
                    "plugboard letter reused, later pair wins"
                );
                self.mapping[old] = old as u8;
                self.mapping[letter] = letter as u8;
            }
        }
        self.mapping[a] = b as u8;
        self.mapping[b] = a as u8;
    }

    /// Returns the partner of `letter`, or `letter` itself when it has no
    /// cable or is not a letter.
    pub fn swap(&self, letter: char) -> char {
        match alphabet::index_of(letter) {
            Some(i) => alphabet::letter_at(self.swap_index(i)),
            None => letter,
        }
    }

    pub(crate) fn swap_index(&self, index: usize) -> usize {
        self.mapping[index] as usize
    }

    /// Returns `true` if a cable is plugged into `letter`.
    pub fn is_connected(&self, letter: char) -> bool {
        alphabet::index_of(letter).is_some_and(|i| self.swap_index(i) != i)
    }

    /// Active cables as `(low, high)` pairs in alphabetical order.
    pub fn pairs(&self) -> Vec<(char, char)> {
        self.mapping
            .iter()
            .enumerate()
            .filter(|&(i, &out)| (out as usize) > i)
            .map(|(i, &out)| (alphabet::letter_at(i), alphabet::letter_at(out as usize)))
            .collect()
    }
}

fn parse_pair(raw: &str) -> Option<(usize, usize)> {
    let mut chars = raw.chars();
    let a = alphabet::index_of(chars.next()?)?;
    let b = alphabet::index_of(chars.next()?)?;
    if chars.next().is_some() {
        return None;
    }
    Some((a, b))
}
