//! The 26-letter alphabet and index conversions.
//!
//! Every substitution table in the engine is indexed by the canonical
//! zero-based letter index (A=0 ... Z=25).

use crate::error::EnigmaError;

/// Number of symbols in the alphabet.
pub const SIZE: usize = 26;

/// The alphabet in canonical order.
pub const ALPHABET: [char; SIZE] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Normalizes a character to its uppercase alphabet letter.
///
/// # Returns
/// `Some(letter)` for `a-z` and `A-Z`, `None` for anything else.
pub fn normalize(c: char) -> Option<char> {
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(upper)
    } else {
        None
    }
}

/// Returns the canonical index of a letter (case-insensitive).
///
/// # Examples
///
/// ```
/// use enigma::alphabet::index_of;
///
/// assert_eq!(index_of('A'), Some(0));
/// assert_eq!(index_of('z'), Some(25));
/// assert_eq!(index_of('!'), None);
/// ```
pub fn index_of(c: char) -> Option<usize> {
    normalize(c).map(|upper| (upper as u8 - b'A') as usize)
}

/// Returns the letter at a canonical index, wrapping modulo 26.
pub fn letter_at(index: usize) -> char {
    ALPHABET[index % SIZE]
}

/// Returns the index of `c`, or an [`EnigmaError::InvalidInput`] naming it.
pub(crate) fn require_index(c: char) -> Result<usize, EnigmaError> {
    index_of(c).ok_or_else(|| EnigmaError::input(format!("'{}' is not a letter A-Z", c)))
}

/// Shifts an index by a signed offset, modulo 26.
#[inline]
pub(crate) fn shift(index: usize, offset: isize) -> usize {
    (index as isize + offset).rem_euclid(SIZE as isize) as usize
}

/// Parses a 26-letter wiring string into an index permutation.
///
/// # Parameters
/// - `what`: Label used in error messages (e.g. `"rotor III"`).
/// - `wiring`: The wiring, `wiring[i]` being the output letter for input `i`.
///
/// # Errors
/// Returns [`EnigmaError::InvalidConfiguration`] if the wiring is not exactly
/// 26 letters or if any letter appears twice.
pub(crate) fn parse_permutation(what: &str, wiring: &str) -> Result<[u8; SIZE], EnigmaError> {
    let len = wiring.chars().count();
    if len != SIZE {
        return Err(EnigmaError::config(format!(
            "{} wiring must have {} letters, got {}",
            what, SIZE, len
        )));
    }

    let mut table = [0u8; SIZE];
    let mut seen = [false; SIZE];
    for (i, c) in wiring.chars().enumerate() {
        let out = index_of(c).ok_or_else(|| {
            EnigmaError::config(format!("{} wiring contains non-letter '{}'", what, c))
        })?;
        if seen[out] {
            return Err(EnigmaError::config(format!(
                "{} wiring repeats letter '{}'",
                what,
                letter_at(out)
            )));
        }
        seen[out] = true;
        table[i] = out as u8;
    }
    Ok(table)
}

/// Inverts a permutation table.
pub(crate) fn invert(table: &[u8; SIZE]) -> [u8; SIZE] {
    let mut inverse = [0u8; SIZE];
    for (i, &out) in table.iter().enumerate() {
        inverse[out as usize] = i as u8;
    }
    inverse
}
