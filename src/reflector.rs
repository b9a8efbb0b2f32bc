//! Reflector: fixed involutive wiring that turns the signal around.

use crate::alphabet::{self, SIZE};
use crate::catalog::ReflectorId;
use crate::error::EnigmaError;

/// Stateless reflector. Pairs all 26 letters into 13 disjoint swaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    name: String,
    wiring: [u8; SIZE],
}

impl Reflector {
    /// Builds one of the catalog reflectors.
    pub fn new(id: ReflectorId) -> Result<Self, EnigmaError> {
        Self::from_wiring(id.name(), id.spec().wiring)
    }

    /// Builds a reflector from an arbitrary wiring.
    ///
    /// The wiring must be a 26-letter permutation that is its own inverse and
    /// maps no letter to itself.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidConfiguration`] otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Reflector;
    ///
    /// // Identity wiring has fixed points.
    /// assert!(Reflector::from_wiring("id", "ABCDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
    /// ```
    pub fn from_wiring(name: impl Into<String>, wiring: &str) -> Result<Self, EnigmaError> {
        let name = name.into();
        let table = alphabet::parse_permutation(&format!("reflector {}", name), wiring)?;
        for (i, &out) in table.iter().enumerate() {
            let out = out as usize;
            if out == i {
                return Err(EnigmaError::config(format!(
                    "reflector {} maps '{}' to itself",
                    name,
                    alphabet::letter_at(i)
                )));
            }
            if table[out] as usize != i {
                return Err(EnigmaError::config(format!(
                    "reflector {} is not symmetric at '{}'",
                    name,
                    alphabet::letter_at(i)
                )));
            }
        }
        Ok(Reflector { name, wiring: table })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reflects a letter. Non-letters are returned unchanged.
    pub fn reflect(&self, letter: char) -> char {
        match alphabet::index_of(letter) {
            Some(i) => alphabet::letter_at(self.reflect_index(i)),
            None => letter,
        }
    }

    pub(crate) fn reflect_index(&self, index: usize) -> usize {
        self.wiring[index] as usize
    }
}
