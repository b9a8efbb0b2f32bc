//! Rotor: stateful wired substitution disk.
//!
//! A rotor carries a fixed internal wiring and a rotational offset (the
//! letter visible in its window). The signal enters at a contact, crosses
//! the wiring rotated by `position` steps and leaves at a shifted contact.
//! The inverse wiring is computed once at construction since it never
//! changes.

use crate::alphabet::{self, SIZE};
use crate::catalog::RotorId;
use crate::error::EnigmaError;

/// Stateful rotor instance owned by a single machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    forward: [u8; SIZE],
    backward: [u8; SIZE],
    notch: u8,
    position: u8,
}

impl Rotor {
    /// Builds one of the catalog rotors at position `A`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Rotor, RotorId};
    ///
    /// let rotor = Rotor::new(RotorId::I).unwrap();
    /// assert_eq!(rotor.forward('A'), 'E');
    /// ```
    pub fn new(id: RotorId) -> Result<Self, EnigmaError> {
        let spec = id.spec();
        Self::from_wiring(id.name(), spec.wiring, spec.notch)
    }

    /// Builds a rotor from an arbitrary wiring.
    ///
    /// # Parameters
    /// - `name`: Label used in diagnostics.
    /// - `wiring`: 26-letter forward wiring permutation.
    /// - `notch`: Window letter at which the rotor carries its neighbour.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidConfiguration`] if the wiring is not a
    /// 26-letter permutation or the notch is not a letter.
    ///
    /// ```
    /// use enigma::Rotor;
    ///
    /// assert!(Rotor::from_wiring("short", "ABC", 'A').is_err());
    /// ```
    pub fn from_wiring(
        name: impl Into<String>,
        wiring: &str,
        notch: char,
    ) -> Result<Self, EnigmaError> {
        let name = name.into();
        let forward = alphabet::parse_permutation(&format!("rotor {}", name), wiring)?;
        let notch = alphabet::index_of(notch).ok_or_else(|| {
            EnigmaError::config(format!("rotor {} notch '{}' is not a letter", name, notch))
        })?;
        Ok(Rotor {
            name,
            backward: alphabet::invert(&forward),
            forward,
            notch: notch as u8,
            position: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Letter currently visible in the window.
    pub fn position(&self) -> char {
        alphabet::letter_at(self.position as usize)
    }

    pub fn notch(&self) -> char {
        alphabet::letter_at(self.notch as usize)
    }

    /// Passes a letter through the rotor towards the reflector.
    ///
    /// Non-letters are returned unchanged.
    pub fn forward(&self, letter: char) -> char {
        map_letter(letter, |i| self.forward_index(i))
    }

    /// Passes a letter through the rotor on the way back from the reflector.
    pub fn backward(&self, letter: char) -> char {
        map_letter(letter, |i| self.backward_index(i))
    }

    pub(crate) fn forward_index(&self, index: usize) -> usize {
        self.through(&self.forward, index)
    }

    pub(crate) fn backward_index(&self, index: usize) -> usize {
        self.through(&self.backward, index)
    }

    fn through(&self, table: &[u8; SIZE], index: usize) -> usize {
        let offset = self.position as isize;
        let contact = alphabet::shift(index, offset);
        alphabet::shift(table[contact] as usize, -offset)
    }

    /// Advances the rotor by one position, wrapping Z to A.
    pub fn rotate(&mut self) {
        self.position = ((self.position as usize + 1) % SIZE) as u8;
    }

    /// Returns `true` when the window shows the notch letter.
    pub fn is_at_notch(&self) -> bool {
        self.position == self.notch
    }

    /// Turns the rotor so that `letter` shows in the window.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidInput`] if `letter` is not A-Z
    /// (lowercase is accepted).
    pub fn set_position(&mut self, letter: char) -> Result<(), EnigmaError> {
        self.position = alphabet::require_index(letter)? as u8;
        Ok(())
    }
}

fn map_letter(letter: char, f: impl Fn(usize) -> usize) -> char {
    match alphabet::index_of(letter) {
        Some(i) => alphabet::letter_at(f(i)),
        None => letter,
    }
}
