//! Machine: stepping plus signal routing for a three-rotor M3.
//!
//! Each keystroke first steps the rotors, then routes the letter
//! plugboard -> right, middle, left rotor -> reflector -> left, middle, right
//! rotor -> plugboard. Every stage is an involution or one half of a
//! mutually inverse pair, so a machine reset to the same start positions
//! deciphers its own ciphertext.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alphabet;
use crate::catalog::{ReflectorId, RotorId};
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::stepping::{self, StepReport, LEFT, MIDDLE, RIGHT};
use crate::trace::{Recorder, SignalPath, Stage};

/// Number of rotor slots in the machine body.
pub const ROTOR_COUNT: usize = 3;

/// Settings a caller picks before building a machine.
///
/// Rotors and positions are listed left to right. The lengths are checked
/// by [`Machine::new`], not by deserialization, so a configuration with the
/// wrong number of rotors is reported as an [`EnigmaError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub rotors: Vec<RotorId>,
    pub reflector: ReflectorId,
    pub positions: Vec<char>,
    pub plugboard: Vec<String>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            rotors: vec![RotorId::I, RotorId::II, RotorId::III],
            reflector: ReflectorId::B,
            positions: vec!['A', 'A', 'A'],
            plugboard: Vec::new(),
        }
    }
}

impl MachineConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidConfiguration`] if the JSON is malformed
    /// or names an unknown rotor or reflector.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{MachineConfig, RotorId};
    ///
    /// let config = MachineConfig::from_json(r#"{"rotors": ["II", "IV", "V"]}"#).unwrap();
    /// assert_eq!(config.rotors, vec![RotorId::II, RotorId::IV, RotorId::V]);
    /// assert_eq!(config.positions, vec!['A', 'A', 'A']);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, EnigmaError> {
        serde_json::from_str(json).map_err(|e| EnigmaError::config(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, EnigmaError> {
        serde_json::to_string(self).map_err(|e| EnigmaError::config(e.to_string()))
    }
}

/// A configured three-rotor machine.
///
/// The machine exclusively owns its rotors, reflector and plugboard. The
/// rotor positions are its only state that changes while typing; changing
/// rotor types, reflector or plugboard means building a new machine.
///
/// A machine is not meant to be shared between callers: interleaving
/// keystrokes from two sessions corrupts the stepping sequence of both.
///
/// # Examples
///
/// ```
/// use enigma::{Machine, MachineConfig};
///
/// let config = MachineConfig::default();
/// let mut machine = Machine::new(&config).unwrap();
/// assert_eq!(machine.encipher_text("AAAAA"), "BDZGO");
///
/// machine.reset();
/// assert_eq!(machine.encipher_text("BDZGO"), "AAAAA");
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    rotors: [Rotor; ROTOR_COUNT],
    reflector: Reflector,
    plugboard: Plugboard,
    start: [char; ROTOR_COUNT],
}

impl Machine {
    /// Builds a machine from catalog settings.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidConfiguration`] if the rotor or position count
    ///   is not 3.
    /// - [`EnigmaError::InvalidInput`] if a position is not a letter.
    pub fn new(config: &MachineConfig) -> Result<Self, EnigmaError> {
        let rotors = config
            .rotors
            .iter()
            .map(|&id| Rotor::new(id))
            .collect::<Result<Vec<_>, _>>()?;
        let mut machine = Self::from_parts(
            rotors,
            Reflector::new(config.reflector)?,
            Plugboard::new(config.plugboard.as_slice()),
        )?;
        machine.set_positions(&config.positions)?;
        machine.start = machine.positions();

        debug!(
            rotors = ?config.rotors,
            reflector = %config.reflector,
            positions = %machine.start.iter().collect::<String>(),
            cables = machine.plugboard.pairs().len(),
            "machine configured"
        );
        Ok(machine)
    }

    /// Assembles a machine from already built components, rotors listed
    /// left to right. Start positions are the rotors' current positions.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidConfiguration`] unless exactly 3 rotors
    /// are given.
    pub fn from_parts(
        rotors: Vec<Rotor>,
        reflector: Reflector,
        plugboard: Plugboard,
    ) -> Result<Self, EnigmaError> {
        let count = rotors.len();
        let rotors: [Rotor; ROTOR_COUNT] = rotors.try_into().map_err(|_| {
            EnigmaError::config(format!("expected {} rotors, got {}", ROTOR_COUNT, count))
        })?;
        let start = [
            rotors[LEFT].position(),
            rotors[MIDDLE].position(),
            rotors[RIGHT].position(),
        ];
        Ok(Machine {
            rotors,
            reflector,
            plugboard,
            start,
        })
    }

    pub fn rotors(&self) -> &[Rotor; ROTOR_COUNT] {
        &self.rotors
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Window letters, left to right.
    pub fn positions(&self) -> [char; ROTOR_COUNT] {
        [
            self.rotors[LEFT].position(),
            self.rotors[MIDDLE].position(),
            self.rotors[RIGHT].position(),
        ]
    }

    /// Turns all three rotors to new window letters, left to right.
    ///
    /// Either every rotor moves or none does.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidConfiguration`] if not exactly 3 letters are
    ///   given.
    /// - [`EnigmaError::InvalidInput`] if any of them is not a letter.
    pub fn set_positions(&mut self, positions: &[char]) -> Result<(), EnigmaError> {
        if positions.len() != ROTOR_COUNT {
            return Err(EnigmaError::config(format!(
                "expected {} positions, got {}",
                ROTOR_COUNT,
                positions.len()
            )));
        }
        let mut staged = self.rotors.clone();
        for (rotor, &letter) in staged.iter_mut().zip(positions) {
            rotor.set_position(letter)?;
        }
        self.rotors = staged;
        Ok(())
    }

    /// Returns the rotors to the positions the machine was built with.
    pub fn reset(&mut self) {
        for (rotor, &letter) in self.rotors.iter_mut().zip(self.start.iter()) {
            // start letters were validated when the machine was built
            let _ = rotor.set_position(letter);
        }
        debug!(positions = %self.start.iter().collect::<String>(), "machine reset");
    }

    /// Runs one stepping cycle without enciphering anything.
    pub fn step(&mut self) -> StepReport {
        stepping::advance(&mut self.rotors)
    }

    /// Enciphers one character.
    ///
    /// Letters (either case) step the rotors and come back as an uppercase
    /// letter. Any other character is returned unchanged and the rotors do
    /// not move.
    pub fn encipher_char(&mut self, c: char) -> char {
        match alphabet::index_of(c) {
            Some(index) => {
                self.step();
                alphabet::letter_at(self.route(index, &mut Recorder::disabled()))
            }
            None => c,
        }
    }

    /// Enciphers one character and records its route.
    ///
    /// The path is empty for non-letters.
    pub fn encipher_char_with_trace(&mut self, c: char) -> (char, SignalPath) {
        match alphabet::index_of(c) {
            Some(index) => {
                self.step();
                let mut recorder = Recorder::enabled();
                let out = self.route(index, &mut recorder);
                (alphabet::letter_at(out), recorder.finish())
            }
            None => (c, SignalPath::default()),
        }
    }

    /// Enciphers a text character by character; stepping carries across the
    /// whole text.
    pub fn encipher_text(&mut self, text: &str) -> String {
        text.chars().map(|c| self.encipher_char(c)).collect()
    }

    /// Enciphers a text and returns one signal path per character.
    pub fn encipher_text_with_trace(&mut self, text: &str) -> (String, Vec<SignalPath>) {
        text.chars().map(|c| self.encipher_char_with_trace(c)).unzip()
    }

    fn route(&self, index: usize, rec: &mut Recorder) -> usize {
        let [left, middle, right] = &self.rotors;

        let x = rec.record(Stage::Input, index, index);
        let x = rec.record(Stage::PlugboardIn, x, self.plugboard.swap_index(x));
        let x = rec.record(Stage::RightRotor, x, right.forward_index(x));
        let x = rec.record(Stage::MiddleRotor, x, middle.forward_index(x));
        let x = rec.record(Stage::LeftRotor, x, left.forward_index(x));
        let x = rec.record(Stage::Reflector, x, self.reflector.reflect_index(x));
        let x = rec.record(Stage::LeftRotorReturn, x, left.backward_index(x));
        let x = rec.record(Stage::MiddleRotorReturn, x, middle.backward_index(x));
        let x = rec.record(Stage::RightRotorReturn, x, right.backward_index(x));
        let x = rec.record(Stage::PlugboardOut, x, self.plugboard.swap_index(x));
        rec.record(Stage::Output, x, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(positions: &str, plugs: &[&str]) -> Machine {
        let config = MachineConfig {
            positions: positions.chars().collect(),
            plugboard: plugs.iter().map(|p| p.to_string()).collect(),
            ..MachineConfig::default()
        };
        Machine::new(&config).unwrap()
    }

    #[test]
    fn test_known_vector_default() {
        let mut m = machine("AAA", &[]);
        assert_eq!(m.encipher_text("AAAAA"), "BDZGO");
        assert_eq!(m.positions(), ['A', 'A', 'F']);
    }

    #[test]
    fn test_lowercase_is_enciphered_uppercase() {
        let mut m = machine("AAA", &[]);
        assert_eq!(m.encipher_text("aaaaa"), "BDZGO");
    }

    #[test]
    fn test_non_letter_does_not_step() {
        let mut m = machine("AAA", &[]);
        assert_eq!(m.encipher_char('7'), '7');
        assert_eq!(m.positions(), ['A', 'A', 'A']);
    }

    #[test]
    fn test_trace_route_for_first_key() {
        let mut m = machine("AAA", &[]);
        let (out, path) = m.encipher_char_with_trace('A');
        assert_eq!(out, 'B');
        let stages: Vec<Stage> = path.iter().map(|s| s.stage).collect();
        assert_eq!(stages, Stage::ROUTE.to_vec());
        let letters: String = path.iter().map(|s| s.output).collect();
        assert_eq!(letters, "AACDFSSEBBB");
        assert_eq!(path.input(), Some('A'));
        assert_eq!(path.output(), Some('B'));
    }

    #[test]
    fn test_trace_links_consecutive_stages() {
        let mut m = machine("QEV", &["AZ", "GH"]);
        for c in "THEQUICKBROWNFOX".chars() {
            let (out, path) = m.encipher_char_with_trace(c);
            for pair in path.steps().windows(2) {
                assert_eq!(pair[0].output_index, pair[1].input_index);
            }
            assert_eq!(path.output(), Some(out));
        }
    }

    #[test]
    fn test_trace_empty_for_non_letter() {
        let mut m = machine("AAA", &[]);
        let (out, path) = m.encipher_char_with_trace(' ');
        assert_eq!(out, ' ');
        assert!(path.is_empty());
    }

    #[test]
    fn test_set_positions_count() {
        let mut m = machine("AAA", &[]);
        let err = m.set_positions(&['A', 'B']).unwrap_err();
        assert_eq!(err, EnigmaError::config("expected 3 positions, got 2"));
    }

    #[test]
    fn test_set_positions_is_atomic() {
        let mut m = machine("AAA", &[]);
        let err = m.set_positions(&['X', 'Y', '!']).unwrap_err();
        assert!(matches!(err, EnigmaError::InvalidInput(_)));
        assert_eq!(m.positions(), ['A', 'A', 'A']);
    }

    #[test]
    fn test_reset_returns_to_start() {
        let mut m = machine("MCK", &[]);
        m.encipher_text("SOMELONGERTEXTTHATSTEPS");
        assert_ne!(m.positions(), ['M', 'C', 'K']);
        m.reset();
        assert_eq!(m.positions(), ['M', 'C', 'K']);
    }

    #[test]
    fn test_wrong_rotor_count() {
        let config = MachineConfig {
            rotors: vec![RotorId::I, RotorId::II],
            ..MachineConfig::default()
        };
        let err = Machine::new(&config).unwrap_err();
        assert_eq!(err, EnigmaError::config("expected 3 rotors, got 2"));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = MachineConfig {
            rotors: vec![RotorId::IV, RotorId::V, RotorId::I],
            reflector: ReflectorId::C,
            positions: vec!['Q', 'Z', 'J'],
            plugboard: vec!["AZ".into(), "BY".into()],
        };
        let json = config.to_json().unwrap();
        assert_eq!(MachineConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_config_json_rejects_unknown_rotor() {
        let err = MachineConfig::from_json(r#"{"rotors": ["I", "II", "IX"]}"#).unwrap_err();
        assert!(matches!(err, EnigmaError::InvalidConfiguration(_)));
    }
}
