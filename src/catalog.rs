//! Catalog of the historical M3 rotors and reflectors.
//!
//! Maps each identifier to its canonical wiring and notch. The tables must
//! match the historical wiring exactly for the engine to reproduce known
//! Enigma test vectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EnigmaError;

/// Immutable descriptor of a catalog rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSpec {
    pub id: RotorId,
    /// Forward wiring, `wiring[i]` is the output letter for input index `i`.
    pub wiring: &'static str,
    /// Window letter at which this rotor carries its left neighbour.
    pub notch: char,
}

/// Immutable descriptor of a catalog reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorSpec {
    pub id: ReflectorId,
    pub wiring: &'static str,
}

/// Interchangeable rotors I-V.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RotorId {
    I,
    II,
    III,
    IV,
    V,
}

/// Reflectors B and C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReflectorId {
    B,
    C,
}

static ROTOR_SPECS: [RotorSpec; 5] = [
    RotorSpec {
        id: RotorId::I,
        wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        notch: 'Q',
    },
    RotorSpec {
        id: RotorId::II,
        wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
        notch: 'E',
    },
    RotorSpec {
        id: RotorId::III,
        wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
        notch: 'V',
    },
    RotorSpec {
        id: RotorId::IV,
        wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
        notch: 'J',
    },
    RotorSpec {
        id: RotorId::V,
        wiring: "VZBRGITYUPSDNHLXAWMJQOFECK",
        notch: 'Z',
    },
];

static REFLECTOR_SPECS: [ReflectorSpec; 2] = [
    ReflectorSpec {
        id: ReflectorId::B,
        wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
    },
    ReflectorSpec {
        id: ReflectorId::C,
        wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL",
    },
];

impl RotorId {
    /// All catalog rotors in order.
    pub const ALL: [RotorId; 5] = [RotorId::I, RotorId::II, RotorId::III, RotorId::IV, RotorId::V];

    /// Returns the canonical wiring and notch of this rotor.
    pub fn spec(self) -> &'static RotorSpec {
        &ROTOR_SPECS[self as usize]
    }

    /// Roman-numeral name of the rotor.
    pub fn name(self) -> &'static str {
        match self {
            RotorId::I => "I",
            RotorId::II => "II",
            RotorId::III => "III",
            RotorId::IV => "IV",
            RotorId::V => "V",
        }
    }
}

impl ReflectorId {
    /// All catalog reflectors in order.
    pub const ALL: [ReflectorId; 2] = [ReflectorId::B, ReflectorId::C];

    /// Returns the canonical wiring of this reflector.
    pub fn spec(self) -> &'static ReflectorSpec {
        &REFLECTOR_SPECS[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            ReflectorId::B => "B",
            ReflectorId::C => "C",
        }
    }
}

/// Identifiers of the rotors the engine can build, for populating selectors.
pub fn available_rotor_ids() -> &'static [RotorId] {
    &RotorId::ALL
}

/// Identifiers of the reflectors the engine can build.
pub fn available_reflector_ids() -> &'static [ReflectorId] {
    &ReflectorId::ALL
}

impl fmt::Display for RotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ReflectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RotorId {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RotorId::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EnigmaError::config(format!("unknown rotor '{}'", wanted)))
    }
}

impl FromStr for ReflectorId {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ReflectorId::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EnigmaError::config(format!("unknown reflector '{}'", wanted)))
    }
}

// Ids travel as their printed names ("III", "B") in configuration files.

impl Serialize for RotorId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for RotorId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for ReflectorId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ReflectorId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_lookup_matches_id() {
        for id in RotorId::ALL {
            assert_eq!(id.spec().id, id);
        }
        for id in ReflectorId::ALL {
            assert_eq!(id.spec().id, id);
        }
    }

    #[test]
    fn test_rotor_notches() {
        let notches: Vec<char> = RotorId::ALL.iter().map(|id| id.spec().notch).collect();
        assert_eq!(notches, vec!['Q', 'E', 'V', 'J', 'Z']);
    }

    #[test]
    fn test_parse_ids_case_insensitive() {
        assert_eq!("iv".parse::<RotorId>().unwrap(), RotorId::IV);
        assert_eq!(" III ".parse::<RotorId>().unwrap(), RotorId::III);
        assert_eq!("c".parse::<ReflectorId>().unwrap(), ReflectorId::C);
    }

    #[test]
    fn test_parse_unknown_id() {
        assert_eq!(
            "VI".parse::<RotorId>().unwrap_err(),
            EnigmaError::config("unknown rotor 'VI'")
        );
        assert!("A".parse::<ReflectorId>().is_err());
    }

    #[test]
    fn test_available_ids() {
        assert_eq!(available_rotor_ids().len(), 5);
        assert_eq!(
            available_reflector_ids(),
            &[ReflectorId::B, ReflectorId::C]
        );
    }

    #[test]
    fn test_ids_serialize_as_names() {
        let json = serde_json::to_string(&[RotorId::I, RotorId::V]).unwrap();
        assert_eq!(json, r#"["I","V"]"#);
        let back: Vec<RotorId> = serde_json::from_str(r#"["ii","IV"]"#).unwrap();
        assert_eq!(back, vec![RotorId::II, RotorId::IV]);
        let refl: ReflectorId = serde_json::from_str(r#""B""#).unwrap();
        assert_eq!(refl, ReflectorId::B);
    }
}
