//! Enigma M3 rotor cipher engine.
//!
//! Simulates the three-rotor Enigma: interchangeable rotors I-V, reflectors
//! B and C, and a plugboard. Each keystroke steps the rotors (including the
//! middle-rotor double-step) and then routes the letter through plugboard,
//! rotors, reflector, rotors and plugboard again. The machine is
//! self-reciprocal: the same settings encipher and decipher.
//!
//! # Architecture
//!
//! ```text
//! Catalog    (RotorId / ReflectorId -> canonical wiring and notch)
//!     |
//! Rotor, Reflector, Plugboard   (substitution components)
//!     |
//! Machine    (stepping + 9-stage routing, optional SignalPath trace)
//! ```
//!
//! # Examples
//!
//! Encipher and decipher with the same settings:
//!
//! ```
//! use enigma::{Machine, MachineConfig};
//!
//! let config = MachineConfig {
//!     plugboard: vec!["AQ".into(), "BT".into()],
//!     ..MachineConfig::default()
//! };
//!
//! let mut sender = Machine::new(&config).unwrap();
//! let cipher = sender.encipher_text("HELLO, WORLD");
//! assert_eq!(cipher, "ILTDQ, QMBQZ");
//!
//! let mut receiver = Machine::new(&config).unwrap();
//! assert_eq!(receiver.encipher_text(&cipher), "HELLO, WORLD");
//! ```
//!
//! Follow a single keystroke through the machine:
//!
//! ```
//! use enigma::{Machine, MachineConfig, Stage};
//!
//! let mut machine = Machine::new(&MachineConfig::default()).unwrap();
//! let (lamp, path) = machine.encipher_char_with_trace('A');
//! assert_eq!(lamp, 'B');
//! assert_eq!(path.step(Stage::Reflector).unwrap().output, 'S');
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod catalog;
pub mod error;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod stepping;
pub mod trace;

pub use catalog::{available_reflector_ids, available_rotor_ids, ReflectorId, RotorId};
pub use error::EnigmaError;
pub use machine::{Machine, MachineConfig};
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use stepping::StepReport;
pub use trace::{SignalPath, SignalStep, Stage};
