//! Property tests over random rotor choices, positions and plugboards.

use enigma::{Machine, MachineConfig, Plugboard, ReflectorId, Rotor, RotorId};
use proptest::prelude::*;

fn rotor_id() -> impl Strategy<Value = RotorId> + Clone {
    prop::sample::select(RotorId::ALL.to_vec())
}

fn reflector_id() -> impl Strategy<Value = ReflectorId> {
    prop::sample::select(ReflectorId::ALL.to_vec())
}

fn letter() -> impl Strategy<Value = char> + Clone {
    (0u8..26).prop_map(|i| (b'A' + i) as char)
}

/// Raw pair strings, including malformed ones the plugboard must drop.
fn raw_pairs() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z0-9]{1,3}", 0..16)
}

fn machine_config() -> impl Strategy<Value = MachineConfig> {
    (
        prop::array::uniform3(rotor_id()),
        reflector_id(),
        prop::array::uniform3(letter()),
        raw_pairs(),
    )
        .prop_map(|(rotors, reflector, positions, plugboard)| MachineConfig {
            rotors: rotors.to_vec(),
            reflector,
            positions: positions.to_vec(),
            plugboard,
        })
}

proptest! {
    #[test]
    fn rotor_backward_undoes_forward(id in rotor_id(), pos in letter(), c in letter()) {
        let mut rotor = Rotor::new(id).unwrap();
        rotor.set_position(pos).unwrap();
        prop_assert_eq!(rotor.backward(rotor.forward(c)), c);
        prop_assert_eq!(rotor.forward(rotor.backward(c)), c);
    }

    #[test]
    fn plugboard_swap_is_involution(pairs in raw_pairs(), c in letter()) {
        let board = Plugboard::new(pairs.as_slice());
        prop_assert_eq!(board.swap(board.swap(c)), c);
        prop_assert_eq!(board.is_connected(c), board.swap(c) != c);
    }

    #[test]
    fn machine_is_self_reciprocal(cfg in machine_config(), text in "[A-Z ,.]{0,64}") {
        let cipher = Machine::new(&cfg).unwrap().encipher_text(&text);
        let plain = Machine::new(&cfg).unwrap().encipher_text(&cipher);
        prop_assert_eq!(plain, text);
    }

    #[test]
    fn no_letter_maps_to_itself(cfg in machine_config(), text in "[A-Z]{1,64}") {
        let mut machine = Machine::new(&cfg).unwrap();
        for c in text.chars() {
            prop_assert_ne!(machine.encipher_char(c), c);
        }
    }

    #[test]
    fn trace_agrees_with_plain_encipher(cfg in machine_config(), text in "[A-Z]{1,32}") {
        let mut plain = Machine::new(&cfg).unwrap();
        let mut traced = Machine::new(&cfg).unwrap();
        let (out, paths) = traced.encipher_text_with_trace(&text);
        prop_assert_eq!(&out, &plain.encipher_text(&text));
        prop_assert_eq!(paths.len(), text.len());
        for (path, lamp) in paths.iter().zip(out.chars()) {
            prop_assert_eq!(path.len(), 11);
            prop_assert_eq!(path.output(), Some(lamp));
        }
        prop_assert_eq!(plain.positions(), traced.positions());
    }
}
