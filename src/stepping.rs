//! Stepping mechanism.
//!
//! Runs before every enciphered letter. Both notch readings are taken from
//! the pre-step state and act independently:
//!
//! 1. middle rotor at its notch: middle and left rotors step (double-step);
//! 2. right rotor at its notch: middle rotor steps;
//! 3. the right rotor always steps.
//!
//! When both notches are engaged in the same keystroke the middle rotor
//! steps twice.

use tracing::trace;

use crate::rotor::Rotor;

/// Index of each rotor in the machine's left-to-right slot order.
pub(crate) const LEFT: usize = 0;
pub(crate) const MIDDLE: usize = 1;
pub(crate) const RIGHT: usize = 2;

/// Which notches engaged during one stepping cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Middle rotor was at its notch: middle and left both stepped.
    pub double_step: bool,
    /// Right rotor was at its notch: middle stepped.
    pub carry: bool,
}

impl StepReport {
    /// Returns `true` if the left rotor moved.
    pub fn left_moved(&self) -> bool {
        self.double_step
    }

    /// Number of positions the middle rotor advanced (0, 1 or 2).
    pub fn middle_steps(&self) -> u8 {
        self.double_step as u8 + self.carry as u8
    }
}

/// Advances the rotors for one keystroke.
pub(crate) fn advance(rotors: &mut [Rotor; 3]) -> StepReport {
    let report = StepReport {
        double_step: rotors[MIDDLE].is_at_notch(),
        carry: rotors[RIGHT].is_at_notch(),
    };

    if report.double_step {
        rotors[MIDDLE].rotate();
        rotors[LEFT].rotate();
    }
    if report.carry {
        rotors[MIDDLE].rotate();
    }
    rotors[RIGHT].rotate();

    if report.double_step || report.carry {
        trace!(
            double_step = report.double_step,
            carry = report.carry,
            left = %rotors[LEFT].position(),
            middle = %rotors[MIDDLE].position(),
            right = %rotors[RIGHT].position(),
            "rotor turnover"
        );
    }
    report
}
