//! Signal path recording for a single keystroke.
//!
//! A [`SignalPath`] lists every substitution a letter went through, from the
//! key pressed to the lamp lit. It is diagnostic data for visualisation and
//! has no effect on the cipher itself.

use serde::Serialize;

use crate::alphabet;

/// Stage of the signal route, in routing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Input,
    PlugboardIn,
    RightRotor,
    MiddleRotor,
    LeftRotor,
    Reflector,
    LeftRotorReturn,
    MiddleRotorReturn,
    RightRotorReturn,
    PlugboardOut,
    Output,
}

impl Stage {
    /// Every stage in the order a signal visits them.
    pub const ROUTE: [Stage; 11] = [
        Stage::Input,
        Stage::PlugboardIn,
        Stage::RightRotor,
        Stage::MiddleRotor,
        Stage::LeftRotor,
        Stage::Reflector,
        Stage::LeftRotorReturn,
        Stage::MiddleRotorReturn,
        Stage::RightRotorReturn,
        Stage::PlugboardOut,
        Stage::Output,
    ];
}

/// One substitution along the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignalStep {
    pub stage: Stage,
    pub input: char,
    pub input_index: usize,
    pub output: char,
    pub output_index: usize,
}

/// Ordered record of one keystroke's route. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignalPath {
    steps: Vec<SignalStep>,
}

impl SignalPath {
    pub fn steps(&self) -> &[SignalStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the step recorded for `stage`, if any.
    pub fn step(&self, stage: Stage) -> Option<&SignalStep> {
        self.steps.iter().find(|s| s.stage == stage)
    }

    /// Letter that entered the machine.
    pub fn input(&self) -> Option<char> {
        self.steps.first().map(|s| s.input)
    }

    /// Letter that lit the lamp.
    pub fn output(&self) -> Option<char> {
        self.steps.last().map(|s| s.output)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SignalStep> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a SignalPath {
    type Item = &'a SignalStep;
    type IntoIter = std::slice::Iter<'a, SignalStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Accumulator threaded through the routing function.
///
/// The disabled recorder drops everything, so the untraced path shares the
/// same routing code without allocating.
pub(crate) struct Recorder {
    steps: Option<Vec<SignalStep>>,
}

impl Recorder {
    pub(crate) fn disabled() -> Self {
        Recorder { steps: None }
    }

    pub(crate) fn enabled() -> Self {
        Recorder {
            steps: Some(Vec::with_capacity(Stage::ROUTE.len())),
        }
    }

    /// Records `input -> output` for `stage` and returns `output`.
    pub(crate) fn record(&mut self, stage: Stage, input: usize, output: usize) -> usize {
        if let Some(steps) = self.steps.as_mut() {
            steps.push(SignalStep {
                stage,
                input: alphabet::letter_at(input),
                input_index: input,
                output: alphabet::letter_at(output),
                output_index: output,
            });
        }
        output
    }

    pub(crate) fn finish(self) -> SignalPath {
        SignalPath {
            steps: self.steps.unwrap_or_default(),
        }
    }
}
