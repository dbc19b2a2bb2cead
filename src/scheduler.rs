//! Bounded-step rotation scheduling for animated trains.
//!
//! The scheduler owns no timer: the host drives the cadence by applying
//! each [`RotationStep`] over its stated duration, then asking for the
//! next one. Steps are fixed relative rotations, so there is no drift to
//! accumulate and nothing to resynchronize.

use crate::float_types::{HALF_TURN_DEG, Real};
use crate::train::GearTrain;
use std::time::Duration;

/// How a running train animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationStyle {
    /// Only the root gear is rotating.
    SingleGear,
    /// All the gears keep rotating at their meshing ratios.
    #[default]
    KeepGears,
}

/// Lifecycle of a [`RotationScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerState {
    /// No steps are produced.
    #[default]
    Stopped,
    /// Steps are produced until [`RotationScheduler::stop`] is called.
    Running,
}

/// One bounded rotation step.
///
/// Rotating by more than a half turn at once is visually ambiguous under
/// shortest-path interpolation, so every step is scaled down until no
/// gear exceeds 180 degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationStep {
    /// Wall-clock time the host should spread the rotation over.
    pub duration: Duration,

    /// Rotation of each gear in degrees, indexed like the train's nodes.
    pub deltas: Vec<Real>,
}

/// Drives a continuous rotation of a train in bounded-duration steps.
///
/// A snapshot of the per-node rotation weights is taken at construction;
/// the weights themselves were fixed when each node was created, so a
/// scheduler built from a finished train stays valid for its lifetime.
#[derive(Debug, Clone)]
pub struct RotationScheduler {
    weights: Vec<Real>,
    division_factor: u32,
    base_duration: Duration,
    style: RotationStyle,
    state: SchedulerState,
}

impl RotationScheduler {
    /// Default duration of one unscaled half-turn step.
    pub const BASE_DURATION: Duration = Duration::from_secs(1);

    /// Build a scheduler over a train with the default step duration.
    pub fn new(train: &GearTrain, style: RotationStyle) -> Self {
        Self::with_base_duration(train, style, Self::BASE_DURATION)
    }

    /// Build a scheduler over a train, spreading each unscaled half-turn
    /// of the root over `base_duration`.
    pub fn with_base_duration(
        train: &GearTrain,
        style: RotationStyle,
        base_duration: Duration,
    ) -> Self {
        let weights: Vec<Real> =
            train.nodes().iter().map(|node| node.rotation_weight).collect();
        let division_factor = division_factor(&weights);

        Self {
            weights,
            division_factor,
            base_duration,
            style,
            state: SchedulerState::Stopped,
        }
    }

    /// The integer scaling applied to every step, always >= 1.
    pub const fn division_factor(&self) -> u32 {
        self.division_factor
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> SchedulerState {
        self.state
    }

    /// Start producing steps.
    pub fn start(&mut self) {
        self.state = SchedulerState::Running;
    }

    /// Stop producing steps.
    ///
    /// Takes effect at the next step boundary: a step the host is already
    /// animating completes, and the following [`RotationScheduler::next_step`]
    /// returns `None`.
    pub fn stop(&mut self) {
        self.state = SchedulerState::Stopped;
    }

    /// The next rotation step, or `None` while stopped.
    ///
    /// While running, steps repeat indefinitely; each completed step is
    /// meant to trigger this call again from the host's timer.
    pub fn next_step(&mut self) -> Option<RotationStep> {
        if self.state == SchedulerState::Stopped {
            return None;
        }

        let factor = self.division_factor as Real;
        let deltas = match self.style {
            RotationStyle::KeepGears => {
                self.weights.iter().map(|weight| weight / factor).collect()
            },
            RotationStyle::SingleGear => {
                let mut deltas = vec![0.0; self.weights.len()];
                if let Some(root) = deltas.first_mut() {
                    *root = HALF_TURN_DEG / factor;
                }
                deltas
            },
        };

        Some(RotationStep {
            duration: self.base_duration / self.division_factor,
            deltas,
        })
    }
}

/// Minimum integer scaling that keeps every per-step rotation at or below
/// a half turn: `max(1 + floor(|weight| / 180))` across all gears.
fn division_factor(weights: &[Real]) -> u32 {
    weights
        .iter()
        .map(|weight| 1 + (weight.abs() / HALF_TURN_DEG).floor() as u32)
        .max()
        .unwrap_or(1)
}
