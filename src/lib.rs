//! A **gear train** layout and phase synchronization engine: a rooted tree
//! of meshing gears where each gear's size, position and rotational phase
//! stay mechanically consistent with its parent as the train rotates.
//!
//! From only a tooth count, a shared diametral pitch, a parent index and a
//! mounting angle, the engine derives the exact radius, center and phase of
//! every gear so teeth interlock at all times, including continuously while
//! animating at different angular velocities per gear. Rendering and timing
//! stay with the host: the engine hands out centers, phases, rotation
//! transforms, per-step rotation deltas and ready-made outlines.
//!
//! # Features
//! - **f64**: use f64 as Real (default)
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod gear;
pub mod outline;
pub mod scheduler;
pub mod train;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::TrainError;
pub use gear::Gear;
pub use scheduler::{RotationScheduler, RotationStep, RotationStyle, SchedulerState};
pub use train::{GearNode, GearTrain, NodeId};
