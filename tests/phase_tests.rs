//! Phase propagation: the correctness-critical math.
//!
//! Expected values are worked out by hand from the meshing rule: walk the
//! mounting ray across the parent's tooth pattern, aim a gap of the child
//! at the contact point (half a tooth more for odd tooth counts), then
//! rebase onto the child's own tooth grid.

use approx::assert_relative_eq;
use geartrain::GearTrain;
use geartrain::float_types::{EPSILON, Real};

#[test]
fn two_gear_closed_form() {
    // Root 12 teeth, child 16 teeth mounted at 30 degrees, root phase 0.
    //
    //   parent tooth = 30 deg -> 30/30 passed = 1.0, frac 0
    //   raw = 0.5 + 0 - 0 = 0.5 (even child, no parity shift)
    //   child tooth = 22.5 deg -> 30/22.5 = 4/3, frac 1/3, rebase 1 - 1/3
    //   final = 0.5 - 2/3 = -1/6
    let mut train = GearTrain::new();
    train.add_root(12, 16.0).unwrap();
    let child = train.add_linked(0, 16, 30.0).unwrap();

    assert_relative_eq!(
        train.nodes()[child].phase,
        -1.0 / 6.0,
        epsilon = EPSILON
    );

    // The insertion-time phase and a full propagation pass must agree.
    train.set_root_phase(0.0);
    assert_relative_eq!(
        train.nodes()[child].phase,
        -1.0 / 6.0,
        epsilon = EPSILON
    );
}

#[test]
fn two_gear_closed_form_nonzero_root_phase() {
    let mut train = GearTrain::new();
    train.add_root(12, 16.0).unwrap();
    let child = train.add_linked(0, 16, 30.0).unwrap();

    // raw = 0.5 + 0 - 0.25, final = 0.25 - 2/3 = -5/12
    train.set_root_phase(0.25);
    assert_relative_eq!(
        train.nodes()[child].phase,
        -5.0 / 12.0,
        epsilon = EPSILON
    );
}

#[test]
fn wide_mounting_angle_closed_form() {
    // Child 32 teeth at 190 degrees:
    //   parent frac = frac(190/30) = 1/3, raw = 0.5 + 1/3 = 5/6
    //   child frac = frac(190/11.25) = 8/9, rebase 1 - 8/9 = 1/9
    //   final = 5/6 - 1/9 = 13/18
    let mut train = GearTrain::new();
    train.add_root(12, 16.0).unwrap();
    let child = train.add_linked(0, 32, 190.0).unwrap();

    assert_relative_eq!(
        train.nodes()[child].phase,
        13.0 / 18.0,
        epsilon = EPSILON
    );
}

#[test]
fn chain_propagates_through_negative_angles() {
    // Root 12 -> child 16 at 30 deg -> grandchild 40 at -30 deg.
    //
    // The child lands at -1/6; for the grandchild the negative mounting
    // angle exercises the floor-based fraction:
    //   parent frac = frac(-30/22.5) = frac(-4/3) = 2/3
    //   raw = 0.5 + 2/3 + 1/6 = 4/3 -> 1/3
    //   own frac = frac(-30/9) = 2/3, rebase 1/3
    //   final = 1/3 - 1/3 = 0
    let mut train = GearTrain::new();
    train.add_root(12, 16.0).unwrap();
    let child = train.add_linked(0, 16, 30.0).unwrap();
    let grandchild = train.add_linked(child, 40, -30.0).unwrap();

    train.set_root_phase(0.0);
    assert_relative_eq!(train.nodes()[grandchild].phase, 0.0, epsilon = EPSILON);
}

#[test]
fn odd_tooth_count_shifts_half_a_tooth() {
    let mut even = GearTrain::new();
    even.add_root(12, 16.0).unwrap();
    let e = even.add_linked(0, 16, 0.0).unwrap();

    let mut odd = GearTrain::new();
    odd.add_root(12, 16.0).unwrap();
    let o = odd.add_linked(0, 15, 0.0).unwrap();

    // At angle 0 both children rebase by a full tooth; the raw phases
    // differ by exactly the half-tooth parity shift (renormalized).
    assert_relative_eq!(even.nodes()[e].phase, -0.5, epsilon = EPSILON);
    assert_relative_eq!(odd.nodes()[o].phase, -1.0, epsilon = EPSILON);
}

#[test]
fn out_of_range_phase_resets_to_zero() {
    let mut train = GearTrain::new();
    train.add_root(12, 16.0).unwrap();
    train.add_linked(0, 16, 30.0).unwrap();

    for out_of_range in [1.0, 1.5, 42.0, -0.1, -3.0] {
        train.set_root_phase(0.75);
        train.set_root_phase(out_of_range);
        // Reset, not wrapped.
        assert_eq!(train.nodes()[0].phase, 0.0);
    }

    train.set_root_phase(0.9999);
    assert_relative_eq!(train.nodes()[0].phase, 0.9999, epsilon = EPSILON);
}

#[test]
fn set_root_phase_is_idempotent() {
    let mut train = GearTrain::new();
    train.add_root(12, 16.0).unwrap();
    train.add_linked(0, 16, 30.0).unwrap();
    train.add_linked(1, 40, -30.0).unwrap();
    train.add_linked(0, 15, 120.0).unwrap();

    train.set_root_phase(0.37);
    let first: Vec<Real> = train.nodes().iter().map(|n| n.phase).collect();

    train.set_root_phase(0.37);
    let second: Vec<Real> = train.nodes().iter().map(|n| n.phase).collect();

    assert_eq!(first, second);
}

#[test]
fn empty_train_ignores_phase_updates() {
    let mut train = GearTrain::new();
    train.set_root_phase(0.5);
    assert!(train.is_empty());
}

#[test]
fn rotation_angle_spans_one_tooth_per_phase_cycle() {
    let mut train = GearTrain::new();
    train.add_root(12, 16.0).unwrap();

    train.set_root_phase(0.5);
    let angle = train.rotation_angle(0).unwrap();

    // Half a phase = half a tooth = pi / teeth, turning clockwise.
    assert_relative_eq!(
        angle,
        -geartrain::float_types::PI / 12.0,
        epsilon = EPSILON
    );
}
