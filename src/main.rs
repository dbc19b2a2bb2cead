// main.rs
//
// Minimal example exercising the public API: the six-gear demo train,
// a layout pass, scroll-driven phase updates and a few animation steps.

use geartrain::float_types::Real;
use geartrain::{GearTrain, RotationScheduler, RotationStyle, TrainError};
use nalgebra::Point2;

fn main() -> Result<(), TrainError> {
    let mut train = GearTrain::new();

    // Root gear: 12 teeth at a 16 unit pitch radius, fixing the
    // diametral pitch for everything linked below.
    let root = train.add_root(12, 16.0)?;

    let upper = train.add_linked(root, 16, 30.0)?;
    let lower = train.add_linked(root, 32, 190.0)?;
    let outer = train.add_linked(upper, 40, -30.0)?;
    let back = train.add_linked(lower, 24, -190.0)?;
    let _tiny = train.add_linked(back, 10, 40.0)?;

    // Anchor the root where the host wants it and place everything else.
    train.relayout(Point2::new(160.0, 240.0));

    println!("diametral pitch: {}", train.diametral_pitch());
    for (id, node) in train.nodes().iter().enumerate() {
        println!(
            "gear {}: {} teeth, center ({:.2}, {:.2}), phase {:.4}",
            id, node.gear.teeth, node.center.x, node.center.y, node.phase
        );
    }

    // A host would feed scroll offsets here; sweep the phase instead.
    for step in 0..4 {
        train.set_root_phase(step as Real * 0.25);
        let angle = train.rotation_angle(outer).unwrap_or(0.0);
        println!(
            "root phase {:.2} -> outer gear phase {:.4}, transform {:.4} rad",
            step as Real * 0.25,
            train.nodes()[outer].phase,
            angle
        );
    }

    // Continuous rotation, all gears meshing.
    let mut scheduler = RotationScheduler::new(&train, RotationStyle::KeepGears);
    scheduler.start();
    println!("division factor: {}", scheduler.division_factor());

    for _ in 0..3 {
        if let Some(step) = scheduler.next_step() {
            println!("step over {:?}: {:.2?} deg", step.duration, step.deltas);
        }
    }
    scheduler.stop();
    assert!(scheduler.next_step().is_none());

    // Outline data a renderer would fill.
    let outline = train.nodes()[root].gear.outline(0.0, 32);
    println!(
        "root outline: {} exterior points, {} hub points",
        outline.exterior().0.len(),
        outline.interiors()[0].0.len()
    );

    Ok(())
}
