//! Gear silhouettes as plain 2D outlines.
//!
//! The engine does not draw; it hands the host a closed outline it can
//! fill with whatever surface it renders to. One tooth is built once and
//! replicated around the circle, the hub is an annulus with a center
//! hole, and the phase enters as a rigid rotation of the whole outline.

use crate::float_types::{PI, Real, TAU};
use crate::gear::Gear;
use geo::{LineString, Polygon};

/// Samples along the root-circle arc between two consecutive teeth.
const ROOT_ARC_STEPS: usize = 4;

impl Gear {
    /// Outline of the gear at a given phase, centered on the origin.
    ///
    /// The exterior ring walks every tooth counterclockwise: radial flank
    /// up from the root circle to the pitch circle, tapered flank to the
    /// tip, across the tip, and back down, with an arc along the root
    /// circle to the next tooth. The interior ring is the hub hole, a
    /// circle of one third of the root radius with `hub_segments` sides.
    ///
    /// A phase of 0 puts the reference tooth fully horizontal on the
    /// right; a phase of 0.5 puts a gap there.
    pub fn outline(&self, phase: Real, hub_segments: usize) -> Polygon<Real> {
        let pitch_radius = self.pitch_radius();
        let outside_radius = self.outside_radius();
        let inside_radius = self.inside_radius();

        // Half angular width of a tooth at the pitch circle; the tip is
        // half as wide again.
        let half_tooth = PI / (2.0 * self.teeth as Real);
        let half_tip = half_tooth / 2.0;

        let tooth_pitch = TAU / self.teeth as Real;
        let spin = -phase * tooth_pitch;

        let arc_step = (tooth_pitch - 2.0 * half_tooth) / ROOT_ARC_STEPS as Real;

        let mut exterior: Vec<(Real, Real)> =
            Vec::with_capacity(self.teeth as usize * (6 + ROOT_ARC_STEPS - 1) + 1);

        for tooth in 0..self.teeth {
            let base = spin + tooth as Real * tooth_pitch;

            exterior.push(polar(inside_radius, base - half_tooth));
            exterior.push(polar(pitch_radius, base - half_tooth));
            exterior.push(polar(outside_radius, base - half_tip));
            exterior.push(polar(outside_radius, base + half_tip));
            exterior.push(polar(pitch_radius, base + half_tooth));
            exterior.push(polar(inside_radius, base + half_tooth));

            // Root arc toward the next tooth; its final sample would
            // coincide with the next tooth's first point, so stop short.
            for i in 1..ROOT_ARC_STEPS {
                let angle = base + half_tooth + i as Real * arc_step;
                exterior.push(polar(inside_radius, angle));
            }
        }
        // Close path
        exterior.push(exterior[0]);

        let hub = hub_hole(inside_radius / 3.0, hub_segments.max(3));

        Polygon::new(LineString::from(exterior), vec![hub])
    }
}

/// Center hole of the hub, wound clockwise as geo expects of interiors.
fn hub_hole(radius: Real, segments: usize) -> LineString<Real> {
    let mut coords: Vec<(Real, Real)> = (0..segments)
        .map(|i| polar(radius, -TAU * i as Real / segments as Real))
        .collect();
    coords.push(coords[0]);
    LineString::from(coords)
}

fn polar(radius: Real, angle: Real) -> (Real, Real) {
    (radius * angle.cos(), radius * angle.sin())
}
