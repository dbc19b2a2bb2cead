//! Gear train assembly: tree construction, spatial layout and phase
//! propagation.
//!
//! A [`GearTrain`] owns an append-only arena of [`GearNode`]s. Node 0 is
//! always the root; every later node records the index of the parent it
//! meshes with and the fixed mounting angle toward it, so the structure is
//! a rooted tree by construction and never needs cycle handling.

use crate::errors::TrainError;
use crate::float_types::{FULL_TURN_DEG, HALF_TURN_DEG, Real, TAU};
use crate::gear::Gear;
use nalgebra::{Point2, Vector2};

/// Index of a node inside a [`GearTrain`].
///
/// Nodes are never removed, so an id stays valid for the lifetime of the
/// train that issued it.
pub type NodeId = usize;

/// A gear placed inside a train.
#[derive(Debug, Clone)]
pub struct GearNode {
    /// Meshing geometry of this node.
    pub gear: Gear,

    /// Phase of the gear. Varies between 0 and 1.
    ///
    /// A phase of 0 represents a gear with the rightmost tooth fully
    /// horizontal, while a phase of 0.5 represents a gear with a gap at
    /// the rightmost point. A phase of 1 is graphically equivalent to a
    /// phase of 0.
    pub phase: Real,

    /// Center of the gear in train-local coordinates. Stays at the origin
    /// until a layout pass has run.
    pub center: Point2<Real>,

    /// Index of the gear this node meshes with; `None` only for the root.
    /// A back-reference, never ownership: the train owns every node.
    pub parent: Option<NodeId>,

    /// Angle from the parent's center to this node's center, in degrees
    /// according to the unit circle. Meaningless for the root.
    pub mount_angle: Real,

    /// Signed degrees this gear turns during one half-turn animation step
    /// of the root. Fixed when the node is created.
    pub(crate) rotation_weight: Real,
}

/// An ordered tree of meshing gears sharing one diametral pitch.
///
/// The train enforces the construction protocol (one root first, then
/// children linked to already-existing nodes) and implements the two core
/// algorithms: spatial layout and phase propagation.
#[derive(Debug, Clone, Default)]
pub struct GearTrain {
    nodes: Vec<GearNode>,
    diametral_pitch: Real,
}

impl GearTrain {
    /// Create an empty train.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the root gear. Its pitch radius fixes the diametral pitch
    /// shared by every gear added afterwards.
    ///
    /// The root is created at the train origin with phase 0; the host
    /// moves it via [`GearTrain::relayout`].
    ///
    /// # Errors
    /// [`TrainError::RootAlreadyExists`] if the train is not empty,
    /// [`TrainError::InvalidTeethCount`] when `teeth <= 2`.
    pub fn add_root(&mut self, teeth: u32, radius: Real) -> Result<NodeId, TrainError> {
        if !self.nodes.is_empty() {
            return Err(TrainError::RootAlreadyExists);
        }

        let gear = Gear::from_radius(radius, teeth)?;
        self.diametral_pitch = gear.diametral_pitch;

        self.nodes.push(GearNode {
            gear,
            phase: 0.0,
            center: Point2::origin(),
            parent: None,
            mount_angle: 0.0,
            rotation_weight: HALF_TURN_DEG,
        });
        Ok(0)
    }

    /// Add a gear meshing with an already-existing node.
    ///
    /// The new gear is sized from the shared diametral pitch, placed so
    /// that the two pitch circles are tangent at `mount_angle_deg`, and
    /// phased so its teeth interlock with the parent's at that angle.
    ///
    /// On failure the train is left unchanged.
    ///
    /// # Errors
    /// [`TrainError::InvalidParent`] if `parent` does not name an existing
    /// node, [`TrainError::InvalidTeethCount`] when `teeth <= 2`.
    pub fn add_linked(
        &mut self,
        parent: NodeId,
        teeth: u32,
        mount_angle_deg: Real,
    ) -> Result<NodeId, TrainError> {
        if parent >= self.nodes.len() {
            return Err(TrainError::InvalidParent(parent));
        }

        let gear = Gear::from_diametral_pitch(self.diametral_pitch, teeth)?;
        let linked = &self.nodes[parent];

        let center = meshing_center(linked.center, &linked.gear, &gear, mount_angle_deg);
        let phase = meshing_phase(&linked.gear, linked.phase, &gear, mount_angle_deg);

        // Meshing gears counter-rotate, so the sign alternates with depth
        // while the magnitude telescopes to 180 * teeth_root / teeth.
        let ratio = linked.gear.teeth as Real / gear.teeth as Real;
        let rotation_weight = -linked.rotation_weight * ratio;

        self.nodes.push(GearNode {
            gear,
            phase,
            center,
            parent: Some(parent),
            mount_angle: mount_angle_deg,
            rotation_weight,
        });
        Ok(self.nodes.len() - 1)
    }

    /// Set the phase of the root gear and propagate it through the train.
    ///
    /// Out-of-range input is reset to 0 rather than wrapped: a value
    /// outside `[0, 1)` means "back to the reference position". Values in
    /// range are taken as-is, so the method can be driven continuously
    /// while the host scrolls or animates.
    ///
    /// Every other node is recomputed top-down from its parent's phase in
    /// the same pass; insertion order guarantees parents come first, so
    /// chains of any depth settle in a single traversal.
    pub fn set_root_phase(&mut self, phase: Real) {
        if self.nodes.is_empty() {
            return;
        }

        let mut new_phase = phase;
        if new_phase >= 1.0 || new_phase < 0.0 {
            new_phase = 0.0;
        }
        self.nodes[0].phase = new_phase;

        for i in 1..self.nodes.len() {
            let node = &self.nodes[i];
            // parent index < i, already updated in this pass
            let linked = &self.nodes[node.parent.unwrap_or(0)];
            let phase =
                meshing_phase(&linked.gear, linked.phase, &node.gear, node.mount_angle);
            self.nodes[i].phase = phase;
        }
    }

    /// Re-place every gear from the given root center.
    ///
    /// The root anchor is the one piece of state the engine does not own;
    /// the host supplies it whenever its container moves or resizes. All
    /// child centers follow from the recorded mounting angles and the
    /// current gear sizes, so relative placement is preserved exactly.
    pub fn relayout(&mut self, root_center: Point2<Real>) {
        if self.nodes.is_empty() {
            return;
        }

        self.nodes[0].center = root_center;

        for i in 1..self.nodes.len() {
            let node = &self.nodes[i];
            let linked = &self.nodes[node.parent.unwrap_or(0)];
            let center =
                meshing_center(linked.center, &linked.gear, &node.gear, node.mount_angle);
            self.nodes[i].center = center;
        }
    }

    /// Diametral pitch shared by every gear in the train. Zero until a
    /// root has been added.
    pub const fn diametral_pitch(&self) -> Real {
        self.diametral_pitch
    }

    /// Number of gears in the train.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True while no root has been added.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node behind an id, or `None` for an id the train never issued.
    pub fn node(&self, id: NodeId) -> Option<&GearNode> {
        self.nodes.get(id)
    }

    /// All nodes in creation order, root first.
    pub fn nodes(&self) -> &[GearNode] {
        &self.nodes
    }

    /// The rigid rotation, in radians, a host should apply to render a
    /// node at its current phase.
    ///
    /// One full phase cycle spans a single tooth, not a full turn, which
    /// is what makes a scroll-driven phase look like continuous rotation.
    pub fn rotation_angle(&self, id: NodeId) -> Option<Real> {
        let node = self.nodes.get(id)?;
        Some(-node.phase * TAU / node.gear.teeth as Real)
    }

    /// Signed rotation ratio of a node relative to the root: how many
    /// turns this gear makes while the root makes one, negative when it
    /// spins the opposite way.
    pub fn ratio_to_root(&self, id: NodeId) -> Option<Real> {
        let node = self.nodes.get(id)?;
        Some(node.rotation_weight / HALF_TURN_DEG)
    }
}

/// Center of a gear meshing with `linked` at `mount_angle_deg`.
///
/// The two pitch circles must be tangent, so the distance between centers
/// is the mean of the pitch diameters. The Y component is negated: hosts
/// draw in Y-down coordinates, and a positive unit-circle angle must land
/// the gear visually above its parent. This is a fixed convention, not a
/// free choice.
fn meshing_center(
    linked_center: Point2<Real>,
    linked: &Gear,
    gear: &Gear,
    mount_angle_deg: Real,
) -> Point2<Real> {
    let dist = (gear.pitch_diameter + linked.pitch_diameter) / 2.0;
    let angle_rad = mount_angle_deg.to_radians();
    linked_center + Vector2::new(dist * angle_rad.cos(), -dist * angle_rad.sin())
}

/// Phase a gear must take so its teeth interlock with `linked` when their
/// centers are `mount_angle_deg` apart.
///
/// Walks the mounting ray across the parent's tooth pattern to find the
/// fractional tooth it lands on, points a gap of the child at the contact
/// point (the 0.5 term, plus another half tooth when an odd tooth count
/// shifts the pattern), then rebases onto the child's own tooth grid.
///
/// The result of the last step is not renormalized into `[0, 1)`; the
/// rendering transform absorbs whole turns.
fn meshing_phase(
    linked: &Gear,
    linked_phase: Real,
    gear: &Gear,
    mount_angle_deg: Real,
) -> Real {
    let linked_tooth_deg = FULL_TURN_DEG / linked.teeth as Real;
    let teeth_passed = mount_angle_deg / linked_tooth_deg;
    let linked_frac = teeth_passed - teeth_passed.floor();

    let mut raw = 0.5 + linked_frac - linked_phase;
    if gear.teeth % 2 == 1 {
        // An odd tooth count puts the tooth/gap pattern half a tooth out
        // of phase at the contact point.
        raw += 0.5;
    }
    raw -= raw.floor();

    let tooth_deg = FULL_TURN_DEG / gear.teeth as Real;
    let own_teeth_passed = mount_angle_deg / tooth_deg;
    let own_frac = 1.0 - (own_teeth_passed - own_teeth_passed.floor());

    raw - own_frac
}
