//! Abstract gear geometry, without any drawing code attached

use crate::errors::TrainError;
use crate::float_types::{FULL_TURN_DEG, Real};

/// Meshing geometry of a single gear, derived entirely from a tooth count
/// and a pitch standard.
///
/// A `Gear` is a plain value: once constructed it never changes. Changing
/// the tooth count of a mounted gear means replacing its `Gear` wholesale,
/// which keeps every derived diameter consistent by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gear {
    /// The circle on which two gears effectively mesh, about halfway
    /// through the tooth.
    pub pitch_diameter: Real,

    /// Diameter of the gear, measured from the tops of the teeth.
    pub outside_diameter: Real,

    /// Diameter of the gear, measured at the base of the teeth.
    pub inside_diameter: Real,

    /// Number of teeth per unit of pitch diameter. The diametral pitch of
    /// all meshing gears must be the same.
    pub diametral_pitch: Real,

    /// Number of teeth of the gear.
    pub teeth: u32,
}

impl Gear {
    /// Build a gear from an explicit pitch radius.
    ///
    /// Used for the root of a train, where the radius fixes the diametral
    /// pitch every linked gear inherits.
    ///
    /// # Errors
    /// [`TrainError::InvalidTeethCount`] when `teeth <= 2`.
    pub fn from_radius(radius: Real, teeth: u32) -> Result<Self, TrainError> {
        if teeth <= 2 {
            return Err(TrainError::InvalidTeethCount(teeth));
        }
        let pitch_diameter = 2.0 * radius;
        let diametral_pitch = teeth as Real / pitch_diameter;
        Ok(Self {
            pitch_diameter,
            outside_diameter: (teeth + 2) as Real / diametral_pitch,
            inside_diameter: (teeth - 2) as Real / diametral_pitch,
            diametral_pitch,
            teeth,
        })
    }

    /// Build a gear from the shared diametral pitch of a train, its pitch
    /// radius falling out as `teeth / (2 * diametral_pitch)`.
    ///
    /// # Errors
    /// [`TrainError::InvalidTeethCount`] when `teeth <= 2`.
    pub fn from_diametral_pitch(
        diametral_pitch: Real,
        teeth: u32,
    ) -> Result<Self, TrainError> {
        if teeth <= 2 {
            return Err(TrainError::InvalidTeethCount(teeth));
        }
        Ok(Self::derive(diametral_pitch, teeth))
    }

    fn derive(diametral_pitch: Real, teeth: u32) -> Self {
        Self {
            pitch_diameter: teeth as Real / diametral_pitch,
            outside_diameter: (teeth + 2) as Real / diametral_pitch,
            inside_diameter: (teeth - 2) as Real / diametral_pitch,
            diametral_pitch,
            teeth,
        }
    }

    /// Radius of the meshing circle.
    pub const fn pitch_radius(&self) -> Real {
        self.pitch_diameter / 2.0
    }

    /// Radius at the tops of the teeth.
    pub const fn outside_radius(&self) -> Real {
        self.outside_diameter / 2.0
    }

    /// Radius at the base of the teeth.
    pub const fn inside_radius(&self) -> Real {
        self.inside_diameter / 2.0
    }

    /// Angle between two consecutive teeth, in degrees.
    pub const fn tooth_angle_deg(&self) -> Real {
        FULL_TURN_DEG / self.teeth as Real
    }
}
