use crate::dynamics::MaterialHandle;
use crate::math::{Point, Real, Vector, DIM};

/// A mass-carrying sample point of the continuum.
///
/// Its stable index is its position in the owning [`NodeSet`](crate::dynamics::NodeSet).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Node {
    pub material: MaterialHandle,

    pub mass: Real,
    pub volume: Real,
    pub radius: Real,

    pub position: Point<Real>,
    pub velocity: Vector<Real>,

    // Thermodynamic state.
    pub specific_thermal_energy: Real,
    pub pressure: Real,
    pub sound_speed: Real,

    // User-data
    pub user_data: u64,
}

impl Node {
    pub fn new(material: MaterialHandle, position: Point<Real>, radius: Real, density: Real) -> Self {
        Self::with_specific_thermal_energy(material, position, radius, density, 0.0)
    }

    pub fn with_specific_thermal_energy(
        material: MaterialHandle,
        position: Point<Real>,
        radius: Real,
        density: Real,
        specific_thermal_energy: Real,
    ) -> Self {
        // Length in 1D, area in 2D, volume in 3D.
        let volume = (radius * 2.0).powi(DIM as i32);

        Self {
            material,
            mass: volume * density,
            volume,
            radius,
            position,
            velocity: Vector::zeros(),
            specific_thermal_energy,
            pressure: 0.0,
            sound_speed: 0.0,
            user_data: 0,
        }
    }

    pub fn density(&self) -> Real {
        self.mass / self.volume
    }

    /// Thermal energy carried by this node.
    pub fn thermal_energy(&self) -> Real {
        self.mass * self.specific_thermal_energy
    }
}
