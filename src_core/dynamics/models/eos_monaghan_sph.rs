use crate::math::Real;

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Weakly compressible Tait equation of state.
///
/// The pressure only depends on the density. The specific thermal energy is still carried
/// by the node but has no mechanical feedback.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct MonaghanSphEos {
    pub density0: Real,
    pub pressure0: Real,
    pub gamma: u32,
    pub max_neg_pressure: Real,
}

impl MonaghanSphEos {
    pub fn new(density0: Real, pressure0: Real, gamma: u32) -> Self {
        Self {
            density0,
            pressure0,
            gamma,
            max_neg_pressure: 1.0,
        }
    }

    pub fn pressure(&self, density: Real) -> Real {
        (self.pressure0 * ((density / self.density0).powi(self.gamma as i32) - 1.0))
            .max(-self.max_neg_pressure)
    }

    pub fn sound_speed(&self, density: Real) -> Real {
        let gamma = self.gamma as Real;
        (gamma * self.pressure0 / self.density0
            * (density / self.density0).powi(self.gamma as i32 - 1))
        .sqrt()
    }
}
