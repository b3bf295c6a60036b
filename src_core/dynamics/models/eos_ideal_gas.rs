use crate::math::Real;

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Gamma-law gas: `P = (γ - 1) ρ ε`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct IdealGasEos {
    pub gamma: Real,
}

impl IdealGasEos {
    pub fn new(gamma: Real) -> Self {
        Self { gamma }
    }

    pub fn pressure(&self, density: Real, specific_thermal_energy: Real) -> Real {
        (self.gamma - 1.0) * density * specific_thermal_energy
    }

    pub fn sound_speed(&self, _density: Real, specific_thermal_energy: Real) -> Real {
        (self.gamma * (self.gamma - 1.0) * specific_thermal_energy.max(0.0)).sqrt()
    }
}
