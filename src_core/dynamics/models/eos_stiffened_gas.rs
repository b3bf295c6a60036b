use crate::math::Real;

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Stiffened gas, commonly used for liquids: `P = (γ - 1) ρ ε - γ P∞`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct StiffenedGasEos {
    pub gamma: Real,
    pub reference_pressure: Real,
}

impl StiffenedGasEos {
    pub fn new(gamma: Real, reference_pressure: Real) -> Self {
        Self {
            gamma,
            reference_pressure,
        }
    }

    pub fn pressure(&self, density: Real, specific_thermal_energy: Real) -> Real {
        (self.gamma - 1.0) * density * specific_thermal_energy
            - self.gamma * self.reference_pressure
    }

    pub fn sound_speed(&self, density: Real, specific_thermal_energy: Real) -> Real {
        let p = self.pressure(density, specific_thermal_energy);
        (self.gamma * (p + self.reference_pressure) / density)
            .max(0.0)
            .sqrt()
    }
}
