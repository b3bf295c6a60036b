use crate::core::dynamics::models::{CoreThermalEos, StiffenedGasEos};
use crate::dynamics::models::ThermalEos;
use crate::math::Real;

impl ThermalEos for StiffenedGasEos {
    fn pressure(&self, density: Real, specific_thermal_energy: Real) -> Real {
        self.pressure(density, specific_thermal_energy)
    }

    fn sound_speed(&self, density: Real, specific_thermal_energy: Real) -> Real {
        self.sound_speed(density, specific_thermal_energy)
    }

    fn to_core_model(&self) -> Option<CoreThermalEos> {
        Some(CoreThermalEos::StiffenedGas(*self))
    }
}
