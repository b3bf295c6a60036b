use crate::core::dynamics::models::{CoreThermalEos, MonaghanSphEos};
use crate::dynamics::models::ThermalEos;
use crate::math::Real;

impl ThermalEos for MonaghanSphEos {
    fn pressure(&self, density: Real, _specific_thermal_energy: Real) -> Real {
        self.pressure(density)
    }

    fn sound_speed(&self, density: Real, _specific_thermal_energy: Real) -> Real {
        self.sound_speed(density)
    }

    fn to_core_model(&self) -> Option<CoreThermalEos> {
        Some(CoreThermalEos::EosMonaghanSph(*self))
    }
}
