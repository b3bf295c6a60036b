use crate::core::dynamics::models::CoreThermalEos;
use crate::dynamics::models::ThermalEos;
use crate::math::Real;

/// An equation of state evaluated outside of this crate.
///
/// Reports a zero pressure and sound speed.
pub struct ExternalEos(pub u32);

impl ThermalEos for ExternalEos {
    fn pressure(&self, _density: Real, _specific_thermal_energy: Real) -> Real {
        0.0
    }

    fn sound_speed(&self, _density: Real, _specific_thermal_energy: Real) -> Real {
        0.0
    }

    fn to_core_model(&self) -> Option<CoreThermalEos> {
        Some(CoreThermalEos::Custom(self.0))
    }
}
