pub use self::eos_refresh::refresh_eos_state;
pub use self::specific_thermal_energy::{
    ClampStatistics, EnergyUpdate, SpecificThermalEnergyPolicy,
};
pub use crate::core::dynamics::solver::*;

mod eos_refresh;
mod specific_thermal_energy;
