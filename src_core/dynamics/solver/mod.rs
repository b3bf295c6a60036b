pub use self::solver_parameters::{
    BenzAsphaugSeeding, FlawSeedingParameters, ThermalEnergyFlags, ThermalEnergyParameters,
};
pub use self::specific_thermal_energy::*;

mod solver_parameters;
mod specific_thermal_energy;
