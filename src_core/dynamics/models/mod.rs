pub use self::eos_ideal_gas::IdealGasEos;
pub use self::eos_monaghan_sph::MonaghanSphEos;
pub use self::eos_stiffened_gas::StiffenedGasEos;
pub use self::specific_energy_bounds::{EnergyClamp, SpecificEnergyBounds};
pub use self::thermal_eos::CoreThermalEos;
pub use self::weibull::{
    validate_flaw_count_bounds, FlawCountModel, VolumeExponent, WeibullParameters,
};

mod eos_ideal_gas;
mod eos_monaghan_sph;
mod eos_stiffened_gas;
mod specific_energy_bounds;
mod thermal_eos;
mod weibull;
