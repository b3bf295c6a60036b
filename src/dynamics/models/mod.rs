pub use self::external_eos::ExternalEos;
pub use self::thermal_eos::ThermalEos;
pub use crate::core::dynamics::models::*;

mod eos_ideal_gas;
mod eos_monaghan_sph;
mod eos_stiffened_gas;
mod external_eos;
mod thermal_eos;
