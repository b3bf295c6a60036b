use crate::prelude::{IdealGasEos, MonaghanSphEos, StiffenedGasEos};

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub enum CoreThermalEos {
    IdealGas(IdealGasEos),
    StiffenedGas(StiffenedGasEos),
    EosMonaghanSph(MonaghanSphEos),
    Custom(u32),
}
