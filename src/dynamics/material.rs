use crate::core::dynamics::models::{SpecificEnergyBounds, WeibullParameters};
use crate::core::errors::InvalidParameter;
use crate::dynamics::models::ThermalEos;
use crate::errors::SpaltError;
use std::sync::Arc;

#[cfg(feature = "serde-serialize")]
use {
    super::models::ExternalEos,
    crate::core::dynamics::models::CoreThermalEos,
    serde::{Deserialize, Deserializer, Serialize, Serializer},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MaterialHandle(pub u32);

impl MaterialHandle {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone)]
pub struct Material {
    pub eos: Arc<dyn ThermalEos>,
    pub weibull: Option<WeibullParameters>,
    pub energy_bounds: SpecificEnergyBounds,
}

#[cfg(feature = "serde-serialize")]
#[derive(Serialize, Deserialize)]
struct TypedData {
    pub eos: CoreThermalEos,
    pub weibull: Option<WeibullParameters>,
    pub energy_bounds: SpecificEnergyBounds,
}

#[cfg(feature = "serde-serialize")]
impl From<&Material> for TypedData {
    fn from(value: &Material) -> Self {
        Self {
            eos: value
                .eos
                .to_core_model()
                .unwrap_or(CoreThermalEos::Custom(u32::MAX)),
            weibull: value.weibull,
            energy_bounds: value.energy_bounds,
        }
    }
}

#[cfg(feature = "serde-serialize")]
impl From<TypedData> for Material {
    fn from(value: TypedData) -> Self {
        let eos = match value.eos {
            CoreThermalEos::IdealGas(m) => Arc::new(m) as Arc<dyn ThermalEos>,
            CoreThermalEos::StiffenedGas(m) => Arc::new(m) as Arc<dyn ThermalEos>,
            CoreThermalEos::EosMonaghanSph(m) => Arc::new(m) as Arc<dyn ThermalEos>,
            CoreThermalEos::Custom(index) => Arc::new(ExternalEos(index)) as Arc<dyn ThermalEos>,
        };

        Self {
            eos,
            weibull: value.weibull,
            energy_bounds: value.energy_bounds,
        }
    }
}

#[cfg(feature = "serde-serialize")]
impl Serialize for Material {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        TypedData::from(self).serialize(serializer)
    }
}

#[cfg(feature = "serde-serialize")]
impl<'de> Deserialize<'de> for Material {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let typed_data: TypedData = Deserialize::deserialize(deserializer)?;
        Ok(typed_data.into())
    }
}

impl Material {
    pub fn new(eos: impl ThermalEos + 'static) -> Self {
        Self {
            eos: Arc::new(eos),
            weibull: None,
            energy_bounds: SpecificEnergyBounds::default(),
        }
    }

    pub fn with_weibull(eos: impl ThermalEos + 'static, weibull: WeibullParameters) -> Self {
        Self {
            eos: Arc::new(eos),
            weibull: Some(weibull),
            energy_bounds: SpecificEnergyBounds::default(),
        }
    }

    pub fn energy_bounds(mut self, energy_bounds: SpecificEnergyBounds) -> Self {
        self.energy_bounds = energy_bounds;
        self
    }

    pub fn validate(&self) -> Result<(), InvalidParameter> {
        self.energy_bounds.validate()?;

        if let Some(weibull) = &self.weibull {
            weibull.validate()?;
        }

        Ok(())
    }
}

#[derive(Clone, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MaterialSet {
    materials: Vec<Material>,
}

impl MaterialSet {
    pub fn new() -> Self {
        Self { materials: vec![] }
    }

    pub fn insert(&mut self, material: Material) -> MaterialHandle {
        self.materials.push(material);
        MaterialHandle(self.materials.len() as u32 - 1)
    }

    pub fn get(&self, handle: MaterialHandle) -> Option<&Material> {
        self.materials.get(handle.index())
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MaterialHandle, &Material)> {
        self.materials
            .iter()
            .enumerate()
            .map(|(i, m)| (MaterialHandle(i as u32), m))
    }

    /// Checks the constants of every material.
    pub fn validate(&self) -> Result<(), SpaltError> {
        for material in &self.materials {
            material.validate()?;
        }

        Ok(())
    }
}

impl std::ops::Index<MaterialHandle> for MaterialSet {
    type Output = Material;

    #[inline]
    fn index(&self, i: MaterialHandle) -> &Material {
        &self.materials[i.index()]
    }
}

impl std::ops::IndexMut<MaterialHandle> for MaterialSet {
    #[inline]
    fn index_mut(&mut self, i: MaterialHandle) -> &mut Material {
        &mut self.materials[i.index()]
    }
}
