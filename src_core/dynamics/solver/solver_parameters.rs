use crate::dynamics::models::{validate_flaw_count_bounds, FlawCountModel};
use crate::errors::InvalidParameter;
use crate::math::Real;
use crate::utils::NodeStreamKey;

bitflags::bitflags! {
    #[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
    #[repr(C)]
    pub struct ThermalEnergyFlags: u32 {
        const NONE = 0;
        /// Recompute pressures and sound speeds from the updated energies.
        const REFRESH_EOS = 1 << 0;
        /// Emit a warning for every sub-step that clamped at least one node.
        const WARN_ON_CLAMP = 1 << 1;
    }
}

/// Per-node Weibull flaw seeding of one material region.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct FlawSeedingParameters {
    pub global_seed: u64,
    /// Decorrelates regions (or dimension variants) sharing the same `global_seed`.
    pub seed_offset_a: i64,
    pub seed_offset_b: i64,
    pub min_flaws_per_node: u32,
    pub max_flaws_per_node: u32,
    pub count_model: FlawCountModel,
}

impl Default for FlawSeedingParameters {
    fn default() -> Self {
        Self {
            global_seed: 0,
            seed_offset_a: 0,
            seed_offset_b: 0,
            min_flaws_per_node: 1,
            max_flaws_per_node: 100,
            count_model: FlawCountModel::default(),
        }
    }
}

impl FlawSeedingParameters {
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        validate_flaw_count_bounds(self.min_flaws_per_node, self.max_flaws_per_node)?;
        self.count_model.validate()
    }

    pub fn stream_key(&self) -> NodeStreamKey {
        NodeStreamKey::new(self.global_seed, self.seed_offset_a, self.seed_offset_b)
    }
}

/// Global sequential seeding of a whole body, after Benz & Asphaug (1995).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct BenzAsphaugSeeding {
    /// Volume of the body. Computed from the seeded nodes if zero.
    pub total_volume: Real,
    pub volume_stretch_factor: Real,
    pub seed: u64,
    pub min_flaws_per_node: u32,
    pub min_total_flaws: u32,
}

impl Default for BenzAsphaugSeeding {
    fn default() -> Self {
        Self {
            total_volume: 0.0,
            volume_stretch_factor: 1.0,
            seed: 0,
            min_flaws_per_node: 1,
            min_total_flaws: 1,
        }
    }
}

impl BenzAsphaugSeeding {
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        if !(self.total_volume >= 0.0 && self.total_volume.is_finite()) {
            return Err(InvalidParameter::new(
                "total_volume",
                self.total_volume,
                "must be non-negative and finite",
            ));
        }

        InvalidParameter::require_positive("volume_stretch_factor", self.volume_stretch_factor)?;

        if self.min_flaws_per_node == 0 {
            return Err(InvalidParameter::new(
                "min_flaws_per_node",
                0.0,
                "must be at least 1",
            ));
        }

        if self.min_total_flaws == 0 {
            return Err(InvalidParameter::new(
                "min_total_flaws",
                0.0,
                "must be at least 1",
            ));
        }

        Ok(())
    }
}

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct ThermalEnergyParameters {
    /// Accepted deviation of the sum of the mixing fractions of a node from 1.
    pub mixing_tolerance: Real,
    pub flags: ThermalEnergyFlags,
}

impl Default for ThermalEnergyParameters {
    fn default() -> Self {
        Self {
            mixing_tolerance: 1.0e-6,
            flags: ThermalEnergyFlags::REFRESH_EOS | ThermalEnergyFlags::WARN_ON_CLAMP,
        }
    }
}
