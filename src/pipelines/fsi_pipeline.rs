use crate::core::dynamics::solver::{
    FlawSeedingParameters, ThermalEnergyFlags, ThermalEnergyParameters,
};
use crate::dynamics::damage::{FlawDistribution, WeibullFlawGenerator};
use crate::dynamics::solver::{refresh_eos_state, ClampStatistics, SpecificThermalEnergyPolicy};
use crate::dynamics::{IntegrationState, MaterialSet, NodeSet};
use crate::errors::SpaltError;

/// Drives flaw seeding at setup and the energy update of every sub-step.
pub struct FsiPipeline {
    policy: SpecificThermalEnergyPolicy,
    flaws: FlawDistribution,
    num_substeps: u64,
}

impl FsiPipeline {
    pub fn new(params: ThermalEnergyParameters) -> Self {
        FsiPipeline {
            policy: SpecificThermalEnergyPolicy::new(params),
            flaws: FlawDistribution::new(),
            num_substeps: 0,
        }
    }

    pub fn flaws(&self) -> &FlawDistribution {
        &self.flaws
    }

    pub fn num_substeps(&self) -> u64 {
        self.num_substeps
    }

    /// Seeds the flaws of every material with Weibull parameters.
    ///
    /// The handle of each material is added to `seed_offset_a` so that regions sharing the
    /// same global seed draw from distinct streams. Nodes that already hold flaws cannot be
    /// seeded again. Every material is validated first, including those without flaws.
    pub fn seed_flaws(
        &mut self,
        seeding: &FlawSeedingParameters,
        nodes: &NodeSet,
        materials: &MaterialSet,
    ) -> Result<&FlawDistribution, SpaltError> {
        materials.validate()?;

        let t0 = instant::now();
        let mut seeded = FlawDistribution::new();

        for (handle, material) in materials.iter() {
            if let Some(weibull) = material.weibull {
                let region = nodes.material_region(handle);
                let volumes = nodes.volumes(&region);
                let region_seeding = FlawSeedingParameters {
                    seed_offset_a: seeding.seed_offset_a.wrapping_add(handle.0 as i64),
                    ..*seeding
                };
                let flaws = WeibullFlawGenerator::new(weibull, region_seeding)?
                    .generate(&region, &volumes)?;
                seeded.merge(flaws)?;
            }
        }

        self.flaws.merge(seeded)?;
        info!("Flaw seeding: {}", instant::now() - t0);
        Ok(&self.flaws)
    }

    /// Advances the specific thermal energy of every node by one sub-step.
    pub fn step(
        &mut self,
        nodes: &mut NodeSet,
        state: &mut IntegrationState,
        materials: &MaterialSet,
    ) -> Result<ClampStatistics, SpaltError> {
        let t0 = instant::now();
        let stats = self.policy.update_all(nodes, state, materials)?;

        if self
            .policy
            .params
            .flags
            .contains(ThermalEnergyFlags::REFRESH_EOS)
        {
            refresh_eos_state(nodes, materials)?;
        }

        self.num_substeps += 1;
        info!(
            "Sub-step {} (dt = {}): {}",
            self.num_substeps,
            state.dt,
            instant::now() - t0
        );
        Ok(stats)
    }
}

impl Default for FsiPipeline {
    fn default() -> Self {
        Self::new(ThermalEnergyParameters::default())
    }
}
