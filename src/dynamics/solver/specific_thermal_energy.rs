use crate::core::dynamics::models::EnergyClamp;
use crate::core::dynamics::solver::{
    check_mixing_fractions, check_substep_length, MixedEnergyBlend, ThermalEnergyFlags,
    ThermalEnergyParameters,
};
use crate::core::errors::ContractError;
use crate::dynamics::{
    IntegrationState, MaterialSet, MixingFractions, Node, NodeIntegrationState, NodeSet,
};
use crate::errors::SpaltError;
use crate::math::Real;
use rayon::prelude::*;

/// Result of the energy update of a single node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EnergyUpdate {
    pub specific_thermal_energy: Real,
    pub clamp: EnergyClamp,
}

/// Number of nodes brought back into their admissible range during a sub-step.
///
/// Clamping is a recoverable correction; a growing count hints at a too large sub-step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ClampStatistics {
    pub num_updated: usize,
    pub num_floored: usize,
    pub num_ceiled: usize,
}

impl ClampStatistics {
    pub fn num_clamped(&self) -> usize {
        self.num_floored + self.num_ceiled
    }

    pub fn record(&mut self, clamp: EnergyClamp) {
        self.num_updated += 1;
        match clamp {
            EnergyClamp::None => {}
            EnergyClamp::Floor => self.num_floored += 1,
            EnergyClamp::Ceiling => self.num_ceiled += 1,
        }
    }
}

impl std::ops::AddAssign for ClampStatistics {
    fn add_assign(&mut self, rhs: Self) {
        self.num_updated += rhs.num_updated;
        self.num_floored += rhs.num_floored;
        self.num_ceiled += rhs.num_ceiled;
    }
}

/// Advances the specific thermal energy of FSI nodes by one sub-step.
///
/// Pure nodes take the trial energy of their own material. Interface nodes take the
/// volume-fraction weighted blend of the trial energies of each contributing material, each
/// clamped to its own material's range. Materials differ through the pressure work their
/// equation of state implies for the node's velocity divergence. The result is always
/// clamped to the range of the node's material. The policy holds no state between calls.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SpecificThermalEnergyPolicy {
    pub params: ThermalEnergyParameters,
}

impl SpecificThermalEnergyPolicy {
    pub fn new(params: ThermalEnergyParameters) -> Self {
        Self { params }
    }

    /// Computes the updated energy of node `node_id` without writing it anywhere.
    pub fn evaluate(
        &self,
        node_id: usize,
        node: &Node,
        state: &NodeIntegrationState,
        dt: Real,
        materials: &MaterialSet,
    ) -> Result<EnergyUpdate, SpaltError> {
        let contract = |reason| SpaltError::contract(node_id, reason);
        check_substep_length(dt).map_err(contract)?;

        let material = materials
            .get(node.material)
            .ok_or(contract(ContractError::UnknownMaterial(node.material.0)))?;
        material.energy_bounds.validate()?;

        let trial = match &state.mixing {
            Some(mixing) if !mixing.is_empty() => {
                self.blend_mixed(node_id, node, mixing, state, dt, materials)?
            }
            _ => material.eos.trial_specific_thermal_energy(
                state.specific_thermal_energy,
                state.specific_thermal_energy_rate,
                dt,
                node.density(),
                state.velocity_divergence,
            ),
        };

        let (specific_thermal_energy, clamp) = material.energy_bounds.clamp(trial);

        Ok(EnergyUpdate {
            specific_thermal_energy,
            clamp,
        })
    }

    fn blend_mixed(
        &self,
        node_id: usize,
        node: &Node,
        mixing: &MixingFractions,
        state: &NodeIntegrationState,
        dt: Real,
        materials: &MaterialSet,
    ) -> Result<Real, SpaltError> {
        let contract = |reason| SpaltError::contract(node_id, reason);
        check_mixing_fractions(mixing.fractions(), self.params.mixing_tolerance)
            .map_err(contract)?;

        let density = node.density();
        let mut blend = MixedEnergyBlend::new();

        for (handle, fraction) in mixing.entries() {
            let contributor = materials
                .get(*handle)
                .ok_or(contract(ContractError::UnknownMaterial(handle.0)))?;
            contributor.energy_bounds.validate()?;

            let trial = contributor.eos.trial_specific_thermal_energy(
                state.specific_thermal_energy,
                state.specific_thermal_energy_rate,
                dt,
                density,
                state.velocity_divergence,
            );
            blend.add(*fraction, contributor.energy_bounds.clamp(trial).0);
        }

        // The fractions were checked to add up to ~1 so at least one is positive.
        Ok(blend.finish().unwrap_or(state.specific_thermal_energy))
    }

    /// Updates the energy of node `node_id`, writing it back into both the integration state
    /// and the node.
    pub fn update(
        &self,
        node_id: usize,
        node: &mut Node,
        state: &mut IntegrationState,
        materials: &MaterialSet,
    ) -> Result<EnergyUpdate, SpaltError> {
        let dt = state.dt;
        let entry = state
            .nodes
            .get_mut(node_id)
            .ok_or(SpaltError::contract(node_id, ContractError::MissingIntegrationState))?;
        let update = self.evaluate(node_id, node, entry, dt, materials)?;

        entry.specific_thermal_energy = update.specific_thermal_energy;
        node.specific_thermal_energy = update.specific_thermal_energy;
        Ok(update)
    }

    /// Updates every node for one sub-step, in parallel.
    ///
    /// Materials are validated first. All nodes are then evaluated before anything is
    /// written back, so any error leaves both `nodes` and `state` untouched. A contract
    /// violation reports the lowest offending node index.
    pub fn update_all(
        &self,
        nodes: &mut NodeSet,
        state: &mut IntegrationState,
        materials: &MaterialSet,
    ) -> Result<ClampStatistics, SpaltError> {
        materials.validate()?;

        if state.nodes.len() != nodes.len() {
            let node = state.nodes.len().min(nodes.len());
            return Err(SpaltError::contract(
                node,
                ContractError::MissingIntegrationState,
            ));
        }

        let dt = state.dt;
        let results: Vec<Result<EnergyUpdate, SpaltError>> = nodes
            .nodes
            .par_iter()
            .zip(state.nodes.par_iter())
            .enumerate()
            .map(|(i, (node, entry))| self.evaluate(i, node, entry, dt, materials))
            .collect();
        // Collected in node order: the first error is the lowest offending node.
        let updates = results.into_iter().collect::<Result<Vec<_>, _>>()?;

        nodes
            .nodes
            .par_iter_mut()
            .zip(state.nodes.par_iter_mut())
            .zip(updates.par_iter())
            .for_each(|((node, entry), update)| {
                node.specific_thermal_energy = update.specific_thermal_energy;
                entry.specific_thermal_energy = update.specific_thermal_energy;
            });

        let mut stats = ClampStatistics::default();
        for update in &updates {
            stats.record(update.clamp);
        }

        if stats.num_clamped() > 0 {
            debug!(
                "Specific thermal energy clamped on {} nodes ({} floor, {} ceiling).",
                stats.num_clamped(),
                stats.num_floored,
                stats.num_ceiled
            );

            if self.params.flags.contains(ThermalEnergyFlags::WARN_ON_CLAMP) {
                warn!(
                    "{}/{} nodes had their specific thermal energy clamped.",
                    stats.num_clamped(),
                    stats.num_updated
                );
            }
        }

        Ok(stats)
    }
}
