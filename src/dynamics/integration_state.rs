use crate::core::errors::{ContractError, InvalidParameter};
use crate::dynamics::{MaterialHandle, NodeSet};
use crate::errors::SpaltError;
use crate::math::Real;

/// Portion of the volume of an interface node owned by each contributing material.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MixingFractions {
    entries: Vec<(MaterialHandle, Real)>,
}

impl MixingFractions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<(MaterialHandle, Real)>) -> Self {
        Self { entries }
    }

    pub fn with(mut self, material: MaterialHandle, fraction: Real) -> Self {
        self.push(material, fraction);
        self
    }

    pub fn push(&mut self, material: MaterialHandle, fraction: Real) {
        self.entries.push((material, fraction));
    }

    pub fn entries(&self) -> &[(MaterialHandle, Real)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fractions(&self) -> impl Iterator<Item = Real> + '_ {
        self.entries.iter().map(|e| e.1)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct NodeIntegrationState {
    pub specific_thermal_energy: Real,
    /// Time derivative of the specific thermal energy, from pressure work and viscous heating.
    pub specific_thermal_energy_rate: Real,
    /// `∇·v` at the node, driving the pressure work of each material. Zero if unknown.
    pub velocity_divergence: Real,
    /// `None` (or empty) for nodes owned entirely by their own material.
    pub mixing: Option<MixingFractions>,
}

impl NodeIntegrationState {
    pub fn is_mixed(&self) -> bool {
        self.mixing.as_ref().map(|m| !m.is_empty()).unwrap_or(false)
    }
}

/// The time integrator's per-node snapshot for one sub-step.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct IntegrationState {
    pub dt: Real,
    pub nodes: Vec<NodeIntegrationState>,
}

impl IntegrationState {
    /// A snapshot of the current energies of `nodes`, with zero rates and no mixing.
    pub fn from_nodes(nodes: &NodeSet, dt: Real) -> Self {
        Self {
            dt,
            nodes: nodes
                .iter()
                .map(|node| NodeIntegrationState {
                    specific_thermal_energy: node.specific_thermal_energy,
                    specific_thermal_energy_rate: 0.0,
                    velocity_divergence: 0.0,
                    mixing: None,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn set_rates(&mut self, rates: &[Real]) -> Result<(), SpaltError> {
        self.check_field_len("rates", rates.len())?;

        for (node, rate) in self.nodes.iter_mut().zip(rates.iter()) {
            node.specific_thermal_energy_rate = *rate;
        }

        Ok(())
    }

    pub fn set_velocity_divergences(&mut self, divergences: &[Real]) -> Result<(), SpaltError> {
        self.check_field_len("velocity_divergences", divergences.len())?;

        for (node, div) in self.nodes.iter_mut().zip(divergences.iter()) {
            node.velocity_divergence = *div;
        }

        Ok(())
    }

    pub fn set_mixing(&mut self, node: usize, mixing: MixingFractions) -> Result<(), SpaltError> {
        let entry = self
            .nodes
            .get_mut(node)
            .ok_or(SpaltError::contract(node, ContractError::MissingIntegrationState))?;
        entry.mixing = Some(mixing);
        Ok(())
    }

    fn check_field_len(&self, name: &'static str, len: usize) -> Result<(), SpaltError> {
        if len == self.nodes.len() {
            Ok(())
        } else {
            Err(InvalidParameter::new(name, len as Real, "must have one entry per node").into())
        }
    }

    pub fn specific_thermal_energies(&self) -> impl Iterator<Item = Real> + '_ {
        self.nodes.iter().map(|n| n.specific_thermal_energy)
    }
}
