use crate::core::errors::{ContractError, InvalidParameter};
use crate::errors::SpaltError;
use crate::math::Real;
use std::collections::BTreeMap;

/// Activation strains of the flaws of each node, keyed by stable node index.
///
/// The flaws of a node are sorted in strictly ascending order so that damage accumulation
/// can stop at the first inactive flaw.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct FlawDistribution {
    flaws: BTreeMap<usize, Vec<Real>>,
}

impl FlawDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_sorted(entries: impl IntoIterator<Item = (usize, Vec<Real>)>) -> Self {
        Self {
            flaws: entries.into_iter().collect(),
        }
    }

    /// Number of nodes covered by this distribution, including nodes without flaws.
    pub fn len(&self) -> usize {
        self.flaws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flaws.is_empty()
    }

    pub fn contains_node(&self, node: usize) -> bool {
        self.flaws.contains_key(&node)
    }

    pub fn flaws(&self, node: usize) -> Option<&[Real]> {
        self.flaws.get(&node).map(|f| &f[..])
    }

    pub fn num_flaws(&self, node: usize) -> usize {
        self.flaws.get(&node).map(|f| f.len()).unwrap_or(0)
    }

    /// The lowest activation strain of a node.
    pub fn weakest_flaw(&self, node: usize) -> Option<Real> {
        self.flaws.get(&node)?.first().copied()
    }

    pub fn total_flaws(&self) -> usize {
        self.flaws.values().map(|f| f.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Real])> {
        self.flaws.iter().map(|(i, f)| (*i, &f[..]))
    }

    /// Moves the flaws of another region into this distribution.
    ///
    /// Flaws are seeded once: a node already covered by `self` is a contract violation and
    /// leaves `self` untouched.
    pub fn merge(&mut self, other: FlawDistribution) -> Result<(), SpaltError> {
        if let Some(node) = other.flaws.keys().find(|i| self.flaws.contains_key(i)) {
            return Err(SpaltError::contract(*node, ContractError::FlawsAlreadySeeded));
        }

        self.flaws.extend(other.flaws);
        Ok(())
    }
}

pub(crate) fn check_node_volume(volume: Real) -> Result<(), InvalidParameter> {
    if volume > 0.0 && volume.is_finite() {
        Ok(())
    } else {
        Err(InvalidParameter::new(
            "node_volumes",
            volume,
            "must be positive and finite",
        ))
    }
}

/// Checks the node list and volume field handed to a flaw generator.
pub(crate) fn check_node_volumes(
    node_list: &[usize],
    node_volumes: &[Real],
) -> Result<(), SpaltError> {
    if node_list.len() != node_volumes.len() {
        return Err(InvalidParameter::new(
            "node_volumes",
            node_volumes.len() as Real,
            "must have one entry per node",
        )
        .into());
    }

    for volume in node_volumes {
        check_node_volume(*volume)?;
    }

    let mut sorted = node_list.to_vec();
    sorted.sort_unstable();
    if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
        return Err(InvalidParameter::new("node_list", w[0] as Real, "appears more than once").into());
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn queries() {
        let flaws = FlawDistribution::from_sorted(vec![(3, vec![0.1, 0.2]), (5, vec![])]);

        assert_eq!(flaws.len(), 2);
        assert_eq!(flaws.num_flaws(3), 2);
        assert_eq!(flaws.num_flaws(5), 0);
        assert_eq!(flaws.num_flaws(4), 0);
        assert_eq!(flaws.weakest_flaw(3), Some(0.1));
        assert_eq!(flaws.weakest_flaw(5), None);
        assert_eq!(flaws.total_flaws(), 2);
        assert!(flaws.contains_node(5));
        assert!(!flaws.contains_node(4));
    }

    #[test]
    fn merging_never_reseeds_a_node() {
        let mut flaws = FlawDistribution::from_sorted(vec![(0, vec![0.1])]);
        let other = FlawDistribution::from_sorted(vec![(1, vec![0.3])]);
        flaws.merge(other).unwrap();
        assert_eq!(flaws.len(), 2);

        let overlapping = FlawDistribution::from_sorted(vec![(1, vec![0.5]), (2, vec![0.6])]);
        let err = flaws.merge(overlapping).unwrap_err();
        assert_eq!(err.node(), Some(1));
        assert_eq!(flaws.flaws(1), Some(&[0.3][..]));
        assert!(!flaws.contains_node(2));
    }

    #[test]
    fn node_volume_checks() {
        assert!(check_node_volumes(&[0, 1], &[1.0, 2.0]).is_ok());
        assert!(check_node_volumes(&[0, 1], &[1.0]).is_err());
        assert!(check_node_volumes(&[0, 1], &[1.0, 0.0]).is_err());
        assert!(check_node_volumes(&[0, 0], &[1.0, 1.0]).is_err());
    }
}
