use crate::dynamics::{MaterialHandle, Node};
use crate::math::Real;
use rayon::prelude::*;

/// The nodes of a simulation, addressed by their stable index.
///
/// Nodes are only ever appended so the index of a node never changes.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct NodeSet {
    pub(crate) nodes: Vec<Node>,
}

impl NodeSet {
    pub fn new() -> Self {
        Self { nodes: vec![] }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn get(&self, i: usize) -> Option<&Node> {
        self.nodes.get(i)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Inserts a node and returns its stable index.
    pub fn insert(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Inserts nodes and returns the range of their stable indices.
    pub fn insert_batch(&mut self, mut nodes: Vec<Node>) -> std::ops::Range<usize> {
        let first = self.nodes.len();
        self.nodes.append(&mut nodes);
        first..self.nodes.len()
    }

    /// Stable indices of the nodes owned by `material`, in ascending order.
    pub fn material_region(&self, material: MaterialHandle) -> Vec<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.material == material)
            .map(|(i, _)| i)
            .collect()
    }

    /// Volumes of the nodes with the given stable indices.
    pub fn volumes(&self, indices: &[usize]) -> Vec<Real> {
        indices.iter().map(|i| self.nodes[*i].volume).collect()
    }

    pub fn total_mass(&self) -> Real {
        self.nodes.par_iter().map(|node| node.mass).sum()
    }

    pub fn total_thermal_energy(&self) -> Real {
        self.nodes.par_iter().map(|node| node.thermal_energy()).sum()
    }

    #[inline(always)]
    pub fn for_each_node_mut(&mut self, f: impl Fn(usize, &mut Node) + Sync) {
        self.nodes
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, node)| f(i, node))
    }
}

impl std::ops::Index<usize> for NodeSet {
    type Output = Node;

    #[inline]
    fn index(&self, i: usize) -> &Node {
        &self.nodes[i]
    }
}

impl<'a> IntoIterator for &'a NodeSet {
    type Item = &'a Node;
    type IntoIter = <&'a Vec<Node> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&self.nodes).into_iter()
    }
}
