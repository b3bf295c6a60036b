use na::{vector, Point2};
use serde::Serialize;
use spalt2d::prelude::*;

pub fn cube_nodes(
    origin: Point2<Real>,
    ni: usize,
    nj: usize,
    material: MaterialHandle,
    node_rad: Real,
    node_density: Real,
    specific_thermal_energy: Real,
    randomize: bool,
) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut rand32 = oorandom::Rand32::new(42);

    for i in 0..ni {
        for j in 0..nj {
            let jitter = if randomize {
                let x = (rand32.rand_float() as Real - 0.5) * node_rad * 0.2;
                let y = (rand32.rand_float() as Real - 0.5) * node_rad * 0.2;
                vector![x, y]
            } else {
                vector![0.0, 0.0]
            };
            let shift = vector![i as Real, j as Real] * node_rad * 2.0 + jitter;
            nodes.push(Node::with_specific_thermal_energy(
                material,
                origin + shift,
                node_rad,
                node_density,
                specific_thermal_energy,
            ));
        }
    }

    nodes
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct DemoReport {
    pub name: String,
    pub num_nodes: usize,
    pub num_seeded_nodes: usize,
    pub total_flaws: usize,
    pub weakest_flaw: Option<Real>,
    pub substeps: Vec<ClampStatistics>,
    pub total_thermal_energy: Real,
}

impl DemoReport {
    pub fn new(nodes: &NodeSet, flaws: &FlawDistribution, substeps: Vec<ClampStatistics>) -> Self {
        Self {
            name: String::new(),
            num_nodes: nodes.len(),
            num_seeded_nodes: flaws.iter().filter(|(_, f)| !f.is_empty()).count(),
            total_flaws: flaws.total_flaws(),
            weakest_flaw: flaws
                .iter()
                .filter_map(|(_, f)| f.first().copied())
                .reduce(Real::min),
            substeps,
            total_thermal_energy: nodes.total_thermal_energy(),
        }
    }
}
