use crate::helper::{self, DemoReport};
use na::point;
use spalt2d::prelude::*;

const NODE_RAD: Real = 0.01;

pub fn run() -> anyhow::Result<DemoReport> {
    let mut materials = MaterialSet::new();
    let granite = WeibullParameters::new(1.0e20, 9.0);
    let handle = materials.insert(Material::with_weibull(
        StiffenedGasEos::new(3.0, 1.0e8),
        granite,
    ));

    let mut nodes = NodeSet::new();
    nodes.insert_batch(helper::cube_nodes(
        point![0.0, 0.0],
        30,
        30,
        handle,
        NODE_RAD,
        2650.0,
        0.0,
        false,
    ));

    // Only the upper half of the plate is allowed to crack.
    let node_list = nodes.material_region(handle);
    let volumes = nodes.volumes(&node_list);
    let mask: Vec<bool> = node_list
        .iter()
        .map(|i| nodes[*i].position.y >= 0.3)
        .collect();

    let seeding = BenzAsphaugSeeding {
        seed: 7,
        min_flaws_per_node: 2,
        ..BenzAsphaugSeeding::default()
    };
    let flaws = benz_asphaug_flaw_distribution(&granite, &seeding, &node_list, &volumes, &mask)?;

    Ok(DemoReport::new(&nodes, &flaws, vec![]))
}
