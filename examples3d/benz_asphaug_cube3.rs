use crate::helper::{self, DemoReport};
use na::point;
use spalt3d::prelude::*;

const NODE_RAD: Real = 0.02;

pub fn run() -> anyhow::Result<DemoReport> {
    let mut materials = MaterialSet::new();
    let basalt = WeibullParameters::new(4.0e29, 9.0);
    let handle = materials.insert(Material::with_weibull(
        StiffenedGasEos::new(3.5, 1.0e8),
        basalt,
    ));

    let mut nodes = NodeSet::new();
    nodes.insert_batch(helper::cube_nodes(
        point![0.0, 0.0, 0.0],
        12,
        12,
        12,
        handle,
        NODE_RAD,
        2700.0,
        0.0,
    ));

    let node_list = nodes.material_region(handle);
    let volumes = nodes.volumes(&node_list);
    let mask = vec![true; node_list.len()];
    let seeding = BenzAsphaugSeeding {
        seed: 31,
        volume_stretch_factor: 1.2,
        min_flaws_per_node: 3,
        min_total_flaws: 10_000,
        ..BenzAsphaugSeeding::default()
    };
    let flaws = benz_asphaug_flaw_distribution(&basalt, &seeding, &node_list, &volumes, &mask)?;

    Ok(DemoReport::new(&nodes, &flaws, vec![]))
}
