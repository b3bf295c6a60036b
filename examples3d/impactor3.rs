use crate::helper::{self, DemoReport};
use na::point;
use spalt3d::prelude::*;

const NODE_RAD: Real = 0.01;
const DT: Real = 1.0e-5;
const NUM_SUBSTEPS: usize = 5;

pub fn run() -> anyhow::Result<DemoReport> {
    let mut materials = MaterialSet::new();
    let basalt = materials.insert(
        Material::with_weibull(
            StiffenedGasEos::new(3.5, 1.0e8),
            WeibullParameters::new(4.0e29, 9.0),
        )
        .energy_bounds(SpecificEnergyBounds::new(0.0, 1.0e7)),
    );
    let ice = materials.insert(
        Material::with_weibull(
            StiffenedGasEos::new(2.5, 5.0e7),
            WeibullParameters::new(1.0e32, 9.6).with_volume_normalization(1.0e-6),
        )
        .energy_bounds(SpecificEnergyBounds::new(0.0, 3.0e6)),
    );

    let mut nodes = NodeSet::new();
    let target = nodes.insert_batch(helper::cube_nodes(
        point![0.0, 0.0, 0.0],
        16,
        8,
        16,
        basalt,
        NODE_RAD,
        2700.0,
        300.0,
    ));
    let projectile = nodes.insert_batch(helper::cube_nodes(
        point![0.12, 0.16, 0.12],
        4,
        4,
        4,
        ice,
        NODE_RAD,
        920.0,
        100.0,
    ));

    // Both materials share the global seed; the pipeline decorrelates them.
    let mut pipeline = FsiPipeline::default();
    let seeding = FlawSeedingParameters {
        global_seed: 2024,
        min_flaws_per_node: 2,
        max_flaws_per_node: 64,
        ..FlawSeedingParameters::default()
    };
    pipeline.seed_flaws(&seeding, &nodes, &materials)?;

    let mut state = IntegrationState::from_nodes(&nodes, DT);
    let contact_y = NODE_RAD * 2.0 * 7.0;
    let rates: Vec<Real> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| {
            if projectile.contains(&i) {
                1.0e10
            } else if n.position.y >= contact_y {
                5.0e9
            } else {
                0.0
            }
        })
        .collect();
    state.set_rates(&rates)?;

    // The top layer of the target under the projectile is an interface.
    for i in target.filter(|i| {
        let p = nodes[*i].position;
        p.y >= contact_y && p.x >= 0.12 && p.x < 0.2 && p.z >= 0.12 && p.z < 0.2
    }) {
        state.set_mixing(i, MixingFractions::new().with(basalt, 0.5).with(ice, 0.5))?;
    }

    let mut substeps = vec![];
    for _ in 0..NUM_SUBSTEPS {
        substeps.push(pipeline.step(&mut nodes, &mut state, &materials)?);
    }

    Ok(DemoReport::new(&nodes, pipeline.flaws(), substeps))
}
