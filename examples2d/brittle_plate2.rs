use crate::helper::{self, DemoReport};
use na::point;
use spalt2d::prelude::*;

const NODE_RAD: Real = 0.005;
const DT: Real = 1.0e-4;
const NUM_SUBSTEPS: usize = 10;

// Heat deposited near the impact point at the left edge, radiative losses elsewhere.
fn heating_rate(position: &Point<Real>) -> Real {
    5.0e7 * (-position.coords.norm() / 0.02).exp() - 1.0e6
}

pub fn run() -> anyhow::Result<DemoReport> {
    let mut materials = MaterialSet::new();
    let basalt = materials.insert(
        Material::with_weibull(
            StiffenedGasEos::new(3.5, 1.0e8),
            WeibullParameters::new(1.0e27, 9.0),
        )
        .energy_bounds(SpecificEnergyBounds::new(0.0, 1.0e7)),
    );

    let mut nodes = NodeSet::new();
    nodes.insert_batch(helper::cube_nodes(
        point![0.0, 0.0],
        40,
        20,
        basalt,
        NODE_RAD,
        2700.0,
        500.0,
        true,
    ));

    let mut pipeline = FsiPipeline::default();
    let seeding = FlawSeedingParameters {
        global_seed: 1234,
        max_flaws_per_node: 32,
        ..FlawSeedingParameters::default()
    };
    pipeline.seed_flaws(&seeding, &nodes, &materials)?;

    let mut state = IntegrationState::from_nodes(&nodes, DT);
    let mut substeps = vec![];

    for _ in 0..NUM_SUBSTEPS {
        let rates: Vec<Real> = nodes.iter().map(|n| heating_rate(&n.position)).collect();
        state.set_rates(&rates)?;
        substeps.push(pipeline.step(&mut nodes, &mut state, &materials)?);
    }

    Ok(DemoReport::new(&nodes, pipeline.flaws(), substeps))
}
