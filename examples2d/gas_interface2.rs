use crate::helper::{self, DemoReport};
use na::point;
use spalt2d::prelude::*;

const NODE_RAD: Real = 0.01;
const DT: Real = 1.0e-3;
const NUM_SUBSTEPS: usize = 20;

pub fn run() -> anyhow::Result<DemoReport> {
    let mut materials = MaterialSet::new();
    let water = materials.insert(
        Material::new(MonaghanSphEos::new(1000.0, 1.0e5, 7))
            .energy_bounds(SpecificEnergyBounds::new(0.0, 2.5e6)),
    );
    let air = materials.insert(
        Material::new(IdealGasEos::new(1.4))
            .energy_bounds(SpecificEnergyBounds::new(1.0e3, 1.0e7)),
    );

    let nj = 10;
    let mut nodes = NodeSet::new();
    let water_nodes = nodes.insert_batch(helper::cube_nodes(
        point![0.0, 0.0],
        20,
        nj,
        water,
        NODE_RAD,
        1000.0,
        4.2e5,
        false,
    ));
    nodes.insert_batch(helper::cube_nodes(
        point![0.0, NODE_RAD * 2.0 * nj as Real],
        20,
        nj,
        air,
        NODE_RAD,
        1.2,
        2.0e5,
        false,
    ));

    let mut state = IntegrationState::from_nodes(&nodes, DT);

    // The top row of water touches the air.
    for i in water_nodes.clone().filter(|i| i % nj == nj - 1) {
        state.set_mixing(
            i,
            MixingFractions::new().with(water, 0.6).with(air, 0.4),
        )?;
    }

    // Strong heating so that the water hits its vaporization ceiling.
    let rates: Vec<Real> = (0..nodes.len())
        .map(|i| if water_nodes.contains(&i) { 2.0e8 } else { -5.0e6 })
        .collect();
    state.set_rates(&rates)?;
    // Slow expansion: interface nodes blend the pressure work of both fluids.
    state.set_velocity_divergences(&vec![1.0e-2; nodes.len()])?;

    let mut pipeline = FsiPipeline::default();
    let mut substeps = vec![];
    for _ in 0..NUM_SUBSTEPS {
        substeps.push(pipeline.step(&mut nodes, &mut state, &materials)?);
    }

    Ok(DemoReport::new(&nodes, pipeline.flaws(), substeps))
}
