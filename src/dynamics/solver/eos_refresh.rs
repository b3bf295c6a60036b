use crate::core::errors::ContractError;
use crate::dynamics::{MaterialSet, NodeSet};
use crate::errors::SpaltError;

/// Recomputes the pressure and sound speed of every node from its current density and
/// specific thermal energy.
///
/// Must run after the energy update of a sub-step and before the next derivative evaluation.
/// A node referencing an unknown material fails the whole refresh before any node is touched.
pub fn refresh_eos_state(nodes: &mut NodeSet, materials: &MaterialSet) -> Result<(), SpaltError> {
    if let Some((i, node)) = nodes
        .iter()
        .enumerate()
        .find(|(_, node)| materials.get(node.material).is_none())
    {
        return Err(SpaltError::contract(
            i,
            ContractError::UnknownMaterial(node.material.0),
        ));
    }

    let t0 = instant::now();
    nodes.for_each_node_mut(|_, node| {
        if let Some(material) = materials.get(node.material) {
            let density = node.density();
            node.pressure = material.eos.pressure(density, node.specific_thermal_energy);
            node.sound_speed = material
                .eos
                .sound_speed(density, node.specific_thermal_energy);
        }
    });
    info!("- EOS refresh: {}", instant::now() - t0);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::dynamics::models::{IdealGasEos, MonaghanSphEos};
    use crate::dynamics::{Material, MaterialHandle, Node};
    use crate::math::{Point, Real};

    #[test]
    fn pressure_and_sound_speed_follow_the_energy() {
        let mut materials = MaterialSet::new();
        let gas = materials.insert(Material::new(IdealGasEos::new(1.4)));
        let water = materials.insert(Material::new(MonaghanSphEos::new(1000.0, 1.0e5, 7)));
        let mut nodes = NodeSet::new();
        nodes.insert(Node::with_specific_thermal_energy(
            gas,
            Point::origin(),
            0.5,
            2.0,
            10.0,
        ));
        nodes.insert(Node::with_specific_thermal_energy(
            water,
            Point::origin(),
            0.5,
            1000.0,
            10.0,
        ));

        refresh_eos_state(&mut nodes, &materials).unwrap();

        // Unit volume nodes: density equals the mass.
        let gas_node = &nodes[0];
        assert!((gas_node.pressure - 0.4 * 2.0 * 10.0).abs() < 1.0e-4);
        assert!((gas_node.sound_speed - (1.4 as Real * 0.4 * 10.0).sqrt()).abs() < 1.0e-4);

        let water_node = &nodes[1];
        assert!(water_node.pressure.abs() < 1.0e-6);
        assert!((water_node.sound_speed - (7.0 as Real * 1.0e5 / 1000.0).sqrt()).abs() < 1.0e-3);
    }

    #[test]
    fn unknown_materials_are_reported() {
        let mut materials = MaterialSet::new();
        let gas = materials.insert(Material::new(IdealGasEos::new(1.4)));
        let mut nodes = NodeSet::new();
        nodes.insert(Node::with_specific_thermal_energy(
            gas,
            Point::origin(),
            0.5,
            2.0,
            10.0,
        ));
        nodes.insert(Node::with_specific_thermal_energy(
            MaterialHandle(4),
            Point::origin(),
            0.5,
            2.0,
            10.0,
        ));

        let err = refresh_eos_state(&mut nodes, &materials).unwrap_err();
        assert_eq!(
            err,
            SpaltError::contract(1, ContractError::UnknownMaterial(4))
        );
        assert_eq!(nodes[0].pressure, 0.0);
    }
}
