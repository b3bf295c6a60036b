use super::flaw_distribution::{check_node_volume, check_node_volumes};
use crate::core::dynamics::models::{FlawCountModel, WeibullParameters};
use crate::core::dynamics::solver::FlawSeedingParameters;
use crate::core::utils::{open_unit_sample, sort_strictly_ascending};
use crate::dynamics::damage::FlawDistribution;
use crate::errors::SpaltError;
use crate::math::Real;
use rayon::prelude::*;

/// Assigns Weibull-distributed flaws to every node of a material region independently.
///
/// Node `i` gets `round((k V_i / V_norm)^β)` flaws clamped to the seeding bounds, drawn from
/// the Weibull quantile of its own random stream. The stream only depends on the global seed,
/// the two seed offsets and the stable index of the node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WeibullFlawGenerator {
    params: WeibullParameters,
    seeding: FlawSeedingParameters,
}

impl WeibullFlawGenerator {
    pub fn new(params: WeibullParameters, seeding: FlawSeedingParameters) -> Result<Self, SpaltError> {
        params.validate()?;
        seeding.validate()?;
        Ok(Self { params, seeding })
    }

    pub fn params(&self) -> &WeibullParameters {
        &self.params
    }

    pub fn seeding(&self) -> &FlawSeedingParameters {
        &self.seeding
    }

    /// Number of flaws of a node of the given volume.
    pub fn flaw_count(&self, volume: Real) -> Result<u32, SpaltError> {
        check_node_volume(volume)?;
        Ok(self.count_flaws(volume))
    }

    /// The flaws of a single node, strictly ascending.
    pub fn node_flaws(&self, node_index: usize, volume: Real) -> Result<Vec<Real>, SpaltError> {
        check_node_volume(volume)?;
        Ok(self.draw_node_flaws(node_index, volume))
    }

    fn count_flaws(&self, volume: Real) -> u32 {
        self.seeding.count_model.flaw_count(
            &self.params,
            volume,
            self.seeding.min_flaws_per_node,
            self.seeding.max_flaws_per_node,
        )
    }

    // `volume` must already be positive and finite.
    fn draw_node_flaws(&self, node_index: usize, volume: Real) -> Vec<Real> {
        let count = self.count_flaws(volume);
        let mut rng = self.seeding.stream_key().node_rng(node_index as u64);
        let mut flaws: Vec<Real> = (0..count)
            .map(|_| {
                self.params
                    .flaw_threshold(volume, open_unit_sample(&mut rng))
            })
            .collect();
        sort_strictly_ascending(&mut flaws);
        flaws
    }

    pub fn generate(
        &self,
        node_list: &[usize],
        node_volumes: &[Real],
    ) -> Result<FlawDistribution, SpaltError> {
        check_node_volumes(node_list, node_volumes)?;

        let t0 = instant::now();
        let entries: Vec<_> = node_list
            .par_iter()
            .zip(node_volumes.par_iter())
            .map(|(i, volume)| (*i, self.draw_node_flaws(*i, *volume)))
            .collect();
        let flaws = FlawDistribution::from_sorted(entries);

        info!(
            "Seeded {} Weibull flaws on {} nodes: {}",
            flaws.total_flaws(),
            flaws.len(),
            instant::now() - t0
        );

        Ok(flaws)
    }
}

/// Per-node Weibull flaw seeding of one material region.
///
/// `node_list` holds the stable indices of the nodes of the region, and `node_volumes`
/// their volumes in the same order.
pub fn weibull_flaw_distribution(
    params: &WeibullParameters,
    global_seed: u64,
    min_flaws_per_node: u32,
    max_flaws_per_node: u32,
    node_list: &[usize],
    seed_offset_a: i64,
    seed_offset_b: i64,
    node_volumes: &[Real],
) -> Result<FlawDistribution, SpaltError> {
    let seeding = FlawSeedingParameters {
        global_seed,
        seed_offset_a,
        seed_offset_b,
        min_flaws_per_node,
        max_flaws_per_node,
        count_model: FlawCountModel::default(),
    };

    WeibullFlawGenerator::new(*params, seeding)?.generate(node_list, node_volumes)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::dynamics::models::VolumeExponent;

    fn region(n: usize, rng: &mut oorandom::Rand32) -> (Vec<usize>, Vec<Real>) {
        let nodes = (0..n).map(|i| i * 3 + 1).collect();
        let volumes = (0..n)
            .map(|_| 1.0e-3 + rng.rand_float() as Real)
            .collect();
        (nodes, volumes)
    }

    #[test]
    fn worked_example() {
        let params = WeibullParameters::new(1.0e6, 4.0);
        let flaws = weibull_flaw_distribution(&params, 42, 0, 10, &[0], 0, 0, &[1.0]).unwrap();
        let node_flaws = flaws.flaws(0).unwrap();

        assert!(node_flaws.len() <= 10);
        assert!(node_flaws.iter().all(|f| *f > 0.0));
        for w in node_flaws.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn same_seed_same_flaws() {
        let mut rng = oorandom::Rand32::new(42);
        let (nodes, volumes) = region(200, &mut rng);
        let params = WeibullParameters::new(1.0e6, 4.0);

        let a = weibull_flaw_distribution(&params, 7, 1, 20, &nodes, 3, 5, &volumes).unwrap();
        let b = weibull_flaw_distribution(&params, 7, 1, 20, &nodes, 3, 5, &volumes).unwrap();
        assert_eq!(a, b);

        // A node's flaws do not depend on the rest of the partition.
        let single =
            weibull_flaw_distribution(&params, 7, 1, 20, &nodes[10..11], 3, 5, &volumes[10..11])
                .unwrap();
        assert_eq!(single.flaws(nodes[10]), a.flaws(nodes[10]));
    }

    #[test]
    fn seed_offsets_decorrelate_regions() {
        let params = WeibullParameters::new(1.0e6, 4.0);
        let nodes = [0, 1, 2, 3];
        let volumes = [1.0; 4];

        let a = weibull_flaw_distribution(&params, 7, 5, 5, &nodes, 0, 0, &volumes).unwrap();
        let b = weibull_flaw_distribution(&params, 7, 5, 5, &nodes, 1, 0, &volumes).unwrap();
        let c = weibull_flaw_distribution(&params, 7, 5, 5, &nodes, 0, 1, &volumes).unwrap();

        for i in nodes {
            assert_ne!(a.flaws(i), b.flaws(i));
            assert_ne!(a.flaws(i), c.flaws(i));
            assert_ne!(b.flaws(i), c.flaws(i));
        }
    }

    #[test]
    fn flaw_counts_respect_bounds() {
        let mut rng = oorandom::Rand32::new(3);
        let (nodes, mut volumes) = region(100, &mut rng);
        volumes[0] = 1.0e-20;
        volumes[1] = 1.0e20;
        let params = WeibullParameters::new(1.0e6, 4.0);

        for (min, max) in [(0, 0), (0, 10), (2, 4), (7, 7)] {
            let flaws =
                weibull_flaw_distribution(&params, 11, min, max, &nodes, 0, 0, &volumes).unwrap();
            assert_eq!(flaws.len(), nodes.len());

            for (_, node_flaws) in flaws.iter() {
                assert!(node_flaws.len() >= min as usize && node_flaws.len() <= max as usize);
                assert!(node_flaws.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn larger_nodes_never_get_fewer_flaws() {
        let params = WeibullParameters::new(1.0e6, 4.0);
        let seeding = FlawSeedingParameters {
            min_flaws_per_node: 0,
            max_flaws_per_node: 1000,
            count_model: FlawCountModel::new(VolumeExponent::Fixed(0.5)),
            ..FlawSeedingParameters::default()
        };
        let generator = WeibullFlawGenerator::new(params, seeding).unwrap();

        let mut prev = 0;
        for i in 0..50 {
            let count = generator
                .flaw_count(1.0e-6 * (1.5 as Real).powi(i))
                .unwrap();
            assert!(count >= prev);
            prev = count;
        }
        assert_eq!(prev, 1000);
    }

    #[test]
    fn single_nodes_need_a_positive_finite_volume() {
        let generator =
            WeibullFlawGenerator::new(WeibullParameters::new(1.0e6, 4.0), Default::default())
                .unwrap();

        for volume in [0.0, -1.0, Real::NAN, Real::INFINITY] {
            assert!(matches!(
                generator.flaw_count(volume),
                Err(SpaltError::InvalidParameter {
                    name: "node_volumes",
                    ..
                })
            ));
            assert!(matches!(
                generator.node_flaws(3, volume),
                Err(SpaltError::InvalidParameter {
                    name: "node_volumes",
                    ..
                })
            ));
        }

        let flaws = generator.node_flaws(3, 1.0).unwrap();
        let region = generator.generate(&[3], &[1.0]).unwrap();
        assert!(flaws.iter().all(|f| f.is_finite() && *f > 0.0));
        assert_eq!(region.flaws(3), Some(&flaws[..]));
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let nodes = [0];
        let volumes = [1.0];

        for params in [
            WeibullParameters::new(0.0, 4.0),
            WeibullParameters::new(1.0e6, 0.0),
            WeibullParameters::new(-1.0, 4.0),
        ] {
            let err = weibull_flaw_distribution(&params, 0, 0, 10, &nodes, 0, 0, &volumes)
                .unwrap_err();
            assert!(matches!(err, SpaltError::InvalidParameter { .. }));
        }

        let params = WeibullParameters::new(1.0e6, 4.0);
        let err =
            weibull_flaw_distribution(&params, 0, 5, 4, &nodes, 0, 0, &volumes).unwrap_err();
        assert!(matches!(
            err,
            SpaltError::InvalidParameter {
                name: "min_flaws_per_node",
                ..
            }
        ));
    }
}
