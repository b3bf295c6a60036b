use super::flaw_distribution::check_node_volumes;
use crate::core::dynamics::models::WeibullParameters;
use crate::core::dynamics::solver::BenzAsphaugSeeding;
use crate::core::errors::InvalidParameter;
use crate::core::utils::{sort_strictly_ascending, NodeStreamKey};
use crate::dynamics::damage::FlawDistribution;
use crate::errors::SpaltError;
use crate::math::Real;

/// Seeds flaws over a whole body following Benz & Asphaug (1995).
///
/// The `j`-th flaw activates at `(j / (k V))^(1/m)` and is given to a node picked uniformly
/// among the nodes enabled by `mask`. At least `max(min_total_flaws, n ln n)` flaws are
/// seeded for `n` enabled nodes, and seeding goes on until each of them holds
/// `min_flaws_per_node` flaws. Disabled nodes get no flaw.
pub fn benz_asphaug_flaw_distribution(
    params: &WeibullParameters,
    seeding: &BenzAsphaugSeeding,
    node_list: &[usize],
    node_volumes: &[Real],
    mask: &[bool],
) -> Result<FlawDistribution, SpaltError> {
    params.validate()?;
    seeding.validate()?;
    check_node_volumes(node_list, node_volumes)?;

    if mask.len() != node_list.len() {
        return Err(InvalidParameter::new(
            "mask",
            mask.len() as Real,
            "must have one entry per node",
        )
        .into());
    }

    let candidates: Vec<usize> = (0..node_list.len()).filter(|i| mask[*i]).collect();
    let mut flaws = vec![vec![]; node_list.len()];

    if !candidates.is_empty() {
        let t0 = instant::now();
        let n = candidates.len();
        let body_volume: Real = if seeding.total_volume > 0.0 {
            seeding.total_volume
        } else {
            candidates.iter().map(|i| node_volumes[*i]).sum()
        };
        let volume = body_volume * seeding.volume_stretch_factor;

        let n_log_n = (n as Real * (n as Real).ln() + 0.5).floor() as u64;
        let target = n_log_n.max(seeding.min_total_flaws as u64);
        let min_per_node = seeding.min_flaws_per_node as usize;

        // A single stream for the whole body: flaws are dealt out sequentially.
        let mut rng = NodeStreamKey::new(seeding.seed, 0, 0).node_rng(0);
        let mut num_complete = 0;
        let mut rank = 0;

        while rank < target || num_complete < n {
            rank += 1;
            let slot = candidates[rng.rand_range(0..n as u64) as usize];
            flaws[slot].push(params.ranked_activation_strain(volume, rank));

            if flaws[slot].len() == min_per_node {
                num_complete += 1;
            }
        }

        for node_flaws in &mut flaws {
            sort_strictly_ascending(node_flaws);
        }

        info!(
            "Seeded {} Benz-Asphaug flaws on {} nodes: {}",
            rank,
            n,
            instant::now() - t0
        );
    }

    Ok(FlawDistribution::from_sorted(
        node_list.iter().copied().zip(flaws),
    ))
}
