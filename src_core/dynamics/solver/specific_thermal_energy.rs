use crate::dynamics::models::{EnergyClamp, SpecificEnergyBounds};
use crate::errors::ContractError;
use crate::math::Real;

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Explicit trial value `e + de/dt * dt`.
#[inline]
pub fn forward_euler_specific_thermal_energy(prior: Real, rate: Real, dt: Real) -> Real {
    prior + rate * dt
}

/// Specific energy rate of the pressure work `-(P / ρ) ∇·v`.
///
/// Exactly zero when the velocity divergence is zero, whatever the pressure.
#[inline]
pub fn pressure_work_rate(pressure: Real, density: Real, velocity_divergence: Real) -> Real {
    if velocity_divergence == 0.0 {
        0.0
    } else {
        -pressure / density * velocity_divergence
    }
}

pub fn check_substep_length(dt: Real) -> Result<(), ContractError> {
    if dt >= 0.0 && dt.is_finite() {
        Ok(())
    } else {
        Err(ContractError::InvalidTimestep(dt))
    }
}

/// Checks that every fraction is non-negative and that they add up to `1 ± tolerance`.
///
/// Returns the sum of the fractions.
pub fn check_mixing_fractions(
    fractions: impl IntoIterator<Item = Real>,
    tolerance: Real,
) -> Result<Real, ContractError> {
    let mut sum = 0.0;

    for fraction in fractions {
        if !(fraction >= 0.0 && fraction.is_finite()) {
            return Err(ContractError::InvalidMixingFraction(fraction));
        }
        sum += fraction;
    }

    if (sum - 1.0).abs() > tolerance {
        Err(ContractError::MixingFractionSum(sum))
    } else {
        Ok(sum)
    }
}

/// Energy update of a node owned by a single material.
pub fn pure_specific_thermal_energy(
    prior: Real,
    rate: Real,
    dt: Real,
    bounds: &SpecificEnergyBounds,
) -> (Real, EnergyClamp) {
    bounds.clamp(forward_euler_specific_thermal_energy(prior, rate, dt))
}

/// Volume-fraction weighted average of per-material energies.
///
/// The weights are normalized by their sum so that materials sharing the same equation of
/// state give back exactly the single-material value.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MixedEnergyBlend {
    weighted_energy: Real,
    total_fraction: Real,
}

impl MixedEnergyBlend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, fraction: Real, specific_thermal_energy: Real) {
        self.weighted_energy += fraction * specific_thermal_energy;
        self.total_fraction += fraction;
    }

    /// The blended energy, or `None` if no fraction was accumulated.
    pub fn finish(&self) -> Option<Real> {
        if self.total_fraction > 0.0 {
            Some(self.weighted_energy / self.total_fraction)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn negative_or_nan_substeps_are_rejected() {
        assert!(check_substep_length(0.0).is_ok());
        assert!(check_substep_length(1.0e-3).is_ok());
        assert_eq!(
            check_substep_length(-1.0),
            Err(ContractError::InvalidTimestep(-1.0))
        );
        assert!(check_substep_length(Real::NAN).is_err());
    }

    #[test]
    fn mixing_fractions_must_add_up_to_one() {
        assert!(check_mixing_fractions([0.25, 0.75], 1.0e-6).is_ok());
        assert!(check_mixing_fractions([0.3, 0.3], 1.0e-6).is_err());
        assert_eq!(
            check_mixing_fractions([-0.5, 1.5], 1.0e-6),
            Err(ContractError::InvalidMixingFraction(-0.5))
        );
        assert!(check_mixing_fractions([0.5, 0.5 + 1.0e-8], 1.0e-6).is_ok());
    }

    #[test]
    fn expansion_cools_and_compression_heats() {
        assert_eq!(pressure_work_rate(4.0, 2.0, 0.5), -1.0);
        assert_eq!(pressure_work_rate(4.0, 2.0, -0.5), 1.0);
        assert_eq!(pressure_work_rate(Real::INFINITY, 2.0, 0.0), 0.0);
    }

    #[test]
    fn worked_example_is_floored() {
        let bounds = SpecificEnergyBounds::default();
        let (energy, clamp) = pure_specific_thermal_energy(100.0, -150.0, 1.0, &bounds);
        assert_eq!(energy, 0.0);
        assert_eq!(clamp, EnergyClamp::Floor);
    }

    #[test]
    fn identical_contributions_blend_to_themselves() {
        let mut blend = MixedEnergyBlend::new();
        blend.add(0.3, 42.0);
        blend.add(0.7, 42.0);
        assert!((blend.finish().unwrap() - 42.0).abs() < 1.0e-4);
        assert_eq!(MixedEnergyBlend::new().finish(), None);
    }
}
