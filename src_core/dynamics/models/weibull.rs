use crate::errors::InvalidParameter;
use crate::math::Real;

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Weibull statistics of the flaws of a brittle material.
///
/// The number of flaws per unit volume that activate at a strain lower than `ε` is
/// `n(ε) = k ε^m` (Benz & Asphaug, 1995). Node volumes are measured in units of
/// `volume_normalization`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct WeibullParameters {
    pub k: Real,
    pub m: Real,
    pub volume_normalization: Real,
}

impl WeibullParameters {
    pub fn new(k: Real, m: Real) -> Self {
        Self {
            k,
            m,
            volume_normalization: 1.0,
        }
    }

    pub fn with_volume_normalization(mut self, volume_normalization: Real) -> Self {
        self.volume_normalization = volume_normalization;
        self
    }

    pub fn validate(&self) -> Result<(), InvalidParameter> {
        InvalidParameter::require_positive("k", self.k)?;
        InvalidParameter::require_positive("m", self.m)?;
        InvalidParameter::require_positive("volume_normalization", self.volume_normalization)
    }

    /// The flaw number density `k ε^m`.
    pub fn flaw_number_density(&self, strain: Real) -> Real {
        self.k * strain.powf(self.m)
    }

    /// `k V / V_norm`, the expected number of flaws in `volume` per unit of `ε^m`.
    pub fn flaw_number_coefficient(&self, volume: Real) -> Real {
        self.k * volume / self.volume_normalization
    }

    /// Probability that a volume contains at least one flaw active at `strain`.
    pub fn cumulative_probability(&self, volume: Real, strain: Real) -> Real {
        let expected = self.flaw_number_coefficient(volume) * strain.powf(self.m);
        -(-expected).exp_m1()
    }

    /// Inverse of [`Self::cumulative_probability`]: the activation strain of a flaw whose
    /// cumulative probability is `u`, for `u` in `(0, 1)`.
    pub fn flaw_threshold(&self, volume: Real, u: Real) -> Real {
        let neg_log = -(-u).ln_1p();
        (neg_log / self.flaw_number_coefficient(volume)).powf(1.0 / self.m)
    }

    /// Activation strain of the `rank`-th weakest flaw (starting at 1) seeded into a body of
    /// the given total volume.
    pub fn ranked_activation_strain(&self, total_volume: Real, rank: u64) -> Real {
        (rank as Real / self.flaw_number_coefficient(total_volume)).powf(1.0 / self.m)
    }
}

/// How the expected number of flaws of a node scales with its volume.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub enum VolumeExponent {
    /// `(k V / V_norm)^(1/m)`.
    InverseWeibull,
    /// `(k V / V_norm)^β` for a user-chosen `β >= 0`.
    Fixed(Real),
}

/// Maps a node volume to the number of flaws assigned to that node.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct FlawCountModel {
    pub volume_exponent: VolumeExponent,
}

impl Default for FlawCountModel {
    fn default() -> Self {
        Self {
            volume_exponent: VolumeExponent::InverseWeibull,
        }
    }
}

impl FlawCountModel {
    pub fn new(volume_exponent: VolumeExponent) -> Self {
        Self { volume_exponent }
    }

    pub fn validate(&self) -> Result<(), InvalidParameter> {
        match self.volume_exponent {
            VolumeExponent::InverseWeibull => Ok(()),
            VolumeExponent::Fixed(beta) => {
                if beta >= 0.0 && beta.is_finite() {
                    Ok(())
                } else {
                    Err(InvalidParameter::new(
                        "volume_exponent",
                        beta,
                        "must be non-negative and finite",
                    ))
                }
            }
        }
    }

    pub fn exponent(&self, params: &WeibullParameters) -> Real {
        match self.volume_exponent {
            VolumeExponent::InverseWeibull => 1.0 / params.m,
            VolumeExponent::Fixed(beta) => beta,
        }
    }

    /// Expected flaw count before clamping. Non-decreasing in `volume`.
    pub fn expected_flaw_count(&self, params: &WeibullParameters, volume: Real) -> Real {
        params
            .flaw_number_coefficient(volume)
            .powf(self.exponent(params))
    }

    /// The expected count rounded half-up and clamped to `[min_flaws, max_flaws]`.
    pub fn flaw_count(
        &self,
        params: &WeibullParameters,
        volume: Real,
        min_flaws: u32,
        max_flaws: u32,
    ) -> u32 {
        let rounded = (self.expected_flaw_count(params, volume) + 0.5).floor();

        if !(rounded < max_flaws as Real) {
            // Also catches NaN.
            max_flaws
        } else if rounded <= min_flaws as Real {
            min_flaws
        } else {
            rounded as u32
        }
    }
}

pub fn validate_flaw_count_bounds(min_flaws: u32, max_flaws: u32) -> Result<(), InvalidParameter> {
    if min_flaws > max_flaws {
        Err(InvalidParameter::new(
            "min_flaws_per_node",
            min_flaws as Real,
            "must not exceed max_flaws_per_node",
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn non_positive_constants_are_rejected() {
        assert!(WeibullParameters::new(1.0e6, 4.0).validate().is_ok());
        assert_eq!(
            WeibullParameters::new(0.0, 4.0).validate().unwrap_err().name,
            "k"
        );
        assert_eq!(
            WeibullParameters::new(1.0, -1.0).validate().unwrap_err().name,
            "m"
        );
        assert!(WeibullParameters::new(Real::NAN, 4.0).validate().is_err());
        assert!(WeibullParameters::new(1.0, 4.0)
            .with_volume_normalization(0.0)
            .validate()
            .is_err());
        assert!(validate_flaw_count_bounds(3, 2).is_err());
        assert!(validate_flaw_count_bounds(2, 2).is_ok());
    }

    #[test]
    fn quantile_inverts_cdf() {
        let params = WeibullParameters::new(1.0e6, 4.0);

        for u in [0.01, 0.25, 0.5, 0.75, 0.99] {
            let eps = params.flaw_threshold(2.0, u);
            let p = params.cumulative_probability(2.0, eps);
            assert!((p - u).abs() < 1.0e-4, "{} vs {}", p, u);
        }
    }

    #[test]
    fn thresholds_grow_with_probability_and_shrink_with_volume() {
        let params = WeibullParameters::new(1.0e6, 4.0);
        assert!(params.flaw_threshold(1.0, 0.2) < params.flaw_threshold(1.0, 0.8));
        assert!(params.flaw_threshold(10.0, 0.5) < params.flaw_threshold(1.0, 0.5));
    }

    #[test]
    fn expected_count_is_monotonic_in_volume() {
        let params = WeibullParameters::new(1.0e6, 4.0);

        for model in [
            FlawCountModel::default(),
            FlawCountModel::new(VolumeExponent::Fixed(0.0)),
            FlawCountModel::new(VolumeExponent::Fixed(1.0)),
        ] {
            let mut prev = 0.0;
            for i in 1..100 {
                let expected = model.expected_flaw_count(&params, i as Real * 0.1);
                assert!(expected >= prev);
                prev = expected;
            }
        }
    }

    #[test]
    fn flaw_count_is_rounded_and_clamped() {
        let params = WeibullParameters::new(1.0e6, 4.0);
        let model = FlawCountModel::default();

        // (1.0e6)^(1/4) ~= 31.6
        assert_eq!(model.flaw_count(&params, 1.0, 0, 100), 32);
        assert_eq!(model.flaw_count(&params, 1.0, 0, 10), 10);
        assert_eq!(model.flaw_count(&params, 1.0e-12, 3, 10), 3);
        assert!(FlawCountModel::new(VolumeExponent::Fixed(-1.0))
            .validate()
            .is_err());
    }
}
