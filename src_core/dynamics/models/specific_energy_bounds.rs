use crate::errors::InvalidParameter;
use crate::math::Real;

/// Which side of the admissible range, if any, a value was brought back from.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub enum EnergyClamp {
    None,
    Floor,
    Ceiling,
}

/// Admissible range of the specific thermal energy of a material.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct SpecificEnergyBounds {
    pub floor: Real,
    pub ceiling: Real,
}

impl Default for SpecificEnergyBounds {
    fn default() -> Self {
        Self {
            floor: 0.0,
            ceiling: Real::MAX,
        }
    }
}

impl SpecificEnergyBounds {
    pub fn new(floor: Real, ceiling: Real) -> Self {
        Self { floor, ceiling }
    }

    pub fn with_ceiling(ceiling: Real) -> Self {
        Self {
            ceiling,
            ..Self::default()
        }
    }

    /// Requires `0 <= floor <= ceiling`, with a finite floor and a ceiling that is not NaN.
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        if !(self.floor >= 0.0 && self.floor.is_finite()) {
            return Err(InvalidParameter::new(
                "energy_floor",
                self.floor,
                "must be non-negative and finite",
            ));
        }

        if !(self.ceiling >= self.floor) {
            return Err(InvalidParameter::new(
                "energy_ceiling",
                self.ceiling,
                "must not be below the floor",
            ));
        }

        Ok(())
    }

    pub fn contains(&self, specific_energy: Real) -> bool {
        specific_energy >= self.floor && specific_energy <= self.ceiling
    }

    /// Brings `specific_energy` back into `[floor, ceiling]`.
    ///
    /// NaN is sent to the floor. Clamping an already clamped value is a no-op.
    pub fn clamp(&self, specific_energy: Real) -> (Real, EnergyClamp) {
        if specific_energy > self.ceiling {
            (self.ceiling, EnergyClamp::Ceiling)
        } else if specific_energy >= self.floor {
            (specific_energy, EnergyClamp::None)
        } else {
            (self.floor, EnergyClamp::Floor)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn negative_trial_is_floored() {
        let bounds = SpecificEnergyBounds::default();
        let trial = 100.0 - 150.0 * 1.0;
        assert_eq!(trial, -50.0);
        assert_eq!(bounds.clamp(trial), (0.0, EnergyClamp::Floor));
    }

    #[test]
    fn clamp_is_idempotent() {
        let bounds = SpecificEnergyBounds::new(1.0, 10.0);

        for trial in [-5.0, 0.0, 1.0, 4.2, 10.0, 11.0, Real::NAN, Real::INFINITY] {
            let (once, _) = bounds.clamp(trial);
            let (twice, clamp) = bounds.clamp(once);
            assert_eq!(once, twice);
            assert_eq!(clamp, EnergyClamp::None);
            assert!(bounds.contains(once));
        }
    }

    #[test]
    fn inadmissible_bounds_are_rejected() {
        assert!(SpecificEnergyBounds::default().validate().is_ok());
        assert!(SpecificEnergyBounds::new(2.0, 2.0).validate().is_ok());
        assert!(SpecificEnergyBounds::new(0.0, Real::INFINITY).validate().is_ok());

        let err = SpecificEnergyBounds::new(-1.0e9, 1.0e9).validate().unwrap_err();
        assert_eq!(err.name, "energy_floor");
        let err = SpecificEnergyBounds::new(10.0, 5.0).validate().unwrap_err();
        assert_eq!(err.name, "energy_ceiling");
        assert!(SpecificEnergyBounds::new(0.0, Real::NAN).validate().is_err());
        assert!(SpecificEnergyBounds::new(Real::NAN, 1.0).validate().is_err());
    }

    #[test]
    fn ceiling_is_reported() {
        let bounds = SpecificEnergyBounds::with_ceiling(5.0);
        assert_eq!(bounds.clamp(7.0), (5.0, EnergyClamp::Ceiling));
        assert_eq!(bounds.clamp(3.0), (3.0, EnergyClamp::None));
    }
}
