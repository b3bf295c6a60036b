use crate::math::Real;
use core::fmt;

/// A material constant or seeding bound that cannot be used to set up a simulation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InvalidParameter {
    pub name: &'static str,
    pub value: Real,
    pub reason: &'static str,
}

impl InvalidParameter {
    pub fn new(name: &'static str, value: Real, reason: &'static str) -> Self {
        Self {
            name,
            value,
            reason,
        }
    }

    pub(crate) fn require_positive(name: &'static str, value: Real) -> Result<(), Self> {
        // Written so that NaN is rejected too.
        if value > 0.0 && value.is_finite() {
            Ok(())
        } else {
            Err(Self::new(name, value, "must be positive and finite"))
        }
    }
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` = {} {}", self.name, self.value, self.reason)
    }
}

/// A caller-side mistake detected while updating a single node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ContractError {
    /// The sub-step length is negative or not finite.
    InvalidTimestep(Real),
    /// The mixing fractions of a node do not add up to one.
    MixingFractionSum(Real),
    /// One of the mixing fractions is negative or not finite.
    InvalidMixingFraction(Real),
    /// A mixing entry refers to a material that does not exist.
    UnknownMaterial(u32),
    /// Flaws were already seeded on this node.
    FlawsAlreadySeeded,
    /// The integration state has no entry for this node.
    MissingIntegrationState,
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimestep(dt) => write!(f, "invalid sub-step length {}", dt),
            Self::MixingFractionSum(sum) => {
                write!(f, "mixing fractions sum to {} instead of 1", sum)
            }
            Self::InvalidMixingFraction(frac) => write!(f, "invalid mixing fraction {}", frac),
            Self::UnknownMaterial(id) => write!(f, "unknown material {}", id),
            Self::FlawsAlreadySeeded => write!(f, "flaws were already seeded"),
            Self::MissingIntegrationState => write!(f, "no integration state for this node"),
        }
    }
}
