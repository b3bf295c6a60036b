use crate::core::errors::{ContractError, InvalidParameter};
use crate::math::Real;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SpaltError {
    /// Malformed material constants or seeding bounds, detected before any step runs.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: Real,
        reason: &'static str,
    },
    /// The caller broke the contract of a per-node operation.
    #[error("contract violation at node {node}: {reason}")]
    ContractViolation { node: usize, reason: ContractError },
}

impl SpaltError {
    pub fn contract(node: usize, reason: ContractError) -> Self {
        Self::ContractViolation { node, reason }
    }

    /// The offending node of a contract violation.
    pub fn node(&self) -> Option<usize> {
        match self {
            Self::ContractViolation { node, .. } => Some(*node),
            Self::InvalidParameter { .. } => None,
        }
    }
}

impl From<InvalidParameter> for SpaltError {
    fn from(err: InvalidParameter) -> Self {
        Self::InvalidParameter {
            name: err.name,
            value: err.value,
            reason: err.reason,
        }
    }
}
