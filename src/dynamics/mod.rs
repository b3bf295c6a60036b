pub use self::integration_state::{IntegrationState, MixingFractions, NodeIntegrationState};
pub use self::material::{Material, MaterialHandle, MaterialSet};
pub use self::node::Node;
pub use self::node_set::NodeSet;

pub mod damage;
mod integration_state;
mod material;
pub mod models;
mod node;
mod node_set;
pub mod solver;
