pub use self::node_rng::*;
pub use self::sorting::*;

mod node_rng;
mod sorting;
