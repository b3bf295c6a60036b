#[cfg(feature = "dim1")]
pub extern crate spalt1d_core;
#[cfg(feature = "dim2")]
pub extern crate spalt2d_core;
#[cfg(feature = "dim3")]
pub extern crate spalt3d_core;

pub extern crate nalgebra as na;

#[macro_use]
extern crate log;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(feature = "dim1")]
pub use spalt1d_core as core;
#[cfg(feature = "dim2")]
pub use spalt2d_core as core;
#[cfg(feature = "dim3")]
pub use spalt3d_core as core;

pub mod prelude {
    pub use crate::dynamics::damage::*;
    pub use crate::dynamics::models::*;
    pub use crate::dynamics::solver::*;
    pub use crate::dynamics::*;
    pub use crate::errors::*;
    pub use crate::math::*;
    pub use crate::pipelines::*;
}

pub mod math {
    pub use crate::core::math::*;
}

pub mod dynamics;
pub mod errors;
pub mod pipelines;
