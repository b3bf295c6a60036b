#![no_std]

pub extern crate nalgebra as na;
pub extern crate oorandom;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

pub mod prelude {
    pub use crate::dynamics::models::*;
    pub use crate::dynamics::solver::*;
    pub use crate::errors::*;
    pub use crate::math::*;
}

pub mod math {
    pub use super::dim_math::math::*;
}

mod dim_math {
    mod real {
        /// The scalar type used throughout this crate.
        #[cfg(feature = "f64")]
        pub type Real = f64;

        /// The scalar type used throughout this crate.
        #[cfg(feature = "f32")]
        pub type Real = f32;
    }

    /// Compilation flags dependent aliases for mathematical types.
    #[cfg(feature = "dim3")]
    pub mod math {
        pub use super::real::*;
        use na::{Point3, Vector3, U3};

        /// The default tolerance used for numerical comparisons.
        pub const DEFAULT_EPSILON: Real = Real::EPSILON;

        /// The dimension of the space.
        pub const DIM: usize = 3;

        /// The dimension of the ambient space.
        pub type Dim = U3;

        /// The point type.
        pub type Point<N> = Point3<N>;

        /// The vector type.
        pub type Vector<N> = Vector3<N>;
    }

    /// Compilation flags dependent aliases for mathematical types.
    #[cfg(feature = "dim2")]
    pub mod math {
        pub use super::real::*;
        use na::{Point2, Vector2, U2};

        /// The default tolerance used for numerical comparisons.
        pub const DEFAULT_EPSILON: Real = Real::EPSILON;

        /// The dimension of the space.
        pub const DIM: usize = 2;

        /// The dimension of the ambient space.
        pub type Dim = U2;

        /// The point type.
        pub type Point<N> = Point2<N>;

        /// The vector type.
        pub type Vector<N> = Vector2<N>;
    }

    /// Compilation flags dependent aliases for mathematical types.
    ///
    /// In 1D a node "volume" is a length.
    #[cfg(feature = "dim1")]
    pub mod math {
        pub use super::real::*;
        use na::{Point1, Vector1, U1};

        /// The default tolerance used for numerical comparisons.
        pub const DEFAULT_EPSILON: Real = Real::EPSILON;

        /// The dimension of the space.
        pub const DIM: usize = 1;

        /// The dimension of the ambient space.
        pub type Dim = U1;

        /// The point type.
        pub type Point<N> = Point1<N>;

        /// The vector type.
        pub type Vector<N> = Vector1<N>;
    }
}

pub mod dynamics;
pub mod errors;
pub mod utils;
