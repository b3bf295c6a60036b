//! Seeding of brittle-fracture flaws.

pub use self::benz_asphaug::benz_asphaug_flaw_distribution;
pub use self::flaw_distribution::FlawDistribution;
pub use self::weibull_flaws::{weibull_flaw_distribution, WeibullFlawGenerator};

mod benz_asphaug;
mod flaw_distribution;
mod weibull_flaws;
