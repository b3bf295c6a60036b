pub mod models;
pub mod solver;
