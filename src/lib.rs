pub mod api;
mod config;
pub mod constants;
mod detection;
mod errors;
mod model;
mod simulation;

pub use config::*;
pub use detection::*;
pub use errors::*;
pub use model::*;
pub use simulation::*;
