pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod source;
pub mod upload;

pub use api::PlannerClient;
pub use config::SeedConfig;
pub use error::SeedError;
