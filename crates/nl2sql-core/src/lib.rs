pub mod config;
pub mod engine;
pub mod errors;
pub mod extract;
pub mod generator;
pub mod metrics_api;
pub mod model;
pub mod prompt;
pub mod providers;
pub mod report;
pub mod retry;
