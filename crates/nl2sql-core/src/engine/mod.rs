pub mod runner;
pub mod scorer;
