pub mod config;
pub mod error;
pub mod team;
pub mod telemetry;
