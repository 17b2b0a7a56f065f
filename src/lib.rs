pub mod analysis;
pub mod cli;
pub mod coerce;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod generator;
pub mod integrity;
pub mod logging;
