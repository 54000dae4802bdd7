//! Library exports for statsdesc, shared between the binary and tests.

pub mod cli;
pub mod collections;
pub mod config;
pub mod models;
pub mod startup;
pub mod transport;
pub mod utils;
