// file: src/logging/mod.rs
// version: 1.0.0
// guid: 5a90d2c7-8f34-4e61-b0a5-27c4d91e63f8

//! Logging system for iDRAC MAAS prep

pub mod logger;

pub use logger::init_logger;
