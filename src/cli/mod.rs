// file: src/cli/mod.rs
// version: 1.0.0
// guid: b6e38f02-d591-4c47-a728-90f5c3b1d6e4

//! Command line interface for iDRAC MAAS prep

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
