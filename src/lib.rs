// file: src/lib.rs
// version: 1.0.0
// guid: 4c1f9a27-8e3b-4d06-9f52-b7a0c3d8e614

//! # iDRAC MAAS Prep
//!
//! Remotely configures the iDRAC management controller of each host listed
//! in a settings file via the vendor `racadm` CLI over SSH, then appends one
//! MAAS inventory fragment per host (PXE MAC, static deploy interface and
//! IPMI power parameters) to an output file.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod network;
pub mod racadm;
pub mod render;

pub use error::{PrepError, Result};

/// Version information for the tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
