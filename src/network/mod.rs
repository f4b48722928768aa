// file: src/network/mod.rs
// version: 1.0.0
// guid: 8b4e07d3-6f21-4a95-bc08-53d9a1e76f20

//! Network operations module

pub mod ssh;

pub use ssh::IdracSession;
