// file: src/cli/args.rs
// version: 1.0.0
// guid: d84a06f1-2b95-4e63-8c07-f13e59a2d7b0

//! Command line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "idrac-maas-prep")]
#[command(about = "Reconfigures iDRAC controllers and prepares hosts for MAAS")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure every host and append its MAAS inventory fragment
    Provision {
        /// Output file receiving the maas_machines.yml fragments
        output: String,

        #[arg(
            short = 'f',
            long,
            default_value = "settings.yaml",
            help = "YAML settings file (see settings.yaml.sample)"
        )]
        settings_file: String,

        #[arg(long, help = "Show what would be done without connecting")]
        dry_run: bool,
    },

    /// Load a settings file and report whether it is usable
    Validate {
        #[arg(
            short = 'f',
            long,
            default_value = "settings.yaml",
            help = "YAML settings file (see settings.yaml.sample)"
        )]
        settings_file: String,
    },
}
