//! Command-line argument definitions for the Maquette CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the target
//! language, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Maquette diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram document (TOML)
    #[arg(help = "Path to the input diagram document")]
    pub input: String,

    /// Path to the generated source file; defaults to the input stem with
    /// the target language's extension
    #[arg(short, long)]
    pub output: Option<String>,

    /// Target language (java, php, python); unrecognized names fall back
    /// to java
    #[arg(short, long)]
    pub language: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
