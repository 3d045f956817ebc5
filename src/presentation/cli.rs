//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --json, --verbose) are inherited by all subcommands
//! - Running without a subcommand starts the interactive shell

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Which tables `show` prints
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    All,
    Entries,
    Abc,
    Xyz,
}

impl Section {
    pub fn includes_entries(self) -> bool {
        matches!(self, Section::All | Section::Entries)
    }

    pub fn includes_abc(self) -> bool {
        matches!(self, Section::All | Section::Abc)
    }

    pub fn includes_xyz(self) -> bool {
        matches!(self, Section::All | Section::Xyz)
    }
}

/// StarData - star observation catalog
#[derive(Parser, Debug)]
#[command(name = "stardata")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'stardata' without arguments for the interactive shell.")]
pub struct Cli {
    /// Config file to use instead of ./stardata.toml and the user config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate one star line and print the clamped entry
    Parse {
        /// hoursRA minutesRA secondsRA degreesDEC minutesDEC secondsDEC distance [radius] [name]
        #[arg(num_args = 1.., required = true, allow_negative_numbers = true)]
        line: Vec<String>,
    },

    /// Parse one star line and append it to the data file
    Add {
        /// hoursRA minutesRA secondsRA degreesDEC minutesDEC secondsDEC distance [radius] [name]
        #[arg(num_args = 1.., required = true, allow_negative_numbers = true)]
        line: Vec<String>,

        /// Data file (defaults to the configured one)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Load a data file and print its entries with A/B/C and X/Y/Z tables
    Show {
        /// Data file (defaults to the configured one)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Which tables to print
        #[arg(short, long, value_enum, default_value = "all")]
        section: Section,
    },
}
