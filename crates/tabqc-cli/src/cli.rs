//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tabqc: data-quality checks for tabular datasets
#[derive(Parser)]
#[command(name = "tabqc")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP validation API
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8000", env = "TABQC_PORT")]
        port: u16,

        /// Task registry capacity; the whole store is cleared once exceeded
        #[arg(long, default_value = "255", env = "MAX_TASKS")]
        max_tasks: usize,
    },

    /// Validate two local files without a server
    Check {
        /// Path to the dataset (CSV or JSON)
        #[arg(value_name = "DATASET")]
        dataset: PathBuf,

        /// Path to the data dictionary (CSV or JSON)
        #[arg(value_name = "DATADIC")]
        datadic: PathBuf,

        /// Which suite(s) to run
        #[arg(long, default_value = "both")]
        suite: SuiteChoice,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Upload two files to a running server and fetch the combined report
    Submit {
        /// Path to the dataset (CSV or JSON)
        #[arg(value_name = "DATASET")]
        dataset: PathBuf,

        /// Path to the data dictionary (CSV or JSON)
        #[arg(value_name = "DATADIC")]
        datadic: PathBuf,

        /// Base URL of the validation server
        #[arg(long, default_value = "http://localhost:8000", env = "API_BASE")]
        api_base: String,

        /// Call the synchronous endpoint instead of polling a task
        #[arg(long)]
        sync: bool,

        /// Seconds between polls
        #[arg(long, default_value = "1.0")]
        interval: f64,

        /// Give up after this many polls
        #[arg(long, default_value = "60")]
        max_attempts: usize,
    },
}

/// Which validation suite(s) to run locally
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SuiteChoice {
    /// Structural checks on the dataset
    Structure,
    /// Schema checks on the data dictionary
    Schema,
    /// Both suites over the matched pair
    #[default]
    Both,
}

impl std::str::FromStr for SuiteChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "structure" => Ok(SuiteChoice::Structure),
            "schema" => Ok(SuiteChoice::Schema),
            "both" | "all" => Ok(SuiteChoice::Both),
            _ => Err(format!(
                "Unknown suite: {}. Use structure, schema, or both.",
                s
            )),
        }
    }
}

impl std::fmt::Display for SuiteChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuiteChoice::Structure => write!(f, "structure"),
            SuiteChoice::Schema => write!(f, "schema"),
            SuiteChoice::Both => write!(f, "both"),
        }
    }
}
