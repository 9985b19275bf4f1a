use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "dep-checkr",
    about = "Find missing transitive dependencies, duplicate jars and unresolved coordinates",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file [default: ./.dep-checkr/config.toml, fallback ~/.config/dep-checkr/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, global = true, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print results, no banners or progress
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report transitive dependencies missing from the direct dependencies of a `mvn dependency:tree` listing
    Tree {
        /// Tree listing file, or `-` for stdin
        file: PathBuf,

        /// Exit with code 1 when any groupId:artifactId gap is found
        #[arg(long)]
        strict: bool,
    },

    /// Group jar filenames that differ only by version
    Duplicates {
        /// File with one jar filename per line
        file: PathBuf,
    },

    /// Split jar filenames by whether they carry a version
    Split {
        /// File with one jar filename per line
        file: PathBuf,

        /// Directory for the two output files
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Look up versioned jar filenames on Maven Central and generate <dependency> declarations
    Resolve {
        /// File with one versioned jar filename per line (see `split`)
        file: PathBuf,

        /// Directory for the generated declarations and the unresolved list
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
