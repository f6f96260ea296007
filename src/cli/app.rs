use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pnscan - .NET platform compatibility catalog tooling
#[derive(Debug, Parser)]
#[command(name = "pnscan", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge per-platform scan documents into an exceptions catalog.
    Gen {
        /// Scan document to merge, as <platform>=<file>. Repeatable;
        /// platform is linux, osx or win.
        #[arg(short, long = "platform", value_name = "PLATFORM=FILE", required = true)]
        platforms: Vec<String>,

        /// Path of the catalog to write.
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Include the Site column naming the method the throw was found in.
        #[arg(long)]
        site: bool,
    },

    /// Look a member up in a catalog by DocId.
    Query {
        /// Path to the catalog document.
        #[arg(value_name = "FILE")]
        catalog: PathBuf,

        /// DocId to look up (e.g. M:System.Console.Beep).
        #[arg(value_name = "DOCID")]
        doc_id: String,

        /// Catalog format: exceptions, deprecated, or sdk.
        #[arg(short, long, default_value = "exceptions")]
        kind: String,
    },

    /// Validate a catalog document and print statistics.
    Check {
        /// Path to the catalog document.
        #[arg(value_name = "FILE")]
        catalog: PathBuf,

        /// Catalog format: exceptions, deprecated, or sdk.
        #[arg(short, long, default_value = "exceptions")]
        kind: String,
    },
}
