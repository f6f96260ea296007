mod cli;

use clap::Parser;

use crate::cli::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Progress goes to stderr; --verbose enables debug; RUST_LOG overrides
    let level = if cli.global.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("pnscan", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    match &cli.command {
        Command::Gen {
            platforms,
            output,
            site,
        } => cli::gen::run(platforms, output, *site),
        Command::Query {
            catalog,
            doc_id,
            kind,
        } => cli::query::run(catalog, doc_id, kind),
        Command::Check { catalog, kind } => cli::check::run(catalog, kind),
    }
}
