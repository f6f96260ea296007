use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context};
use pnscan::report::ScanDatabase;
use pnscan::store::Platform;

pub fn run(platforms: &[String], output: &Path, site: bool) -> anyhow::Result<()> {
    let mut database = ScanDatabase::new();

    for spec in platforms {
        let Some((name, path)) = spec.split_once('=') else {
            bail!("invalid platform spec '{spec}', expected <platform>=<file>");
        };
        let Some(platform) = Platform::from_header(name).and_then(Platform::name) else {
            bail!("unknown platform '{name}', expected linux, osx or win");
        };

        log::info!("Merging {path} as {platform}");
        let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
        database
            .import_scan_csv(BufReader::new(file), platform)
            .with_context(|| format!("failed to import {path}"))?;
    }

    let file = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    database.export_csv(&mut writer, site)?;
    writer.flush()?;

    log::info!(
        "Wrote {} entries across {} platforms to {}",
        database.len(),
        database.platforms().len(),
        output.display()
    );
    Ok(())
}
