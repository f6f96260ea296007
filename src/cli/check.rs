use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context};
use pnscan::store::{parse_deprecated, parse_exceptions, parse_sdk, Platform};

pub fn run(catalog: &Path, kind: &str) -> anyhow::Result<()> {
    let file = File::open(catalog)
        .with_context(|| format!("failed to open {}", catalog.display()))?;
    let reader = BufReader::new(file);

    match kind {
        "exceptions" => {
            let store = parse_exceptions(reader)?;
            println!("exceptions catalog: {} entries", store.len());
            for flag in [Platform::LINUX, Platform::MACOS, Platform::WINDOWS] {
                let count = store.entries().filter(|e| e.data().contains(flag)).count();
                println!("  {}: {}", flag.to_friendly_string(), count);
            }
        }
        "deprecated" => {
            let store = parse_deprecated(reader)?;
            println!("deprecation catalog: {} entries", store.len());
        }
        "sdk" => {
            let store = parse_sdk(reader)?;
            println!("membership catalog: {} entries", store.len());
        }
        other => bail!("unknown catalog kind '{other}', expected exceptions, deprecated or sdk"),
    }

    Ok(())
}
