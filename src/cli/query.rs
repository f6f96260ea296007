use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context};
use pnscan::store::{parse_deprecated, parse_exceptions, parse_sdk};

pub fn run(catalog: &Path, doc_id: &str, kind: &str) -> anyhow::Result<()> {
    let file = File::open(catalog)
        .with_context(|| format!("failed to open {}", catalog.display()))?;
    let reader = BufReader::new(file);

    match kind {
        "exceptions" => {
            let store = parse_exceptions(reader)?;
            match store.find_doc_id(doc_id) {
                Some(entry) => println!(
                    "{}: not supported on {}",
                    entry.doc_id(),
                    entry.data().to_friendly_string()
                ),
                None => println!("{doc_id}: no platform restrictions recorded"),
            }
        }
        "deprecated" => {
            let store = parse_deprecated(reader)?;
            match store.find_doc_id(doc_id) {
                Some(entry) => {
                    println!("{}: deprecated ({})", entry.doc_id(), entry.data().join("; "));
                }
                None => println!("{doc_id}: not deprecated"),
            }
        }
        "sdk" => {
            let store = parse_sdk(reader)?;
            if store.find_doc_id(doc_id).is_some() {
                println!("{doc_id}: present");
            } else {
                println!("{doc_id}: absent");
            }
        }
        other => bail!("unknown catalog kind '{other}', expected exceptions, deprecated or sdk"),
    }

    Ok(())
}
