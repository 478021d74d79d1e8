//! List command implementation.
//!
//! Prints the metadata document and entry names of an existing package.

use std::fs::File;
use std::io::Read;

use anyhow::{Context, Result};
use wotpack_bundle::METADATA_FILE;
use zip::ZipArchive;

/// Run the list command.
pub fn run(package_path: &str) -> Result<()> {
    let file =
        File::open(package_path).with_context(|| format!("Failed to open: {package_path}"))?;
    let mut archive =
        ZipArchive::new(file).with_context(|| format!("Not a zip archive: {package_path}"))?;

    let metadata = {
        let mut entry = archive
            .by_name(METADATA_FILE)
            .with_context(|| format!("No {METADATA_FILE} in {package_path}"))?;
        let mut contents = String::new();
        entry.read_to_string(&mut contents)?;
        contents
    };

    println!("Package: {package_path}");
    println!("\n{}", metadata.trim_end());

    println!("\nFiles:");
    let mut names: Vec<&str> = archive.file_names().collect();
    names.sort_unstable();
    for name in names {
        println!("  {name}");
    }

    Ok(())
}
