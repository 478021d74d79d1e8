//! `meta.xml` generation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{METADATA_FILE, PackageDescriptor, PackageResult};

/// Write `meta.xml` at the staging root.
///
/// The document has a fixed field order and stable formatting so that two
/// builds from identical inputs produce byte-identical metadata. `name` and
/// `description` carry the raw project values, not the sanitized identifiers
/// used for file naming.
pub fn write_metadata(
    staging_root: &Path,
    descriptor: &PackageDescriptor,
    display_name: &str,
    description: &str,
) -> PackageResult<PathBuf> {
    let path = staging_root.join(METADATA_FILE);
    tracing::info!("writing {}", path.display());

    let mut doc = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<root>\n");
    for (tag, value) in [
        ("id", descriptor.package_id()),
        ("version", descriptor.version.to_string()),
        ("name", display_name.to_string()),
        ("description", description.to_string()),
    ] {
        doc.push_str(&format!("  <{tag}>{}</{tag}>\n", escape_xml(&value)));
    }
    doc.push_str("</root>\n");

    fs::write(&path, doc)?;
    Ok(path)
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
