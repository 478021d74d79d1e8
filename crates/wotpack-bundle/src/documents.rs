//! Conventional document collection.

use std::fs;
use std::path::Path;

use crate::PackageResult;

/// Lower-cased substrings that mark a file as a conventional document.
const DOCUMENT_PATTERNS: [&str; 3] = ["readme", "license", "changes"];

/// Copy readme/license/changelog files from the project root into the
/// staging root, unmodified and under their original names.
///
/// Matching is non-recursive and case-insensitive on the file name. Zero
/// matches is not an error. Returns the copied file names, sorted.
pub fn collect_documents(source_dir: &Path, staging_root: &Path) -> PackageResult<Vec<String>> {
    let mut copied = Vec::new();

    let mut entries: Vec<_> = fs::read_dir(source_dir)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let lower = name.to_lowercase();
        if DOCUMENT_PATTERNS.iter().any(|p| lower.contains(p)) {
            fs::copy(entry.path(), staging_root.join(&name))?;
            copied.push(name);
        }
    }

    Ok(copied)
}
