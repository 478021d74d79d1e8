//! Resolved package identity.

use crate::sanitize::{sanitize_identifier, sanitize_text};
use crate::{ModVersion, PackageError, PackageResult, WOTMOD_EXTENSION};

/// The resolved identity of a package, computed once per build invocation
/// and immutable afterwards.
///
/// Identifiers are sanitized on construction; an identifier that sanitizes
/// to an empty string is a configuration error caught before any filesystem
/// mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    /// Developer's nickname or reversed domain, e.g. `com.github.jhakonen`.
    pub author_id: String,
    /// Modification identifier, e.g. `foo`.
    pub mod_id: String,
    /// Normalized three-part version.
    pub version: ModVersion,
    /// Sanitized description text (word characters only).
    pub description: String,
}

impl PackageDescriptor {
    /// Build a descriptor from raw identity fields, sanitizing each.
    pub fn new(
        raw_author: &str,
        raw_mod: &str,
        version: ModVersion,
        raw_description: &str,
    ) -> PackageResult<Self> {
        let author_id = sanitize_identifier(raw_author);
        if author_id.is_empty() {
            return Err(PackageError::Configuration(format!(
                "author id {raw_author:?} is empty after sanitizing"
            )));
        }

        let mod_id = sanitize_identifier(raw_mod);
        if mod_id.is_empty() {
            return Err(PackageError::Configuration(format!(
                "mod id {raw_mod:?} is empty after sanitizing"
            )));
        }

        Ok(Self {
            author_id,
            mod_id,
            version,
            description: sanitize_text(raw_description),
        })
    }

    /// Fully qualified package id: `{author_id}.{mod_id}`.
    #[must_use]
    pub fn package_id(&self) -> String {
        format!("{}.{}", self.author_id, self.mod_id)
    }

    /// File name of the produced archive:
    /// `{author_id}.{mod_id}_{major}.{minor}.{patch}.wotmod`.
    #[must_use]
    pub fn archive_file_name(&self) -> String {
        format!(
            "{}_{}.{WOTMOD_EXTENSION}",
            self.package_id(),
            self.version
        )
    }

    /// Default data root inside the package, namespaced by the package id.
    #[must_use]
    pub fn default_data_dir(&self) -> String {
        format!("res/mods/{}", self.package_id())
    }
}
