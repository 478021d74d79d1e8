//! Project manifest parsing and validation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// wotpack.toml manifest structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectManifest {
    pub package: PackageSection,

    #[serde(default)]
    pub files: FilesSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageSection {
    pub name: String,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub maintainer: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesSection {
    /// Top-level Python modules, without the .py extension
    #[serde(default)]
    pub py_modules: Vec<String>,

    /// Data files, relative to the project root
    #[serde(default)]
    pub data_files: Vec<String>,
}

impl ProjectManifest {
    /// Load manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest: {:?}", path.as_ref()))?;

        Self::parse(&content)
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<()> {
        if self.package.name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        for module in &self.files.py_modules {
            if module.is_empty() {
                anyhow::bail!("Module name cannot be empty");
            }
            if module.ends_with(".py") {
                anyhow::bail!(
                    "Module '{}' should be listed without the .py extension",
                    module
                );
            }
        }

        for data_file in &self.files.data_files {
            if Path::new(data_file).is_absolute() {
                anyhow::bail!("Data file '{}' must be relative to the project root", data_file);
            }
        }

        Ok(())
    }
}

/// Check command implementation
pub fn check(manifest_path: Option<String>) -> Result<()> {
    let path = manifest_path.unwrap_or_else(|| "wotpack.toml".to_string());

    println!("Checking manifest: {}", path);

    let manifest = ProjectManifest::from_file(&path)?;
    manifest.validate()?;

    println!(
        "✓ Package: {} v{}",
        manifest.package.name,
        manifest.package.version.as_deref().unwrap_or("0.0.0")
    );
    println!("✓ Modules: {}", manifest.files.py_modules.len());
    println!("✓ Data files: {}", manifest.files.data_files.len());
    println!("\nManifest is valid!");

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    const MINIMAL: &str = r#"
        [package]
        name = "foo"
        version = "0.1"
        author = "jhakonen"
        description = "has cool stuff"

        [files]
        py_modules = ["mod_foo"]
    "#;

    #[test]
    fn ProjectManifest___parse___reads_all_sections() {
        let manifest = ProjectManifest::parse(MINIMAL).unwrap();

        assert_eq!(manifest.package.name, "foo");
        assert_eq!(manifest.package.version.as_deref(), Some("0.1"));
        assert_eq!(manifest.package.author.as_deref(), Some("jhakonen"));
        assert_eq!(manifest.files.py_modules, vec!["mod_foo"]);
        assert!(manifest.files.data_files.is_empty());
    }

    #[test]
    fn ProjectManifest___parse___files_section_is_optional() {
        let manifest = ProjectManifest::parse("[package]\nname = \"foo\"").unwrap();

        assert!(manifest.files.py_modules.is_empty());
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn ProjectManifest___validate___rejects_empty_name() {
        let manifest = ProjectManifest::parse("[package]\nname = \"\"").unwrap();

        let result = manifest.validate();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("name"));
    }

    #[test]
    fn ProjectManifest___validate___rejects_module_with_py_extension() {
        let manifest = ProjectManifest::parse(
            "[package]\nname = \"foo\"\n[files]\npy_modules = [\"mod_foo.py\"]",
        )
        .unwrap();

        assert!(manifest.validate().is_err());
    }

    #[test]
    fn ProjectManifest___validate___rejects_absolute_data_file() {
        let manifest = ProjectManifest::parse(
            "[package]\nname = \"foo\"\n[files]\ndata_files = [\"/etc/passwd\"]",
        )
        .unwrap();

        assert!(manifest.validate().is_err());
    }
}
