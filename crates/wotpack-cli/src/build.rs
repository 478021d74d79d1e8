//! Build command implementation

use std::path::PathBuf;

use anyhow::{Context, Result};
use wotpack_bundle::{BuildRequest, ModVersion, PackageBuilder, PackageDescriptor, PythonCompiler};

use crate::project::ProjectManifest;

/// Resolved command-line options for `wotpack build`.
///
/// Every `None` falls back to the corresponding wotpack.toml field.
pub struct BuildOptions {
    pub path: Option<String>,
    pub author_id: Option<String>,
    pub mod_id: Option<String>,
    pub mod_version: Option<String>,
    pub mod_description: Option<String>,
    pub version_padding: usize,
    pub install_lib: Option<String>,
    pub install_data: Option<String>,
    pub python27: Option<PathBuf>,
    pub bdist_dir: Option<PathBuf>,
    pub dist_dir: Option<PathBuf>,
}

/// Run the build command.
pub fn run(options: BuildOptions) -> Result<()> {
    let project_dir = PathBuf::from(options.path.unwrap_or_else(|| ".".to_string()));

    let manifest = ProjectManifest::from_file(project_dir.join("wotpack.toml"))?;
    manifest.validate()?;

    let raw_author = options
        .author_id
        .or_else(|| manifest.package.author.clone())
        .or_else(|| manifest.package.maintainer.clone())
        .context("No author id given and the manifest declares neither author nor maintainer")?;
    let raw_mod = options.mod_id.unwrap_or_else(|| manifest.package.name.clone());
    let raw_version = options
        .mod_version
        .or_else(|| manifest.package.version.clone());
    let raw_description = options
        .mod_description
        .or_else(|| manifest.package.description.clone())
        .unwrap_or_default();

    let version = ModVersion::normalize_logged(raw_version.as_deref(), options.version_padding);
    let descriptor = PackageDescriptor::new(&raw_author, &raw_mod, version, &raw_description)?;

    println!(
        "Building package: {} v{}",
        descriptor.package_id(),
        descriptor.version
    );

    // meta.xml carries the project's own name and description, not the
    // sanitized identifiers used for file naming.
    let mut request = BuildRequest::new(
        &project_dir,
        descriptor,
        &manifest.package.name,
        manifest.package.description.as_deref().unwrap_or_default(),
    )
    .with_py_modules(manifest.files.py_modules.clone())
    .with_data_files(manifest.files.data_files.iter().map(PathBuf::from).collect());

    if let Some(install_lib) = &options.install_lib {
        request = request.with_install_lib(install_lib);
    }
    if let Some(install_data) = &options.install_data {
        request = request.with_install_data(install_data);
    }
    if let Some(bdist_dir) = options.bdist_dir {
        request = request.with_staging_dir(bdist_dir);
    }
    if let Some(dist_dir) = options.dist_dir {
        request = request.with_dist_dir(dist_dir);
    }

    let compiler = PythonCompiler::from_config(options.python27);
    println!("Using interpreter: {}", compiler.interpreter().display());

    let output = PackageBuilder::new(request)
        .with_compiler(compiler)
        .build()
        .context("Failed to build package")?;

    println!("Package created: {}", output.display());
    Ok(())
}
