//! Package build pipeline.
//!
//! A [`BuildRequest`] is the fully resolved configuration for one build,
//! assembled up front and immutable afterwards. [`PackageBuilder`] runs the
//! phases in a fixed order: compile, bytecode gate, install, metadata,
//! documents, archive. Fatal errors abort immediately; the staging tree is
//! removed on every exit path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::compiler::{Compiler, PythonCompiler};
use crate::staging::{StagingTree, install_dir_contents};
use crate::{
    DEFAULT_INSTALL_LIB, PackageDescriptor, PackageError, PackageResult, archive, bytecode,
    documents, metadata,
};

/// Resolved configuration for a single package build.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// Project root containing sources, data files, and documents.
    pub project_dir: PathBuf,
    /// Resolved package identity.
    pub descriptor: PackageDescriptor,
    /// Raw display name written to `meta.xml`.
    pub display_name: String,
    /// Raw description written to `meta.xml`.
    pub description: String,
    /// Top-level Python modules to compile and install, without extension.
    pub py_modules: Vec<String>,
    /// Data files, relative to the project root.
    pub data_files: Vec<PathBuf>,
    /// Archive-internal root for compiled script artifacts.
    pub install_lib: String,
    /// Archive-internal root for data files.
    pub install_data: String,
    /// Explicit staging directory; a temp directory when unset.
    pub staging_dir: Option<PathBuf>,
    /// Directory the finished archive is written to.
    pub dist_dir: PathBuf,
}

impl BuildRequest {
    /// Create a request with the conventional defaults: library root under
    /// the mod loader's script directory, data root namespaced by package
    /// id, output under `<project>/dist`.
    #[must_use]
    pub fn new(
        project_dir: impl Into<PathBuf>,
        descriptor: PackageDescriptor,
        display_name: &str,
        description: &str,
    ) -> Self {
        let project_dir = project_dir.into();
        let install_data = descriptor.default_data_dir();
        let dist_dir = project_dir.join("dist");
        Self {
            project_dir,
            descriptor,
            display_name: display_name.to_string(),
            description: description.to_string(),
            py_modules: Vec::new(),
            data_files: Vec::new(),
            install_lib: DEFAULT_INSTALL_LIB.to_string(),
            install_data,
            staging_dir: None,
            dist_dir,
        }
    }

    #[must_use]
    pub fn with_py_modules(mut self, modules: Vec<String>) -> Self {
        self.py_modules = modules;
        self
    }

    #[must_use]
    pub fn with_data_files(mut self, files: Vec<PathBuf>) -> Self {
        self.data_files = files;
        self
    }

    #[must_use]
    pub fn with_install_lib(mut self, install_lib: &str) -> Self {
        self.install_lib = install_lib.to_string();
        self
    }

    #[must_use]
    pub fn with_install_data(mut self, install_data: &str) -> Self {
        self.install_data = install_data.to_string();
        self
    }

    #[must_use]
    pub fn with_staging_dir(mut self, staging_dir: impl Into<PathBuf>) -> Self {
        self.staging_dir = Some(staging_dir.into());
        self
    }

    #[must_use]
    pub fn with_dist_dir(mut self, dist_dir: impl Into<PathBuf>) -> Self {
        self.dist_dir = dist_dir.into();
        self
    }

    /// Final archive path. Valid to call before the build has run; the file
    /// does not exist yet at that point.
    #[must_use]
    pub fn output_file_path(&self) -> PathBuf {
        self.dist_dir.join(self.descriptor.archive_file_name())
    }
}

/// Runs the build pipeline for one request.
pub struct PackageBuilder {
    request: BuildRequest,
    compiler: Box<dyn Compiler>,
}

impl PackageBuilder {
    /// Create a builder using the default Python compiler resolution.
    #[must_use]
    pub fn new(request: BuildRequest) -> Self {
        Self {
            request,
            compiler: Box::new(PythonCompiler::from_config(None)),
        }
    }

    /// Replace the compiler strategy.
    #[must_use]
    pub fn with_compiler(mut self, compiler: impl Compiler + 'static) -> Self {
        self.compiler = Box::new(compiler);
        self
    }

    /// Run the full pipeline and return the path of the produced archive.
    pub fn build(&self) -> PackageResult<PathBuf> {
        let request = &self.request;
        let staging = StagingTree::create(request.staging_dir.as_deref())?;
        tracing::info!("staging package in {}", staging.root().display());

        // Compile into a scratch directory so failed builds never leave
        // artifacts inside the staging tree.
        let build_dir = tempfile::TempDir::with_prefix("wotpack-build-")?;
        let sources = self.copy_module_sources(build_dir.path())?;
        self.compiler.compile(&sources)?;
        bytecode::verify_bytecode(build_dir.path())?;

        let lib_dir = staging.subdir(&request.install_lib)?;
        install_dir_contents(build_dir.path(), &lib_dir)?;

        // The data root exists in the archive even when no data files are
        // declared.
        let data_dir = staging.subdir(&request.install_data)?;
        self.copy_data_files(&data_dir)?;

        metadata::write_metadata(
            staging.root(),
            &request.descriptor,
            &request.display_name,
            &request.description,
        )?;
        documents::collect_documents(&request.project_dir, staging.root())?;

        let output = request.output_file_path();
        archive::build_archive(staging.root(), &output)?;

        tracing::info!("package created: {}", output.display());
        Ok(output)
    }

    fn copy_module_sources(&self, build_dir: &Path) -> PackageResult<Vec<PathBuf>> {
        let mut sources = Vec::with_capacity(self.request.py_modules.len());
        for module in &self.request.py_modules {
            let file_name = format!("{module}.py");
            let src = self.request.project_dir.join(&file_name);
            if !src.is_file() {
                return Err(PackageError::MissingFile(src.display().to_string()));
            }
            let dest = build_dir.join(&file_name);
            fs::copy(&src, &dest)?;
            sources.push(dest);
        }
        Ok(sources)
    }

    fn copy_data_files(&self, data_dir: &Path) -> PackageResult<()> {
        for relative in &self.request.data_files {
            let src = self.request.project_dir.join(relative);
            if !src.is_file() {
                return Err(PackageError::MissingFile(src.display().to_string()));
            }
            let dest = data_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&src, &dest)?;
        }
        Ok(())
    }
}
