//! Package format for World of Tanks mods
//!
//! This crate provides types and utilities for building `.wotmod` packages -
//! zip archives laid out the way the game's mod loader expects, with script
//! modules under a library root, assets under a namespaced data root, and a
//! `meta.xml` descriptor at the archive root.
//!
//! # Package Structure
//!
//! ```text
//! com.example.mymod_01.00.00.wotmod
//! ├── meta.xml
//! ├── README
//! ├── LICENSE
//! └── res/
//!     ├── scripts/client/gui/mods/
//!     │   ├── mod_mymod.py
//!     │   └── mod_mymod.pyc
//!     └── mods/com.example.mymod/
//!         └── config.json
//! ```
//!
//! # Example
//!
//! ```no_run
//! use wotpack_bundle::{BuildRequest, ModVersion, PackageBuilder, PackageDescriptor};
//!
//! let (version, _warnings) = ModVersion::normalize(Some("0.1"), 2);
//! let descriptor = PackageDescriptor::new("com.example", "mymod", version, "does things")?;
//! let request = BuildRequest::new(".", descriptor, "mymod", "does things")
//!     .with_py_modules(vec!["mod_mymod".into()]);
//!
//! let package_path = PackageBuilder::new(request).build()?;
//! # Ok::<(), wotpack_bundle::PackageError>(())
//! ```

mod descriptor;
mod error;
mod sanitize;
mod version;

pub mod archive;
pub mod builder;
pub mod bytecode;
pub mod compiler;
pub mod documents;
pub mod metadata;
pub mod staging;

pub use builder::{BuildRequest, PackageBuilder};
pub use compiler::{Compiler, PythonCompiler};
pub use descriptor::PackageDescriptor;
pub use error::PackageError;
pub use sanitize::{sanitize_identifier, sanitize_text};
pub use staging::StagingTree;
pub use version::{ModVersion, VersionWarning};

/// Result type for package operations.
pub type PackageResult<T> = Result<T, PackageError>;

/// Package file extension.
pub const WOTMOD_EXTENSION: &str = "wotmod";

/// Metadata file name at the package root.
pub const METADATA_FILE: &str = "meta.xml";

/// Default library root inside the package, where the mod loader picks up
/// client-side script modules.
pub const DEFAULT_INSTALL_LIB: &str = "res/scripts/client/gui/mods";

/// Default zero-padding width for version components.
pub const DEFAULT_VERSION_PADDING: usize = 2;

/// Environment variable naming a Python 2.7 interpreter used for byte
/// compilation when the default `python` cannot produce compatible bytecode.
pub const PYTHON27_ENV_VAR: &str = "WOTPACK_PYTHON27";
