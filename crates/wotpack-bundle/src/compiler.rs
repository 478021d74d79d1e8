//! Byte-compilation strategy.
//!
//! The game embeds a Python 2.7 interpreter, so `.pyc` artifacts must be
//! produced by a compatible toolchain. Compilation is treated as an external
//! collaborator behind the [`Compiler`] trait; which interpreter runs is a
//! configuration choice, not something decided at compile time. Tests inject
//! fake implementations through the trait.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{PYTHON27_ENV_VAR, PackageError, PackageResult};

/// Capability to turn `.py` sources into loadable `.pyc` artifacts.
///
/// Implementations must place each artifact next to its source file.
pub trait Compiler {
    fn compile(&self, sources: &[PathBuf]) -> PackageResult<()>;
}

/// Compiles by delegating to a Python interpreter subprocess.
///
/// The interpreter is resolved from configuration: an explicit path wins,
/// then the `WOTPACK_PYTHON27` environment variable, then `python` on PATH.
#[derive(Debug, Clone)]
pub struct PythonCompiler {
    interpreter: PathBuf,
}

impl PythonCompiler {
    #[must_use]
    pub fn new(interpreter: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// Resolve the interpreter from an optional explicit path, falling back
    /// to the environment variable and finally to `python`.
    #[must_use]
    pub fn from_config(explicit: Option<PathBuf>) -> Self {
        let interpreter = explicit
            .or_else(|| env::var_os(PYTHON27_ENV_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("python"));
        Self { interpreter }
    }

    /// Path of the interpreter this compiler will invoke.
    #[must_use]
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }
}

impl Compiler for PythonCompiler {
    fn compile(&self, sources: &[PathBuf]) -> PackageResult<()> {
        if sources.is_empty() {
            return Ok(());
        }

        tracing::info!(
            interpreter = %self.interpreter.display(),
            files = sources.len(),
            "byte-compiling sources"
        );

        let status = Command::new(&self.interpreter)
            .arg("-m")
            .arg("py_compile")
            .args(sources)
            .status()
            .map_err(|e| {
                PackageError::Configuration(format!(
                    "failed to spawn {}: {e}",
                    self.interpreter.display()
                ))
            })?;

        if !status.success() {
            return Err(PackageError::Subprocess {
                program: self.interpreter.display().to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
