//! Staging tree management.
//!
//! The staging directory mirrors the final archive's internal layout and is
//! always fresh per build. Teardown is tied to ownership: dropping the
//! [`StagingTree`] removes the directory on every exit path, success or
//! failure.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::PackageResult;

/// Ephemeral filesystem tree holding the future archive contents.
#[derive(Debug)]
pub struct StagingTree {
    inner: Inner,
}

#[derive(Debug)]
enum Inner {
    /// System temp directory, removed by `tempfile` on drop.
    Temp(TempDir),
    /// User-configured directory, removed by our own `Drop`.
    Explicit(PathBuf),
}

impl StagingTree {
    /// Create a staging tree, either at an explicitly configured path or in
    /// the system temp directory.
    pub fn create(explicit: Option<&Path>) -> PackageResult<Self> {
        let inner = match explicit {
            Some(path) => {
                fs::create_dir_all(path)?;
                Inner::Explicit(path.to_path_buf())
            }
            None => Inner::Temp(TempDir::with_prefix("wotpack-staging-")?),
        };
        Ok(Self { inner })
    }

    /// Root of the staging tree.
    #[must_use]
    pub fn root(&self) -> &Path {
        match &self.inner {
            Inner::Temp(dir) => dir.path(),
            Inner::Explicit(path) => path,
        }
    }

    /// Create (if needed) and return a subdirectory under the root.
    ///
    /// `relative` uses forward slashes, matching archive-internal paths.
    pub fn subdir(&self, relative: &str) -> PackageResult<PathBuf> {
        let path = self.root().join(relative);
        fs::create_dir_all(&path)?;
        Ok(path)
    }
}

impl Drop for StagingTree {
    fn drop(&mut self) {
        if let Inner::Explicit(path) = &self.inner {
            // Cleanup failure must not mask the build result.
            if let Err(e) = fs::remove_dir_all(path) {
                tracing::warn!(path = %path.display(), "failed to remove staging directory: {e}");
            }
        }
    }
}

/// Recursively copy the contents of `src` into `dest`.
///
/// `dest` is created if missing; relative layout under `src` is preserved.
pub fn install_dir_contents(src: &Path, dest: &Path) -> PackageResult<()> {
    fs::create_dir_all(dest)?;
    let mut entries: Vec<_> = fs::read_dir(src)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            install_dir_contents(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
