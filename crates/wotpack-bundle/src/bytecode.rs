//! Python 2.7 bytecode compatibility gate.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{PackageError, PackageResult};

/// Magic number at the start of every Python 2.7 `.pyc` file.
pub const PYTHON27_MAGIC: [u8; 4] = [0x03, 0xF3, 0x0D, 0x0A];

/// Check whether a file starts with the Python 2.7 bytecode magic number.
pub fn is_python27_pyc(path: &Path) -> PackageResult<bool> {
    let mut magic = [0u8; 4];
    let mut file = File::open(path)?;
    match file.read_exact(&mut magic) {
        Ok(()) => Ok(magic == PYTHON27_MAGIC),
        // Shorter than 4 bytes cannot be a valid pyc file.
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Walk a build tree and fail on the first `.pyc` file that does not target
/// the Python 2.7 runtime.
///
/// Hard precondition gate between compilation and install: a package with an
/// incompatible artifact would silently fail to load in the game.
pub fn verify_bytecode(dir: &Path) -> PackageResult<()> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(std::fs::DirEntry::file_name);

    for entry in entries {
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            verify_bytecode(&path)?;
        } else if path.extension().is_some_and(|ext| ext == "pyc") && !is_python27_pyc(&path)? {
            return Err(PackageError::IncompatibleBytecode { path });
        }
    }
    Ok(())
}
