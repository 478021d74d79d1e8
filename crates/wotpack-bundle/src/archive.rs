//! Archive construction.
//!
//! Walks a finished staging tree and writes the `.wotmod` zip. Entry paths
//! are always forward-slash separated and relative to the staging root.
//! Every directory, including empty ones, gets an explicit entry with unix
//! directory mode bits in its external attributes; the game's loader relies
//! on those entries when it mounts the package.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::PackageResult;

/// Build a zip archive from the staging tree at `output_path`.
///
/// The walk is sorted lexicographically per directory, each directory entry
/// preceding its contents, so identical trees always produce an identical
/// entry sequence. Entry timestamps are pinned to the DOS epoch for
/// reproducibility.
pub fn build_archive(staging_root: &Path, output_path: &Path) -> PackageResult<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    tracing::info!(
        "creating '{}' from '{}'",
        output_path.display(),
        staging_root.display()
    );

    let file = File::create(output_path)?;
    let mut zip = ZipWriter::new(file);
    append_dir_contents(&mut zip, staging_root, "")?;
    zip.finish()?;

    Ok(())
}

fn file_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644)
}

fn dir_options() -> SimpleFileOptions {
    // add_directory ORs the directory mode bit (0o40000) into the external
    // attributes on top of these permissions.
    SimpleFileOptions::default()
        .last_modified_time(DateTime::default())
        .unix_permissions(0o755)
}

fn append_dir_contents(
    zip: &mut ZipWriter<File>,
    dir: &Path,
    prefix: &str,
) -> PackageResult<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        let archive_path = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}/{name}")
        };

        if entry.file_type()?.is_dir() {
            tracing::debug!("adding '{archive_path}/'");
            zip.add_directory(&archive_path, dir_options())?;
            append_dir_contents(zip, &entry.path(), &archive_path)?;
        } else {
            tracing::debug!("adding '{archive_path}'");
            zip.start_file(&archive_path, file_options())?;
            io::copy(&mut File::open(entry.path())?, zip)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use tempfile::TempDir;
    use zip::ZipArchive;

    fn open_archive(path: &Path) -> ZipArchive<File> {
        ZipArchive::new(File::open(path).unwrap()).unwrap()
    }

    #[test]
    fn build_archive___uses_forward_slash_paths_relative_to_root() {
        let staging = TempDir::new().unwrap();
        fs::create_dir_all(staging.path().join("res/scripts")).unwrap();
        fs::write(staging.path().join("res/scripts/foo.py"), "#").unwrap();
        fs::write(staging.path().join("meta.xml"), "<root/>").unwrap();

        let out = TempDir::new().unwrap();
        let package = out.path().join("test.wotmod");
        build_archive(staging.path(), &package).unwrap();

        let archive = open_archive(&package);
        let names: Vec<_> = archive.file_names().collect();
        assert!(names.contains(&"meta.xml"));
        assert!(names.contains(&"res/"));
        assert!(names.contains(&"res/scripts/"));
        assert!(names.contains(&"res/scripts/foo.py"));
    }

    #[test]
    fn build_archive___directory_entries_carry_unix_dir_mode_bits() {
        let staging = TempDir::new().unwrap();
        fs::create_dir_all(staging.path().join("res/mods")).unwrap();

        let out = TempDir::new().unwrap();
        let package = out.path().join("dirs.wotmod");
        build_archive(staging.path(), &package).unwrap();

        let mut archive = open_archive(&package);
        for name in ["res/", "res/mods/"] {
            let entry = archive.by_name(name).unwrap();
            let mode = entry.unix_mode().unwrap();
            assert_ne!(mode & 0o40000, 0, "entry {name} lacks directory bits");
        }
    }

    #[test]
    fn build_archive___tolerates_tree_with_zero_files() {
        let staging = TempDir::new().unwrap();
        fs::create_dir_all(staging.path().join("res/mods/com.example.empty")).unwrap();

        let out = TempDir::new().unwrap();
        let package = out.path().join("empty.wotmod");
        build_archive(staging.path(), &package).unwrap();

        let archive = open_archive(&package);
        let names: Vec<_> = archive.file_names().collect();
        assert_eq!(names, vec!["res/", "res/mods/", "res/mods/com.example.empty/"]);
    }

    #[test]
    fn build_archive___preserves_file_bytes() {
        use std::io::Read;

        let staging = TempDir::new().unwrap();
        fs::write(staging.path().join("README"), "README contents").unwrap();

        let out = TempDir::new().unwrap();
        let package = out.path().join("bytes.wotmod");
        build_archive(staging.path(), &package).unwrap();

        let mut archive = open_archive(&package);
        let mut contents = String::new();
        archive
            .by_name("README")
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "README contents");
    }

    #[test]
    fn build_archive___creates_missing_output_directory() {
        let staging = TempDir::new().unwrap();
        fs::write(staging.path().join("meta.xml"), "<root/>").unwrap();

        let out = TempDir::new().unwrap();
        let package = out.path().join("dist/nested/test.wotmod");
        build_archive(staging.path(), &package).unwrap();

        assert!(package.is_file());
    }

    #[test]
    fn build_archive___entry_order_is_deterministic() {
        let make = |out: &Path| {
            let staging = TempDir::new().unwrap();
            fs::create_dir_all(staging.path().join("res/b")).unwrap();
            fs::create_dir_all(staging.path().join("res/a")).unwrap();
            fs::write(staging.path().join("res/a/z.py"), "#").unwrap();
            fs::write(staging.path().join("meta.xml"), "<root/>").unwrap();
            build_archive(staging.path(), out).unwrap();
        };

        let out = TempDir::new().unwrap();
        let first = out.path().join("one.wotmod");
        let second = out.path().join("two.wotmod");
        make(&first);
        make(&second);

        let names = |p: &Path| -> Vec<String> {
            open_archive(p).file_names().map(String::from).collect()
        };
        assert_eq!(names(&first), names(&second));
        assert_eq!(
            names(&first),
            vec!["meta.xml", "res/", "res/a/", "res/a/z.py", "res/b/"]
        );
    }
}
