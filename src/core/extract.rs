//! Gzip + tar extraction straight from the downloaded buffer.
//!
//! Entries are validated one at a time before they are written: absolute
//! paths and `..` components are refused. Whatever was unpacked before a
//! failure stays on disk.

use crate::error::{FetchError, Result};
use crate::utils::fs;
use flate2::read::GzDecoder;
use std::io;
use std::path::{Component, Path, PathBuf};
use tar::Archive;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub destination: PathBuf,
    /// Name of the first archive member, normally the `rules` directory.
    pub root: Option<String>,
    pub entries: usize,
}

/// Best-effort read of the first member name. Any failure yields `None`.
pub fn peek_first_entry(bytes: &[u8]) -> Option<String> {
    let mut archive = Archive::new(GzDecoder::new(bytes));
    let mut entries = archive.entries().ok()?;
    let entry = entries.next()?.ok()?;
    let path = entry.path().ok()?;
    Some(entry_name(&path))
}

pub fn extract_tar_gz(bytes: &[u8], destination: &Path) -> Result<ExtractionReport> {
    let mut archive = Archive::new(GzDecoder::new(bytes));
    let mut report = ExtractionReport {
        destination: destination.to_path_buf(),
        root: None,
        entries: 0,
    };

    for entry in archive.entries().map_err(archive_error)? {
        let mut entry = entry.map_err(archive_error)?;
        let entry_path = entry.path().map_err(archive_error)?.into_owned();
        validate_entry_path(&entry_path)?;

        if report.root.is_none() {
            // Nothing is created until the stream has yielded a valid header.
            fs::ensure_dir_exists(destination)?;
            report.root = Some(entry_name(&entry_path));
        }

        let unpacked = entry
            .unpack_in(destination)
            .map_err(|e| unpack_error(destination.join(&entry_path), e))?;
        if unpacked {
            log::debug!("Extracted {}", entry_path.display());
            report.entries += 1;
        } else {
            log::warn!("Skipped archive entry {}", entry_path.display());
        }
    }

    if report.entries == 0 {
        return Err(FetchError::EmptyArchive);
    }

    Ok(report)
}

fn entry_name(path: &Path) -> String {
    path.to_string_lossy().trim_end_matches('/').to_string()
}

fn validate_entry_path(path: &Path) -> Result<()> {
    let escapes = path.is_absolute()
        || path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
    if escapes {
        return Err(FetchError::PathTraversal {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

fn archive_error(err: io::Error) -> FetchError {
    FetchError::archive(err.to_string())
}

/// tar reports both stream corruption and write failures through `unpack_in`.
fn unpack_error(path: PathBuf, err: io::Error) -> FetchError {
    match err.kind() {
        io::ErrorKind::InvalidData
        | io::ErrorKind::InvalidInput
        | io::ErrorKind::UnexpectedEof => archive_error(err),
        _ => FetchError::filesystem(path, err),
    }
}
