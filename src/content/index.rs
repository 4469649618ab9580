//! Index building: scan a content directory, normalize, sort, write JSON.
//!
//! The index file is a derived cache of the Markdown files and is rewritten
//! wholesale on every run. Whatever happens during the scan, a valid JSON
//! array ends up on disk.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::{log, utils::plural_count};

use super::frontmatter::{Document, list_markdown_files, read_document};
use super::{CarRecord, ContactRecord};

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to scan `{0}`")]
    Scan(PathBuf, #[source] io::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] io::Error),

    #[error("failed to serialize index")]
    Serialize(#[from] serde_json::Error),
}

/// Outcome of one index build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexReport {
    pub output: PathBuf,
    pub written: usize,
    pub skipped: usize,
    /// The directory scan failed and an empty index was written instead.
    pub fell_back: bool,
}

// ============================================================================
// Sorting
// ============================================================================

/// Featured first, then newest year first. Stable.
pub fn sort_cars(cars: &mut [CarRecord]) {
    cars.sort_by(|a, b| b.featured.cmp(&a.featured).then(b.year.cmp(&a.year)));
}

/// Featured first, otherwise input order. Stable.
pub fn sort_contacts(contacts: &mut [ContactRecord]) {
    contacts.sort_by(|a, b| b.featured.cmp(&a.featured));
}

// ============================================================================
// Writing
// ============================================================================

/// Write `records` as pretty JSON, replacing `path` atomically.
pub fn write_index<T: Serialize>(path: &Path, records: &[T]) -> Result<(), IndexError> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    write_atomic(path, json.as_bytes()).map_err(|e| IndexError::Write(path.to_path_buf(), e))
}

/// Write an empty JSON array to `path`.
pub fn write_empty_index(path: &Path) -> Result<(), IndexError> {
    write_index::<CarRecord>(path, &[])
}

/// Write to a sibling temp file, then rename over the target.
fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path).inspect_err(|_| {
        let _ = fs::remove_file(&tmp);
    })
}

// ============================================================================
// Building
// ============================================================================

/// Read and normalize every Markdown file in `dir`, in file name order.
///
/// Files that cannot be read or parsed are logged and skipped.
pub fn collect_records<T, F>(dir: &Path, label: &str, normalize: F) -> Result<(Vec<T>, usize), IndexError>
where
    T: Send,
    F: Fn(&Document) -> T + Sync,
{
    let files = list_markdown_files(dir).map_err(|e| IndexError::Scan(dir.to_path_buf(), e))?;
    if files.is_empty() {
        log!(label; "no markdown files in {}", dir.display());
        return Ok((Vec::new(), 0));
    }

    let results: Vec<Option<T>> = files
        .par_iter()
        .map(|path| match read_document(path) {
            Ok(doc) => Some(normalize(&doc)),
            Err(e) => {
                log!("skip"; "{}: {}", path.display(), error_chain(&e));
                None
            }
        })
        .collect();

    let skipped = results.iter().filter(|r| r.is_none()).count();
    let records = results.into_iter().flatten().collect();
    Ok((records, skipped))
}

/// Build one index file. Always leaves a valid JSON array at `output`.
///
/// Only a failed write is returned as an error, after an emergency attempt
/// to write `[]`.
pub fn build_index<T, F, S>(
    dir: &Path,
    output: &Path,
    label: &str,
    normalize: F,
    sort: S,
) -> Result<IndexReport, IndexError>
where
    T: Serialize + Send,
    F: Fn(&Document) -> T + Sync,
    S: FnOnce(&mut [T]),
{
    let (mut records, skipped, fell_back) = match collect_records(dir, label, normalize) {
        Ok((records, skipped)) => (records, skipped, false),
        Err(e) => {
            log!("error"; "{}, writing empty index", error_chain(&e));
            (Vec::new(), 0, true)
        }
    };

    sort(&mut records);

    if let Err(e) = write_index(output, &records) {
        log!("error"; "{}", error_chain(&e));
        if write_empty_index(output).is_ok() {
            log!("error"; "wrote empty fallback to {}", output.display());
        }
        return Err(e);
    }

    log!(label; "{} -> {}", plural_count(records.len(), "record"), output.display());
    Ok(IndexReport {
        output: output.to_path_buf(),
        written: records.len(),
        skipped,
        fell_back,
    })
}

/// Cars index: normalize with the `[cars]` defaults, featured/year order.
pub fn build_cars_index(
    dir: &Path,
    output: &Path,
    config: &crate::config::CarsConfig,
) -> Result<IndexReport, IndexError> {
    build_index(
        dir,
        output,
        "cars",
        |doc| super::normalize_car(doc, config),
        sort_cars,
    )
}

/// Contacts index: featured contacts first.
pub fn build_contacts_index(dir: &Path, output: &Path) -> Result<IndexReport, IndexError> {
    build_index(dir, output, "contacts", super::normalize_contact, sort_contacts)
}

/// `error: cause: cause` on one line.
pub fn error_chain(e: &dyn std::error::Error) -> String {
    let mut out = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
