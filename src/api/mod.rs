//! High-level, ergonomic library API: repair a file in place, batch helpers
//! for directories, and the pure text pipeline. Prefer these entrypoints
//! over the low-level `core` and `io` modules when embedding srcfix.
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::pipeline::{repair_text, repair_text_detailed};
use crate::error::{Error, Result};
use crate::io;
use crate::types::TextEncoding;

/// Outcome of repairing a single file in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairReport {
    pub path: PathBuf,
    pub backup_path: PathBuf,
    /// Character count of the file before the transform.
    pub chars_before: usize,
    /// Character count of the corrected text written back.
    pub chars_after: usize,
    /// Total substitutions performed across all rules.
    pub replacements: usize,
}

/// Counters for a directory run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Run the pure repair pipeline over a string. No filesystem access.
pub fn repair_str(input: &str) -> String {
    repair_text(input)
}

/// Repair one file in place.
///
/// Reads the file under `encoding`, runs the pipeline, persists a backup of
/// the original content (from a fresh re-read of the path, at
/// `<path>.backup_before_fix`), then overwrites the file with the corrected
/// text. The backup write must succeed before the overwrite happens.
pub fn repair_file_in_place(path: &Path, encoding: TextEncoding) -> Result<RepairReport> {
    let content = io::read_text(path, encoding)?;
    let chars_before = content.chars().count();

    let (fixed, hits) = repair_text_detailed(&content);
    for hit in &hits {
        debug!("rule {} rewrote {} occurrence(s)", hit.rule, hit.count);
    }
    let replacements = hits.iter().map(|h| h.count).sum();
    let chars_after = fixed.chars().count();

    let backup_path = io::write_backup(path, encoding)?;
    io::write_text(path, &fixed)?;

    Ok(RepairReport {
        path: path.to_path_buf(),
        backup_path,
        chars_before,
        chars_after,
        replacements,
    })
}

/// Repair every regular file in a directory in place.
///
/// Non-files are skipped, as are backups left by an earlier run. A file
/// whose bytes cannot be decoded under `encoding` is skipped with a
/// warning. Any other per-file failure is counted and processing continues
/// when `continue_on_error` is set; otherwise it aborts the run.
pub fn repair_directory_in_place(
    dir: &Path,
    encoding: TextEncoding,
    continue_on_error: bool,
) -> Result<BatchReport> {
    // Snapshot the listing up front so backups created below are not
    // picked up by the same run.
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|source| Error::Read {
        path: dir.to_path_buf(),
        source,
    })? {
        paths.push(entry?.path());
    }
    paths.sort();

    let mut report = BatchReport::default();

    for path in paths {
        if !path.is_file() {
            info!("Skipping non-file: {:?}", path);
            report.skipped += 1;
            continue;
        }
        if path.as_os_str().to_string_lossy().ends_with(io::BACKUP_SUFFIX) {
            info!("Skipping backup from an earlier run: {:?}", path);
            report.skipped += 1;
            continue;
        }

        match repair_file_in_place(&path, encoding) {
            Ok(file_report) => {
                info!(
                    "Repaired {:?} ({} substitution(s))",
                    path, file_report.replacements
                );
                report.processed += 1;
            }
            Err(Error::Encoding { valid_up_to, .. }) => {
                warn!(
                    "Skipping non-text file {:?} (invalid byte at offset {})",
                    path, valid_up_to
                );
                report.skipped += 1;
            }
            Err(e) if continue_on_error => {
                warn!("Error repairing {:?}: {}", path, e);
                report.errors += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}
