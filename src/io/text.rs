//! Text-mode file access with an explicit, fixed encoding, plus the backup
//! artifact written before any destructive overwrite.
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::TextEncoding;

/// Suffix appended to the target path to form the backup path.
pub const BACKUP_SUFFIX: &str = ".backup_before_fix";

/// Read a file and decode it under the given encoding.
///
/// Decode failure surfaces as `Error::Encoding` with the length of the
/// valid prefix, not as an I/O error.
pub fn read_text(path: &Path, encoding: TextEncoding) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    match encoding {
        TextEncoding::Utf8 => String::from_utf8(bytes).map_err(|e| Error::Encoding {
            path: path.to_path_buf(),
            valid_up_to: e.utf8_error().valid_up_to(),
        }),
    }
}

/// Write text to a file, creating or truncating it.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// The backup path derived from a target path: the full path with
/// [`BACKUP_SUFFIX`] appended.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(BACKUP_SUFFIX);
    PathBuf::from(os)
}

/// Persist a backup of the target's current on-disk content and return the
/// backup path.
///
/// The content is re-read fresh from disk so the backup always reflects the
/// pre-run state, never an in-memory buffer that may already have been
/// transformed. Callers must invoke this before overwriting the target; any
/// failure here aborts the run with the original untouched.
pub fn write_backup(path: &Path, encoding: TextEncoding) -> Result<PathBuf> {
    let original = read_text(path, encoding)?;
    let backup = backup_path(path);
    write_text(&backup, &original)?;
    Ok(backup)
}
