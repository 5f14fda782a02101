//! File driver: read the target under an explicit encoding, write the
//! backup artifact from a fresh re-read, and overwrite in place.
pub mod text;
pub use text::{BACKUP_SUFFIX, backup_path, read_text, write_backup, write_text};
