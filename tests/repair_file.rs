use std::fs;
use std::path::{Path, PathBuf};

use srcfix::api::{repair_directory_in_place, repair_file_in_place};
use srcfix::{BACKUP_SUFFIX, Error, TextEncoding, backup_path};
use tempfile::tempdir;

#[test]
fn backup_path_appends_fixed_suffix() {
    assert_eq!(
        backup_path(Path::new("script_new.js")),
        PathBuf::from("script_new.js.backup_before_fix")
    );
}

#[test]
fn repairs_file_in_place_and_writes_backup() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("script.js");
    let corrupted = "const table = document.getElementById(`roster-$ { team }`);\n";
    fs::write(&path, corrupted).unwrap();

    let report = repair_file_in_place(&path, TextEncoding::Utf8).unwrap();

    let fixed = fs::read_to_string(&path).unwrap();
    assert_eq!(
        fixed,
        "const table = document.getElementById(`roster-${team}`);\n"
    );

    // backup holds the pre-run bytes, not any intermediate state
    assert_eq!(report.backup_path, backup_path(&path));
    assert_eq!(fs::read(&report.backup_path).unwrap(), corrupted.as_bytes());

    assert_eq!(report.chars_before, corrupted.chars().count());
    assert_eq!(report.chars_after, fixed.chars().count());
    assert_eq!(report.replacements, 1);
}

#[test]
fn clean_file_is_rewritten_unchanged_with_backup() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("clean.js");
    let clean = "const count = roster?.length;\n";
    fs::write(&path, clean).unwrap();

    let report = repair_file_in_place(&path, TextEncoding::Utf8).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), clean);
    assert_eq!(fs::read_to_string(&report.backup_path).unwrap(), clean);
    assert_eq!(report.replacements, 0);
    assert_eq!(report.chars_before, report.chars_after);
}

#[test]
fn missing_file_fails_with_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.js");

    match repair_file_in_place(&path, TextEncoding::Utf8) {
        Err(Error::Read { path: p, source }) => {
            assert_eq!(p, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn undecodable_bytes_fail_with_encoding_error_before_any_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blob.bin");
    fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();

    match repair_file_in_place(&path, TextEncoding::Utf8) {
        Err(Error::Encoding { valid_up_to, .. }) => assert_eq!(valid_up_to, 2),
        other => panic!("expected encoding error, got {other:?}"),
    }
    assert!(!backup_path(&path).exists());
}

#[test]
fn batch_repairs_files_and_counts_skips() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.js"), "x? .y\n").unwrap();
    fs::write(dir.path().join("b.js"), "$ { team }\n").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("blob.bin"), [0xff, 0x00, 0x61]).unwrap();

    let report = repair_directory_in_place(dir.path(), TextEncoding::Utf8, true).unwrap();

    // the subdirectory and the non-text file are skipped
    assert_eq!(report.processed, 2);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.errors, 0);

    assert_eq!(fs::read_to_string(dir.path().join("a.js")).unwrap(), "x?.y\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("b.js")).unwrap(),
        "${team}\n"
    );
}

#[test]
fn batch_leaves_backups_from_an_earlier_run_alone() {
    let dir = tempdir().unwrap();
    let corrupted = "$ { team }\n";
    fs::write(dir.path().join("a.js"), corrupted).unwrap();

    let first = repair_directory_in_place(dir.path(), TextEncoding::Utf8, true).unwrap();
    assert_eq!(first.processed, 1);
    assert_eq!(first.skipped, 0);

    let backup = dir.path().join(format!("a.js{BACKUP_SUFFIX}"));
    assert_eq!(fs::read_to_string(&backup).unwrap(), corrupted);

    let second = repair_directory_in_place(dir.path(), TextEncoding::Utf8, true).unwrap();
    assert_eq!(second.processed, 1);
    assert_eq!(second.skipped, 1);

    // a.js was processed again, so its backup now holds the state from just
    // before the second run; the backup itself was never treated as a
    // repair target
    assert_eq!(fs::read_to_string(&backup).unwrap(), "${team}\n");
    assert!(!backup_path(&backup).exists());
}
