#![doc = r#"
srcfix — a small maintenance toolkit for repairing whitespace-corrupted source text.

A prior faulty automated edit can leave source files with whitespace injected
into compound tokens: `$ { team }` instead of `${team}`, `? .` instead of
`?.`, `data - player` instead of `data-player`, and `< td class = "x" >`
instead of `<td class="x">`. This crate repairs such files by folding a
fixed, hand-curated, ordered list of regular-expression substitutions over
the whole file text, writing a backup of the original next to it before the
corrected text overwrites the file in place. It powers the srcfix CLI and
can be embedded in your own Rust applications.

Stability
---------
The rule list is curated for one known corruption and is not a
general-purpose syntax fixer: it performs no parsing and no validation of
the output, and the identifier-specific rules are intentionally not
generalized. Treat the public API as experimental in initial releases.

Add dependency
--------------
```toml
[dependencies]
srcfix = "0.1"
```

Quick start: repair a file in place
-----------------------------------
```rust,no_run
use std::path::Path;
use srcfix::{TextEncoding, repair_file_in_place};

fn main() -> srcfix::Result<()> {
    let report = repair_file_in_place(Path::new("script_new.js"), TextEncoding::Utf8)?;
    println!(
        "{} -> {} characters, {} substitution(s), backup at {:?}",
        report.chars_before, report.chars_after, report.replacements, report.backup_path
    );
    Ok(())
}
```

Pure, in-memory repair
----------------------
```rust
use srcfix::repair_text;

let fixed = repair_text("const el = document.getElementById(`roster-$ { team }`);");
assert_eq!(fixed, "const el = document.getElementById(`roster-${team}`);");
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use srcfix::{TextEncoding, repair_directory_in_place};

fn main() -> srcfix::Result<()> {
    let report = repair_directory_in_place(Path::new("frontend/"), TextEncoding::Utf8, true)?;
    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Error handling
--------------
All fallible functions return `srcfix::Result<T>`; match on `srcfix::Error`
to handle specific cases. Decode failures are reported separately from
transport-level I/O errors.

```rust,no_run
use std::path::Path;
use srcfix::{Error, TextEncoding, repair_file_in_place};

fn main() {
    match repair_file_in_place(Path::new("script_new.js"), TextEncoding::Utf8) {
        Ok(report) => println!("backup at {:?}", report.backup_path),
        Err(Error::Encoding { path, valid_up_to }) => {
            eprintln!("{path:?} is not text (invalid byte at {valid_up_to})")
        }
        Err(other) => eprintln!("error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points: repair a file or a directory in place.
- [`core`] — the curated rules and the pure text pipeline.
- [`io`] — text-mode file access and the backup artifact.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use error::{Error, Result};
pub use types::TextEncoding;

// Pipeline
pub use core::pipeline::{RuleHit, repair_text, repair_text_detailed};
pub use core::rules::{RULES, Rule};

// File driver helpers
pub use io::{BACKUP_SUFFIX, backup_path, read_text, write_backup, write_text};

// High-level API re-exports
pub use api::{
    BatchReport, RepairReport, repair_directory_in_place, repair_file_in_place, repair_str,
};
