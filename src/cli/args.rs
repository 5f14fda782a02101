use clap::Parser;
use std::path::PathBuf;

use srcfix::TextEncoding;

#[derive(Parser)]
#[command(name = "srcfix", version, about = "srcfix CLI")]
pub struct CliArgs {
    /// Corrupted file to repair in place (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory whose files are repaired in place (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Text encoding for reading and writing (only utf8 supported currently)
    #[arg(long, value_enum, default_value_t = TextEncoding::Utf8)]
    pub encoding: TextEncoding,

    /// Enable debug logging (per-rule hit counts)
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue processing other files when one cannot be repaired
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}
