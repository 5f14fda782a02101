use std::path::PathBuf;

use tracing::info;

use srcfix::TextEncoding;
use srcfix::api::{repair_directory_in_place, repair_file_in_place};

use super::args::CliArgs;
use super::errors::AppError;

fn repair_single_file(
    input: &PathBuf,
    encoding: TextEncoding,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Reading {:?}", input);

    let report = repair_file_in_place(input, encoding)?;

    info!("Original size: {} characters", report.chars_before);
    info!("Corrected size: {} characters", report.chars_after);
    info!("Applied {} substitution(s)", report.replacements);
    info!("Backup saved to: {:?}", report.backup_path);

    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(if args.log {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;

        info!("Starting batch repair in directory: {:?}", input_dir);

        let report = repair_directory_in_place(&input_dir, args.encoding, true)?;

        info!("Batch repair complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;

        repair_single_file(&input, args.encoding)?;
        info!("Successfully repaired: {:?}", input);
    }

    Ok(())
}
