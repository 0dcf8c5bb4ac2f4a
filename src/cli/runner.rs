use std::fs;

use tracing::{info, warn};

use dxfup::api::{convert_file_to_path, default_output_dir, derive_output_path, is_drawing_file};
use dxfup::core::params::ConvertParams;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Progress lines go to INFO; --log raises verbosity
    let level = if args.log {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let params = ConvertParams {
        input_format: args.input_format,
        target: args.target,
        source_ext: args.source_ext.clone(),
        sidecar: args.sidecar,
    };

    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        if !input_dir.is_dir() {
            return Err(AppError::InputDirNotFound {
                path: input_dir.display().to_string(),
            }
            .into());
        }
        let output_dir = args
            .output_dir
            .unwrap_or_else(|| default_output_dir(&input_dir, args.target));

        fs::create_dir_all(&output_dir)?;

        info!("Starting batch conversion from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);
        info!("Target revision: {}", args.target);

        let mut converted = 0;
        let mut skipped = 0;
        let mut errors = 0;

        for entry in fs::read_dir(&input_dir)? {
            let entry = entry?;
            let path = entry.path();

            if is_drawing_file(&path, &params.source_ext) {
                let output_path = derive_output_path(&output_dir, &path);

                info!("Converting: {:?} -> {:?}", path, output_path);

                match convert_file_to_path(&path, &output_path, &params) {
                    Ok(_) => {
                        info!("Successfully converted: {:?}\n", path);
                        converted += 1;
                    }
                    Err(e) => {
                        warn!("Error converting {:?}: {}", path, e);
                        errors += 1;
                        if args.fail_fast {
                            return Err(e.into());
                        }
                    }
                }
            } else {
                info!("Skipping non-drawing entry: {:?}", path);
                skipped += 1;
            }
        }

        info!("Batch conversion complete!");
        info!("Converted: {}", converted);
        info!("Skipped: {}", skipped);
        info!("Errors: {}", errors);
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args.output.ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        convert_file_to_path(&input, &output, &params)?;
        info!("Successfully converted: {:?} -> {:?}\n", input, output);
    }

    Ok(())
}
