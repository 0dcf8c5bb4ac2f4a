//! High-level, ergonomic library API: convert single drawings or whole
//! directories, with typed parameters and a per-run outcome report. Prefer
//! these entrypoints over the low-level `io` and `core` modules when
//! integrating DXFUP.
use std::path::{Path, PathBuf};

use crate::core::convert::convert_drawing_file;
use crate::core::params::ConvertParams;
use crate::error::{Error, Result};
use crate::io::drawing::DrawingMetadata;
use crate::types::TargetVersion;

/// Batch conversion report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// True if `path` is a regular file carrying the source extension
pub fn is_drawing_file(path: &Path, source_ext: &str) -> bool {
    let ext = source_ext.trim_start_matches('.');
    path.is_file()
        && path
            .extension()
            .map(|e| e.eq_ignore_ascii_case(ext))
            .unwrap_or(false)
}

/// Return the drawing files directly inside `input_dir`, sorted by path
///
/// The scan is non-recursive; subdirectories and files with other
/// extensions are not listed. Sorting keeps batch runs reproducible across
/// platforms whose directory listing order differs.
pub fn discover_drawing_files(input_dir: &Path, source_ext: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir).map_err(Error::from)? {
        let entry = entry.map_err(Error::from)?;
        let path = entry.path();
        if is_drawing_file(&path, source_ext) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Default batch output directory: `<root>/converted_to_<target>`
pub fn default_output_dir(root: &Path, target: TargetVersion) -> PathBuf {
    root.join(format!("converted_to_{}", target))
}

/// Output path for `input` inside `output_dir`, keeping the base name
pub fn derive_output_path(output_dir: &Path, input: &Path) -> PathBuf {
    match input.file_name() {
        Some(name) => output_dir.join(name),
        None => output_dir.to_path_buf(),
    }
}

/// Convert a single drawing file to an output path using ConvertParams
pub fn convert_file_to_path(
    input: &Path,
    output: &Path,
    params: &ConvertParams,
) -> Result<DrawingMetadata> {
    convert_drawing_file(input, output, params)
}

/// Convert every matching drawing file from `input_dir` into `output_dir`.
/// If `continue_on_error` is true, failures are counted in the report and
/// processing continues; otherwise, the first error is returned and the
/// remaining files are left unprocessed.
pub fn convert_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &ConvertParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    // Scan before creating the output directory so it is not counted
    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir).map_err(Error::from)? {
        let entry = entry.map_err(Error::from)?;
        let path = entry.path();
        if is_drawing_file(&path, &params.source_ext) {
            files.push(path);
        } else {
            report.skipped += 1;
        }
    }
    files.sort();

    std::fs::create_dir_all(output_dir).map_err(Error::from)?;

    for path in files {
        let output_path = derive_output_path(output_dir, &path);
        match convert_file_to_path(&path, &output_path, params) {
            Ok(_) => report.processed += 1,
            Err(e) => {
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}
