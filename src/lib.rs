#![doc = r#"
DXFUP — a batch DXF drawing file revision upgrade tool.

This crate provides a typed, ergonomic API for re-saving AutoCAD DXF drawing
files at a newer (or older) format revision, one file at a time or across a
whole directory. Parsing and serialization of the DXF format are delegated to
the `dxf` crate; DXFUP drives the read/retarget/save round trip, derives
output paths, and reports per-run outcomes. It powers the DXFUP CLI and can
be embedded in your own Rust applications.

Stability
---------
The public library API is experimental in initial releases. It is built on top
of a working MVP used by the CLI and is robust, but may evolve as the crate
stabilizes. Breaking changes can occur.

Add dependency
--------------
```toml
[dependencies]
dxfup = "0.1"
```

Quick start: upgrade a single drawing
-------------------------------------
```rust,no_run
use std::path::Path;
use dxfup::{convert_file_to_path, ConvertParams, InputFormat, TargetVersion};

fn main() -> dxfup::Result<()> {
    let params = ConvertParams {
        input_format: InputFormat::Dxf,
        target: TargetVersion::R2000,
        source_ext: "dxf".to_string(),
        sidecar: false,
    };

    convert_file_to_path(
        Path::new("/data/R14_test_files/plan.dxf"),
        Path::new("/data/R14_test_files/converted_to_R2000/plan.dxf"),
        &params,
    )?;
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use dxfup::{convert_directory_to_path, default_output_dir, ConvertParams, TargetVersion};

fn main() -> dxfup::Result<()> {
    let params = ConvertParams {
        target: TargetVersion::R2018,
        ..ConvertParams::default()
    };

    let root = Path::new("/data/R14_test_files");
    let report = convert_directory_to_path(
        root,
        &default_output_dir(root, params.target),
        &params,
        true, // continue_on_error
    )?;

    println!(
        "converted={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `dxfup::Result<T>`; match on `dxfup::Error` to
handle specific cases, e.g. drawing-library or I/O errors.

```rust,no_run
use std::path::Path;
use dxfup::{convert_file_to_path, ConvertParams, Error};

fn main() {
    let params = ConvertParams::default();

    match convert_file_to_path(Path::new("/bad/path.dxf"), Path::new("/out.dxf"), &params) {
        Ok(meta) => println!("upgraded from {}", meta.source_version),
        Err(Error::Drawing(e)) => eprintln!("Drawing error: {e}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `TargetVersion`, `InputFormat`).
- [`io`] — the drawing reader and metadata sidecar writer.
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
pub use core::params::ConvertParams;
pub use error::{Error, Result};
pub use types::{InputFormat, TargetVersion};

// Readers
pub use io::drawing::{DrawingError, DrawingMetadata, DrawingReader, version_label};

// Selected writer helpers (keep low-level metadata helpers public)
pub use io::report::{create_metadata_sidecar, extract_metadata_fields};

// High-level API re-exports
pub use api::{
    BatchReport, convert_directory_to_path, convert_file_to_path, default_output_dir,
    derive_output_path, discover_drawing_files, is_drawing_file,
};
