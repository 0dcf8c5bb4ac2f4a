//! The per-file conversion step: read a drawing, retarget its revision,
//! save it to the output path. One read and one save per call; the
//! in-memory drawing does not outlive the call.
use std::path::Path;

use tracing::info;

use crate::core::params::ConvertParams;
use crate::error::{Error, Result};
use crate::io::drawing::{DrawingMetadata, DrawingReader};
use crate::io::report::create_metadata_sidecar;

/// Convert a single drawing file to `output` at the target revision
pub fn convert_drawing_file(
    input: &Path,
    output: &Path,
    params: &ConvertParams,
) -> Result<DrawingMetadata> {
    let mut reader = DrawingReader::open(input)?;
    reader.save_as(output, params.target)?;
    info!("Ready: {:?}", output);

    if params.sidecar {
        create_metadata_sidecar(output, reader.metadata(), params.target)
            .map_err(|e| Error::external(e))?;
    }

    Ok(reader.metadata)
}
