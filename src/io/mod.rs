//! I/O layer for reading and re-saving DXF drawings.
//! Provides the `drawing` reader over the DXF library and the `report`
//! writer for JSON metadata sidecars.
pub mod drawing;
pub use drawing::{DrawingError, DrawingMetadata, DrawingReader, version_label};

pub mod report;
pub use report::{create_metadata_sidecar, extract_metadata_fields};
