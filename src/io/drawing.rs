use std::path::{Path, PathBuf};

use dxf::Drawing;
use dxf::enums::AcadVersion;
use thiserror::Error;
use tracing::info;

use crate::types::TargetVersion;

/// Errors encountered when reading or writing drawing files
#[derive(Debug, Error)]
pub enum DrawingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("DXF error: {0}")]
    Dxf(String),
    #[error("Not a regular file: {0}")]
    NotAFile(String),
}

/// Metadata captured from a loaded drawing
#[derive(Debug, Clone)]
pub struct DrawingMetadata {
    pub file_name: String,
    pub source_version: String,
    pub entities: usize,
    pub layers: usize,
    pub blocks: usize,

    // Conversion provenance
    pub conversion_tool: String,
    pub conversion_version: String,
    pub conversion_timestamp: String,
}

/// Map a target revision onto the drawing library's version enum
pub(crate) fn acad_version(target: TargetVersion) -> AcadVersion {
    match target {
        TargetVersion::R12 => AcadVersion::R12,
        TargetVersion::R13 => AcadVersion::R13,
        TargetVersion::R14 => AcadVersion::R14,
        TargetVersion::R2000 => AcadVersion::R2000,
        TargetVersion::R2004 => AcadVersion::R2004,
        TargetVersion::R2007 => AcadVersion::R2007,
        TargetVersion::R2010 => AcadVersion::R2010,
        TargetVersion::R2013 => AcadVersion::R2013,
        TargetVersion::R2018 => AcadVersion::R2018,
    }
}

/// Human-readable label for a drawing library version value
pub fn version_label(version: AcadVersion) -> String {
    format!("{:?}", version)
}

/// Reader for DXF drawing files
///
/// Owns the in-memory drawing for the duration of one conversion. The
/// drawing is dropped with the reader once the save completes.
pub struct DrawingReader {
    pub path: PathBuf,
    pub drawing: Drawing,
    pub metadata: DrawingMetadata,
}

impl DrawingReader {
    /// Open and parse a drawing file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DrawingError> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(DrawingError::NotAFile(path.display().to_string()));
        }

        info!("Opening drawing: {:?}", path);
        let drawing =
            Drawing::load_file(&path).map_err(|e| DrawingError::Dxf(e.to_string()))?;

        let metadata = DrawingMetadata {
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            source_version: version_label(drawing.header.version),
            entities: drawing.entities().count(),
            layers: drawing.layers().count(),
            blocks: drawing.blocks().count(),
            conversion_tool: "DXFUP".to_string(),
            conversion_version: env!("CARGO_PKG_VERSION").to_string(),
            conversion_timestamp: chrono::Utc::now().to_rfc3339(),
        };

        Ok(DrawingReader {
            path,
            drawing,
            metadata,
        })
    }

    pub fn metadata(&self) -> &DrawingMetadata {
        &self.metadata
    }

    /// Re-save the drawing at `target`, leaving its content untouched
    pub fn save_as<P: AsRef<Path>>(
        &mut self,
        path: P,
        target: TargetVersion,
    ) -> Result<(), DrawingError> {
        self.drawing.header.version = acad_version(target);
        self.drawing
            .save_file(path.as_ref())
            .map_err(|e| DrawingError::Dxf(e.to_string()))?;
        Ok(())
    }
}
