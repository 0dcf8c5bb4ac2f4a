use serde::{Deserialize, Serialize};

use crate::types::{InputFormat, TargetVersion};

/// Conversion parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertParams {
    pub input_format: InputFormat,
    pub target: TargetVersion,
    /// File extension matched during discovery, without the leading dot
    pub source_ext: String,
    /// If true, write a JSON metadata sidecar next to each output
    pub sidecar: bool,
}

impl Default for ConvertParams {
    fn default() -> Self {
        Self {
            input_format: InputFormat::Dxf,
            target: TargetVersion::R2000,
            source_ext: "dxf".to_string(),
            sidecar: false,
        }
    }
}
