use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::io::drawing::DrawingMetadata;
use crate::types::TargetVersion;

/// Extract all metadata fields from DrawingMetadata into a HashMap
pub fn extract_metadata_fields(
    meta: &DrawingMetadata,
    target: TargetVersion,
) -> HashMap<String, String> {
    let mut metadata = HashMap::new();

    metadata.insert("FILE_NAME".to_string(), meta.file_name.clone());
    metadata.insert("SOURCE_VERSION".to_string(), meta.source_version.clone());
    metadata.insert("TARGET_VERSION".to_string(), target.to_string());
    metadata.insert("ENTITIES".to_string(), meta.entities.to_string());
    metadata.insert("LAYERS".to_string(), meta.layers.to_string());
    metadata.insert("BLOCKS".to_string(), meta.blocks.to_string());

    // Conversion provenance
    metadata.insert("CONVERSION_TOOL".to_string(), meta.conversion_tool.clone());
    metadata.insert(
        "CONVERSION_VERSION".to_string(),
        meta.conversion_version.clone(),
    );
    metadata.insert(
        "CONVERSION_TIMESTAMP".to_string(),
        meta.conversion_timestamp.clone(),
    );

    metadata
}

/// Create a JSON metadata sidecar next to a converted drawing
pub fn create_metadata_sidecar(
    output_path: &Path,
    meta: &DrawingMetadata,
    target: TargetVersion,
) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = extract_metadata_fields(meta, target);

    // Sidecar shares the output's base name
    let sidecar_path = output_path.with_extension("json");

    let json_string = serde_json::to_string_pretty(&metadata)?;
    std::fs::write(&sidecar_path, json_string)?;

    info!("Created metadata sidecar: {:?}", sidecar_path);
    Ok(())
}
