use clap::Parser;
use std::path::PathBuf;

use dxfup::{InputFormat, TargetVersion};

#[derive(Parser)]
#[command(name = "dxfup", version, about = "DXFUP CLI")]
pub struct CliArgs {
    /// Input drawing file (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing drawing files (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output filename (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch conversion.
    /// Defaults to converted_to_<target> under the input directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Target drawing revision to re-save at
    #[arg(short = 't', long, value_enum, default_value_t = TargetVersion::R2000)]
    pub target: TargetVersion,

    /// Input format (only DXF supported currently)
    #[arg(long, value_enum, default_value_t = InputFormat::Dxf)]
    pub input_format: InputFormat,

    /// Source file extension matched in batch mode
    #[arg(long, default_value = "dxf")]
    pub source_ext: String,

    /// Write a JSON metadata sidecar next to each converted file
    #[arg(long, default_value_t = false)]
    pub sidecar: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: convert every matching file under --input-dir
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    /// Abort the whole batch on the first failed conversion
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,
}
