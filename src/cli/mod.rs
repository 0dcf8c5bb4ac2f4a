//! Command Line Interface (CLI) layer for DXFUP.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-file and batch
//! conversion flows. It wires user-provided options to the underlying
//! library functionality exposed via `dxfup::api`.
//!
//! If you are embedding DXFUP into another application, prefer using
//! the high-level `dxfup::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
