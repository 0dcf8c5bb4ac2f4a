//! Shared types and enums used across DXFUP.
//! Includes `TargetVersion` (the drawing revision to re-save at) and
//! `InputFormat`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum TargetVersion {
    R12,
    R13,
    R14,
    R2000,
    R2004,
    R2007,
    R2010,
    R2013,
    R2018,
}

impl std::fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TargetVersion::R12 => "R12",
            TargetVersion::R13 => "R13",
            TargetVersion::R14 => "R14",
            TargetVersion::R2000 => "R2000",
            TargetVersion::R2004 => "R2004",
            TargetVersion::R2007 => "R2007",
            TargetVersion::R2010 => "R2010",
            TargetVersion::R2013 => "R2013",
            TargetVersion::R2018 => "R2018",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum InputFormat {
    Dxf,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Dxf => write!(f, "Dxf"),
        }
    }
}
