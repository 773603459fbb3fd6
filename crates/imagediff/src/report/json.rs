use anyhow::{Context, Result};
use imagediff_engine::{DiffParams, DiffResult};
use serde::Serialize;

/// Machine-readable comparison summary for `--json`.
#[derive(Debug, Serialize, PartialEq)]
pub struct DiffSummary {
    /// `false` when either image could not be loaded.
    pub compared: bool,
    pub width: u32,
    pub height: u32,
    pub differing_pixels: u64,
    pub total_pixels: u64,
    pub max_diff: f64,
    pub diff_ratio: f64,
    pub threshold: u8,
    pub sensitivity: f64,
}

impl DiffSummary {
    pub fn new(result: Option<&DiffResult>, params: &DiffParams) -> Self {
        match result {
            Some(r) => Self {
                compared: true,
                width: r.width(),
                height: r.height(),
                differing_pixels: r.differing_pixels,
                total_pixels: r.total_pixels(),
                max_diff: r.max_diff,
                diff_ratio: r.diff_ratio(),
                threshold: params.threshold,
                sensitivity: params.sensitivity,
            },
            None => Self {
                compared: false,
                width: 0,
                height: 0,
                differing_pixels: 0,
                total_pixels: 0,
                max_diff: 0.0,
                diff_ratio: 0.0,
                threshold: params.threshold,
                sensitivity: params.sensitivity,
            },
        }
    }
}

pub fn print(summary: &DiffSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("Failed to serialize summary")?;
    println!("{json}");
    Ok(())
}
