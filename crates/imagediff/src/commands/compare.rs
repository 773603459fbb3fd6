use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use imagediff_engine::{DiffResult, compute, source};
use tracing::{error, info, warn};

use crate::config::ResolvedRunConfig;
use crate::output;
use crate::report::json::{self, DiffSummary};
use crate::report::terminal;

/// Exit code when no pixel exceeds the threshold.
pub const EXIT_SAME: i32 = 0;
/// Exit code when at least one pixel differs.
pub const EXIT_DIFFERENT: i32 = 1;
/// Exit code when either image could not be loaded.
pub const EXIT_NOTHING_TO_COMPARE: i32 = 3;
/// Exit code when a requested diff or mask PNG could not be written.
pub const EXIT_WRITE_FAILED: i32 = 4;

pub struct CompareArgs {
    pub left: PathBuf,
    pub right: PathBuf,
    pub diff_out: Option<PathBuf>,
    pub mask_out: Option<PathBuf>,
    pub json: bool,
}

/// `imagediff compare` — load, diff, report, save requested outputs.
/// Returns the process exit code.
pub fn compare(config: &ResolvedRunConfig, args: &CompareArgs) -> Result<i32> {
    let params = config.params();
    let start = Instant::now();

    let left = source::open_optional(&args.left);
    let right = source::open_optional(&args.right);
    let result = compute(left.as_ref(), right.as_ref(), &params);

    if args.json {
        json::print(&DiffSummary::new(result.as_ref(), &params))?;
    } else {
        terminal::print_line(
            &args.left.display().to_string(),
            &args.right.display().to_string(),
            result.as_ref(),
            start.elapsed(),
        );
    }

    if let Err(e) = save_outputs(result.as_ref(), args) {
        error!(error = %format!("{e:#}"), "failed to save diff output");
        return Ok(EXIT_WRITE_FAILED);
    }

    Ok(exit_code(result.as_ref()))
}

fn save_outputs(result: Option<&DiffResult>, args: &CompareArgs) -> Result<()> {
    if let Some(path) = &args.diff_out {
        match result {
            Some(r) => {
                output::write_diff_image(path, &r.diff_image)?;
                info!(path = %path.display(), "diff image saved");
            }
            None => warn!(path = %path.display(), "no diff to save"),
        }
    }
    if let Some(path) = &args.mask_out {
        match result {
            Some(r) => {
                output::write_mask(path, &r.diff_mask)?;
                info!(path = %path.display(), "diff mask saved");
            }
            None => warn!(path = %path.display(), "no diff to save"),
        }
    }
    Ok(())
}

pub fn exit_code(result: Option<&DiffResult>) -> i32 {
    match result {
        None => EXIT_NOTHING_TO_COMPARE,
        Some(r) if r.has_differences() => EXIT_DIFFERENT,
        Some(_) => EXIT_SAME,
    }
}
