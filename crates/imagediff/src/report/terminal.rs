use std::time::Duration;

use imagediff_engine::DiffResult;

pub fn format_duration(d: Duration) -> String {
    let ms = d.as_millis();
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.1}s", d.as_secs_f64())
    }
}

/// The one-line status summary, e.g. `Differing pixels: 12, maxDiff: 87.0`.
pub fn status_line(result: Option<&DiffResult>) -> String {
    match result {
        Some(r) => format!(
            "Differing pixels: {}, maxDiff: {:.1}",
            r.differing_pixels, r.max_diff
        ),
        None => "Nothing to compare".to_string(),
    }
}

/// Print the comparison outcome for `left` vs `right`.
pub fn print_line(left: &str, right: &str, result: Option<&DiffResult>, elapsed: Duration) {
    let time_suffix = format!("  \x1b[2m{}\x1b[0m", format_duration(elapsed));
    let status = status_line(result);

    match result {
        Some(r) if r.has_differences() => {
            println!(
                "  \x1b[31mDIFF\x1b[0m  {left} vs {right}  ({}x{}, {status}){time_suffix}",
                r.width(),
                r.height()
            );
        }
        Some(r) => {
            println!(
                "  \x1b[32mSAME\x1b[0m  {left} vs {right}  ({}x{}, {status}){time_suffix}",
                r.width(),
                r.height()
            );
        }
        None => {
            println!("  \x1b[33mSKIP\x1b[0m  {left} vs {right}  ({status}){time_suffix}");
        }
    }
}
