use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::predictor::SpeedupResult;

/// `"{p} {speedup:.4} {parallel_time:.4}"`
pub fn format_result(result: &SpeedupResult) -> String {
    format!(
        "{} {:.4} {:.4}",
        result.process_count, result.predicted_speedup, result.predicted_parallel_time
    )
}

pub fn write_results_to<W: Write>(mut out: W, results: &[SpeedupResult]) -> io::Result<()> {
    for result in results {
        writeln!(out, "{}", format_result(result))?;
    }
    out.flush()
}

/// # Description
/// write one line per result, creating the parent folder if needed
pub fn write_results(path: &Path, results: &[SpeedupResult]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    write_results_to(BufWriter::new(file), results)
}
