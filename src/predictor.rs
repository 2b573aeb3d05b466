use log::warn;
use thiserror::Error;

use crate::record::TimingRecord;

#[derive(Error, Debug, PartialEq)]
pub enum PredictError {
    #[error("record {index} has a process count of 0")]
    ZeroProcessCount { index: usize },
}

/// # Description
/// the Amdahl prediction for one record
/// * `serial_fraction`: X, the share of the total time spent in the phases
/// * `predicted_speedup`: S = 1 / (1 - X + X / p)
/// * `predicted_parallel_time`: 1 / S
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedupResult {
    pub process_count: u32,
    pub serial_fraction: f64,
    pub predicted_speedup: f64,
    pub predicted_parallel_time: f64,
}

impl SpeedupResult {
    /// false when the phases do not fit inside the total time; the numbers
    /// are still the literal model output
    pub fn is_consistent(&self) -> bool {
        (0.0..=1.0).contains(&self.serial_fraction)
    }
}

/// Amdahl's law, `p` must not be 0
pub fn speedup_at(serial_fraction: f64, process_count: u32) -> f64 {
    let x = serial_fraction;
    1.0 / (1.0 - x + x / process_count as f64)
}

pub fn predict_one(record: &TimingRecord, index: usize) -> Result<SpeedupResult, PredictError> {
    let process_count = record.process_count();
    if process_count == 0 {
        return Err(PredictError::ZeroProcessCount { index });
    }
    let serial_fraction = record.phase_sum() / record.total_time();
    let predicted_speedup = speedup_at(serial_fraction, process_count);
    Ok(SpeedupResult {
        process_count,
        serial_fraction,
        predicted_speedup,
        predicted_parallel_time: 1.0 / predicted_speedup,
    })
}

/// # Description
/// predict every record of one category
/// # Return
/// one result per record, in the same order; the first record with a
/// process count of 0 aborts the whole category
pub fn predict(records: &[TimingRecord]) -> Result<Vec<SpeedupResult>, PredictError> {
    let results = records
        .iter()
        .enumerate()
        .map(|(index, record)| predict_one(record, index))
        .collect::<Result<Vec<_>, _>>()?;
    for result in results.iter().filter(|r| !r.is_consistent()) {
        warn!(
            "p={}: serial fraction {:.4} is outside [0, 1], speedup {:.4} is low-confidence",
            result.process_count, result.serial_fraction, result.predicted_speedup
        );
    }
    Ok(results)
}
