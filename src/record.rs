use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// the column layout of one input line
///
/// `label total t_reg t_err t_adjust t_init [t_comm]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// the number of phase columns following the total time (4 or 5)
    pub phase_count: usize,
    /// whether the last phase column is the communication time
    pub has_comm_column: bool,
}

impl Schema {
    pub const fn four_phase() -> Self {
        Schema {
            phase_count: 4,
            has_comm_column: false,
        }
    }
    pub const fn with_comm() -> Self {
        Schema {
            phase_count: 5,
            has_comm_column: true,
        }
    }

    /// label + total + every phase column
    pub fn min_tokens(&self) -> usize {
        2 + self.phase_count
    }

    pub fn is_valid(&self) -> bool {
        self.phase_count == 4 + self.has_comm_column as usize
    }

    /// the names of the phase columns, in column order
    pub fn phase_names(&self) -> &'static [&'static str] {
        const NAMES: [&str; 5] = ["Regular", "Error", "Adjust", "Init", "Comm"];
        &NAMES[..self.phase_count.min(NAMES.len())]
    }
}

impl Default for Schema {
    fn default() -> Self {
        Schema::four_phase()
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    #[error("total time must be positive, got {0}")]
    NonPositiveTotalTime(f64),
}

/// # Description
/// one observed run: the parallelism degree, the wall clock time and the
/// phases that are assumed not to scale with the process count
#[derive(Debug, Clone, PartialEq)]
pub struct TimingRecord {
    process_count: u32,
    total_time: f64,
    phase_times: Vec<f64>,
}

impl TimingRecord {
    /// fails when `total_time` is not strictly positive (NaN included)
    pub fn new(
        process_count: u32,
        total_time: f64,
        phase_times: Vec<f64>,
    ) -> Result<Self, RecordError> {
        if !(total_time > 0.0) {
            return Err(RecordError::NonPositiveTotalTime(total_time));
        }
        Ok(TimingRecord {
            process_count,
            total_time,
            phase_times,
        })
    }

    pub fn process_count(&self) -> u32 {
        self.process_count
    }
    pub fn total_time(&self) -> f64 {
        self.total_time
    }
    pub fn phase_times(&self) -> &[f64] {
        &self.phase_times
    }
    pub fn phase_sum(&self) -> f64 {
        self.phase_times.iter().sum()
    }
}

/// a record together with the label token it was parsed from
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub record: TimingRecord,
    pub label: String,
}

/// keep only the digits of the label, `gpu12` -> 12
pub fn extract_process_count(label: &str) -> Option<u32> {
    let digits: String = label.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// # Description
/// parse one line of the timing log
///
/// # Return
/// * `Ok(Some(_))` - the record and its raw label
/// * `Ok(None)` - the line is noise: too few tokens, a label without digits
///   or a column that is not a number
/// * `Err(_)` - the line is well formed but the record is unusable
///
/// # Example
/// ```
/// use amdahl_predict::record::{parse_line, Schema};
/// let parsed = parse_line("gpu3 10.0 1.0 1.0 1.0 1.0", &Schema::four_phase())
///     .unwrap()
///     .unwrap();
/// assert_eq!(parsed.label, "gpu3");
/// assert_eq!(parsed.record.process_count(), 3);
/// assert_eq!(parsed.record.phase_sum(), 4.0);
///
/// assert!(parse_line("5 1.0", &Schema::four_phase()).unwrap().is_none());
/// ```
pub fn parse_line(line: &str, schema: &Schema) -> Result<Option<ParsedLine>, RecordError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    trace!("tokens: {:?}", tokens);
    if tokens.len() < schema.min_tokens() {
        return Ok(None);
    }
    let label = tokens[0];
    let process_count = match extract_process_count(label) {
        Some(p) => p,
        None => return Ok(None),
    };

    let mut values = Vec::with_capacity(schema.phase_count + 1);
    for token in &tokens[1..schema.min_tokens()] {
        match token.parse::<f64>() {
            Ok(v) => values.push(v),
            Err(_) => return Ok(None),
        }
    }
    let total_time = values.remove(0);
    let record = TimingRecord::new(process_count, total_time, values)?;
    Ok(Some(ParsedLine {
        record,
        label: label.to_string(),
    }))
}
