//! the crate amdahl_predict turns phase timing logs of parallel runs into
//! Amdahl's law speedup predictions.
//! the pipeline has 4 parts:
//!
//! - record: parse one log line into a timing record.
//! - category: group the records by the label of the run (gpu, cpu...).
//! - predictor: apply Amdahl's law to the records of one group.
//! - aggregator: merge the groups back into one ordered result list.
//!
//! writer, plot and analysis_result consume the pipeline output.

pub mod aggregator;
pub mod analysis_result;
pub mod category;
pub mod cmd_args;
pub mod pipeline;
pub mod plot;
pub mod predictor;
pub mod record;
pub mod runner;
pub mod settings;
pub mod writer;
