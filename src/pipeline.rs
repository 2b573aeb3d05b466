//! # Description
//! - the whole batch transform: parse -> classify -> predict -> aggregate
//! - one configurable path for every input layout, the differences are in
//!   the [`Schema`] and the [`Classifier`]

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::aggregator::aggregate;
use crate::category::Classifier;
use crate::predictor::{predict, PredictError, SpeedupResult};
use crate::record::{parse_line, RecordError, Schema, TimingRecord};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("cannot read {}: {source}", .path.display())]
    Input { path: PathBuf, source: io::Error },
    #[error("line {line}: {source}")]
    InvalidRecord { line: usize, source: RecordError },
    #[error("category {category}: {source}")]
    Prediction {
        category: String,
        source: PredictError,
    },
}

/// the records of one category and their predictions, zipped by position
#[derive(Debug, Clone)]
pub struct CategoryRun {
    pub name: String,
    pub records: Vec<TimingRecord>,
    pub results: Vec<SpeedupResult>,
}

impl CategoryRun {
    pub fn low_confidence(&self) -> usize {
        self.results.iter().filter(|r| !r.is_consistent()).count()
    }
}

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub lines_read: usize,
    pub lines_skipped: usize,
    /// in the classifier's category order, empty categories included
    pub categories: Vec<CategoryRun>,
}

impl PipelineOutput {
    /// the flat sequence that gets persisted
    pub fn aggregated(&self) -> Vec<SpeedupResult> {
        aggregate(self.categories.iter().map(|c| c.results.as_slice()))
    }
}

pub struct Pipeline<C: Classifier> {
    schema: Schema,
    classifier: C,
}

impl<C: Classifier> Pipeline<C> {
    pub fn new(schema: Schema, classifier: C) -> Self {
        Pipeline { schema, classifier }
    }

    /// # Description
    /// run the pipeline over already split lines
    ///
    /// # Example
    /// ```
    /// use amdahl_predict::{category::MarkerClassifier, pipeline::Pipeline, record::Schema};
    /// let pipeline = Pipeline::new(Schema::four_phase(), MarkerClassifier::accelerator_split());
    /// let output = pipeline
    ///     .run_lines(["gpu3 10 1 1 1 1", "bad", "node7 10 1 1 1 1"])
    ///     .unwrap();
    /// assert_eq!(output.lines_skipped, 1);
    /// assert_eq!(output.categories[0].name, "gpu");
    /// assert_eq!(output.categories[1].records.len(), 1);
    /// ```
    pub fn run_lines<I, S>(&self, lines: I) -> Result<PipelineOutput, PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.run_fallible(lines.into_iter().map(Ok))
    }

    /// read `path` lazily, line by line
    pub fn run_file(&self, path: &Path) -> Result<PipelineOutput, PipelineError> {
        let input_error = |source| PipelineError::Input {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(input_error)?;
        self.run_fallible(
            BufReader::new(file)
                .lines()
                .map(|line| line.map_err(input_error)),
        )
    }

    fn run_fallible<I, S>(&self, lines: I) -> Result<PipelineOutput, PipelineError>
    where
        I: Iterator<Item = Result<S, PipelineError>>,
        S: AsRef<str>,
    {
        let names = self.classifier.categories();
        let mut buckets: Vec<Vec<TimingRecord>> = vec![Vec::new(); names.len()];
        let mut lines_read = 0;
        let mut lines_skipped = 0;

        for (index, line) in lines.enumerate() {
            let line = line?;
            lines_read += 1;
            let parsed = parse_line(line.as_ref(), &self.schema).map_err(|source| {
                PipelineError::InvalidRecord {
                    line: index + 1,
                    source,
                }
            })?;
            match parsed {
                Some(parsed) => {
                    let id = self.classifier.classify(&parsed.label);
                    buckets[id].push(parsed.record);
                }
                None => {
                    debug!("skipping line {}: {:?}", index + 1, line.as_ref());
                    lines_skipped += 1;
                }
            }
        }

        let mut categories = Vec::with_capacity(names.len());
        for (name, records) in names.iter().zip(buckets) {
            let results = predict(&records).map_err(|source| PipelineError::Prediction {
                category: name.clone(),
                source,
            })?;
            info!("{}: {} records", name, records.len());
            categories.push(CategoryRun {
                name: name.clone(),
                records,
                results,
            });
        }
        Ok(PipelineOutput {
            lines_read,
            lines_skipped,
            categories,
        })
    }
}
