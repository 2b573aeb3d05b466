use crate::pipeline::PipelineOutput;
use crate::settings::Settings;
use serde::Serialize;

#[derive(Debug, Serialize, Default)]
pub struct AnalysisResult {
    pub settings: Option<Settings>,
    pub stats: Option<AnalysisStatistics>,
}

impl AnalysisResult {
    pub fn new() -> Self {
        AnalysisResult {
            settings: None,
            stats: None,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct AnalysisStatistics {
    pub lines_read: usize,
    pub lines_skipped: usize,
    pub categories: Vec<CategoryStatistics>,
    pub output_path: String,
    pub plots: Vec<String>,
    pub analysis_time: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryStatistics {
    pub name: String,
    pub records: usize,
    /// results whose serial fraction is outside [0, 1]
    pub low_confidence: usize,
}

impl AnalysisStatistics {
    pub fn new(output: &PipelineOutput) -> Self {
        AnalysisStatistics {
            lines_read: output.lines_read,
            lines_skipped: output.lines_skipped,
            categories: output
                .categories
                .iter()
                .map(|c| CategoryStatistics {
                    name: c.name.clone(),
                    records: c.records.len(),
                    low_confidence: c.low_confidence(),
                })
                .collect(),
            ..Default::default()
        }
    }
}
