use std::error::Error;
use std::path::Path;

use log::info;

use crate::analysis_result::AnalysisStatistics;
use crate::pipeline::Pipeline;
use crate::plot::plot_category;
use crate::settings::Settings;
use crate::writer::write_results;

/// # Description
/// one full run as described by the settings
/// * read and predict `input_path`
/// * write the aggregated results to `output_path`
/// * draw the charts if `plot_settings.enabled`
///
/// nothing is written when the input cannot be read or a record is invalid
pub fn run(settings: &Settings) -> Result<AnalysisStatistics, Box<dyn Error>> {
    let pipeline = Pipeline::new(settings.schema, settings.classifier_settings.build());
    let output = pipeline.run_file(Path::new(&settings.input_path))?;

    let results = output.aggregated();
    write_results(Path::new(&settings.output_path), &results)?;
    info!("Results saved to {}", settings.output_path);

    let mut stats = AnalysisStatistics::new(&output);
    stats.output_path = settings.output_path.clone();

    if settings.plot_settings.enabled {
        let plot_dir = Path::new(&settings.plot_settings.plot_dir);
        for category in &output.categories {
            if let Some(path) = plot_category(plot_dir, category, settings.schema.phase_names())? {
                info!("chart for {} saved to {}", category.name, path.display());
                stats.plots.push(path.display().to_string());
            }
        }
    }
    Ok(stats)
}
