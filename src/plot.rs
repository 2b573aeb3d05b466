use std::error::Error;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use plotters::prelude::*;

use crate::pipeline::CategoryRun;

/// # Description
/// draw one chart for a category: total time, every phase and the predicted
/// parallel time against the process count
///
/// # Arguments
/// * `plot_dir` - the folder the chart goes to, created if needed
/// * `run` - the category, its records and their predictions
/// * `phase_names` - the legend entries for the phase columns
///
/// # Return
/// * `Ok(Some(path))` - the svg file `<plot_dir>/<category>.svg`
/// * `Ok(None)` - the category has no records, nothing is drawn
pub fn plot_category(
    plot_dir: &Path,
    run: &CategoryRun,
    phase_names: &[&str],
) -> Result<Option<PathBuf>, Box<dyn Error>> {
    if run.records.is_empty() {
        return Ok(None);
    }
    std::fs::create_dir_all(plot_dir)?;
    let output_path = plot_dir.join(format!("{}.svg", run.name));

    // every series, in the order they are listed in the legend
    let mut series: Vec<(String, Vec<(f64, f64)>)> = Vec::new();
    let points = |f: &dyn Fn(usize) -> f64| -> Vec<(f64, f64)> {
        run.records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.process_count() as f64, f(i)))
            .collect()
    };
    series.push((
        "Total Time".into(),
        points(&|i| run.records[i].total_time()),
    ));
    for (phase, name) in phase_names.iter().enumerate() {
        series.push((
            name.to_string(),
            points(&|i| run.records[i].phase_times().get(phase).copied().unwrap_or(0.0)),
        ));
    }
    series.push((
        "Predicted (Amdahl)".into(),
        points(&|i| run.results[i].predicted_parallel_time),
    ));

    let (x_min, x_max) = match run
        .records
        .iter()
        .map(|r| r.process_count() as f64)
        .minmax()
        .into_option()
    {
        Some((min, max)) if max > min => (min, max),
        Some((min, _)) => (min - 1.0, min + 1.0),
        None => return Ok(None),
    };
    let y_max = series
        .iter()
        .flat_map(|(_, pts)| pts.iter().map(|(_, y)| *y))
        .filter(|y| y.is_finite())
        .fold(0.0_f64, f64::max);
    let y_min = series
        .iter()
        .flat_map(|(_, pts)| pts.iter().map(|(_, y)| *y))
        .filter(|y| y.is_finite())
        .fold(0.0_f64, f64::min);

    let title = format!("Amdahl's Law Analysis for {}", run.name.to_uppercase());
    let root = SVGBackend::new(&output_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title.as_str(), ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..(y_max * 1.1).max(y_min + 1.0))?;
    chart
        .configure_mesh()
        .x_desc("Number of Nodes (p)")
        .y_desc("Time")
        .draw()?;

    let last = series.len() - 1;
    for (i, (label, pts)) in series.into_iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let finite: Vec<(f64, f64)> = pts.into_iter().filter(|(_, y)| y.is_finite()).collect();
        let style = if i == last {
            color.stroke_width(2)
        } else {
            color.stroke_width(1)
        };
        chart
            .draw_series(LineSeries::new(finite.clone(), style))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart.draw_series(
            finite
                .into_iter()
                .map(|p| Circle::new(p, 3, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(Some(output_path.clone()))
}
