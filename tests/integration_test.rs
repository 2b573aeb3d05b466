use amdahl_predict::{
    analysis_result::AnalysisResult, category::MarkerClassifier, pipeline::Pipeline,
    record::Schema, runner, settings::Settings,
};
use std::path::Path;

fn default_settings(extra: &[&str], output_name: &str) -> Settings {
    let mut config_names = vec![String::from("configs/default.toml")];
    config_names.extend(extra.iter().map(|s| s.to_string()));
    let mut settings = Settings::new(config_names).unwrap();
    settings.output_path = format!("output/{}", output_name);
    settings
}

#[test]
fn test_default_run() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::init_with_level(log::Level::Info).unwrap_or(());

    let settings = default_settings(&[], "it_default.txt");
    let stats = runner::run(&settings)?;
    assert_eq!(stats.lines_read, 11);
    assert_eq!(stats.lines_skipped, 2);
    assert_eq!(stats.categories[0].name, "gpu");
    assert_eq!(stats.categories[0].records, 4);
    assert_eq!(stats.categories[1].name, "cpu");
    assert_eq!(stats.categories[1].records, 5);
    assert!(stats.plots.is_empty());

    let written = std::fs::read_to_string(&settings.output_path)?;
    let expected = "1 1.0000 1.0000\n\
                    2 1.1111 0.9000\n\
                    4 1.3908 0.7190\n\
                    8 2.5000 0.4000\n\
                    1 1.0000 1.0000\n\
                    2 1.0433 0.9585\n\
                    4 1.1386 0.8783\n\
                    8 1.3823 0.7235\n\
                    16 2.3207 0.4309\n";
    assert_eq!(written, expected);

    let mut results = AnalysisResult::new();
    results.settings = Some(settings.clone());
    results.stats = Some(stats);
    let json = serde_json::to_string_pretty(&results)?;
    assert!(json.contains("\"lines_skipped\": 2"));
    std::fs::remove_file(&settings.output_path)?;
    Ok(())
}

#[test]
fn test_runs_are_identical() -> Result<(), Box<dyn std::error::Error>> {
    let first = default_settings(&[], "it_first.txt");
    let second = default_settings(&[], "it_second.txt");
    runner::run(&first)?;
    runner::run(&second)?;
    assert_eq!(
        std::fs::read(&first.output_path)?,
        std::fs::read(&second.output_path)?
    );
    std::fs::remove_file(&first.output_path)?;
    std::fs::remove_file(&second.output_path)?;
    Ok(())
}

#[test]
fn test_comm_single_category() -> Result<(), Box<dyn std::error::Error>> {
    let settings = default_settings(
        &[
            "configs/optional_configs/comm.toml",
            "configs/optional_configs/single.toml",
        ],
        "it_comm.txt",
    );
    let stats = runner::run(&settings)?;
    assert_eq!(stats.categories.len(), 1);
    assert_eq!(stats.categories[0].name, "all");
    assert_eq!(stats.categories[0].records, 4);
    assert_eq!(
        std::fs::read_to_string(&settings.output_path)?,
        "2 1.0571 0.9460\n4 1.2040 0.8306\n8 1.6495 0.6063\n16 4.1412 0.2415\n"
    );
    std::fs::remove_file(&settings.output_path)?;
    Ok(())
}

#[test]
fn test_missing_input_writes_nothing() {
    let mut settings = default_settings(&[], "it_missing.txt");
    settings.input_path = "test_data/no_such_file.txt".into();
    assert!(runner::run(&settings).is_err());
    assert!(!Path::new(&settings.output_path).exists());
}

#[test]
fn test_zero_total_time_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let input = "test_data/it_zero_total.txt";
    std::fs::write(input, "gpu2 10 1 1 1 1\nnode4 0 1 1 1 1\n")?;
    let mut settings = default_settings(&[], "it_zero_total.txt");
    settings.input_path = input.into();
    let error = runner::run(&settings).unwrap_err();
    assert!(error.to_string().contains("line 2"));
    assert!(!Path::new(&settings.output_path).exists());
    std::fs::remove_file(input)?;
    Ok(())
}

#[test]
fn test_plot_run() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = default_settings(&[], "it_plot.txt");
    settings.plot_settings.enabled = true;
    settings.plot_settings.plot_dir = "output/it_plots".into();
    let stats = runner::run(&settings)?;
    assert_eq!(stats.plots.len(), 2);
    assert!(Path::new("output/it_plots/gpu.svg").exists());
    assert!(Path::new("output/it_plots/cpu.svg").exists());
    std::fs::remove_dir_all("output/it_plots")?;
    std::fs::remove_file(&settings.output_path)?;
    Ok(())
}

#[test]
fn test_gpu3_node7_lines() -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = Pipeline::new(Schema::four_phase(), MarkerClassifier::accelerator_split());
    let output = pipeline.run_lines(["gpu3 10.0 1.0 1.0 1.0 1.0", "node7 10.0 1.0 1.0 1.0 1.0"])?;
    let gpu = &output.categories[0].results;
    let cpu = &output.categories[1].results;
    assert_eq!(gpu.len(), 1);
    assert_eq!(cpu.len(), 1);
    assert_eq!(gpu[0].process_count, 3);
    assert!((gpu[0].serial_fraction - 0.4).abs() < 1e-12);
    assert!((gpu[0].predicted_speedup - 1.3636).abs() < 1e-4);
    assert!((gpu[0].predicted_parallel_time - 0.7333).abs() < 1e-4);
    assert_eq!(cpu[0].process_count, 7);
    Ok(())
}
