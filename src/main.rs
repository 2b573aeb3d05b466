use amdahl_predict::{analysis_result::AnalysisResult, cmd_args::Args, runner, settings::Settings};
use chrono::Local;
use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use std::io;
fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::init_with_level(log::Level::Info)?;
    let start_time = std::time::Instant::now();

    let mut config_names = vec![String::from("configs/default.toml")];
    let args = Args::parse();
    if let Some(generator) = args.generator {
        let mut cmd = Args::command();
        eprintln!("Generating completion file for {:?}...", generator);
        print_completions(generator, &mut cmd);
        return Ok(());
    }
    log::debug!("{:?}", args);

    // config_names append args
    for arg in args.config_names.into_iter() {
        config_names.push(arg);
    }

    let mut results = AnalysisResult::new();
    let mut settings = Settings::new(config_names)?;
    if let Some(input) = args.input {
        settings.input_path = input;
    }
    if let Some(output) = args.output {
        settings.output_path = output;
    }
    if args.plot {
        settings.plot_settings.enabled = true;
    }
    results.settings = Some(settings.clone());
    println!("{}", serde_json::to_string_pretty(&settings)?);

    let mut stat = runner::run(&settings)?;

    // record the analysis time
    stat.analysis_time = format!("{:.3}s", start_time.elapsed().as_secs_f64());
    results.stats = Some(stat);

    std::fs::create_dir_all(&settings.report_dir)?;
    let current_time: String = Local::now().format("%Y-%m-%d-%H-%M-%S%.6f").to_string();
    let report_path = format!("{}/{}.json", settings.report_dir, current_time);
    // write json of results to report_path
    std::fs::write(&report_path, serde_json::to_string_pretty(&results)?)?;
    log::info!("report saved to {}", report_path);
    Ok(())
}
