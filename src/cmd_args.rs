use clap::Parser;
use clap_complete::Shell;

/// predict parallel speedup from phase timing logs with Amdahl's law
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Args {
    /// print the completion script for a shell and exit
    #[clap(long = "generate", arg_enum)]
    pub generator: Option<Shell>,

    /// the timing log, overrides `input_path`
    #[clap(short, long)]
    pub input: Option<String>,

    /// the result file, overrides `output_path`
    #[clap(short, long)]
    pub output: Option<String>,

    /// draw one chart per category
    #[clap(long)]
    pub plot: bool,

    /// extra config files merged on top of configs/default.toml
    pub config_names: Vec<String>,
}
