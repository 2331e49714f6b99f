use casecash::{Output, Simulation, SimulationConfig};

use std::fs;
use std::io::{self, BufRead, Read};
use std::path::PathBuf;
use anyhow::Context;
use colored::Colorize;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// Path to a TOML simulation config
    #[clap(short, long, value_parser, global = true)]
    config: Option<PathBuf>,

    /// Action to perform
    #[clap(subcommand)]
    action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Run a command script on a fresh ledger
    Run(RunScript),
    /// Execute commands from stdin one line at a time
    Shell
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json
}

#[derive(Args, Debug)]
struct RunScript {
    /// Script file, one command per line (reads stdin if omitted)
    #[clap(value_parser)]
    script: Option<PathBuf>,

    #[clap(short, long, value_enum, default_value_t = Format::Text)]
    format: Format
}

impl RunScript {
    fn read_script(&self) -> anyhow::Result<String> {
        match &self.script {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read script {}", path.display())),
            None => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)
                    .with_context(|| "failed to read script from stdin")?;
                Ok(content)
            }
        }
    }

    fn run(&self, sim: &mut Simulation) -> anyhow::Result<()> {
        let script = self.read_script()?;
        let outputs = sim.run(script.lines())?;

        match self.format {
            Format::Text => {
                for output in &outputs {
                    println!("{}", format_output(output));
                }
            },
            Format::Json => println!("{}", serde_json::to_string(&outputs)?)
        }
        return Ok(());
    }
}

fn format_output(output: &Output) -> String {
    match output {
        Output::Flag(true) => "true".green().to_string(),
        Output::Flag(false) => "false".bright_red().to_string(),
        other => other.to_string()
    }
}

fn shell(sim: &mut Simulation) -> anyhow::Result<()> {
    let stdin = io::stdin();
    for (idx, line) in stdin.lock().lines().enumerate() {
        let line = line.with_context(|| "failed to read from stdin")?;
        match sim.execute_line(&line, idx + 1) {
            Ok(Some(output)) => println!("{}", format_output(&output)),
            Ok(None) => (),
            Err(err) => eprintln!("{}", err.to_string().bright_red())
        }
    }
    return Ok(());
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => SimulationConfig::read(path)?,
        None => SimulationConfig::default()
    };
    info!("using config {:?}", config);
    let mut sim = Simulation::new(config);

    match args.action {
        Subcommands::Run(run_script) => run_script.run(&mut sim),
        Subcommands::Shell => shell(&mut sim)
    }
}
