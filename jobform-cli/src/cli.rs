//! CLI entry and dispatch.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use jobform::RegisterFormData;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};

#[derive(Parser)]
#[command(name = "jobform")]
#[command(version)]
#[command(about = "Render the job registration form from JSON records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Build the form and print its HTML
    Render {
        /// JSON file with csrf token, job templates, job and parameters
        #[arg(short, long)]
        input: PathBuf,

        /// Write the HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Only check that the input can be loaded and assembled
    Check {
        #[arg(short, long)]
        input: PathBuf,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.log_level)?;

    match cli.command {
        Commands::Render { input, output } => {
            let data = load(&input)?;
            let html = jobform::render_register_form(&data)?;
            match output {
                Some(path) => {
                    fs::write(&path, &html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Wrote form to {}", path.display());
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    writeln!(stdout, "{html}")?;
                }
            }
        }
        Commands::Check { input } => {
            let data = load(&input)?;
            jobform::job_register_form(&data)?;
            println!(
                "{}: {} templates, {} parameters",
                input.display(),
                data.job_templates.len(),
                data.parameters.len()
            );
        }
    }

    Ok(())
}

fn load(path: &Path) -> Result<RegisterFormData> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let data = RegisterFormData::from_json(&json)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    info!(
        "Loaded {} job templates and {} parameters from {}",
        data.job_templates.len(),
        data.parameters.len(),
        path.display()
    );
    Ok(data)
}

fn init_logging(log_file: Option<&Path>, level: LevelFilter) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            WriteLogger::init(level, Config::default(), file)
        }
        None => WriteLogger::init(level, Config::default(), io::stderr()),
    }
    .context("Failed to initialize logger")
}
