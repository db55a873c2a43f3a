//! Command-line entry point for the payroll engine.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payroll_engine::config::{ConfigLoader, ExportConfig, load_roster};
use payroll_engine::export::{WriteMode, export_employees};
use payroll_engine::models::Employee;
use payroll_engine::payroll::run_payroll;
use payroll_engine::prompt::build_employees_interactively;

#[derive(Parser)]
#[command(name = "payroll")]
#[command(version)]
#[command(about = "Compute monthly pay and export employee records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter employees at the terminal, then compute pay and export them
    Interactive {
        #[command(flatten)]
        export: ExportArgs,
    },
    /// Compute pay for the employees in a roster file and export them
    Run {
        /// Roster file (YAML, or JSON when the name ends in .json)
        #[arg(long)]
        roster: PathBuf,
        #[command(flatten)]
        export: ExportArgs,
    },
}

#[derive(Args)]
struct ExportArgs {
    /// Payroll configuration file (YAML)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the JSON export path
    #[arg(long)]
    json: Option<PathBuf>,
    /// Override the CSV export path
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Override the write mode (append or overwrite)
    #[arg(long)]
    mode: Option<WriteMode>,
    /// Print the pay report without writing any files
    #[arg(long)]
    no_export: bool,
}

impl ExportArgs {
    /// Resolves the export settings: config file first, then flag overrides.
    fn resolve(&self) -> Result<ExportConfig> {
        let mut export = match &self.config {
            Some(path) => ConfigLoader::load(path)?.export().clone(),
            None => ExportConfig::default(),
        };
        if let Some(json) = &self.json {
            export.json_path = json.clone();
        }
        if let Some(csv) = &self.csv {
            export.csv_path = csv.clone();
        }
        if let Some(mode) = self.mode {
            export.mode = mode;
        }
        Ok(export)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "payroll_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Interactive { export } => {
            let config = export.resolve()?;
            println!("Let's build the employee list.");
            let employees = build_employees_interactively()?;
            process(&employees, &config, export.no_export)
        }
        Commands::Run { roster, export } => {
            let config = export.resolve()?;
            let employees = load_roster(&roster)
                .with_context(|| format!("Failed to load roster {}", roster.display()))?;
            process(&employees, &config, export.no_export)
        }
    }
}

fn process(employees: &[Employee], config: &ExportConfig, no_export: bool) -> Result<()> {
    let run = run_payroll(employees);
    println!("\nCalculated Monthly Pay:");
    print!("{}", run);

    if no_export {
        return Ok(());
    }

    export_employees(employees, config)?;
    println!(
        "Saved to \"{}\" and \"{}\".",
        config.json_path.display(),
        config.csv_path.display()
    );
    Ok(())
}
