//! Command-line front end for the CanSat recovery calculator.

use cansat_recovery::config::InputField;
use cansat_recovery::report::{write_catalog_csv, write_catalog_json, write_catalog_table};
use cansat_recovery::{
    AdvisoryAssessor, CalculatorConfig, InputError, ParachuteType, Report, SizingInput,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cansat-recovery")]
#[command(version)]
#[command(about = "Parachute sizing calculator for CanSat recovery systems", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Size a parachute for one payload
    Calculate {
        /// Payload mass (kg)
        #[arg(short = 'm', long)]
        mass: Option<f64>,

        /// Target descent velocity (m/s)
        #[arg(short = 'v', long)]
        velocity: Option<f64>,

        /// Air density (kg/m³)
        #[arg(short = 'd', long)]
        density: Option<f64>,

        /// Parachute type (Round, Cruciform, Square, Hexagonal, Elliptical)
        #[arg(short = 'p', long, value_parser = parse_parachute)]
        parachute: Option<ParachuteType>,

        /// Available packing height (cm); enables the packing estimate
        #[arg(long)]
        packing_height: Option<f64>,

        /// Estimate packing using the configured default height
        #[arg(long, conflicts_with = "packing_height")]
        pack: bool,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "table")]
        output: OutputFormat,

        /// Config file (JSON); defaults to the user config directory
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the available parachute types
    Shapes {
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn parse_parachute(name: &str) -> Result<ParachuteType, InputError> {
    name.parse()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Calculate {
            mass,
            velocity,
            density,
            parachute,
            packing_height,
            pack,
            output,
            config,
        } => {
            let config = CalculatorConfig::load(config.as_deref())?;
            let defaults = &config.defaults;

            let parachute = parachute.unwrap_or(defaults.parachute);
            let mut input = SizingInput::new(
                InputField::Mass.check(mass.unwrap_or(defaults.mass))?,
                InputField::DescentVelocity
                    .check(velocity.unwrap_or(defaults.descent_velocity))?,
                InputField::AirDensity.check(density.unwrap_or(defaults.air_density))?,
                parachute.shape_kind(),
            );
            let packing_height = packing_height.or(pack.then_some(defaults.packing_height));
            if let Some(height) = packing_height {
                input = input.with_packing_height(InputField::PackingHeight.check(height)?);
            }

            let report = Report::generate(input, &AdvisoryAssessor::new(&config.thresholds))?;
            match output {
                OutputFormat::Table => report.write_table(&mut out)?,
                OutputFormat::Json => report.write_json(&mut out)?,
                OutputFormat::Csv => report.write_csv(&mut out)?,
            }
        }
        Commands::Shapes { output } => match output {
            OutputFormat::Table => write_catalog_table(&mut out)?,
            OutputFormat::Json => write_catalog_json(&mut out)?,
            OutputFormat::Csv => write_catalog_csv(&mut out)?,
        },
    }

    out.flush()?;
    Ok(())
}
