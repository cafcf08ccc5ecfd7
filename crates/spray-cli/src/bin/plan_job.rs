//! Plan a spraying job from a JSON job file.
//!
//! Usage:
//!   cargo run -p spray-cli --bin plan_job -- --input job.json --format text

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spray_cli::report::{render_text, PlanReport};
use spray_cli::{init_tracing, Config, JobFile, OutputFormat};
use spray_core::calculate_optimal_plan_with_rules;

#[derive(Parser, Debug)]
#[command(author, version, about = "Lay out spray sorties for a field")]
struct Args {
    /// Job file (JSON), or '-' for stdin
    #[arg(long, short)]
    input: PathBuf,

    /// Output format (overrides SPRAY_OUTPUT)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Number of drones sharing the job (overrides the job file)
    #[arg(long)]
    drones: Option<u32>,
}

fn main() -> Result<()> {
    init_tracing()?;
    let args = Args::parse();
    let config = Config::from_env();

    let mut job = JobFile::load(&args.input)?;
    if let Some(drones) = args.drones {
        job.drone_count = Some(drones);
    }
    let input = job.into_input()?;

    tracing::info!(job_id = input.job_id, hectares = input.hectares, "Planning job");
    let result = calculate_optimal_plan_with_rules(&input, &config.rules)
        .with_context(|| format!("Failed to plan job {}", input.job_id))?;

    match args.format.unwrap_or(config.output) {
        OutputFormat::Json => println!("{}", PlanReport::new(&result).to_json()?),
        OutputFormat::Text => print!("{}", render_text(&result)),
    }
    Ok(())
}
