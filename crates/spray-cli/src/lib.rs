//! Spray CLI - Command line tools for the coverage planner.
//!
//! This crate provides the binaries:
//! - plan_job: plan a job file and print the sorties
//! - field_distance: great-circle distance between two points

pub mod config;
pub mod job;
pub mod report;

pub use config::{Config, OutputFormat};
pub use job::JobFile;

/// Install the stderr log subscriber shared by the binaries.
///
/// `RUST_LOG` replaces the default `spray_core=info,spray_cli=info` filter.
pub fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("spray_core=info,spray_cli=info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;
    Ok(())
}
