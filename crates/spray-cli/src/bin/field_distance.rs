//! Great-circle distance between two points.

use anyhow::Result;
use clap::Parser;
use spray_core::GeoPoint;

#[derive(Parser, Debug)]
#[command(author, version, about = "Haversine distance in meters")]
struct Args {
    #[arg(allow_negative_numbers = true)]
    lat1: f64,
    #[arg(allow_negative_numbers = true)]
    lng1: f64,
    #[arg(allow_negative_numbers = true)]
    lat2: f64,
    #[arg(allow_negative_numbers = true)]
    lng2: f64,
}

fn main() -> Result<()> {
    spray_cli::init_tracing()?;
    let args = Args::parse();

    let from = GeoPoint::new(args.lat1, args.lng1);
    let to = GeoPoint::new(args.lat2, args.lng2);
    let meters = from.distance_to(&to);
    tracing::debug!(?from, ?to, meters, "Computed distance");

    println!("{meters:.1}");
    Ok(())
}
