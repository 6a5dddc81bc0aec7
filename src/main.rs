use std::{fs, path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use flight_routes::{
    optimizer::{solve_by, Metric},
    report::{render, Format},
    timetable::{point::PointId, Timetable},
};

#[derive(Parser)]
struct Args {
    /// Path to timetable file
    timetable_path: PathBuf,
    /// Point to travel from
    origin: String,
    /// Point to travel to
    destination: String,
    /// File to write results to, instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Cost to minimise; repeat to report several, in order
    #[arg(long = "metric", value_enum, default_values_t = [Metric::Price, Metric::Duration])]
    metrics: Vec<Metric>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let now = Instant::now();
    let timetable = Timetable::read(&args.timetable_path)?;
    info!(
        "Read {} schedule groups in {:?}",
        timetable.groups.len(),
        now.elapsed()
    );

    let origin = PointId::new(&args.origin);
    let destination = PointId::new(&args.destination);

    let now = Instant::now();
    let solutions = timetable
        .groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            debug!(
                "Group {}: {} segments between {} points",
                i + 1,
                group.len(),
                group.points().len()
            );
            solve_by(group, &origin, &destination, &args.metrics)
        })
        .collect::<Vec<_>>();
    info!("Solved {origin} to {destination} in {:?}", now.elapsed());

    let rendered = render(args.format, &solutions)?;
    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}
