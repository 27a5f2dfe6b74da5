use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use maxcover::exact::parse_rat;
use maxcover::io::load_points;
use maxcover::max_cover;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "maxcover")]
#[command(about = "Maximum point coverage by a fixed-radius disk")]
struct Cmd {
    /// Squared radius of the covering disk: integer, fraction `p/q`, or decimal
    sq_radius: Option<String>,

    /// Points file: a count N followed by N whitespace-separated coordinate pairs
    #[arg(default_value = "points.txt")]
    points: PathBuf,

    /// Also print a machine-readable JSON report of the run
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let Some(raw_radius) = cmd.sq_radius else {
        bail!("missing required argument: squared radius (e.g. `4` or `9/4`)");
    };
    let sq_radius =
        parse_rat(&raw_radius).with_context(|| format!("invalid squared radius `{raw_radius}`"))?;

    let points = load_points(&cmd.points)?;
    tracing::info!(n = points.len(), file = %cmd.points.display(), "points loaded");

    // Timer starts after the file read so only the computation is measured.
    let start = Instant::now();
    let best = max_cover(&points, &sq_radius)?;
    let secs = start.elapsed().as_secs_f64();

    println!("Execution time: {secs}");
    println!("The maximal covering disc covers {} points", best.count);
    println!("The maximum covering disc is centered at {}", best.vertex);

    if cmd.json {
        let report = serde_json::json!({
            "version": maxcover::VERSION,
            "points_file": cmd.points.display().to_string(),
            "sq_radius": raw_radius,
            "n_points": points.len(),
            "count": best.count,
            "center": best.vertex.to_string(),
            "seconds": secs,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
