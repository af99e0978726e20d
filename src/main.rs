use std::{
    env,
    fs::File,
    io::{self, BufWriter, Read},
    path::PathBuf,
    time::Instant,
};

use clap::Parser;
use serde::Serialize;
use tracing::info;

use points2tour::{export, graph::Graph, mst, point, tsp, Error, Result};

#[derive(Debug, Parser)]
#[command(about)]
struct Opt {
    /// A path to a point file, else reads from stdin
    file: Option<PathBuf>,

    /// Generate this many random points instead of reading any input
    #[arg(long, conflicts_with = "file")]
    random: Option<usize>,

    /// Seed for --random, for reproducible runs
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Vertex the tour starts and ends at
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Write the spanning tree edges to this file as coordinate pairs
    #[arg(long)]
    tree_out: Option<PathBuf>,

    /// Write the tour to this file as a coordinate sequence
    #[arg(long)]
    tour_out: Option<PathBuf>,

    /// Report as a JSON object instead of "<seconds> <cost>"
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct RunReport {
    points: usize,
    mst_weight: f64,
    tour_cost: f64,
    elapsed_seconds: f64,
}

fn main() -> Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "points2tour=info")
    }
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let opt = Opt::parse();

    let started = Instant::now();
    let points = match opt.random {
        Some(0) => return Err(Error::invalid_input("point count must be at least 1")),
        Some(count) => {
            info!(count, seed = opt.seed, "generating random points");
            point::random_points(count, opt.seed)
        }
        None => {
            let input = match &opt.file {
                Some(filepath) => std::fs::read_to_string(filepath)?,
                None => {
                    info!("reading from stdin");
                    let mut input = String::new();
                    io::stdin().read_to_string(&mut input)?;
                    input
                }
            };
            point::parse_points(&input)?
        }
    };
    if opt.start >= points.len() {
        return Err(Error::invalid_input(format!(
            "start vertex {} out of range for {} points",
            opt.start,
            points.len()
        )));
    }
    info!(points = points.len(), "building complete graph");

    let graph = Graph::complete(&points);
    let mst = mst::compute_mst(&graph, opt.start)?;
    info!(weight = mst.weight(), "spanning tree ready");

    let tour = tsp::depth_first_tour(&mst.tree, opt.start);
    let cost = tsp::tour_cost(&points, &tour);

    let report = RunReport {
        points: points.len(),
        mst_weight: mst.weight(),
        tour_cost: cost,
        elapsed_seconds: started.elapsed().as_secs_f64(),
    };

    if let Some(path) = &opt.tree_out {
        export::write_tree(BufWriter::new(File::create(path)?), &mst.tree, &points)?;
        info!(path = %path.display(), "spanning tree written");
    }
    if let Some(path) = &opt.tour_out {
        export::write_tour(BufWriter::new(File::create(path)?), &points, &tour)?;
        info!(path = %path.display(), "tour written");
    }

    if opt.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{:.6} {:.6}", report.elapsed_seconds, report.tour_cost);
    }

    Ok(())
}
