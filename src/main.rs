use std::env;
use std::fs;

use anyhow::{bail, Context, Result};
use log::info;
use serde::Serialize;

use relay_engine::coverage::max_overlap;
use relay_engine::graph::graph::RelayGraph;
use relay_engine::graph::pathfinder::shortest_paths;
use relay_engine::input::{parse_coverage_input, parse_route_input, EARTH, ZEARTH};

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EngineReport {
    Route {
        stations: usize,
        /// Distance from Earth to the closest other station, two decimals;
        /// `null` when nothing else is reachable.
        shortest_distance: Option<f64>,
        /// Distance from Earth to Zearth, two decimals.
        zearth_distance: Option<f64>,
        /// Vertex indices of the Earth-to-Zearth route.
        zearth_route: Option<Vec<usize>>,
    },
    Coverage {
        dimension: usize,
        delivery_points: usize,
        max_overlap: u32,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (mode, path) = match args.as_slice() {
        [_, mode, path] => (mode.as_str(), path.as_str()),
        _ => bail!("usage: relay_cli <route|coverage> <input-file>"),
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {path}"))?;

    let report = match mode {
        "route" => run_route(&text)?,
        "coverage" => run_coverage(&text)?,
        other => bail!("unknown mode {other:?}, expected \"route\" or \"coverage\""),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_route(text: &str) -> Result<EngineReport> {
    let input = parse_route_input(text)?;
    let stations = input.stations.len() - 2;

    let graph = RelayGraph::complete(input.stations).context("failed to build relay graph")?;
    let paths = shortest_paths(&graph, EARTH).context("shortest-path computation failed")?;

    let shortest_distance = paths.closest_other();
    let zearth_distance = paths.distance_to(ZEARTH);
    let zearth_route = paths.route_to(ZEARTH);

    info!(
        "route query over {} vertices: closest other station at {:?}",
        graph.len(),
        shortest_distance
    );
    Ok(EngineReport::Route {
        stations,
        shortest_distance,
        zearth_distance,
        zearth_route,
    })
}

fn run_coverage(text: &str) -> Result<EngineReport> {
    let input = parse_coverage_input(text)?;
    let overlap = max_overlap(input.dimension, &input.deliveries);

    info!(
        "coverage query over {}x{} grid: max overlap {}",
        input.dimension, input.dimension, overlap
    );
    Ok(EngineReport::Coverage {
        dimension: input.dimension,
        delivery_points: input.deliveries.len(),
        max_overlap: overlap,
    })
}
