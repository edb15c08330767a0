use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::graph::graph::RelayGraph;
use crate::graph::GraphError;

/// Single-source shortest paths over a [`RelayGraph`], produced by one
/// Dijkstra run. Vertices missing from `distances` are unreachable; there is
/// no infinity sentinel.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    pub source: usize,
    /// cumulative distance from the source
    pub distances: HashMap<usize, f64>,
    /// predecessor on the shortest path; absent for the source itself
    pub predecessors: HashMap<usize, usize>,
}

/// Dijkstra from `source` to every reachable vertex.
///
/// Frontier selection is a linear scan over the unvisited set. That makes the
/// whole run O(V^2), which is fine at V <= 502; a binary heap would only pay
/// off on much larger graphs.
pub fn shortest_paths(graph: &RelayGraph, source: usize) -> Result<ShortestPaths, GraphError> {
    if source >= graph.len() {
        return Err(GraphError::SourceNotInGraph(source, graph.len()));
    }

    let mut distances: HashMap<usize, f64> = HashMap::new();
    distances.insert(source, 0.0);
    let mut predecessors: HashMap<usize, usize> = HashMap::new();
    let mut unvisited: HashSet<usize> = (0..graph.len()).collect();

    while !unvisited.is_empty() {
        // Frontier minimum: unvisited vertex with the smallest known
        // distance. If none has a known distance, the rest is unreachable.
        let current = unvisited
            .iter()
            .copied()
            .filter(|v| distances.contains_key(v))
            .min_by(|a, b| {
                distances[a]
                    .partial_cmp(&distances[b])
                    .unwrap_or(Ordering::Equal)
            });
        let Some(current) = current else {
            break;
        };

        unvisited.remove(&current);
        let current_distance = distances[&current];

        for &neighbour in &graph.adjacency[current] {
            // weight() is total; a missing edge is skipped, not caught.
            let Some(weight) = graph.weight(current, neighbour) else {
                continue;
            };
            let candidate = current_distance + weight;
            if distances.get(&neighbour).is_none_or(|&d| candidate < d) {
                distances.insert(neighbour, candidate);
                predecessors.insert(neighbour, current);
            }
        }
    }

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}

impl ShortestPaths {
    /// Shortest distance from the source to the closest *other* vertex,
    /// rounded to two decimals. Exclusion is by vertex identity, not by
    /// distance value: a station coincident with the source reports 0.00.
    /// `None` when the source is the only reachable vertex.
    pub fn closest_other(&self) -> Option<f64> {
        self.distances
            .iter()
            .filter(|(&vertex, _)| vertex != self.source)
            .map(|(_, &d)| d)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .map(round_2dp)
    }

    /// Distance from the source to `target`, rounded to two decimals.
    /// `None` when the target was never reached.
    pub fn distance_to(&self, target: usize) -> Option<f64> {
        self.distances.get(&target).copied().map(round_2dp)
    }

    /// Vertex sequence from the source to `target`, reconstructed from the
    /// predecessor table. `None` when the target was never reached.
    pub fn route_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.distances.contains_key(&target) {
            return None;
        }
        let mut route = vec![target];
        let mut current = target;
        while let Some(&prev) = self.predecessors.get(&current) {
            current = prev;
            route.push(current);
        }
        route.reverse();
        Some(route)
    }
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
