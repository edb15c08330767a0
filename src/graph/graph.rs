use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::GraphError;
use crate::{Station, COORD_LIMIT};

/// Complete undirected graph over relay stations, weighted by Euclidean
/// distance. Vertices are identified by input index, so stations that share
/// a position stay distinct.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelayGraph {
    pub stations: Vec<Station>,
    /// adjacency[i] lists neighbour indices of stations[i]
    pub adjacency: Vec<Vec<usize>>,
    /// Edge weights keyed by (lower index, higher index).
    weights: HashMap<(usize, usize), f64>,
}

impl RelayGraph {
    /// Builds the complete graph over `stations`: one edge per unordered
    /// pair, no self-loops, full-precision weights.
    ///
    /// Coordinates are re-checked here even though the input layer already
    /// rejects out-of-range values; callers may hand points in directly.
    pub fn complete(stations: Vec<Station>) -> Result<Self, GraphError> {
        for station in &stations {
            let out_of_range = station
                .pos
                .iter()
                .find(|&&c| !(-COORD_LIMIT..=COORD_LIMIT).contains(&c));
            if let Some(&bad) = out_of_range {
                return Err(GraphError::InvalidCoordinate(bad));
            }
        }

        let n = stations.len();
        let mut adjacency = vec![Vec::with_capacity(n.saturating_sub(1)); n];
        let mut weights = HashMap::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                adjacency[i].push(j);
                adjacency[j].push(i);
                weights.insert((i, j), stations[i].distance(&stations[j]));
            }
        }

        debug!("built complete graph: {} vertices, {} edges", n, weights.len());
        Ok(RelayGraph {
            stations,
            adjacency,
            weights,
        })
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of unordered edges.
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    /// Weight of the edge between `a` and `b`, in either order. `None` for
    /// self-loops and out-of-range indices; never panics on a bad pair.
    pub fn weight(&self, a: usize, b: usize) -> Option<f64> {
        if a == b {
            return None;
        }
        let key = if a < b { (a, b) } else { (b, a) };
        self.weights.get(&key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn station(x: f64, y: f64, z: f64) -> Station {
        Station::new([x, y, z])
    }

    #[test]
    fn complete_graph_has_all_pairs() {
        let stations = vec![
            station(0.0, 0.0, 0.0),
            station(1.0, 0.0, 0.0),
            station(0.0, 2.0, 0.0),
            station(0.0, 0.0, 3.0),
        ];
        let n = stations.len();
        let graph = RelayGraph::complete(stations).expect("graph");

        assert_eq!(graph.edge_count(), n * (n - 1) / 2);
        for i in 0..n {
            assert_eq!(graph.adjacency[i].len(), n - 1);
            assert!(!graph.adjacency[i].contains(&i));
            for j in 0..n {
                if i == j {
                    assert_eq!(graph.weight(i, j), None);
                } else {
                    let w = graph.weight(i, j).expect("edge");
                    assert!(w >= 0.0);
                    assert_eq!(graph.weight(j, i), Some(w));
                }
            }
        }
    }

    #[test]
    fn weights_are_euclidean() {
        let graph = RelayGraph::complete(vec![
            station(0.0, 0.0, 0.0),
            station(1.0, 1.0, 1.0),
        ])
        .expect("graph");
        assert_approx_eq!(graph.weight(0, 1).unwrap(), 3.0_f64.sqrt());
    }

    #[test]
    fn duplicate_positions_stay_distinct_vertices() {
        let graph = RelayGraph::complete(vec![
            station(1.0, 2.0, 3.0),
            station(1.0, 2.0, 3.0),
            station(0.0, 0.0, 0.0),
        ])
        .expect("graph");
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.weight(0, 1), Some(0.0));
    }

    #[test]
    fn boundary_coordinates_accepted() {
        let graph = RelayGraph::complete(vec![
            station(10_000.0, -10_000.0, 10_000.0),
            station(0.0, 0.0, 0.0),
        ]);
        assert!(graph.is_ok());
    }

    #[test]
    fn out_of_range_coordinate_rejected() {
        let err = RelayGraph::complete(vec![station(10_000.01, 0.0, 0.0)]).unwrap_err();
        assert_eq!(err, GraphError::InvalidCoordinate(10_000.01));

        let err = RelayGraph::complete(vec![station(0.0, -10_000.01, 0.0)]).unwrap_err();
        assert_eq!(err, GraphError::InvalidCoordinate(-10_000.01));
    }
}
