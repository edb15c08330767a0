pub mod graph;
pub mod pathfinder;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("coordinate {0} outside [-10000.00, 10000.00]")]
    InvalidCoordinate(f64),
    #[error("source vertex {0} not present in a graph of {1} vertices")]
    SourceNotInGraph(usize, usize),
}
