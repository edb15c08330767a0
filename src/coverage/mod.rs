use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::input::Delivery;

/// Maps a 1-based delivery coordinate (origin at the bottom-left corner of
/// the grid) to a (row, col) matrix cell.
pub fn grid_cell(x: usize, y: usize, dimension: usize) -> (usize, usize) {
    (dimension - x, y - 1)
}

/// Maximum number of delivery regions covering any single grid cell.
///
/// Each delivery point is expanded by BFS: one step up, down, left or right
/// costs one unit of the remaining radius, so a point reaches exactly the
/// cells within its Manhattan radius. Every reached cell's counter is
/// incremented once per delivery point.
///
/// Independent of the route engine; shares no state with it.
pub fn max_overlap(dimension: usize, deliveries: &[Delivery]) -> u32 {
    let mut grid = vec![vec![0_u32; dimension]; dimension];
    let mut max_visits = 0;

    for delivery in deliveries {
        let mut queue = VecDeque::new();
        let mut seen = HashSet::new();
        let (row, col) = grid_cell(delivery.x, delivery.y, dimension);
        queue.push_back((row, col, delivery.radius));

        while let Some((row, col, remaining)) = queue.pop_front() {
            if !seen.insert((row, col)) {
                continue;
            }
            grid[row][col] += 1;
            max_visits = max_visits.max(grid[row][col]);

            if remaining == 0 {
                continue;
            }
            if row > 0 && !seen.contains(&(row - 1, col)) {
                queue.push_back((row - 1, col, remaining - 1));
            }
            if row + 1 < dimension && !seen.contains(&(row + 1, col)) {
                queue.push_back((row + 1, col, remaining - 1));
            }
            if col > 0 && !seen.contains(&(row, col - 1)) {
                queue.push_back((row, col - 1, remaining - 1));
            }
            if col + 1 < dimension && !seen.contains(&(row, col + 1)) {
                queue.push_back((row, col + 1, remaining - 1));
            }
        }
    }

    debug!(
        "coverage sweep over {}x{} grid, {} delivery points, max overlap {}",
        dimension,
        dimension,
        deliveries.len(),
        max_visits
    );
    max_visits
}
