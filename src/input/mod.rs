use log::info;
use thiserror::Error;

use crate::{Station, COORD_LIMIT, MAX_STATIONS};

/// Vertex index of Earth in a parsed route input.
pub const EARTH: usize = 0;
/// Vertex index of Zearth in a parsed route input.
pub const ZEARTH: usize = 1;

/// Grid dimension and delivery-point count upper bound.
pub const MAX_GRID: usize = 1000;
/// Largest accepted delivery radius.
pub const MAX_RADIUS: u32 = 100;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputError {
    #[error("input ended before line {0}")]
    MissingLine(usize),
    #[error("line {line}: expected {expected} numeric fields")]
    MalformedLine { line: usize, expected: usize },
    #[error("coordinate {0} outside [-10000.00, 10000.00]")]
    InvalidCoordinate(f64),
    #[error("number of stations must be between 1 and 500, got {0}")]
    InvalidStationCount(i64),
    #[error("grid dimension must be between 1 and 1000, got {0}")]
    InvalidDimension(i64),
    #[error("number of delivery points must be between 1 and 1000, got {0}")]
    InvalidDeliveryCount(i64),
    #[error("delivery point ({x}, {y}) out of bounds for dimension {dimension}")]
    DeliveryOutOfBounds { x: i64, y: i64, dimension: usize },
    #[error("delivery radius must be between 1 and 100, got {0}")]
    InvalidRadius(i64),
}

/// Validated route input. Earth sits at index [`EARTH`], Zearth at
/// [`ZEARTH`], relay stations follow in file order.
#[derive(Clone, Debug)]
pub struct RouteInput {
    pub stations: Vec<Station>,
}

/// Parses the route format: Zearth coordinates on the first line, the
/// station count on the second, then one coordinate line per station.
/// Earth is implicit at the origin.
///
/// Violations are rejected outright; nothing is clamped or defaulted.
pub fn parse_route_input(text: &str) -> Result<RouteInput, InputError> {
    let mut lines = text.lines();

    let zearth = parse_point(lines.next().ok_or(InputError::MissingLine(1))?, 1)?;

    let count_line = lines.next().ok_or(InputError::MissingLine(2))?;
    let count: i64 = count_line
        .trim()
        .parse()
        .map_err(|_| InputError::MalformedLine {
            line: 2,
            expected: 1,
        })?;
    if count < 1 || count as usize > MAX_STATIONS {
        return Err(InputError::InvalidStationCount(count));
    }

    let mut stations = Vec::with_capacity(count as usize + 2);
    stations.push(Station::new([0.0, 0.0, 0.0]));
    stations.push(zearth);
    for i in 0..count as usize {
        let line_no = i + 3;
        let line = lines.next().ok_or(InputError::MissingLine(line_no))?;
        stations.push(parse_point(line, line_no)?);
    }

    info!(
        "parsed route input: {} stations plus Earth and Zearth",
        count
    );
    Ok(RouteInput { stations })
}

fn parse_point(line: &str, line_no: usize) -> Result<Station, InputError> {
    let malformed = InputError::MalformedLine {
        line: line_no,
        expected: 3,
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(malformed);
    }

    let mut pos = [0.0_f64; 3];
    for (slot, field) in pos.iter_mut().zip(&fields) {
        let value: f64 = field.parse().map_err(|_| malformed.clone())?;
        if !(-COORD_LIMIT..=COORD_LIMIT).contains(&value) {
            return Err(InputError::InvalidCoordinate(value));
        }
        *slot = value;
    }
    Ok(Station::new(pos))
}

/// One delivery center on the coverage grid, 1-based coordinates with the
/// origin at the bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delivery {
    pub x: usize,
    pub y: usize,
    pub radius: u32,
}

#[derive(Clone, Debug)]
pub struct CoverageInput {
    pub dimension: usize,
    pub deliveries: Vec<Delivery>,
}

/// Parses the coverage format: `dimension count` on the first line, then
/// one `X Y R` line per delivery point.
pub fn parse_coverage_input(text: &str) -> Result<CoverageInput, InputError> {
    let mut lines = text.lines();

    let header = lines.next().ok_or(InputError::MissingLine(1))?;
    let (dimension, count) = parse_int_pair(header, 1)?;
    if dimension < 1 || dimension as usize > MAX_GRID {
        return Err(InputError::InvalidDimension(dimension));
    }
    if count < 1 || count as usize > MAX_GRID {
        return Err(InputError::InvalidDeliveryCount(count));
    }
    let dimension = dimension as usize;

    let mut deliveries = Vec::with_capacity(count as usize);
    for i in 0..count as usize {
        let line_no = i + 2;
        let line = lines.next().ok_or(InputError::MissingLine(line_no))?;
        deliveries.push(parse_delivery(line, line_no, dimension)?);
    }

    info!(
        "parsed coverage input: {}x{} grid, {} delivery points",
        dimension,
        dimension,
        deliveries.len()
    );
    Ok(CoverageInput {
        dimension,
        deliveries,
    })
}

fn parse_int_pair(line: &str, line_no: usize) -> Result<(i64, i64), InputError> {
    let malformed = InputError::MalformedLine {
        line: line_no,
        expected: 2,
    };
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(malformed);
    }
    let a = fields[0].parse().map_err(|_| malformed.clone())?;
    let b = fields[1].parse().map_err(|_| malformed)?;
    Ok((a, b))
}

fn parse_delivery(line: &str, line_no: usize, dimension: usize) -> Result<Delivery, InputError> {
    let malformed = InputError::MalformedLine {
        line: line_no,
        expected: 3,
    };
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(malformed);
    }
    let x: i64 = fields[0].parse().map_err(|_| malformed.clone())?;
    let y: i64 = fields[1].parse().map_err(|_| malformed.clone())?;
    let radius: i64 = fields[2].parse().map_err(|_| malformed)?;

    if x < 1 || x as usize > dimension || y < 1 || y as usize > dimension {
        return Err(InputError::DeliveryOutOfBounds { x, y, dimension });
    }
    if radius < 1 || radius as u32 > MAX_RADIUS {
        return Err(InputError::InvalidRadius(radius));
    }

    Ok(Delivery {
        x: x as usize,
        y: y as usize,
        radius: radius as u32,
    })
}
