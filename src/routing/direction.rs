//! Direction disambiguation between candidate paths
//!
//! A resolver query like "Market St between 1st and 2nd" usually returns
//! one path per direction of travel; count data and signage name the
//! direction instead ("NB"). Classification compares the coordinates of a
//! path's first and last node along the relevant axis.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use hashbrown::HashMap;

use crate::model::StreetNetwork;
use crate::routing::PathCandidate;
use crate::{Error, NodeId};

/// Compass direction of travel along a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Northbound,
    Southbound,
    Eastbound,
    Westbound,
}

#[derive(Clone, Copy)]
enum Axis {
    NorthSouth,
    EastWest,
}

impl Direction {
    fn axis(self) -> Axis {
        match self {
            Direction::Northbound | Direction::Southbound => Axis::NorthSouth,
            Direction::Eastbound | Direction::Westbound => Axis::EastWest,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Northbound => "NB",
            Direction::Southbound => "SB",
            Direction::Eastbound => "EB",
            Direction::Westbound => "WB",
        };
        f.write_str(label)
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NB" => Ok(Direction::Northbound),
            "SB" => Ok(Direction::Southbound),
            "EB" => Ok(Direction::Eastbound),
            "WB" => Ok(Direction::Westbound),
            other => Err(Error::InvalidData(format!(
                "direction should be NB, SB, EB or WB, got {other:?}"
            ))),
        }
    }
}

/// Direction of travel of `path` along the given axis, judged from its
/// first and last node coordinates.
///
/// `Ok(None)` means the path does not run along this axis at all (its
/// endpoints coincide there but are separated on the other axis, e.g. a
/// pure north-south street asked about east-west travel). Endpoints that
/// coincide on both axes, or carry non-finite coordinates, are a geometry
/// defect.
fn path_direction(
    network: &StreetNetwork,
    path: &PathCandidate,
    axis: Axis,
) -> Result<Option<Direction>, Error> {
    let (first, last) = path.endpoints();
    let start = network.node(first).ok_or(Error::UnknownNode(first))?;
    let end = network.node(last).ok_or(Error::UnknownNode(last))?;
    let (along, across, label, ascending, descending) = match axis {
        Axis::NorthSouth => (
            (start.geometry.y(), end.geometry.y()),
            (start.geometry.x(), end.geometry.x()),
            "Y",
            Direction::Northbound,
            Direction::Southbound,
        ),
        Axis::EastWest => (
            (start.geometry.x(), end.geometry.x()),
            (start.geometry.y(), end.geometry.y()),
            "X",
            Direction::Eastbound,
            Direction::Westbound,
        ),
    };
    match along.0.partial_cmp(&along.1) {
        Some(Ordering::Less) => Ok(Some(ascending)),
        Some(Ordering::Greater) => Ok(Some(descending)),
        Some(Ordering::Equal)
            if across
                .0
                .partial_cmp(&across.1)
                .is_some_and(|order| order != Ordering::Equal) =>
        {
            Ok(None)
        }
        _ => Err(Error::DegenerateGeometry {
            first,
            last,
            axis: label,
        }),
    }
}

/// Select the candidate path whose endpoint geometry is consistent with
/// the requested direction of travel.
///
/// When several candidates classify to the same direction the last one
/// wins, matching the ambiguity policy of the resolver output order.
///
/// # Errors
///
/// [`Error::DegenerateGeometry`] if a candidate's endpoints cannot be
/// separated on either axis (a data defect), and
/// [`Error::DirectionNotFound`] if no candidate runs in the requested
/// direction, which usually indicates a legitimate one-way street rather
/// than bad data.
pub fn select_by_direction<'a>(
    network: &StreetNetwork,
    candidates: &'a [PathCandidate],
    direction: Direction,
) -> Result<&'a PathCandidate, Error> {
    let axis = direction.axis();
    let mut by_direction: HashMap<Direction, &PathCandidate> =
        HashMap::with_capacity(candidates.len());
    for path in candidates {
        if let Some(classified) = path_direction(network, path, axis)? {
            by_direction.insert(classified, path);
        }
    }
    by_direction
        .remove(&direction)
        .ok_or(Error::DirectionNotFound(direction))
}
