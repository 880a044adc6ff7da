//! Bulk resolution of many segment descriptions
//!
//! Count-processing pipelines resolve hundreds of human-written segment
//! descriptions against one network. Individual failures are expected
//! (unparseable street names, one-way mismatches) and must not abort the
//! run, so every query outcome lands either in the resolved list or in a
//! skip ledger the caller can export and review.

use log::warn;
use rayon::prelude::*;
use serde::Serialize;

use crate::Error;
use crate::matching::StreetDescription;
use crate::model::StreetNetwork;
use crate::routing::{Direction, PathCandidate, find_paths, select_by_direction};

/// One segment description to resolve: the primary street between two
/// cross streets, in one or more requested directions of travel
#[derive(Debug, Clone)]
pub struct SegmentQuery {
    /// Caller-facing identifier carried through to results and skips
    /// (e.g. the source file name)
    pub label: String,
    pub primary: StreetDescription,
    pub cross1: StreetDescription,
    pub cross2: StreetDescription,
    pub directions: Vec<Direction>,
}

/// A query direction resolved to a single network path
#[derive(Debug, Clone)]
pub struct ResolvedSegment {
    pub label: String,
    pub direction: Direction,
    pub path: PathCandidate,
}

/// Ledger of queries (or query directions) that could not be resolved
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkippedQueries {
    /// No path matched the street description at all
    pub paths_not_found: Vec<String>,
    /// Paths were found, but none runs the requested direction
    pub direction_not_found: Vec<(String, String)>,
    /// Candidate geometry could not be classified
    pub degenerate_geometry: Vec<(String, String)>,
}

impl SkippedQueries {
    pub fn is_empty(&self) -> bool {
        self.paths_not_found.is_empty()
            && self.direction_not_found.is_empty()
            && self.degenerate_geometry.is_empty()
    }

    /// Render the ledger as JSON for a review log
    ///
    /// # Errors
    ///
    /// Serialization of these plain string lists does not realistically
    /// fail; the error type is shared with the rest of the crate.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn merge(&mut self, other: SkippedQueries) {
        self.paths_not_found.extend(other.paths_not_found);
        self.direction_not_found.extend(other.direction_not_found);
        self.degenerate_geometry.extend(other.degenerate_geometry);
    }
}

/// Outcome of a bulk resolution run; `resolved` keeps the input order
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub resolved: Vec<ResolvedSegment>,
    pub skipped: SkippedQueries,
}

/// Resolve many independent segment queries against one network.
///
/// Queries are independent pure reads of the network, so they run in
/// parallel; the report still lists outcomes in input order. Soft
/// failures land in the skip ledger and never abort the batch.
pub fn resolve_segments(network: &StreetNetwork, queries: &[SegmentQuery]) -> BatchReport {
    let outcomes: Vec<(Vec<ResolvedSegment>, SkippedQueries)> = queries
        .par_iter()
        .map(|query| resolve_query(network, query))
        .collect();

    let mut report = BatchReport::default();
    for (resolved, skipped) in outcomes {
        report.resolved.extend(resolved);
        report.skipped.merge(skipped);
    }
    report
}

fn resolve_query(
    network: &StreetNetwork,
    query: &SegmentQuery,
) -> (Vec<ResolvedSegment>, SkippedQueries) {
    let mut resolved = Vec::new();
    let mut skipped = SkippedQueries::default();

    let candidates = find_paths(network, &query.primary, &query.cross1, &query.cross2);
    if candidates.is_empty() {
        warn!("geo-matching unsuccessful; paths not found: {}", query.label);
        skipped.paths_not_found.push(query.label.clone());
        return (resolved, skipped);
    }

    for &direction in &query.directions {
        match select_by_direction(network, &candidates, direction) {
            Ok(path) => resolved.push(ResolvedSegment {
                label: query.label.clone(),
                direction,
                path: path.clone(),
            }),
            Err(Error::DirectionNotFound(_)) => {
                warn!("no {direction} path for {}", query.label);
                skipped
                    .direction_not_found
                    .push((query.label.clone(), direction.to_string()));
            }
            Err(error) => {
                warn!("cannot classify candidates for {}: {error}", query.label);
                skipped
                    .degenerate_geometry
                    .push((query.label.clone(), direction.to_string()));
            }
        }
    }
    (resolved, skipped)
}
