//! Per-player discovery map of the opponent's board.

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, vec::Vec};
#[cfg(feature = "std")]
use std::collections::BTreeMap;

use crate::core::common::{CellStatus, Point, RadarError};

/// What one player has learned about the opponent's board. Each cell is
/// written at most once; an absent cell has not been attacked yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Radar {
    cells: BTreeMap<Point, CellStatus>,
}

impl Radar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of an attack on `point`.
    ///
    /// A cell that already holds an outcome is left as it is and
    /// `RadarError::AlreadyRecorded` is returned.
    pub fn record(&mut self, point: Point, status: CellStatus) -> Result<(), RadarError> {
        if !point.in_bounds() {
            return Err(RadarError::OutOfBounds(point));
        }
        if let Some(&existing) = self.cells.get(&point) {
            return Err(RadarError::AlreadyRecorded { point, existing });
        }
        self.cells.insert(point, status);
        Ok(())
    }

    pub fn status(&self, point: Point) -> Option<CellStatus> {
        self.cells.get(&point).copied()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.cells.contains_key(&point)
    }

    /// Number of attacked cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of heads hit, i.e. aircraft known destroyed.
    pub fn dead_count(&self) -> usize {
        self.cells.values().filter(|s| **s == CellStatus::Dead).count()
    }

    /// Board cells not attacked yet, in row-major order.
    pub fn untried_cells(&self) -> Vec<Point> {
        Point::all().filter(|p| !self.contains(*p)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, CellStatus)> + '_ {
        self.cells.iter().map(|(p, s)| (*p, *s))
    }
}
