//! A fixed 10×10 cell set packed into a `u128`.
//!
//! Used for occupancy checks during placement: one bit per board cell in
//! row-major order. Off-board points can never be members.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};

use crate::core::common::Point;
use crate::core::config::{GRID_SIZE, TOTAL_CELLS};

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellMask {
    bits: u128,
}

impl CellMask {
    /// An empty set.
    pub const fn new() -> Self {
        CellMask { bits: 0 }
    }

    /// Build a mask from points, silently skipping off-board ones.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Self {
        let mut mask = Self::new();
        for p in points {
            mask.insert(p);
        }
        mask
    }

    /// Add a point. Returns `false` if it is off the board.
    pub fn insert(&mut self, p: Point) -> bool {
        match p.index() {
            Some(i) => {
                self.bits |= 1u128 << i;
                true
            }
            None => false,
        }
    }

    /// Remove a point if present.
    pub fn remove(&mut self, p: Point) {
        if let Some(i) = p.index() {
            self.bits &= !(1u128 << i);
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.index().map_or(false, |i| self.bits & (1u128 << i) != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of cells in the set.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// True if no cell belongs to both sets.
    pub fn is_disjoint(&self, other: &CellMask) -> bool {
        self.bits & other.bits == 0
    }

    /// Members in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        (0..TOTAL_CELLS)
            .filter(move |i| self.bits & (1u128 << i) != 0)
            .map(Point::from_index)
    }
}

impl BitOr for CellMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellMask { bits: self.bits | rhs.bits }
    }
}

impl BitOrAssign for CellMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for CellMask {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellMask { bits: self.bits & rhs.bits }
    }
}

impl fmt::Debug for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask({} cells):", self.count())?;
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let ch = if self.contains(Point::new(r, c)) { '#' } else { '.' };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
