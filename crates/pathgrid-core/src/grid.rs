//! The [`Grid`] type — a square board of [`Cell`]s with cached adjacency.

use crate::cell::{Cell, CellState};
use crate::geom::Point;

/// Lookup failure for bounds-checked cell access.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// Position outside `[0, rows)` on either axis.
    #[error("position ({x}, {y}) is outside the {rows}x{rows} grid")]
    OutOfRange { x: i32, y: i32, rows: i32 },
}

/// A `rows × rows` board of cells.
///
/// The grid owns cell state and the derived neighbor caches. Clearing the
/// whole board is done by constructing a fresh `Grid`; clearing only the
/// marks left behind by a search is [`clear_search_marks`](Grid::clear_search_marks).
#[derive(Clone, Debug)]
pub struct Grid {
    rows: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of `rows × rows` empty cells.
    pub fn new(rows: i32) -> Self {
        let n = rows.max(0);
        let mut cells = Vec::with_capacity((n * n) as usize);
        for y in 0..n {
            for x in 0..n {
                cells.push(Cell::new(Point::new(x, y)));
            }
        }
        Self { rows: n, cells }
    }

    /// Side length of the square grid.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.rows && p.y >= 0 && p.y < self.rows
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y * self.rows + p.x) as usize)
        } else {
            None
        }
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::new(idx as i32 % self.rows, idx as i32 / self.rows)
    }

    /// Bounds-checked cell lookup.
    pub fn cell(&self, p: Point) -> Result<&Cell, GridError> {
        self.index(p)
            .map(|i| &self.cells[i])
            .ok_or(GridError::OutOfRange {
                x: p.x,
                y: p.y,
                rows: self.rows,
            })
    }

    /// Bounds-checked mutable cell lookup.
    pub fn cell_mut(&mut self, p: Point) -> Result<&mut Cell, GridError> {
        let rows = self.rows;
        self.index(p)
            .map(|i| &mut self.cells[i])
            .ok_or(GridError::OutOfRange {
                x: p.x,
                y: p.y,
                rows,
            })
    }

    /// State of the cell at `p`, without the `Result` ceremony.
    /// Out-of-bounds positions read as `Empty`.
    #[inline]
    pub fn state(&self, p: Point) -> CellState {
        self.index(p)
            .map(|i| self.cells[i].state())
            .unwrap_or_default()
    }

    /// Cached passable neighbors of `p`, in down/up/right/left order.
    /// Empty for out-of-bounds positions and for cells whose cache was never
    /// built.
    #[inline]
    pub fn neighbors(&self, p: Point) -> &[Point] {
        self.index(p)
            .map(|i| self.cells[i].neighbors())
            .unwrap_or(&[])
    }

    /// Rebuild every cell's neighbor cache.
    ///
    /// A neighbor is one of the four grid-adjacent cells (no diagonals) that
    /// is in bounds and not a Barrier, enumerated in the fixed order
    /// **down, up, right, left**. The order drives visualization order and
    /// equal-priority tie-breaking, so it is part of the contract.
    ///
    /// The cache is not invalidated automatically: callers must invoke this
    /// before every search run that follows a barrier edit.
    pub fn refresh_adjacency(&mut self) {
        let passable: Vec<bool> = self.cells.iter().map(|c| !c.is_barrier()).collect();
        for i in 0..self.cells.len() {
            let p = self.point(i);
            let mut nbrs = std::mem::take(&mut self.cells[i].neighbors);
            nbrs.clear();
            for np in [
                p.shift(0, 1),  // down
                p.shift(0, -1), // up
                p.shift(1, 0),  // right
                p.shift(-1, 0), // left
            ] {
                if let Some(ni) = self.index(np) {
                    if passable[ni] {
                        nbrs.push(np);
                    }
                }
            }
            self.cells[i].neighbors = nbrs;
        }
    }

    /// Reset every `Open`, `Closed` and `Path` cell back to `Empty`, leaving
    /// `Start`, `End` and `Barrier` in place.
    pub fn clear_search_marks(&mut self) {
        for cell in &mut self.cells {
            if cell.is_open() || cell.is_closed() || cell.is_path() {
                cell.reset();
            }
        }
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of cells currently in `state`.
    pub fn count_state(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new_positions_match_indices() {
        let g = Grid::new(4);
        assert_eq!(g.rows(), 4);
        for (i, cell) in g.iter().enumerate() {
            assert_eq!(cell.pos(), g.point(i));
            assert_eq!(cell.state(), CellState::Empty);
        }
        assert_eq!(g.iter().count(), 16);
    }

    #[test]
    fn cell_lookup_out_of_range() {
        let g = Grid::new(3);
        assert!(g.cell(Point::new(2, 2)).is_ok());
        assert_eq!(
            g.cell(Point::new(3, 0)),
            Err(GridError::OutOfRange { x: 3, y: 0, rows: 3 })
        );
        assert_eq!(
            g.cell(Point::new(0, -1)),
            Err(GridError::OutOfRange { x: 0, y: -1, rows: 3 })
        );
    }

    #[test]
    fn adjacency_order_is_down_up_right_left() {
        let mut g = Grid::new(3);
        g.refresh_adjacency();
        let center = Point::new(1, 1);
        assert_eq!(
            g.neighbors(center),
            &[
                Point::new(1, 2), // down
                Point::new(1, 0), // up
                Point::new(2, 1), // right
                Point::new(0, 1), // left
            ]
        );
    }

    #[test]
    fn adjacency_clips_at_edges() {
        let mut g = Grid::new(3);
        g.refresh_adjacency();
        // Top-left corner keeps only down and right.
        assert_eq!(
            g.neighbors(Point::ZERO),
            &[Point::new(0, 1), Point::new(1, 0)]
        );
        // Bottom-right corner keeps only up and left.
        assert_eq!(
            g.neighbors(Point::new(2, 2)),
            &[Point::new(2, 1), Point::new(1, 2)]
        );
    }

    #[test]
    fn adjacency_excludes_barriers() {
        let mut g = Grid::new(3);
        g.cell_mut(Point::new(1, 2)).unwrap().mark_barrier();
        g.refresh_adjacency();
        let nbrs = g.neighbors(Point::new(1, 1));
        assert!(!nbrs.contains(&Point::new(1, 2)));
        assert_eq!(nbrs.len(), 3);
        // Exclusion is as a target: the barrier cell still lists its own
        // passable neighbors, it just appears in nobody else's list.
        assert_eq!(g.neighbors(Point::new(1, 2)).len(), 3);
        for cell in g.iter() {
            assert!(!cell.neighbors().contains(&Point::new(1, 2)));
        }
    }

    #[test]
    fn adjacency_cache_is_not_auto_invalidated() {
        let mut g = Grid::new(3);
        g.refresh_adjacency();
        g.cell_mut(Point::new(1, 0)).unwrap().mark_barrier();
        // Stale until explicitly refreshed.
        assert!(g.neighbors(Point::new(1, 1)).contains(&Point::new(1, 0)));
        g.refresh_adjacency();
        assert!(!g.neighbors(Point::new(1, 1)).contains(&Point::new(1, 0)));
    }

    #[test]
    fn clear_search_marks_preserves_user_cells() {
        let mut g = Grid::new(3);
        g.cell_mut(Point::new(0, 0)).unwrap().mark_start();
        g.cell_mut(Point::new(2, 2)).unwrap().mark_end();
        g.cell_mut(Point::new(1, 0)).unwrap().mark_barrier();
        g.cell_mut(Point::new(1, 1)).unwrap().mark_open();
        g.cell_mut(Point::new(2, 1)).unwrap().mark_closed();
        g.cell_mut(Point::new(0, 1)).unwrap().mark_path();

        g.clear_search_marks();

        assert_eq!(g.state(Point::new(0, 0)), CellState::Start);
        assert_eq!(g.state(Point::new(2, 2)), CellState::End);
        assert_eq!(g.state(Point::new(1, 0)), CellState::Barrier);
        assert_eq!(g.state(Point::new(1, 1)), CellState::Empty);
        assert_eq!(g.state(Point::new(2, 1)), CellState::Empty);
        assert_eq!(g.state(Point::new(0, 1)), CellState::Empty);
    }

    #[test]
    fn count_state_counts() {
        let mut g = Grid::new(2);
        g.cell_mut(Point::new(0, 0)).unwrap().mark_barrier();
        g.cell_mut(Point::new(1, 1)).unwrap().mark_barrier();
        assert_eq!(g.count_state(CellState::Barrier), 2);
        assert_eq!(g.count_state(CellState::Empty), 2);
    }
}
