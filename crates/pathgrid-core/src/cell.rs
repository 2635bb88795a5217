//! The [`Cell`] type — a single grid position with a [`CellState`] tag.

use crate::geom::Point;

/// The role a cell currently plays on the board.
///
/// User actions paint `Start`, `End` and `Barrier`; a running search paints
/// `Open`, `Closed` and `Path`. Display color is a front-end concern and is
/// derived from this tag, never stored here.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Start,
    End,
    Barrier,
    /// Discovered by the search but not yet finalized.
    Open,
    /// Finalized: all neighbors relaxed.
    Closed,
    /// On the reconstructed path.
    Path,
}

/// A single cell of the grid.
///
/// The `neighbors` list is a derived cache of adjacent passable positions.
/// It is recomputed only by [`Grid::refresh_adjacency`](crate::Grid::refresh_adjacency)
/// and is NOT invalidated when barriers change afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    state: CellState,
    pub(crate) neighbors: Vec<Point>,
}

impl Cell {
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            state: CellState::Empty,
            neighbors: Vec::new(),
        }
    }

    /// Grid position of this cell.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Current state tag.
    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Cached adjacent passable positions, in down/up/right/left order.
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }

    // -----------------------------------------------------------------------
    // State transitions
    //
    // Each setter unconditionally overwrites the state. No transition
    // validation happens at this layer: keeping at most one Start/End on the
    // board is the caller's job.
    // -----------------------------------------------------------------------

    #[inline]
    pub fn reset(&mut self) {
        self.state = CellState::Empty;
    }

    #[inline]
    pub fn mark_start(&mut self) {
        self.state = CellState::Start;
    }

    #[inline]
    pub fn mark_end(&mut self) {
        self.state = CellState::End;
    }

    #[inline]
    pub fn mark_barrier(&mut self) {
        self.state = CellState::Barrier;
    }

    #[inline]
    pub fn mark_open(&mut self) {
        self.state = CellState::Open;
    }

    #[inline]
    pub fn mark_closed(&mut self) {
        self.state = CellState::Closed;
    }

    #[inline]
    pub fn mark_path(&mut self) {
        self.state = CellState::Path;
    }

    // -----------------------------------------------------------------------
    // Predicates
    // -----------------------------------------------------------------------

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.state == CellState::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.state == CellState::End
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == CellState::Open
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.state == CellState::Closed
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        self.state == CellState::Path
    }
}
