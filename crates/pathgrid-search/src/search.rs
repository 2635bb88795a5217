//! The search engine: one best-first loop covering A* and Dijkstra.

use pathgrid_core::{Cell, Grid, Point};

use crate::distance::manhattan;
use crate::state::SearchState;
use crate::traits::{InputSource, Renderer, Signal};

/// Which priority function drives the search.
///
/// Both kinds share the same loop; Dijkstra is A* with a zero heuristic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchKind {
    AStar,
    Dijkstra,
}

impl SearchKind {
    /// Open-set priority of a cell reached at `cost`. The pushed value is
    /// always this scalar, never an intermediate score map.
    #[inline]
    fn priority(self, cost: i32, pos: Point, goal: Point) -> i32 {
        match self {
            SearchKind::AStar => cost + manhattan(pos, goal),
            SearchKind::Dijkstra => cost,
        }
    }
}

/// Terminal outcome of a run. All three are normal results, not errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The end cell was reached and the path drawn back.
    Succeeded,
    /// The open set drained without reaching the end: no path exists.
    Exhausted,
    /// The input source requested a quit mid-run.
    Aborted,
}

/// Rejected search configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("start and end must be distinct cells (both at ({x}, {y}))")]
    StartEqualsEnd { x: i32, y: i32 },
    #[error("{role} position ({x}, {y}) is outside the {rows}x{rows} grid")]
    OutsideGrid {
        role: &'static str,
        x: i32,
        y: i32,
        rows: i32,
    },
}

/// A single search run over a grid.
///
/// Construction validates the configuration; [`run`](Search::run) consumes
/// the search and drives it to an [`Outcome`], marking cells Open/Closed/
/// Path as it goes and yielding to the renderer after every visible change.
#[derive(Debug)]
pub struct Search<'g> {
    kind: SearchKind,
    grid: &'g mut Grid,
    start: Point,
    end: Point,
}

impl<'g> Search<'g> {
    /// Bind a search to a grid and endpoints.
    ///
    /// The caller must have called [`Grid::refresh_adjacency`] since the last
    /// barrier edit; a stale or never-built cache is not detected here and
    /// simply exhausts against whatever neighbors are cached.
    pub fn new(
        kind: SearchKind,
        grid: &'g mut Grid,
        start: Point,
        end: Point,
    ) -> Result<Self, ConfigError> {
        for (role, p) in [("start", start), ("end", end)] {
            if !grid.contains(p) {
                return Err(ConfigError::OutsideGrid {
                    role,
                    x: p.x,
                    y: p.y,
                    rows: grid.rows(),
                });
            }
        }
        if start == end {
            return Err(ConfigError::StartEqualsEnd {
                x: start.x,
                y: start.y,
            });
        }
        Ok(Self {
            kind,
            grid,
            start,
            end,
        })
    }

    /// Drive the search to completion, exhaustion or abort.
    ///
    /// `input` is polled once per expansion; `renderer` is invoked after each
    /// open-set insertion and after each path-reconstruction step.
    pub fn run<R, I>(mut self, renderer: &mut R, input: &mut I) -> Outcome
    where
        R: Renderer,
        I: InputSource,
    {
        log::debug!("{:?} search from {} to {}", self.kind, self.start, self.end);
        let mut state = SearchState::new(self.start);
        let mut nbuf: Vec<Point> = Vec::with_capacity(4);

        while let Some(current) = state.pop() {
            if input.poll() == Signal::QuitRequested {
                log::debug!("search aborted by quit signal");
                return Outcome::Aborted;
            }

            if current == self.end {
                self.reconstruct(&state, renderer);
                self.mark(self.end, Cell::mark_end);
                log::debug!("path found at cost {}", state.cost(self.end));
                return Outcome::Succeeded;
            }

            let current_cost = state.cost(current);
            nbuf.clear();
            nbuf.extend_from_slice(self.grid.neighbors(current));

            for &np in &nbuf {
                // Unit edge weight: only uniform-cost grids are supported.
                let tentative = current_cost + 1;
                if tentative < state.cost(np) {
                    state.relax(np, current, tentative);
                    if state.push(np, self.kind.priority(tentative, np, self.end)) {
                        self.mark(np, Cell::mark_open);
                        renderer.redraw(self.grid);
                    }
                }
            }

            if current != self.start {
                self.mark(current, Cell::mark_closed);
            }
        }

        log::debug!("open set exhausted, no path");
        Outcome::Exhausted
    }

    /// Walk the predecessor chain from the end back to the start, marking
    /// intermediate cells Path one frame at a time. The end keeps its End
    /// mark (re-applied by the caller) and the start stays Start. Terminates
    /// because the predecessor map is a tree rooted at the start.
    fn reconstruct<R: Renderer>(&mut self, state: &SearchState, renderer: &mut R) {
        let mut current = self.end;
        while let Some(prev) = state.predecessor(current) {
            current = prev;
            if current == self.start {
                break;
            }
            self.mark(current, Cell::mark_path);
            renderer.redraw(self.grid);
        }
    }

    /// Apply a state transition at `p`; out-of-bounds positions are ignored
    /// (they cannot occur for points taken from neighbor lists).
    fn mark(&mut self, p: Point, transition: fn(&mut Cell)) {
        if let Ok(cell) = self.grid.cell_mut(p) {
            transition(cell);
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        for outcome in [Outcome::Succeeded, Outcome::Exhausted, Outcome::Aborted] {
            let json = serde_json::to_string(&outcome).unwrap();
            let back: Outcome = serde_json::from_str(&json).unwrap();
            assert_eq!(outcome, back);
        }
    }

    #[test]
    fn search_kind_round_trip() {
        for kind in [SearchKind::AStar, SearchKind::Dijkstra] {
            let json = serde_json::to_string(&kind).unwrap();
            let back: SearchKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }
}
