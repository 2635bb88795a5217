//! The interactive editing loop: mouse painting and keyboard commands.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use pathgrid_core::{Grid, Point};
use pathgrid_crossterm::{CELL_WIDTH, TermInput, TermRenderer, is_quit};
use pathgrid_search::{Outcome, Renderer, Search, SearchKind};

/// Board side length. 26 cells at two columns each fit an 80-column
/// terminal with a status row to spare.
pub const ROWS: i32 = 26;

const HELP: &str =
    "left: paint   right: erase   [a] A*   [space] Dijkstra   [c] clear   [r] reset   [q] quit";

pub struct App {
    grid: Grid,
    start: Option<Point>,
    end: Option<Point>,
    renderer: TermRenderer,
    input: TermInput,
}

impl App {
    pub fn new(rows: i32) -> Self {
        Self {
            grid: Grid::new(rows),
            start: None,
            end: None,
            renderer: TermRenderer::new(),
            input: TermInput::new(),
        }
    }

    /// Run the editing loop until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        self.renderer.init()?;
        self.renderer.redraw(&self.grid);
        self.renderer.status(self.grid.rows() as u16, HELP)?;

        loop {
            match event::read()? {
                ev if is_quit(&ev) => break,
                Event::Key(key) => {
                    if self.handle_key(key)? {
                        break;
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }

        self.renderer.close();
        Ok(())
    }

    /// Returns `true` when the app should exit.
    fn handle_key(&mut self, key: KeyEvent) -> io::Result<bool> {
        match key.code {
            KeyCode::Char('a') => return self.run_search(SearchKind::AStar),
            KeyCode::Char(' ') => return self.run_search(SearchKind::Dijkstra),
            KeyCode::Char('c') => {
                self.grid = Grid::new(self.grid.rows());
                self.start = None;
                self.end = None;
                self.renderer.redraw(&self.grid);
                self.renderer.status(self.grid.rows() as u16, HELP)?;
            }
            KeyCode::Char('r') => {
                self.grid.clear_search_marks();
                self.renderer.redraw(&self.grid);
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let p = Point::new((mouse.column / CELL_WIDTH) as i32, mouse.row as i32);
        if !self.grid.contains(p) {
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                self.paint(p);
                self.renderer.redraw(&self.grid);
            }
            MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => {
                self.erase(p);
                self.renderer.redraw(&self.grid);
            }
            _ => {}
        }
    }

    /// First paint places the start, the second the end; everything after
    /// that is a barrier. Start and end cells refuse repainting.
    fn paint(&mut self, p: Point) {
        let Ok(cell) = self.grid.cell_mut(p) else {
            return;
        };
        if self.start.is_none() && self.end != Some(p) {
            cell.mark_start();
            self.start = Some(p);
        } else if self.end.is_none() && self.start != Some(p) {
            cell.mark_end();
            self.end = Some(p);
        } else if self.start != Some(p) && self.end != Some(p) {
            cell.mark_barrier();
        }
    }

    fn erase(&mut self, p: Point) {
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
        if let Ok(cell) = self.grid.cell_mut(p) {
            cell.reset();
        }
    }

    /// Refresh adjacency and drive a search; returns `true` when the run was
    /// aborted by a quit request (which shuts the whole app down).
    fn run_search(&mut self, kind: SearchKind) -> io::Result<bool> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            self.renderer
                .status(self.grid.rows() as u16, "set a start and an end first")?;
            return Ok(false);
        };

        self.grid.refresh_adjacency();
        let outcome = match Search::new(kind, &mut self.grid, start, end) {
            Ok(search) => search.run(&mut self.renderer, &mut self.input),
            Err(e) => {
                self.renderer.status(self.grid.rows() as u16, &e.to_string())?;
                return Ok(false);
            }
        };

        self.renderer.redraw(&self.grid);
        let label = match outcome {
            Outcome::Succeeded => "path found, press r to reset the marks",
            Outcome::Exhausted => "no path exists",
            Outcome::Aborted => "aborted",
        };
        self.renderer.status(self.grid.rows() as u16, label)?;
        Ok(outcome == Outcome::Aborted)
    }
}
