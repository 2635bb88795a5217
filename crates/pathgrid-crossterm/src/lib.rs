//! Crossterm terminal front-end for pathgrid.
//!
//! Provides a [`TermRenderer`] implementing [`pathgrid_search::Renderer`]
//! (full-grid repaint as colored blocks) and a [`TermInput`] implementing
//! [`pathgrid_search::InputSource`] (non-blocking quit polling), so a search
//! can animate in a terminal the way the core expects.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathgrid_core::{CellState, Grid};
use pathgrid_search::{InputSource, Renderer, Signal};

/// Terminal columns per grid cell (two columns per cell reads roughly
/// square in most fonts).
pub const CELL_WIDTH: u16 = 2;

/// Maps a cell state to its display color.
///
/// This is the only place display colors exist; the core knows states, not
/// colors. The palette is the classic visualizer one: white board, orange
/// start, turquoise end, black barriers, green frontier, red explored,
/// purple path.
pub fn state_color(state: CellState) -> Color {
    match state {
        CellState::Empty => Color::Rgb {
            r: 255,
            g: 255,
            b: 255,
        },
        CellState::Start => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        CellState::End => Color::Rgb {
            r: 64,
            g: 224,
            b: 208,
        },
        CellState::Barrier => Color::Rgb { r: 0, g: 0, b: 0 },
        CellState::Open => Color::Rgb { r: 0, g: 255, b: 0 },
        CellState::Closed => Color::Rgb { r: 255, g: 0, b: 0 },
        CellState::Path => Color::Rgb {
            r: 128,
            g: 0,
            b: 128,
        },
    }
}

/// Whether an event is a quit request (`q`, Esc or Ctrl+C).
pub fn is_quit(ev: &Event) -> bool {
    match ev {
        Event::Key(KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            ..
        }) => true,
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            ..
        }) => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// TermRenderer
// ---------------------------------------------------------------------------

/// Terminal renderer: owns the terminal lifecycle and repaints the whole
/// grid on every call, with an optional per-frame delay so expansion stays
/// visible at terminal speed.
pub struct TermRenderer {
    frame_delay: Duration,
    initialized: bool,
}

impl TermRenderer {
    pub fn new() -> Self {
        Self {
            frame_delay: Duration::from_millis(4),
            initialized: false,
        }
    }

    /// Configure how long to pause after each repaint.
    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    /// Enter raw mode, switch to the alternate screen, hide the cursor and
    /// enable mouse capture.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        self.initialized = true;
        Ok(())
    }

    /// Restore the terminal. Also runs on drop.
    pub fn close(&mut self) {
        if !self.initialized {
            return;
        }
        self.initialized = false;
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }

    /// Write a one-line status/help row at terminal row `row`.
    pub fn status(&mut self, row: u16, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        queue!(
            stdout,
            ResetColor,
            cursor::MoveTo(0, row),
            terminal::Clear(ClearType::CurrentLine),
            Print(text)
        )?;
        stdout.flush()
    }

    fn paint(&mut self, grid: &Grid) -> io::Result<()> {
        let mut stdout = io::stdout();
        for cell in grid.iter() {
            let p = cell.pos();
            queue!(
                stdout,
                cursor::MoveTo(p.x as u16 * CELL_WIDTH, p.y as u16),
                SetBackgroundColor(state_color(cell.state())),
                SetForegroundColor(Color::Rgb {
                    r: 128,
                    g: 128,
                    b: 128,
                }),
                // A leading bar per cell stands in for the grid lines.
                Print("\u{258f} ")
            )?;
        }
        queue!(stdout, ResetColor)?;
        stdout.flush()
    }
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TermRenderer {
    fn redraw(&mut self, grid: &Grid) {
        if let Err(e) = self.paint(grid) {
            log::warn!("grid repaint failed: {e}");
        }
        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }
    }
}

impl Drop for TermRenderer {
    fn drop(&mut self) {
        self.close();
    }
}

// ---------------------------------------------------------------------------
// TermInput
// ---------------------------------------------------------------------------

/// Non-blocking input poll for a running search.
///
/// Drains every pending terminal event; only quit requests matter mid-run,
/// everything else is discarded (clicks during a run do not queue up edits).
#[derive(Default)]
pub struct TermInput;

impl TermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TermInput {
    fn poll(&mut self) -> Signal {
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => return Signal::None,
                Err(e) => {
                    log::warn!("input poll failed: {e}");
                    return Signal::None;
                }
            }
            match event::read() {
                Ok(ev) if is_quit(&ev) => return Signal::QuitRequested,
                Ok(_) => {}
                Err(e) => {
                    log::warn!("input read failed: {e}");
                    return Signal::None;
                }
            }
        }
    }
}
