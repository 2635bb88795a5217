use pathgrid_core::Grid;

/// Display collaborator invoked by the search after each visible change.
///
/// The contract is a synchronous full repaint: by the time `redraw` returns,
/// the screen reflects the current cell states of `grid`.
pub trait Renderer {
    fn redraw(&mut self, grid: &Grid);
}

/// Closures work as renderers, like the draw callback they replace.
impl<F: FnMut(&Grid)> Renderer for F {
    fn redraw(&mut self, grid: &Grid) {
        self(grid)
    }
}

/// Result of a non-blocking input poll.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Signal {
    /// Nothing of interest pending.
    #[default]
    None,
    /// The user asked to abort; the search must stop promptly.
    QuitRequested,
}

/// Input collaborator polled once per open-set pop.
///
/// Implementations must not block: a poll with nothing pending returns
/// [`Signal::None`] immediately.
pub trait InputSource {
    fn poll(&mut self) -> Signal;
}

impl<F: FnMut() -> Signal> InputSource for F {
    fn poll(&mut self) -> Signal {
        self()
    }
}
