//! pathview — paint a grid, run A* or Dijkstra, watch the search unfold.

mod app;

use app::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(app::ROWS);
    app.run()?;
    Ok(())
}
