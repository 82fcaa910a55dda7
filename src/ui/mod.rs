//! User interface rendering.

mod page;

use crate::app::App;
use ratatui::Frame;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    page::draw_page(f, app);
}
