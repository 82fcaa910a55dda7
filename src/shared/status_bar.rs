//! Status bar UI component.

use crate::navigation::SearchState;
use crate::shared::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    search: &SearchState,
    match_summary: &str,
    colors: &ThemeColors,
) {
    let text = if search.is_active() {
        format!("/{}", search.query())
    } else if search.has_query() {
        match_summary.to_string()
    } else {
        status.to_string()
    };

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
