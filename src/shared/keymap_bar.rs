//! Keymap help bar UI component.

use crate::shared::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub fn draw_keymap(
    f: &mut Frame<'_>,
    area: Rect,
    detail_visible: bool,
    search_active: bool,
    colors: &ThemeColors,
) {
    let keymap_text = keymap_text(detail_visible, search_active);

    let paragraph = Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}

/// Key hints for the current mode.
pub fn keymap_text(detail_visible: bool, search_active: bool) -> &'static str {
    if detail_visible {
        "jk:scroll | y:copy link | q/Esc/Enter:close"
    } else if search_active {
        "Enter:done | Esc:clear | Type to filter"
    } else {
        "q:quit | hjkl:nav | Enter:details | /:search | Esc:clear | y:copy link | L:language | T:theme | ?:help"
    }
}
