//! Detail overlay - pure rendering layer.

use super::DetailState;
use crate::data::Festival;
use crate::dates::DateFormatter;
use crate::i18n::{Catalog, MessageKey};
use crate::shared::{centered_rect, ThemeColors};
use crate::util::DetailLayoutConfig;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Draw the detail overlay.
pub fn draw_detail(
    f: &mut Frame<'_>,
    state: &DetailState,
    formatter: &DateFormatter<'_>,
    catalog: &dyn Catalog,
    layout: &DetailLayoutConfig,
    colors: &ThemeColors,
) {
    if !state.is_visible() {
        return;
    }
    let Some(festival) = state.selected() else {
        return;
    };

    let area = centered_rect(layout.width_percent, layout.height_percent, f.area());
    draw_festival(f, area, festival, state.scroll, formatter, catalog, colors);
}

fn draw_festival(
    f: &mut Frame<'_>,
    area: Rect,
    festival: &Festival,
    scroll: u16,
    formatter: &DateFormatter<'_>,
    catalog: &dyn Catalog,
    colors: &ThemeColors,
) {
    // Clear the background
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", festival.display_name()),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.cursor_border))
        .style(Style::default().bg(colors.bg));

    let paragraph = Paragraph::new(detail_lines(festival, formatter, catalog, colors))
        .block(block)
        .style(Style::default().fg(colors.text))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    f.render_widget(paragraph, area);
}

/// Body lines of the overlay for `festival`.
pub fn detail_lines(
    festival: &Festival,
    formatter: &DateFormatter<'_>,
    catalog: &dyn Catalog,
    colors: &ThemeColors,
) -> Vec<Line<'static>> {
    let locale = formatter.locale();
    let mut lines = vec![];

    if let Some(image) = non_empty(festival.image.as_deref()) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", catalog.message(locale, MessageKey::Image)),
                Style::default().fg(colors.label),
            ),
            Span::styled(image.to_string(), Style::default().fg(colors.value)),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        formatter.format_date_range(festival.start.as_deref(), festival.end.as_deref()),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(festival.location_label()));

    if let Some(info) = non_empty(festival.info.as_deref()) {
        lines.push(divider(colors));
        lines.push(Line::from(info.to_string()));
    }

    if festival.has_artists() {
        lines.push(divider(colors));
        lines.push(Line::from(Span::styled(
            catalog.message(locale, MessageKey::Artists).to_string(),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )));
        for artist in festival.artists.iter().flatten() {
            lines.push(Line::from(format!(
                "  • {}",
                artist.name.as_deref().unwrap_or("")
            )));
        }
    }

    if let Some(link) = non_empty(festival.link.as_deref()) {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", catalog.message(locale, MessageKey::Website)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(link.to_string(), Style::default().fg(colors.value)),
        ]));
    }

    lines
}

fn divider(colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled("─".repeat(40), Style::default().fg(colors.border)))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
