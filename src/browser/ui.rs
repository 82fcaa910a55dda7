//! Festival grid UI rendering.

use super::{BrowserState, FestivalCard};
use crate::shared::ThemeColors;
use crate::util::GridLayoutConfig;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Text pieces of the grid that depend on the locale.
#[derive(Debug, Clone, Copy)]
pub struct GridLabels<'a> {
    /// Shown instead of cards when the list is empty.
    pub empty: &'a str,
    /// Prefix of the image line.
    pub image: &'a str,
}

/// Draw the festival card grid.
pub fn draw_festival_grid(
    f: &mut Frame<'_>,
    area: Rect,
    cards: &[FestivalCard],
    state: &mut BrowserState,
    grid: &GridLayoutConfig,
    labels: GridLabels<'_>,
    colors: &ThemeColors,
) {
    let container = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = container.inner(area);
    f.render_widget(container, area);

    if cards.is_empty() {
        let paragraph = Paragraph::new(labels.empty).style(Style::default().fg(colors.text));
        f.render_widget(paragraph, inner);
        return;
    }

    let columns = grid.columns_for(area.width);
    state.set_columns(columns);
    state.clamp(cards.len());

    let card_height = grid.card_height.max(3);
    let visible_rows = usize::from(inner.height / card_height).max(1);
    state.adjust_scroll(visible_rows);

    let row_constraints = vec![Constraint::Length(card_height); visible_rows];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(inner);

    let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];

    for (visible_row, row_area) in rows.iter().enumerate() {
        let first = (state.scroll_row() + visible_row) * columns;
        if first >= cards.len() {
            break;
        }

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints.clone())
            .split(*row_area);

        for (column, cell) in cells.iter().enumerate() {
            let idx = first + column;
            let Some(card) = cards.get(idx) else {
                break;
            };
            draw_card(f, *cell, card, idx == state.cursor(), labels, colors);
        }
    }
}

fn draw_card(
    f: &mut Frame<'_>,
    area: Rect,
    card: &FestivalCard,
    selected: bool,
    labels: GridLabels<'_>,
    colors: &ThemeColors,
) {
    let border = if selected {
        colors.cursor_border
    } else {
        colors.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors.bg));
    let width = usize::from(block.inner(area).width);

    let mut name_style = Style::default()
        .fg(colors.heading)
        .add_modifier(Modifier::BOLD);
    if selected {
        name_style = name_style.add_modifier(Modifier::REVERSED);
    }

    let mut lines = vec![
        Line::from(Span::styled(truncate_to_width(&card.name, width), name_style)),
        Line::from(Span::styled(
            truncate_to_width(&card.dates, width),
            Style::default().fg(colors.dimmed),
        )),
        Line::from(Span::styled(
            truncate_to_width(&card.location, width),
            Style::default().fg(colors.dimmed),
        )),
    ];

    if let Some(image) = &card.image {
        let text = format!("{} {}", labels.image, image);
        lines.push(Line::from(Span::styled(
            truncate_to_width(&text, width),
            Style::default().fg(colors.label),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Cut `text` to at most `width` display columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    const LABELS: GridLabels<'static> = GridLabels {
        empty: "No festivals found",
        image: "Image:",
    };

    fn card(name: &str, location: &str) -> FestivalCard {
        FestivalCard {
            name: name.to_string(),
            dates: "Mar 15 - Mar 20, 2023".to_string(),
            location: location.to_string(),
            image: None,
        }
    }

    fn render(cards: &[FestivalCard], width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut state = BrowserState::new();
        let colors = ThemeColors::from_theme(&Theme::GruvboxDark);
        let grid = GridLayoutConfig::default();
        terminal
            .draw(|f| {
                let area = f.area();
                draw_festival_grid(f, area, cards, &mut state, &grid, LABELS, &colors)
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn empty_list_shows_placeholder_only() {
        let text = render(&[], 100, 20);

        assert_eq!(text.matches("No festivals found").count(), 1);
        assert!(!text.contains("Mar 15"));
    }

    #[test]
    fn renders_each_card_once() {
        let cards = [
            card("Metal Festival 2023", "Berlin, Germany"),
            card("Rock Fest", "Munich, Germany"),
        ];

        let text = render(&cards, 100, 20);

        assert_eq!(text.matches("Metal Festival 2023").count(), 1);
        assert_eq!(text.matches("Rock Fest").count(), 1);
        assert_eq!(text.matches("Berlin, Germany").count(), 1);
        assert_eq!(text.matches("Munich, Germany").count(), 1);
        assert!(!text.contains("No festivals found"));
    }

    #[test]
    fn image_line_only_when_present() {
        let mut with_image = card("Rock Fest", "Munich, Germany");
        with_image.image = Some("rock.jpg".to_string());

        let text = render(&[with_image, card("Jazz Nights", ", Switzerland")], 60, 20);

        assert_eq!(text.matches("Image: rock.jpg").count(), 1);
        assert_eq!(text.matches("Image:").count(), 1);
        assert!(text.contains(", Switzerland"));
    }

    #[test]
    fn truncates_by_display_width() {
        assert_eq!(truncate_to_width("Rock Fest", 20), "Rock Fest");
        assert_eq!(truncate_to_width("Rock Fest", 5), "Rock…");
        assert_eq!(truncate_to_width("Rock Fest", 0), "");
    }
}
