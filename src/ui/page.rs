//! Page layout: header, search prompt, festival grid and bars.

use crate::app::App;
use crate::browser::ui::{draw_festival_grid, GridLabels};
use crate::detail::ui::draw_detail;
use crate::i18n::{Catalog, MessageKey};
use crate::shared::{draw_keymap, draw_status, ThemeColors};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the festival page.
pub(super) fn draw_page(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Header, search prompt, content, status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, app, chunks[0], &colors);
    draw_search(f, app, chunks[1], &colors);

    if app.fetch.is_loading() {
        draw_message(f, chunks[2], app.text(MessageKey::Loading), colors.text, &colors);
    } else if app.fetch.error().is_some() {
        draw_message(f, chunks[2], app.text(MessageKey::LoadError), colors.error, &colors);
    } else {
        app.refresh_filter();
        let cards = app.visible_cards();
        let labels = GridLabels {
            empty: app.catalog.message(app.locale, MessageKey::NoFestivals),
            image: app.catalog.message(app.locale, MessageKey::Image),
        };
        draw_festival_grid(
            f,
            chunks[2],
            &cards,
            &mut app.browser,
            &app.layout.grid,
            labels,
            &colors,
        );
    }

    let summary = app.match_summary();
    draw_status(f, chunks[3], &app.status, &app.search, &summary, &colors);
    draw_keymap(
        f,
        chunks[4],
        app.detail.is_visible(),
        app.search.is_active(),
        &colors,
    );

    // Overlay
    let formatter = app.formatter();
    draw_detail(
        f,
        &app.detail,
        &formatter,
        &app.catalog,
        &app.layout.detail,
        &colors,
    );
}

fn draw_header(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let lines = vec![
        Line::from(Span::styled(
            app.text(MessageKey::Headline).to_string(),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.text(MessageKey::Greeting).to_string(),
            Style::default().fg(colors.text),
        )),
    ];

    let paragraph = Paragraph::new(lines).style(Style::default().bg(colors.bg));
    f.render_widget(paragraph, area);
}

fn draw_search(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let query = app.search.query();
    let line = if query.is_empty() && !app.search.is_active() {
        Line::from(Span::styled(
            app.text(MessageKey::SearchPlaceholder).to_string(),
            Style::default().fg(colors.dimmed),
        ))
    } else {
        let mut spans = vec![Span::styled(query.to_string(), Style::default().fg(colors.text))];
        if app.search.is_active() {
            spans.push(Span::styled("█", Style::default().fg(colors.prompt)));
        }
        Line::from(spans)
    };

    let border = if app.search.is_active() {
        colors.prompt
    } else {
        colors.border
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(" / ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg)),
    );
    f.render_widget(paragraph, area);
}

fn draw_message(
    f: &mut Frame<'_>,
    area: Rect,
    message: &str,
    color: Color,
    colors: &ThemeColors,
) {
    let paragraph = Paragraph::new(message.to_string())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
