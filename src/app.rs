//! Application state and logic.

use std::sync::Arc;

use crate::browser::{BrowserState, FestivalCard};
use crate::data::{Festival, FestivalLoader, FetchState};
use crate::dates::DateFormatter;
use crate::detail::DetailState;
use crate::error::Result;
use crate::i18n::{self, BuiltinCatalog, Catalog, Locale, MessageKey};
use crate::navigation::{FestivalFilter, SearchState};
use crate::util::{self, LayoutConfig};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Description of the festival source.
    pub source_label: String,
    /// Fetch state of the festival list.
    pub fetch: FetchState,
    /// Pending background fetch.
    loader: Option<FestivalLoader>,
    /// Search state.
    pub search: SearchState,
    /// Memoized filter over the loaded festivals.
    pub filter: FestivalFilter,
    /// Grid cursor state.
    pub browser: BrowserState,
    /// Detail overlay state.
    pub detail: DetailState,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Display language.
    pub locale: Locale,
    /// Message catalog.
    pub catalog: BuiltinCatalog,
    /// Layout configuration.
    pub layout: LayoutConfig,
}

impl App {
    /// Create a new application instance waiting for festival data.
    pub fn new(source_label: impl Into<String>, locale: Locale) -> Self {
        let source_label = source_label.into();
        let catalog = BuiltinCatalog::new();
        Self {
            status: i18n::fill(
                catalog.message(locale, MessageKey::StatusLoading),
                &[("source", &source_label)],
            ),
            source_label,
            fetch: FetchState::Loading,
            loader: None,
            search: SearchState::new(),
            filter: FestivalFilter::new(),
            browser: BrowserState::new(),
            detail: DetailState::new(),
            theme: Theme::GruvboxDark,
            locale,
            catalog,
            layout: LayoutConfig::default(),
        }
    }

    /// Wait for festivals from a background loader.
    pub fn with_loader(mut self, loader: FestivalLoader) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Pick up the loader result if it has arrived.
    pub fn poll_loader(&mut self) {
        let Some(result) = self.loader.as_ref().and_then(FestivalLoader::try_finish) else {
            return;
        };
        self.loader = None;
        self.finish_loading(result);
    }

    /// Apply the outcome of the fetch.
    pub fn finish_loading(&mut self, result: Result<Vec<Festival>>) {
        if !self.fetch.is_loading() {
            return;
        }

        match &result {
            Ok(festivals) => {
                self.status = self.fill(
                    MessageKey::StatusLoaded,
                    &[("count", &festivals.len()), ("source", &self.source_label)],
                );
                tracing::info!("Loaded {} festivals", festivals.len());
            },
            Err(e) => {
                self.status =
                    self.fill(MessageKey::StatusLoadFailed, &[("source", &self.source_label)]);
                tracing::error!("Error loading festivals: {}", e);
            },
        }

        self.fetch = FetchState::from_result(result);
        self.refresh_filter();
    }

    /// Loaded festivals, if any.
    pub fn festivals(&self) -> Option<&Arc<[Festival]>> {
        self.fetch.festivals()
    }

    /// Recompute the filtered view when the list or the query changed.
    pub fn refresh_filter(&mut self) {
        let len = self
            .filter
            .apply(self.fetch.festivals(), self.search.query())
            .len();
        self.browser.clamp(len);
    }

    /// Festivals passing the current query, in list order.
    pub fn visible_festivals(&self) -> Vec<&Festival> {
        let Some(festivals) = self.festivals() else {
            return Vec::new();
        };
        self.filter
            .indices()
            .iter()
            .filter_map(|&idx| festivals.get(idx))
            .collect()
    }

    /// Number of festivals passing the current query.
    pub fn visible_count(&self) -> usize {
        self.filter.indices().len()
    }

    /// The festival under the grid cursor.
    pub fn current_festival(&self) -> Option<&Festival> {
        let idx = *self.filter.indices().get(self.browser.cursor())?;
        self.festivals()?.get(idx)
    }

    /// Date formatter for the active locale.
    pub fn formatter(&self) -> DateFormatter<'_> {
        DateFormatter::new(self.locale, &self.catalog)
    }

    /// Localized text for `key`.
    pub fn text(&self, key: MessageKey) -> &str {
        self.catalog.message(self.locale, key)
    }

    /// Localized text for `key` with its placeholders filled in.
    pub fn fill(&self, key: MessageKey, args: &[(&str, &dyn std::fmt::Display)]) -> String {
        i18n::fill(self.text(key), args)
    }

    /// Search summary for the status bar.
    pub fn match_summary(&self) -> String {
        self.fill(
            MessageKey::MatchCount,
            &[("count", &self.visible_count()), ("query", &self.search.query().trim())],
        )
    }

    /// Show the key help in the status line.
    pub fn show_help(&mut self) {
        self.status = self.text(MessageKey::HelpHint).to_string();
    }

    /// Card summaries of the visible festivals.
    pub fn visible_cards(&self) -> Vec<FestivalCard> {
        let formatter = self.formatter();
        self.visible_festivals()
            .into_iter()
            .map(|festival| FestivalCard::new(festival, &formatter))
            .collect()
    }

    /// Open the search prompt.
    pub fn start_search(&mut self) {
        self.search.start();
    }

    /// Type a character into the search prompt.
    pub fn search_input(&mut self, c: char) {
        self.search.input(c);
        self.refresh_filter();
    }

    /// Delete the last character of the query.
    pub fn search_backspace(&mut self) {
        self.search.backspace();
        self.refresh_filter();
    }

    /// Leave the prompt keeping the query.
    pub fn submit_search(&mut self) {
        self.search.submit();
    }

    /// Leave the prompt and show every festival again.
    pub fn clear_search(&mut self) {
        self.search.cancel();
        self.refresh_filter();
    }

    /// Open the detail overlay for the festival under the cursor.
    pub fn open_selected(&mut self) {
        match self.current_festival().cloned() {
            Some(festival) => {
                self.status = festival.display_name().to_string();
                self.detail.open(festival);
            },
            None => {
                self.status = self.text(MessageKey::NoSelection).to_string();
            },
        }
    }

    /// Close the detail overlay.
    pub fn close_detail(&mut self) {
        self.detail.close();
    }

    /// Scroll the detail overlay down.
    pub fn scroll_detail_down(&mut self) {
        self.detail.scroll_down(self.layout.detail.scroll_step);
    }

    /// Scroll the detail overlay up.
    pub fn scroll_detail_up(&mut self) {
        self.detail.scroll_up(self.layout.detail.scroll_step);
    }

    /// Copy the website link of the shown or highlighted festival.
    pub fn copy_link(&mut self) {
        let festival = if self.detail.is_visible() {
            self.detail.selected()
        } else {
            self.current_festival()
        };

        let Some(festival) = festival else {
            self.status = self.text(MessageKey::NoSelection).to_string();
            return;
        };

        self.status = match util::copy_festival_link(festival) {
            Ok(link) => self.fill(MessageKey::Copied, &[("link", &link)]),
            Err(e) => self.fill(MessageKey::CopyFailed, &[("error", &e)]),
        };
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = self.fill(MessageKey::ThemeChanged, &[("theme", &self.theme.name())]);
    }

    /// Switch to the next display language.
    pub fn cycle_locale(&mut self) {
        self.locale = self.locale.next();
        self.status = self.fill(MessageKey::LanguageChanged, &[("language", &self.locale.name())]);
    }

    /// Move the grid cursor left.
    pub fn cursor_left(&mut self) {
        self.browser.cursor_left();
    }

    /// Move the grid cursor right.
    pub fn cursor_right(&mut self) {
        self.browser.cursor_right(self.visible_count());
    }

    /// Move the grid cursor up one row.
    pub fn cursor_up(&mut self) {
        self.browser.cursor_up();
    }

    /// Move the grid cursor down one row.
    pub fn cursor_down(&mut self) {
        self.browser.cursor_down(self.visible_count());
    }

    /// Jump to the first card.
    pub fn goto_first(&mut self) {
        self.browser.goto_first();
    }

    /// Jump to the last card.
    pub fn goto_last(&mut self) {
        self.browser.goto_last(self.visible_count());
    }
}
