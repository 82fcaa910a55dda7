//! Festival browser feature - the card grid.
//!
//! This module contains the cursor and scroll state of the grid and the card
//! summaries it displays.

pub mod card;
pub mod ui;

pub use card::{render_plain, FestivalCard};

/// Grid cursor and scroll state.
#[derive(Debug)]
pub struct BrowserState {
    /// Index of the card under the cursor.
    cursor: usize,
    /// First visible grid row.
    scroll_row: usize,
    /// Columns used by the last draw.
    columns: usize,
}

impl BrowserState {
    /// Create a new browser state.
    pub fn new() -> Self {
        Self {
            cursor: 0,
            scroll_row: 0,
            columns: 1,
        }
    }

    /// Get the current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the first visible row.
    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    /// Set the number of columns (at least one).
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    /// Move the cursor one card left.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one card right.
    pub fn cursor_right(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Move the cursor one row up.
    pub fn cursor_up(&mut self) {
        if self.cursor >= self.columns {
            self.cursor -= self.columns;
        }
    }

    /// Move the cursor one row down, stopping at the last card.
    pub fn cursor_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + self.columns).min(len - 1);
    }

    /// Go to the first card.
    pub fn goto_first(&mut self) {
        self.cursor = 0;
        self.scroll_row = 0;
    }

    /// Go to the last card.
    pub fn goto_last(&mut self, len: usize) {
        self.cursor = len.saturating_sub(1);
    }

    /// Keep the cursor inside a list of `len` cards.
    pub fn clamp(&mut self, len: usize) {
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    /// Adjust scroll to keep the cursor row visible.
    pub fn adjust_scroll(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }

        let row = self.cursor / self.columns;

        if row < self.scroll_row {
            self.scroll_row = row;
        }

        if row >= self.scroll_row + visible_rows {
            self.scroll_row = row.saturating_sub(visible_rows - 1);
        }
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}
