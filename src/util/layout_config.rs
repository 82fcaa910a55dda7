//! Layout configuration constants for the festival grid and detail overlay.

/// Configuration for the festival card grid.
#[derive(Debug, Clone)]
pub struct GridLayoutConfig {
    /// Height of a card including its borders.
    pub card_height: u16,
    /// Minimum terminal width for two columns.
    pub two_column_width: u16,
    /// Minimum terminal width for three columns.
    pub three_column_width: u16,
}

impl Default for GridLayoutConfig {
    fn default() -> Self {
        Self {
            card_height: 6,          // border + name, dates, location, image + border
            two_column_width: 80,
            three_column_width: 130,
        }
    }
}

impl GridLayoutConfig {
    /// Number of card columns that fit into `width`.
    pub fn columns_for(&self, width: u16) -> usize {
        if width >= self.three_column_width {
            3
        } else if width >= self.two_column_width {
            2
        } else {
            1
        }
    }
}

/// Configuration for the detail overlay.
#[derive(Debug, Clone)]
pub struct DetailLayoutConfig {
    /// Overlay width as a percentage of the screen.
    pub width_percent: u16,
    /// Overlay height as a percentage of the screen.
    pub height_percent: u16,
    /// Lines moved per scroll step.
    pub scroll_step: u16,
}

impl Default for DetailLayoutConfig {
    fn default() -> Self {
        Self {
            width_percent: 70,
            height_percent: 80,
            scroll_step: 3,
        }
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Configuration for the card grid.
    pub grid: GridLayoutConfig,
    /// Configuration for the detail overlay.
    pub detail: DetailLayoutConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_breakpoints() {
        let grid = GridLayoutConfig::default();
        assert_eq!(grid.columns_for(40), 1);
        assert_eq!(grid.columns_for(79), 1);
        assert_eq!(grid.columns_for(80), 2);
        assert_eq!(grid.columns_for(129), 2);
        assert_eq!(grid.columns_for(200), 3);
    }
}
