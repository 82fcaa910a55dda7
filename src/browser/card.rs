//! Card summaries shown in the grid and in plain-text output.

use crate::data::Festival;
use crate::dates::DateFormatter;
use crate::i18n::{Catalog, MessageKey};

/// Display data of one festival card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FestivalCard {
    /// Festival name.
    pub name: String,
    /// Formatted date range.
    pub dates: String,
    /// "City, Country".
    pub location: String,
    /// Image reference, when the festival has one.
    pub image: Option<String>,
}

impl FestivalCard {
    /// Summarize `festival` for display.
    pub fn new(festival: &Festival, formatter: &DateFormatter<'_>) -> Self {
        Self {
            name: festival.display_name().to_string(),
            dates: formatter
                .format_date_range(festival.start.as_deref(), festival.end.as_deref()),
            location: festival.location_label(),
            image: festival.image.clone().filter(|image| !image.is_empty()),
        }
    }
}

/// Render festivals as plain text, one card per paragraph.
pub fn render_plain(
    festivals: &[&Festival],
    formatter: &DateFormatter<'_>,
    catalog: &dyn Catalog,
) -> String {
    let locale = formatter.locale();
    if festivals.is_empty() {
        return format!("{}\n", catalog.message(locale, MessageKey::NoFestivals));
    }

    let mut text = String::new();
    for (i, festival) in festivals.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        let card = FestivalCard::new(festival, formatter);
        text.push_str(&format!("{}\n", card.name));
        text.push_str(&format!("  {}\n", card.dates));
        text.push_str(&format!("  {}\n", card.location));
        if let Some(image) = &card.image {
            text.push_str(&format!(
                "  {} {}\n",
                catalog.message(locale, MessageKey::Image),
                image
            ));
        }
    }
    text
}
