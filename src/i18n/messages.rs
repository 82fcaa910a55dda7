//! Built-in English and German strings.

use super::{Catalog, Locale, MessageKey};

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_DE: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez.",
];

/// Catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    /// Create the built-in catalog.
    pub fn new() -> Self {
        Self
    }
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Headline => "Festival Directory",
        MessageKey::Greeting => "Find your next festival by name, location, or artist.",
        MessageKey::DateNotAvailable => "N/A",
        MessageKey::DateInvalid => "Invalid date",
        MessageKey::DateRangeInvalid => "Invalid date range",
        MessageKey::Error => "Error",
        MessageKey::NoFestivals => "No festivals found",
        MessageKey::Loading => "Loading festivals...",
        MessageKey::LoadError => "Error loading festivals",
        MessageKey::SearchPlaceholder => "Search festivals by name, location, or artist...",
        MessageKey::Artists => "Artists",
        MessageKey::Website => "Website:",
        MessageKey::Image => "Image:",
        MessageKey::StatusLoading => "Loading {source}...",
        MessageKey::StatusLoaded => "{count} festivals from {source}",
        MessageKey::StatusLoadFailed => "Error loading {source}",
        MessageKey::NoSelection => "No festival selected",
        MessageKey::MatchCount => "{count} matches for '{query}'",
        MessageKey::Copied => "Copied {link}",
        MessageKey::CopyFailed => "Copy failed: {error}",
        MessageKey::ThemeChanged => "Theme: {theme}",
        MessageKey::LanguageChanged => "Language: {language}",
        MessageKey::HelpHint => {
            "Help: q=quit, hjkl=nav, Enter=details, /=search, y=copy link, L=language, T=theme"
        },
    }
}

fn german(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Headline => "Festivalverzeichnis",
        MessageKey::Greeting => "Finde dein nächstes Festival nach Name, Ort oder Künstler.",
        MessageKey::DateNotAvailable => "k. A.",
        MessageKey::DateInvalid => "Ungültiges Datum",
        MessageKey::DateRangeInvalid => "Ungültiger Zeitraum",
        MessageKey::Error => "Fehler",
        MessageKey::NoFestivals => "Keine Festivals gefunden",
        MessageKey::Loading => "Festivals werden geladen...",
        MessageKey::LoadError => "Fehler beim Laden der Festivals",
        MessageKey::SearchPlaceholder => "Festivals nach Name, Ort oder Künstler suchen...",
        MessageKey::Artists => "Künstler",
        MessageKey::Website => "Webseite:",
        MessageKey::Image => "Bild:",
        MessageKey::StatusLoading => "Lade {source}...",
        MessageKey::StatusLoaded => "{count} Festivals aus {source}",
        MessageKey::StatusLoadFailed => "Fehler beim Laden von {source}",
        MessageKey::NoSelection => "Kein Festival ausgewählt",
        MessageKey::MatchCount => "{count} Treffer für '{query}'",
        MessageKey::Copied => "Kopiert: {link}",
        MessageKey::CopyFailed => "Kopieren fehlgeschlagen: {error}",
        MessageKey::ThemeChanged => "Design: {theme}",
        MessageKey::LanguageChanged => "Sprache: {language}",
        MessageKey::HelpHint => {
            "Hilfe: q=Beenden, hjkl=Navigation, Enter=Details, /=Suche, y=Link kopieren, L=Sprache, T=Design"
        },
    }
}

impl Catalog for BuiltinCatalog {
    fn message(&self, locale: Locale, key: MessageKey) -> &str {
        match locale {
            Locale::En => english(key),
            Locale::De => german(key),
        }
    }

    fn month_abbrev(&self, locale: Locale, month: u32) -> Option<&str> {
        let table = match locale {
            Locale::En => &MONTHS_EN,
            Locale::De => &MONTHS_DE,
        };
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        table.get(index).copied()
    }
}
