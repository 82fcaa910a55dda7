//! Locales and the message catalog.
//!
//! Nothing in this module reads global state: callers pass a [`Locale`] and a
//! [`Catalog`] wherever localized text is needed.

mod messages;

use std::fmt::Display;

pub use messages::BuiltinCatalog;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// German.
    De,
}

impl Locale {
    /// All supported locales, in cycling order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

    /// Language code used on the command line.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    /// Human-readable language name.
    pub fn name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::De => "Deutsch",
        }
    }

    /// Get the next locale in the cycle.
    pub fn next(self) -> Self {
        match self {
            Locale::En => Locale::De,
            Locale::De => Locale::En,
        }
    }

    /// Parse a language tag such as `en`, `de-AT` or `DE_de`.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Locale::En),
            "de" => Some(Locale::De),
            _ => None,
        }
    }
}

/// Keys for every localized string the application displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Page headline.
    Headline,
    /// Introductory line below the headline.
    Greeting,
    /// Placeholder for an absent date.
    DateNotAvailable,
    /// Placeholder for a date that does not parse.
    DateInvalid,
    /// Placeholder for a range with an unparsable side.
    DateRangeInvalid,
    /// Generic error placeholder.
    Error,
    /// Empty list text.
    NoFestivals,
    /// Shown while the festival source is loading.
    Loading,
    /// Shown when the festival source failed.
    LoadError,
    /// Hint shown in an empty search prompt.
    SearchPlaceholder,
    /// Artist section heading in the detail view.
    Artists,
    /// Label in front of the festival link.
    Website,
    /// Label in front of the image reference.
    Image,
    /// Status while the source loads; `{source}`.
    StatusLoading,
    /// Status after a load; `{count}` and `{source}`.
    StatusLoaded,
    /// Status after a failed load; `{source}`.
    StatusLoadFailed,
    /// Status when no card is under the cursor.
    NoSelection,
    /// Search summary; `{count}` and `{query}`.
    MatchCount,
    /// Status after copying a link; `{link}`.
    Copied,
    /// Status after a failed copy; `{error}`.
    CopyFailed,
    /// Status after a theme switch; `{theme}`.
    ThemeChanged,
    /// Status after a language switch; `{language}`.
    LanguageChanged,
    /// Key help shown on `?`.
    HelpHint,
}

impl MessageKey {
    /// Every key, for catalog completeness checks.
    pub const ALL: [MessageKey; 23] = [
        MessageKey::Headline,
        MessageKey::Greeting,
        MessageKey::DateNotAvailable,
        MessageKey::DateInvalid,
        MessageKey::DateRangeInvalid,
        MessageKey::Error,
        MessageKey::NoFestivals,
        MessageKey::Loading,
        MessageKey::LoadError,
        MessageKey::SearchPlaceholder,
        MessageKey::Artists,
        MessageKey::Website,
        MessageKey::Image,
        MessageKey::StatusLoading,
        MessageKey::StatusLoaded,
        MessageKey::StatusLoadFailed,
        MessageKey::NoSelection,
        MessageKey::MatchCount,
        MessageKey::Copied,
        MessageKey::CopyFailed,
        MessageKey::ThemeChanged,
        MessageKey::LanguageChanged,
        MessageKey::HelpHint,
    ];
}

/// Translation lookup capability.
pub trait Catalog {
    /// Localized text for `key`.
    fn message(&self, locale: Locale, key: MessageKey) -> &str;

    /// Abbreviated month name for `month` (1-based), if the catalog has one.
    fn month_abbrev(&self, locale: Locale, month: u32) -> Option<&str>;
}

/// Substitute `{name}` placeholders in a catalog template.
///
/// Unknown placeholders are left as they are.
pub fn fill(template: &str, args: &[(&str, &dyn Display)]) -> String {
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name), &value.to_string())
    })
}
