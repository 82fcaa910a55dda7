//! Festival records as delivered by the festival API.

use serde::{Deserialize, Serialize};

/// Where a festival takes place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// City name.
    pub city: Option<String>,
    /// Country name.
    pub country: Option<String>,
}

/// A performing artist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Artist name.
    pub name: Option<String>,
}

/// A single festival record.
///
/// Every field except `id` may be missing or `null` in the payload. Absent
/// fields render blank and never match a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Festival {
    /// Opaque identifier.
    #[serde(default)]
    pub id: String,
    /// Display name.
    pub name: Option<String>,
    /// ISO-8601 start date.
    pub start: Option<String>,
    /// ISO-8601 end date.
    pub end: Option<String>,
    /// Location.
    pub location: Option<Location>,
    /// Line-up, in billing order.
    pub artists: Option<Vec<Artist>>,
    /// Image URL.
    pub image: Option<String>,
    /// Free-text description.
    pub info: Option<String>,
    /// Festival website.
    pub link: Option<String>,
}

impl Festival {
    /// Name to display, blank when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// City, blank when absent.
    pub fn city(&self) -> &str {
        self.location
            .as_ref()
            .and_then(|l| l.city.as_deref())
            .unwrap_or("")
    }

    /// Country, blank when absent.
    pub fn country(&self) -> &str {
        self.location
            .as_ref()
            .and_then(|l| l.country.as_deref())
            .unwrap_or("")
    }

    /// "City, Country" with blank sides kept as-is (e.g. `", Germany"`).
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.city(), self.country())
    }

    /// Names of listed artists, skipping entries without a name.
    pub fn artist_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.artists
            .iter()
            .flatten()
            .filter_map(|artist| artist.name.as_deref())
    }

    /// Whether the record lists at least one artist entry.
    pub fn has_artists(&self) -> bool {
        self.artists.as_ref().is_some_and(|a| !a.is_empty())
    }

    /// Check whether the festival matches an already lower-cased, trimmed query.
    ///
    /// Matches on name, city, country or any artist name.
    pub fn matches_query(&self, query_lower: &str) -> bool {
        let contains = |field: Option<&str>| {
            field.is_some_and(|value| value.to_lowercase().contains(query_lower))
        };

        // Check name
        if contains(self.name.as_deref()) {
            return true;
        }

        // Check location
        if let Some(location) = &self.location {
            if contains(location.city.as_deref()) || contains(location.country.as_deref()) {
                return true;
            }
        }

        // Check artists
        self.artist_names().any(|name| contains(Some(name)))
    }
}
