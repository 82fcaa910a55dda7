//! Festival filtering by free-text query.

use crate::data::Festival;
use std::sync::Arc;

/// Lower-case and trim a query; `None` when nothing is left to match.
pub fn normalize_query(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

/// Indices of the festivals matching `query`, in list order.
///
/// A blank query matches everything.
pub fn matching_indices(festivals: &[Festival], query: &str) -> Vec<usize> {
    let Some(query) = normalize_query(query) else {
        return (0..festivals.len()).collect();
    };

    festivals
        .iter()
        .enumerate()
        .filter(|(_, festival)| festival.matches_query(&query))
        .map(|(idx, _)| idx)
        .collect()
}

/// Festivals matching `query` by name, city, country or artist, in list order.
pub fn filter_festivals<'a>(festivals: &'a [Festival], query: &str) -> Vec<&'a Festival> {
    matching_indices(festivals, query)
        .into_iter()
        .map(|idx| &festivals[idx])
        .collect()
}

/// Memoized filter keyed by list identity and query.
#[derive(Debug, Default)]
pub struct FestivalFilter {
    key: Option<(Arc<[Festival]>, String)>,
    indices: Vec<usize>,
    recomputations: usize,
}

impl FestivalFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter `festivals` by `query`, reusing the last result when neither changed.
    ///
    /// An absent list yields no matches.
    pub fn apply(&mut self, festivals: Option<&Arc<[Festival]>>, query: &str) -> &[usize] {
        let Some(festivals) = festivals else {
            self.key = None;
            self.indices.clear();
            return &self.indices;
        };

        let cached = self
            .key
            .as_ref()
            .is_some_and(|(list, q)| Arc::ptr_eq(list, festivals) && q == query);

        if !cached {
            self.indices = matching_indices(festivals, query);
            self.key = Some((Arc::clone(festivals), query.to_string()));
            self.recomputations += 1;
            tracing::debug!(
                "Filtered {} festivals by '{}': {} matches",
                festivals.len(),
                query,
                self.indices.len()
            );
        }

        &self.indices
    }

    /// Indices from the last [`apply`](Self::apply).
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of times the match list was actually recomputed.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Artist, Location};

    fn festival(id: &str, name: Option<&str>, city: &str, country: &str, artists: &[&str]) -> Festival {
        Festival {
            id: id.to_string(),
            name: name.map(str::to_string),
            location: Some(Location {
                city: Some(city.to_string()),
                country: Some(country.to_string()),
            }),
            artists: Some(
                artists
                    .iter()
                    .map(|a| Artist {
                        name: Some(a.to_string()),
                    })
                    .collect(),
            ),
            ..Festival::default()
        }
    }

    fn sample() -> Vec<Festival> {
        vec![
            festival("1", Some("Metal Festival 2023"), "Berlin", "Germany", &["Iron Tide"]),
            festival("2", Some("Rock Fest"), "Munich", "Germany", &["The Pebbles"]),
            festival("3", Some("Jazz Nights"), "Montreux", "Switzerland", &["Blue Rock Trio"]),
            Festival {
                id: "4".into(),
                ..Festival::default()
            },
        ]
    }

    fn ids(festivals: &[&Festival]) -> Vec<String> {
        festivals.iter().map(|f| f.id.clone()).collect()
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let festivals = sample();
        for query in ["", "   ", "\t\n"] {
            assert_eq!(ids(&filter_festivals(&festivals, query)), ["1", "2", "3", "4"]);
        }
    }

    #[test]
    fn matches_are_an_ordered_subset() {
        let festivals = sample();
        assert_eq!(ids(&filter_festivals(&festivals, "rock")), ["2", "3"]);
        assert_eq!(ids(&filter_festivals(&festivals, "germany")), ["1", "2"]);
        assert!(filter_festivals(&festivals, "polka").is_empty());
    }

    #[test]
    fn matching_ignores_case_and_surrounding_space() {
        let festivals = vec![festival("1", Some("Rock Fest"), "", "", &[])];
        let lower = ids(&filter_festivals(&festivals, "rock"));
        assert_eq!(lower, ids(&filter_festivals(&festivals, "ROCK")));
        assert_eq!(lower, ids(&filter_festivals(&festivals, "  RoCk ")));
        assert_eq!(lower, ["1"]);
    }

    #[test]
    fn artist_name_alone_is_enough() {
        let festivals = sample();
        assert_eq!(ids(&filter_festivals(&festivals, "pebbles")), ["2"]);
    }

    #[test]
    fn city_or_country_match() {
        let festivals = sample();
        assert_eq!(ids(&filter_festivals(&festivals, "montreux")), ["3"]);
        assert_eq!(ids(&filter_festivals(&festivals, "switz")), ["3"]);
    }

    #[test]
    fn record_without_fields_never_matches_a_query() {
        let festivals = sample();
        assert!(!matching_indices(&festivals, "e").contains(&3));
    }

    #[test]
    fn absent_list_is_empty() {
        let mut filter = FestivalFilter::new();
        assert!(filter.apply(None, "").is_empty());
        assert!(filter.apply(None, "rock").is_empty());
    }

    #[test]
    fn cache_recomputes_only_on_input_change() {
        let festivals: Arc<[Festival]> = sample().into();
        let mut filter = FestivalFilter::new();

        assert_eq!(filter.apply(Some(&festivals), "rock"), [1, 2]);
        assert_eq!(filter.apply(Some(&festivals), "rock"), [1, 2]);
        assert_eq!(filter.recomputations(), 1);

        assert_eq!(filter.apply(Some(&festivals), "jazz"), [2]);
        assert_eq!(filter.recomputations(), 2);

        let reloaded: Arc<[Festival]> = sample().into();
        assert_eq!(filter.apply(Some(&reloaded), "jazz"), [2]);
        assert_eq!(filter.recomputations(), 3);
    }

    #[test]
    fn memoized_results_equal_direct_results() {
        let festivals: Arc<[Festival]> = sample().into();
        let mut filter = FestivalFilter::new();
        for query in ["", "rock", "GERMANY", " iron ", "zzz", "rock"] {
            let memoized = filter.apply(Some(&festivals), query).to_vec();
            assert_eq!(memoized, matching_indices(&festivals, query));
        }
        assert_eq!(filter.indices(), matching_indices(&festivals, "rock"));
    }
}
