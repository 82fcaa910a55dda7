//! Search and filtering.
//!
//! This module holds the search prompt state and the query filter that
//! narrows the festival list.

mod filter;
mod search;

pub use filter::{filter_festivals, matching_indices, normalize_query, FestivalFilter};
pub use search::SearchState;
