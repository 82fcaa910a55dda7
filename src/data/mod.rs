//! Festival data: records, sources and background loading.

mod festival;
mod loader;
mod source;

pub use festival::{Artist, Festival, Location};
pub use loader::{FestivalLoader, FetchState};
pub use source::{parse_festivals, FestivalSource, JsonFileSource};
