//! Festivo - a terminal festival directory.
//!
//! Festivo loads a festival API response, lets you narrow it down with a live
//! search over names, locations and artists, and shows each festival in a
//! card grid with a detail overlay.
//!
//! # Features
//!
//! - Case-insensitive search across name, city, country and artists
//! - Locale-aware date ranges (English and German)
//! - Background loading with loading/error states
//! - Vim-style keyboard navigation
//! - Gruvbox color themes
//! - Clipboard integration for festival links
//!
//! # Example
//!
//! ```
//! use festivo::dates::DateFormatter;
//! use festivo::i18n::{BuiltinCatalog, Locale};
//! use festivo::navigation::filter_festivals;
//!
//! let festivals = festivo::data::parse_festivals(
//!     r#"[{"id":"1","name":"Rock Fest","start":"2023-03-15","end":"2023-03-20"}]"#,
//! )?;
//!
//! let matches = filter_festivals(&festivals, "ROCK");
//! let formatter = DateFormatter::new(Locale::En, &BuiltinCatalog);
//! assert_eq!(
//!     formatter.format_date_range(matches[0].start.as_deref(), matches[0].end.as_deref()),
//!     "Mar 15 - Mar 20, 2023"
//! );
//! # Ok::<(), festivo::FestivoError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod browser;
pub mod data;
pub mod dates;
pub mod detail;
pub mod error;
pub mod i18n;
pub mod navigation;
pub mod shared;
pub mod ui;
pub mod util;

pub use error::{FestivoError, Result};
