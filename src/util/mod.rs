//! Utility functions.
//!
//! This module provides clipboard helpers and layout configuration.

mod clipboard;
mod layout_config;

pub use clipboard::{copy_festival_link, copy_to_clipboard};
pub use layout_config::{DetailLayoutConfig, GridLayoutConfig, LayoutConfig};
