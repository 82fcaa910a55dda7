//! Clipboard integration.

use crate::data::Festival;
use crate::error::{FestivoError, Result};
use arboard::Clipboard;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copy a festival's website link, returning the copied link.
pub fn copy_festival_link(festival: &Festival) -> Result<&str> {
    let link = festival
        .link
        .as_deref()
        .filter(|l| !l.is_empty())
        .ok_or_else(|| FestivoError::no_link(festival.display_name()))?;
    copy_to_clipboard(link)?;
    Ok(link)
}
