//! Utility helpers for Folio.

use arboard::Clipboard;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::error::Result;
use crate::publications::render::Role;
use crate::publications::surface::Surface;

/// Truncate a string to a display width, appending an ellipsis when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        // Leave room for the ellipsis.
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Copy the visible journal citations to the clipboard.
///
/// Walks the row presentation and skips rows hidden by the active filter.
/// Returns the number of citations copied.
pub fn copy_citations(surface: &Surface) -> Result<usize> {
    let mut text = String::new();
    let mut copied = 0;

    for node in surface.journal_rows.iter().filter(|n| n.visible) {
        let title = node.fragment.line(Role::Title).map_or("", |l| l.text.as_str());
        let meta = node.fragment.line(Role::Meta).map_or("", |l| l.text.as_str());
        text.push_str(&format!("{} {}\n", title, meta));
        copied += 1;
    }

    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate_to_width("abc", 10), "abc");
        assert_eq!(truncate_to_width("abc", 3), "abc");
    }

    #[test]
    fn truncate_cuts_to_width_with_ellipsis() {
        let out = truncate_to_width("abcdefgh", 5);
        assert_eq!(out, "abcd…");
        assert!(out.width() <= 5);
    }

    #[test]
    fn truncate_handles_zero_width() {
        assert_eq!(truncate_to_width("abcdefgh", 0), "");
    }
}
