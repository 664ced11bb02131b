//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, modal_open: bool, colors: &ThemeColors) {
    let keymap_text = if modal_open {
        "←→:navigate | Esc:close"
    } else {
        "q:quit | a/r/i:filter | g/l:view | ←→:gallery | 0-9:slide | Tab:select | Enter:open | j/k:scroll | c:copy | R:reload | T:theme | ?:help"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.dimmed).bg(colors.bg));

    f.render_widget(paragraph, area);
}
