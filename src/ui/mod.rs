//! User interface rendering.

mod gallery;
mod keymap_bar;
mod modal;
mod publications;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(10),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    publications::draw_publications(f, app, chunks[0], &colors);
    gallery::draw_gallery(f, app, chunks[1], &colors);
    status_bar::draw_status(f, chunks[2], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[3], app.modal.is_open(), &colors);

    // The lightbox overlays everything else.
    modal::draw_modal(f, &app.modal, &colors);
}
