//! Gallery lightbox overlay rendering.

use crate::gallery::{modal::INSTRUCTIONS, Modal, TOTAL_ITEMS};
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the lightbox overlay, if open.
///
/// The displayed image source and caption are re-read from the gallery item
/// on every frame, so each navigation shows the current item.
pub(super) fn draw_modal(f: &mut Frame<'_>, modal: &Modal, colors: &ThemeColors) {
    if !modal.is_open() {
        return;
    }

    let area = centered_rect(70, 80, f.area());

    // Clear the background
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Gallery {} / {} ", modal.index() + 1, TOTAL_ITEMS))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.heading))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 6 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let item = modal.current_item();

    // Image placeholder: the terminal stands in for the full-size image.
    let image = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled("[ image ]", Style::default().fg(colors.dimmed))),
        Line::from(Span::styled(
            item.src.to_string(),
            Style::default().fg(colors.link),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border)),
    );
    f.render_widget(image, chunks[0]);

    let title = Paragraph::new(Span::styled(
        item.caption.to_string(),
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[1]);

    let description = Paragraph::new(Span::styled(
        INSTRUCTIONS,
        Style::default().fg(colors.dimmed),
    ))
    .alignment(Alignment::Center);
    f.render_widget(description, chunks[2]);

    let controls = Paragraph::new(Span::styled(
        "‹ prev    ✕ close (Esc)    next ›",
        Style::default().fg(colors.text),
    ))
    .alignment(Alignment::Center);
    f.render_widget(controls, chunks[3]);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
