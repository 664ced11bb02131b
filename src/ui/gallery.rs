//! Gallery carousel strip rendering.

use crate::app::App;
use crate::gallery::ITEMS;
use crate::ui::ThemeColors;
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the carousel: prev/next affordances, the visible item window, and
/// one indicator dot per slide position.
pub(super) fn draw_gallery(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    if area.height < 5 {
        return;
    }

    let block = Block::default()
        .title(" Gallery ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(1)])
        .split(inner);

    let strip = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(chunks[0]);

    draw_affordance(f, strip[0], "‹", app.carousel.at_start(), colors);
    draw_items(f, app, strip[1], colors);
    draw_affordance(f, strip[2], "›", app.carousel.at_end(), colors);

    draw_dots(f, app, chunks[1], colors);
}

/// Boundary affordances dim, they never disappear.
fn draw_affordance(f: &mut Frame<'_>, area: Rect, symbol: &str, dimmed: bool, colors: &ThemeColors) {
    let style = if dimmed {
        Style::default().fg(colors.dimmed)
    } else {
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD)
    };

    let paragraph = Paragraph::new(symbol.to_string())
        .alignment(Alignment::Center)
        .style(style);
    f.render_widget(paragraph, area);
}

fn draw_items(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let count = app.carousel.items_per_view();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .split(area);

    for (slot, index) in app.carousel.window().enumerate() {
        let item = &ITEMS[index];
        let selected = slot == app.selected;

        let border_style = if selected {
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.border)
        };

        let width = slots[slot].width.saturating_sub(2) as usize;
        let text = vec![
            Line::from(Span::styled(
                truncate_to_width(item.src, width),
                Style::default().fg(colors.dimmed),
            )),
            Line::from(Span::styled(
                truncate_to_width(item.caption, width),
                Style::default().fg(colors.text),
            )),
        ];

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        f.render_widget(paragraph, slots[slot]);
    }
}

fn draw_dots(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let mut spans = Vec::new();
    for i in 0..app.carousel.dot_count() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        if i == app.carousel.current_slide() {
            spans.push(Span::styled("●", Style::default().fg(colors.heading)));
        } else {
            spans.push(Span::styled("○", Style::default().fg(colors.dimmed)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
