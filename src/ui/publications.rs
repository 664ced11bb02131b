//! Publications section rendering.

use crate::app::App;
use crate::data::Category;
use crate::publications::render::{Fragment, FragmentLine, Role};
use crate::publications::surface::JournalNode;
use crate::publications::{Filter, View};
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the publications section: control bar, journals pane, and the other
/// category lists.
pub(super) fn draw_publications(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    if area.height < 3 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(2)])
        .split(area);

    draw_controls(f, app, chunks[0], colors);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(chunks[1]);

    draw_journals(f, app, content[0], colors);
    draw_other_sections(f, app, content[1], colors);
}

fn draw_controls(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let mut spans = vec![Span::styled(
        " Filter: ",
        Style::default().fg(colors.dimmed),
    )];
    for filter in Filter::ALL {
        spans.push(control_span(
            format!("[{}] {}", filter.key(), filter.label()),
            filter == app.filter,
            colors,
        ));
        spans.push(Span::raw("  "));
    }

    spans.push(Span::styled("View: ", Style::default().fg(colors.dimmed)));
    for view in View::ALL {
        spans.push(control_span(
            format!("[{}] {}", view.key(), view.label()),
            view == app.view,
            colors,
        ));
        spans.push(Span::raw("  "));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.bg));
    f.render_widget(paragraph, area);
}

/// Exactly one control per group renders active: the one matching the
/// session's current selection.
fn control_span(text: String, active: bool, colors: &ThemeColors) -> Span<'static> {
    if active {
        Span::styled(
            text,
            Style::default()
                .fg(colors.active_fg)
                .bg(colors.active_bg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(text, Style::default().fg(colors.text))
    }
}

fn draw_journals(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let surface = &app.surface;
    let title = format!(" Journal Articles ({}) ", surface.count(Category::Journals));

    // Hard display toggle: only the active view is painted.
    let lines = match app.view {
        View::Grid => grid_lines(&surface.journal_cards, colors),
        View::List => list_lines(&surface.journal_rows, colors),
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text))
        .wrap(Wrap { trim: true })
        .scroll((app.scroll, 0));

    f.render_widget(paragraph, area);
}

fn grid_lines(nodes: &[JournalNode], colors: &ThemeColors) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for node in nodes.iter().filter(|n| n.visible) {
        for line in &node.fragment.lines {
            lines.push(card_line(line, colors));
        }
        lines.push(Line::default());
    }

    if lines.is_empty() {
        lines.push(empty_placeholder(colors));
    }
    lines
}

fn card_line(line: &FragmentLine, colors: &ThemeColors) -> Line<'static> {
    let span = match line.role {
        Role::Year => Span::styled(
            format!(" {} ", line.text),
            Style::default()
                .fg(colors.active_fg)
                .bg(colors.badge)
                .add_modifier(Modifier::BOLD),
        ),
        Role::Title => {
            let mut style = Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD);
            if line.href.is_some() {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            Span::styled(line.text.clone(), style)
        }
        Role::Authors => Span::styled(line.text.clone(), Style::default().fg(colors.text)),
        Role::Venue => Span::styled(
            line.text.clone(),
            Style::default().fg(colors.dimmed).add_modifier(Modifier::ITALIC),
        ),
        Role::Doi | Role::Link => Span::styled(line.text.clone(), Style::default().fg(colors.link)),
        Role::Notes | Role::Meta => {
            Span::styled(line.text.clone(), Style::default().fg(colors.dimmed))
        }
    };
    Line::from(span)
}

fn list_lines(nodes: &[JournalNode], colors: &ThemeColors) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = nodes
        .iter()
        .filter(|n| n.visible)
        .map(|n| row_line(&n.fragment, "", colors))
        .collect();

    if lines.is_empty() {
        lines.push(empty_placeholder(colors));
    }
    lines
}

/// Compose a row fragment into a single line of spans.
fn row_line(fragment: &Fragment, indent: &str, colors: &ThemeColors) -> Line<'static> {
    let mut spans = vec![Span::raw(indent.to_string())];

    for line in &fragment.lines {
        if spans.len() > 1 {
            spans.push(Span::raw(" "));
        }
        spans.push(match line.role {
            Role::Title => Span::styled(
                line.text.clone(),
                Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
            ),
            Role::Doi => Span::styled(line.text.clone(), Style::default().fg(colors.link)),
            Role::Notes => Span::styled(
                format!("({})", line.text),
                Style::default().fg(colors.dimmed),
            ),
            Role::Link => Span::styled(
                line.text.clone(),
                Style::default()
                    .fg(colors.link)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            _ => Span::styled(line.text.clone(), Style::default().fg(colors.text)),
        });
    }

    Line::from(spans)
}

fn draw_other_sections(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let surface = &app.surface;
    let sections = [
        (Category::Books, &surface.books),
        (Category::PopularScience, &surface.popular_science),
        (Category::Abstracts, &surface.abstracts),
        (Category::Thesis, &surface.thesis),
    ];

    let mut lines = Vec::new();
    for (category, fragments) in sections {
        lines.push(Line::from(Span::styled(
            format!("{} ({})", category.heading(), surface.count(category)),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )));
        for fragment in fragments.iter() {
            lines.push(row_line(fragment, "  ", colors));
        }
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Other Publications ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text))
        .wrap(Wrap { trim: true })
        .scroll((app.scroll, 0));

    f.render_widget(paragraph, area);
}

fn empty_placeholder(colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        "No publications to show.",
        Style::default().fg(colors.dimmed),
    ))
}
