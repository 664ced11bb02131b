//! Application state and logic.

use crate::data::{Category, DataProvider, PublicationStore};
use crate::gallery::{self, Carousel, Modal};
use crate::publications::surface::Surface;
use crate::publications::{Filter, View};
use crate::util;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
///
/// All mutable page state lives here, owned by the session and touched only
/// from the event-handling thread; each handler runs to completion before
/// the next is dispatched.
#[derive(Debug)]
pub struct App {
    /// Provider for the five publication resources.
    provider: Box<dyn DataProvider>,
    /// Loaded publication collections.
    pub store: PublicationStore,
    /// Retained rendering surface.
    pub surface: Surface,
    /// Active publication filter.
    pub filter: Filter,
    /// Active journals view.
    pub view: View,
    /// Gallery carousel.
    pub carousel: Carousel,
    /// Gallery lightbox.
    pub modal: Modal,
    /// Selection offset inside the carousel's visible window.
    pub selected: usize,
    /// Publications pane scroll offset.
    pub scroll: u16,
    /// Terminal width the session was built for.
    pub viewport_width: u16,
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
}

impl App {
    /// Create a session: load the data, build the surface, and size the
    /// carousel for the given viewport width.
    pub fn new(provider: Box<dyn DataProvider>, viewport_width: u16) -> Self {
        let mut app = Self {
            provider,
            store: PublicationStore::default(),
            surface: Surface::new(),
            filter: Filter::default(),
            view: View::default(),
            carousel: Carousel::new(viewport_width),
            modal: Modal::new(),
            selected: 0,
            scroll: 0,
            viewport_width,
            theme: Theme::GruvboxDark,
            status: "Ready".to_string(),
        };
        app.reload();
        app
    }

    /// Full session rebuild: reload the data, reset every control to its
    /// default, and render once.
    ///
    /// This is the page-reload analog, used at startup, on `R`, and when a
    /// resize crosses a carousel breakpoint.
    pub fn reload(&mut self) {
        self.store = PublicationStore::load(self.provider.as_ref());
        self.filter = Filter::default();
        self.view = View::default();
        self.carousel = Carousel::new(self.viewport_width);
        self.modal = Modal::new();
        self.selected = 0;
        self.scroll = 0;

        // The single render pass that follows every load, successful or not.
        self.surface.populate(&self.store);

        let total: usize = Category::ALL
            .iter()
            .map(|&category| self.store.count(category))
            .sum();
        self.status = format!("{} publications loaded", total);
    }

    /// Activate a filter control and reapply the predicate to both journal
    /// presentations.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.surface.apply_filter(filter);
        self.status = format!("Filter: {}", filter.label());
    }

    /// Activate a view control. The active filter is left untouched; both
    /// presentations are already filtered.
    pub fn set_view(&mut self, view: View) {
        self.view = view;
        self.status = format!("View: {}", view.label());
    }

    /// Carousel: advance one slide.
    pub fn carousel_next(&mut self) {
        self.carousel.next();
    }

    /// Carousel: go back one slide.
    pub fn carousel_prev(&mut self) {
        self.carousel.prev();
    }

    /// Carousel: jump to a slide.
    pub fn go_to_slide(&mut self, slide: isize) {
        self.carousel.go_to_slide(slide);
    }

    /// Cycle the selection through the carousel's visible window.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.carousel.items_per_view();
    }

    /// Index of the selected gallery item.
    pub fn selected_item(&self) -> usize {
        self.carousel.current_slide() + self.selected
    }

    /// Open the lightbox at the selected gallery item.
    pub fn open_modal(&mut self) {
        self.modal.open(self.selected_item());
        self.status = format!("Viewing: {}", self.modal.current_item().caption);
    }

    /// Close the lightbox.
    pub fn close_modal(&mut self) {
        self.modal.close();
        self.status = "Gallery".to_string();
    }

    /// Lightbox: advance one item, wrapping at the end.
    pub fn modal_next(&mut self) {
        self.modal.next();
        self.status = format!("Viewing: {}", self.modal.current_item().caption);
    }

    /// Lightbox: go back one item, wrapping at the start.
    pub fn modal_prev(&mut self) {
        self.modal.prev();
        self.status = format!("Viewing: {}", self.modal.current_item().caption);
    }

    /// Scroll the publications pane down; suspended while the lightbox is
    /// open.
    pub fn scroll_down(&mut self) {
        if self.modal.is_open() {
            return;
        }
        self.scroll = self.scroll.saturating_add(1);
    }

    /// Scroll the publications pane up; suspended while the lightbox is
    /// open.
    pub fn scroll_up(&mut self) {
        if self.modal.is_open() {
            return;
        }
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Handle a terminal resize.
    ///
    /// The carousel page size is fixed per instance, so crossing a
    /// breakpoint rebuilds the whole session; any other resize only records
    /// the new width.
    pub fn handle_resize(&mut self, width: u16) {
        let changed = gallery::items_per_view(width) != self.carousel.items_per_view();
        self.viewport_width = width;
        if changed {
            self.reload();
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Copy the visible journal citations to the clipboard.
    pub fn copy_citations(&mut self) {
        match util::copy_citations(&self.surface) {
            Ok(n) => self.status = format!("Copied {} citations!", n),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Show the help line in the status bar.
    pub fn show_help(&mut self) {
        self.status =
            "Help: q=quit, a/r/i=filter, g/l=view, ←→=gallery, Tab/Enter=open, j/k=scroll, R=reload"
                .to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DirProvider;
    use std::fs;
    use std::path::Path;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(format!("{name}.json")), content).unwrap();
    }

    fn app_with_data(width: u16) -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "journals",
            r#"[{"title": "A", "authors": "X", "year": 2016, "journal": "J", "highImpact": true},
                {"title": "B", "authors": "Y", "year": 2021, "journal": "J", "highImpact": false}]"#,
        );
        write(dir.path(), "books", "[]");
        write(dir.path(), "popular-science", "[]");
        write(dir.path(), "abstracts", "[]");
        write(dir.path(), "thesis", "null");

        let provider = Box::new(DirProvider::new(dir.path()));
        let app = App::new(provider, width);
        (dir, app)
    }

    #[test]
    fn switching_view_preserves_the_active_filter() {
        let (_dir, mut app) = app_with_data(160);
        app.set_filter(Filter::Recent);

        app.set_view(View::List);

        assert_eq!(app.view, View::List);
        assert_eq!(app.filter, Filter::Recent);
        assert!(!app.surface.journal_rows[0].visible);
        assert!(app.surface.journal_rows[1].visible);
    }

    #[test]
    fn resize_within_a_breakpoint_keeps_session_state() {
        let (_dir, mut app) = app_with_data(160);
        app.set_filter(Filter::HighImpact);
        app.carousel_next();

        app.handle_resize(150);

        assert_eq!(app.filter, Filter::HighImpact);
        assert_eq!(app.carousel.current_slide(), 1);
    }

    #[test]
    fn resize_across_a_breakpoint_rebuilds_the_session() {
        let (_dir, mut app) = app_with_data(160);
        app.set_filter(Filter::HighImpact);
        app.carousel_next();

        app.handle_resize(100);

        assert_eq!(app.filter, Filter::All);
        assert_eq!(app.carousel.current_slide(), 0);
        assert_eq!(app.carousel.items_per_view(), 2);
    }

    #[test]
    fn open_lightbox_suspends_publication_scrolling() {
        let (_dir, mut app) = app_with_data(160);
        app.scroll_down();
        assert_eq!(app.scroll, 1);

        app.open_modal();
        app.scroll_down();
        assert_eq!(app.scroll, 1);

        app.close_modal();
        app.scroll_down();
        assert_eq!(app.scroll, 2);
    }

    #[test]
    fn lightbox_opens_at_the_selected_item_not_the_page() {
        let (_dir, mut app) = app_with_data(160);
        app.carousel_next();
        app.carousel_next();
        app.select_next();

        app.open_modal();

        assert_eq!(app.modal.index(), 3);
    }
}
