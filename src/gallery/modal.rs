//! Cyclic modal lightbox state machine.

use crate::gallery::{GalleryItem, ITEMS, TOTAL_ITEMS};

/// Static instructional caption shown under the modal image.
pub const INSTRUCTIONS: &str = "Use ← → or the side controls to navigate. Esc closes.";

/// Single-item lightbox over the gallery with cyclic navigation.
///
/// The index always wraps at the gallery boundary, in deliberate contrast to
/// the carousel's clamping, and is independent of the carousel page. While
/// the lightbox is open, publication scrolling is suspended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modal {
    index: usize,
    open: bool,
}

impl Modal {
    /// Create a closed lightbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open at a gallery item, seeding the index from the activated item.
    pub fn open(&mut self, index: usize) {
        self.index = index % TOTAL_ITEMS;
        self.open = true;
    }

    /// Close the lightbox, restoring publication scrolling.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Advance one item, wrapping at the end.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % TOTAL_ITEMS;
    }

    /// Go back one item, wrapping at the start.
    pub fn prev(&mut self) {
        self.index = (self.index + TOTAL_ITEMS - 1) % TOTAL_ITEMS;
    }

    /// Current item index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the lightbox is visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The gallery item currently displayed, re-read on every navigation.
    pub fn current_item(&self) -> &'static GalleryItem {
        &ITEMS[self.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut modal = Modal::new();
        modal.open(TOTAL_ITEMS - 1);
        modal.next();
        assert_eq!(modal.index(), 0);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let mut modal = Modal::new();
        modal.open(0);
        modal.prev();
        assert_eq!(modal.index(), TOTAL_ITEMS - 1);
    }

    #[test]
    fn index_never_leaves_the_gallery_range() {
        let mut modal = Modal::new();
        modal.open(7);
        for _ in 0..40 {
            modal.next();
            assert!(modal.index() < TOTAL_ITEMS);
        }
        for _ in 0..40 {
            modal.prev();
            assert!(modal.index() < TOTAL_ITEMS);
        }
    }

    #[test]
    fn open_seeds_from_the_activated_item() {
        let mut modal = Modal::new();
        modal.open(4);
        assert!(modal.is_open());
        assert_eq!(modal.index(), 4);
        assert_eq!(modal.current_item().caption, ITEMS[4].caption);
    }

    #[test]
    fn close_keeps_the_index() {
        let mut modal = Modal::new();
        modal.open(9);
        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.index(), 9);
    }
}
