//! Image gallery: the fixed item set and its two navigation state machines.
//!
//! The carousel pages over the items with clamped navigation; the modal
//! lightbox walks them one at a time with cyclic navigation. The two are
//! independent: opening the modal seeds from the activated item, not from
//! the carousel page.

pub mod carousel;
pub mod modal;

pub use carousel::Carousel;
pub use modal::Modal;

/// Number of gallery items. The gallery is a fixed, known set.
pub const TOTAL_ITEMS: usize = 15;

/// Terminal width below which the carousel shows a single item.
const NARROW_COLS: u16 = 80;
/// Terminal width below which the carousel shows two items.
const WIDE_COLS: u16 = 120;

/// One gallery item: image source and caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    /// Image path, relative to the portfolio root.
    pub src: &'static str,
    /// Caption shown with the item and as the modal title.
    pub caption: &'static str,
}

/// The fixed gallery, in display order.
pub const ITEMS: [GalleryItem; TOTAL_ITEMS] = [
    GalleryItem {
        src: "images/gallery/rv-sarmiento-deck.jpg",
        caption: "Deck operations, RV Sarmiento de Gamboa",
    },
    GalleryItem {
        src: "images/gallery/ctd-rosette.jpg",
        caption: "CTD rosette recovery at dawn",
    },
    GalleryItem {
        src: "images/gallery/glider-launch.jpg",
        caption: "Slocum glider launch, Alboran Sea",
    },
    GalleryItem {
        src: "images/gallery/mooring-line.jpg",
        caption: "Mooring line deployment",
    },
    GalleryItem {
        src: "images/gallery/plankton-net.jpg",
        caption: "Plankton net tow, station 12",
    },
    GalleryItem {
        src: "images/gallery/lab-filtration.jpg",
        caption: "On-board filtration lab",
    },
    GalleryItem {
        src: "images/gallery/drifter-release.jpg",
        caption: "Surface drifter release",
    },
    GalleryItem {
        src: "images/gallery/estuary-survey.jpg",
        caption: "Estuary survey, Ria de Vigo",
    },
    GalleryItem {
        src: "images/gallery/ice-camp.jpg",
        caption: "Sea-ice camp, Fram Strait",
    },
    GalleryItem {
        src: "images/gallery/conference-poster.jpg",
        caption: "Poster session, EGU General Assembly",
    },
    GalleryItem {
        src: "images/gallery/field-team.jpg",
        caption: "Field team after the last station",
    },
    GalleryItem {
        src: "images/gallery/adcp-install.jpg",
        caption: "ADCP frame before installation",
    },
    GalleryItem {
        src: "images/gallery/night-sampling.jpg",
        caption: "Night sampling under deck lights",
    },
    GalleryItem {
        src: "images/gallery/satellite-dish.jpg",
        caption: "Receiving station antenna",
    },
    GalleryItem {
        src: "images/gallery/outreach-talk.jpg",
        caption: "Outreach talk at the aquarium",
    },
];

/// Number of gallery items visible at once, derived from terminal width.
pub fn items_per_view(width: u16) -> usize {
    if width < NARROW_COLS {
        1
    } else if width < WIDE_COLS {
        2
    } else {
        4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_per_view_follows_the_breakpoints() {
        assert_eq!(items_per_view(60), 1);
        assert_eq!(items_per_view(79), 1);
        assert_eq!(items_per_view(80), 2);
        assert_eq!(items_per_view(119), 2);
        assert_eq!(items_per_view(120), 4);
        assert_eq!(items_per_view(200), 4);
    }

    #[test]
    fn gallery_has_the_fixed_item_count() {
        assert_eq!(ITEMS.len(), TOTAL_ITEMS);
    }
}
