//! The retained rendering surface for the publications section.
//!
//! A populate pass replaces whole containers from the store; the filter
//! engine toggles node visibility in place. The draw pass paints whatever the
//! surface holds, which keeps the pipeline testable without a terminal.

use crate::data::{Category, PublicationStore, Record};
use crate::publications::render::{self, Fragment};
use crate::publications::Filter;

/// A rendered journal node with its filter attribution.
///
/// Attribution is carried on both the card and the row representation so the
/// filter can act on whichever view is displayed.
#[derive(Debug, Clone)]
pub struct JournalNode {
    /// Rendered markup.
    pub fragment: Fragment,
    /// Publication year.
    pub year: i32,
    /// High-impact mark.
    pub high_impact: bool,
    /// Toggled by the filter engine; hidden nodes stay in the container.
    pub visible: bool,
}

impl JournalNode {
    fn new(fragment: Fragment, year: i32, high_impact: bool) -> Self {
        Self {
            fragment,
            year,
            high_impact,
            visible: true,
        }
    }
}

/// Retained page model for the publications section.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    /// Journal cards (grid presentation).
    pub journal_cards: Vec<JournalNode>,
    /// Journal rows (list presentation).
    pub journal_rows: Vec<JournalNode>,
    /// Book rows.
    pub books: Vec<Fragment>,
    /// Popular science rows.
    pub popular_science: Vec<Fragment>,
    /// Abstract rows.
    pub abstracts: Vec<Fragment>,
    /// Thesis row (0 or 1).
    pub thesis: Vec<Fragment>,
    counts: [usize; 5],
}

impl Surface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate every container from the store in one whole-list replace and
    /// update the per-category counts.
    ///
    /// Journals are rendered into both presentations; fresh nodes start
    /// visible.
    pub fn populate(&mut self, store: &PublicationStore) {
        self.journal_cards = store
            .journals
            .iter()
            .map(|j| JournalNode::new(render::card(j), j.year, j.high_impact))
            .collect();
        self.journal_rows = store
            .journals
            .iter()
            .map(|j| JournalNode::new(render::row(Record::Journal(j)), j.year, j.high_impact))
            .collect();

        self.books = store
            .books
            .iter()
            .map(|b| render::row(Record::Book(b)))
            .collect();
        self.popular_science = store
            .popular_science
            .iter()
            .map(|p| render::row(Record::PopularScience(p)))
            .collect();
        self.abstracts = store
            .abstracts
            .iter()
            .map(|a| render::row(Record::Abstract(a)))
            .collect();
        self.thesis = store
            .thesis
            .iter()
            .map(|t| render::row(Record::Thesis(t)))
            .collect();

        self.counts = Category::ALL.map(|category| store.count(category));
    }

    /// Apply a filter to every journal node in both presentations at once.
    ///
    /// Nodes are hidden, never removed. The other categories are untouched:
    /// only journal records carry the year/high-impact attribution.
    pub fn apply_filter(&mut self, filter: Filter) {
        for node in self
            .journal_cards
            .iter_mut()
            .chain(self.journal_rows.iter_mut())
        {
            node.visible = filter.shows(node.year, node.high_impact);
        }
    }

    /// Visible count display for a category.
    pub fn count(&self, category: Category) -> usize {
        self.counts[category as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Journal;

    fn store() -> PublicationStore {
        PublicationStore {
            journals: vec![
                Journal {
                    title: "Old".to_string(),
                    authors: "A".to_string(),
                    year: 2017,
                    link: None,
                    journal: "J".to_string(),
                    doi: None,
                    notes: None,
                    high_impact: true,
                },
                Journal {
                    title: "New".to_string(),
                    authors: "A".to_string(),
                    year: 2022,
                    link: None,
                    journal: "J".to_string(),
                    doi: None,
                    notes: None,
                    high_impact: false,
                },
            ],
            ..PublicationStore::default()
        }
    }

    #[test]
    fn populate_fills_both_journal_presentations_and_counts() {
        let mut surface = Surface::new();
        surface.populate(&store());

        assert_eq!(surface.journal_cards.len(), 2);
        assert_eq!(surface.journal_rows.len(), 2);
        assert_eq!(surface.count(Category::Journals), 2);
        assert_eq!(surface.count(Category::Books), 0);
        assert!(surface.journal_cards.iter().all(|n| n.visible));
    }

    #[test]
    fn filter_toggles_visibility_in_both_presentations() {
        let mut surface = Surface::new();
        surface.populate(&store());

        surface.apply_filter(Filter::Recent);
        assert!(!surface.journal_cards[0].visible);
        assert!(surface.journal_cards[1].visible);
        assert!(!surface.journal_rows[0].visible);
        assert!(surface.journal_rows[1].visible);

        surface.apply_filter(Filter::HighImpact);
        assert!(surface.journal_cards[0].visible);
        assert!(!surface.journal_cards[1].visible);

        // Hidden nodes stay in the containers.
        assert_eq!(surface.journal_cards.len(), 2);
        assert_eq!(surface.journal_rows.len(), 2);
    }

    #[test]
    fn populate_resets_visibility() {
        let mut surface = Surface::new();
        surface.populate(&store());
        surface.apply_filter(Filter::HighImpact);

        surface.populate(&store());
        assert!(surface.journal_cards.iter().all(|n| n.visible));
    }
}
