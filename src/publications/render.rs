//! Pure fragment rendering for publication records.
//!
//! Fragments are plain data: lines with a semantic role and an optional link
//! target. Theme colors are resolved by the draw pass, never here, so the
//! renderer stays a pure mapping from record to markup.

use crate::data::{Journal, Record};

/// Semantic role of a fragment line; the draw pass styles by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Year badge on a card.
    Year,
    /// Record title, optionally carrying the record link.
    Title,
    /// Author list.
    Authors,
    /// Venue (journal, publisher, publication, conference, institution).
    Venue,
    /// DOI line carrying a resolver link.
    Doi,
    /// Free-form notes.
    Notes,
    /// Row metadata: `(year). authors. venue.`.
    Meta,
    /// Trailing `[link]` tag on a row.
    Link,
}

/// One line of rendered markup.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentLine {
    /// Semantic role.
    pub role: Role,
    /// Display text.
    pub text: String,
    /// Link target carried by this line, if any.
    pub href: Option<String>,
}

impl FragmentLine {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            href: None,
        }
    }

    fn linked(role: Role, text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            href: Some(href.into()),
        }
    }
}

/// A rendered publication fragment: several lines for a card, one composed
/// line for a row.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Lines in display order.
    pub lines: Vec<FragmentLine>,
}

impl Fragment {
    /// First line with the given role.
    pub fn line(&self, role: Role) -> Option<&FragmentLine> {
        self.lines.iter().find(|l| l.role == role)
    }

    /// Whether any line has the given role.
    pub fn has(&self, role: Role) -> bool {
        self.line(role).is_some()
    }
}

/// Render the card presentation of a journal article.
///
/// Year badge, linked title, authors, venue, then DOI and notes lines only
/// when present on the record. Absent optional fields emit nothing.
pub fn card(journal: &Journal) -> Fragment {
    let mut lines = vec![
        FragmentLine::new(Role::Year, journal.year.to_string()),
        title_line(&journal.title, journal.link.as_deref()),
        FragmentLine::new(Role::Authors, journal.authors.clone()),
        FragmentLine::new(Role::Venue, journal.journal.clone()),
    ];

    push_optionals(&mut lines, journal);

    Fragment { lines }
}

/// Render the compact row presentation of any record.
///
/// Bold title, `(year). authors. venue.` metadata, DOI/notes for journal
/// records, and a trailing `[link]` tag only when the record carries a link.
/// The venue field is the category-specific one.
pub fn row(record: Record<'_>) -> Fragment {
    let mut lines = vec![
        FragmentLine::new(Role::Title, record.title()),
        FragmentLine::new(
            Role::Meta,
            format!(
                "({}). {}. {}.",
                record.year(),
                record.authors(),
                record.venue()
            ),
        ),
    ];

    if let Record::Journal(journal) = record {
        push_optionals(&mut lines, journal);
    }

    if let Some(link) = record.link() {
        lines.push(FragmentLine::linked(Role::Link, "[link]", link));
    }

    Fragment { lines }
}

fn title_line(title: &str, link: Option<&str>) -> FragmentLine {
    match link {
        Some(link) => FragmentLine::linked(Role::Title, title, link),
        None => FragmentLine::new(Role::Title, title),
    }
}

fn push_optionals(lines: &mut Vec<FragmentLine>, journal: &Journal) {
    if let Some(ref doi) = journal.doi {
        lines.push(FragmentLine::linked(
            Role::Doi,
            format!("DOI: {doi}"),
            format!("https://doi.org/{doi}"),
        ));
    }
    if let Some(ref notes) = journal.notes {
        lines.push(FragmentLine::new(Role::Notes, notes.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Abstract, Book, PopularScience, Thesis};

    fn journal(doi: Option<&str>, notes: Option<&str>) -> Journal {
        Journal {
            title: "Coastal upwelling revisited".to_string(),
            authors: "Soler, A.".to_string(),
            year: 2021,
            link: Some("https://example.org/paper".to_string()),
            journal: "Ocean Science".to_string(),
            doi: doi.map(String::from),
            notes: notes.map(String::from),
            high_impact: true,
        }
    }

    #[test]
    fn card_emits_doi_and_notes_when_present() {
        let fragment = card(&journal(Some("10.1000/xyz"), Some("Editor's pick")));

        let doi = fragment.line(Role::Doi).unwrap();
        assert_eq!(doi.text, "DOI: 10.1000/xyz");
        assert_eq!(doi.href.as_deref(), Some("https://doi.org/10.1000/xyz"));
        assert_eq!(fragment.line(Role::Notes).unwrap().text, "Editor's pick");
    }

    #[test]
    fn card_omits_absent_optionals_entirely() {
        let fragment = card(&journal(None, None));

        assert!(!fragment.has(Role::Doi));
        assert!(!fragment.has(Role::Notes));
        // The four base lines remain.
        assert_eq!(fragment.lines.len(), 4);
    }

    #[test]
    fn row_matches_card_on_optional_emission() {
        let with = row(Record::Journal(&journal(Some("10.1000/xyz"), Some("n"))));
        let without = row(Record::Journal(&journal(None, None)));

        assert!(with.has(Role::Doi));
        assert!(with.has(Role::Notes));
        assert!(!without.has(Role::Doi));
        assert!(!without.has(Role::Notes));
    }

    #[test]
    fn card_title_carries_the_record_link() {
        let fragment = card(&journal(None, None));

        let title = fragment.line(Role::Title).unwrap();
        assert_eq!(title.text, "Coastal upwelling revisited");
        assert_eq!(title.href.as_deref(), Some("https://example.org/paper"));
    }

    #[test]
    fn row_link_tag_only_when_record_has_a_link() {
        let linked = Book {
            title: "T".to_string(),
            authors: "A".to_string(),
            year: 2017,
            link: Some("https://example.org/book".to_string()),
            publisher: "P".to_string(),
        };
        let unlinked = Book { link: None, ..linked.clone() };

        assert!(row(Record::Book(&linked)).has(Role::Link));
        assert!(!row(Record::Book(&unlinked)).has(Role::Link));
    }

    #[test]
    fn row_uses_the_category_venue_field() {
        let pop = PopularScience {
            title: "T".to_string(),
            authors: "A".to_string(),
            year: 2023,
            link: None,
            publication: "Science Weekly".to_string(),
        };
        let abs = Abstract {
            title: "T".to_string(),
            authors: "A".to_string(),
            year: 2022,
            link: None,
            conference: "EGU".to_string(),
        };
        let thesis = Thesis {
            title: "T".to_string(),
            authors: "A".to_string(),
            year: 2014,
            link: None,
            institution: "University of Lisbon".to_string(),
        };

        assert!(row(Record::PopularScience(&pop))
            .line(Role::Meta)
            .unwrap()
            .text
            .ends_with("Science Weekly."));
        assert!(row(Record::Abstract(&abs))
            .line(Role::Meta)
            .unwrap()
            .text
            .ends_with("EGU."));
        assert!(row(Record::Thesis(&thesis))
            .line(Role::Meta)
            .unwrap()
            .text
            .ends_with("University of Lisbon."));
    }
}
