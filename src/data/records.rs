//! Publication record types.
//!
//! Five category shapes share a common core (title, authors, year, optional
//! link) and each adds its own venue field. Field names in the JSON resources
//! are camelCase.

use serde::Deserialize;

/// Publication category, one per data resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Peer-reviewed journal articles.
    Journals,
    /// Books and book chapters.
    Books,
    /// Popular science articles.
    PopularScience,
    /// Conference abstracts.
    Abstracts,
    /// Doctoral thesis.
    Thesis,
}

impl Category {
    /// All categories, in page order.
    pub const ALL: [Category; 5] = [
        Category::Journals,
        Category::Books,
        Category::PopularScience,
        Category::Abstracts,
        Category::Thesis,
    ];

    /// Logical resource name used by data providers.
    pub fn resource(self) -> &'static str {
        match self {
            Category::Journals => "journals",
            Category::Books => "books",
            Category::PopularScience => "popular-science",
            Category::Abstracts => "abstracts",
            Category::Thesis => "thesis",
        }
    }

    /// Section heading shown in the UI.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Journals => "Journal Articles",
            Category::Books => "Books & Chapters",
            Category::PopularScience => "Popular Science",
            Category::Abstracts => "Conference Abstracts",
            Category::Thesis => "Thesis",
        }
    }
}

/// A peer-reviewed journal article.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journal {
    /// Article title.
    pub title: String,
    /// Author list, preformatted.
    pub authors: String,
    /// Publication year.
    pub year: i32,
    /// Link to the article.
    #[serde(default)]
    pub link: Option<String>,
    /// Journal name.
    pub journal: String,
    /// DOI, without the resolver prefix.
    #[serde(default)]
    pub doi: Option<String>,
    /// Free-form notes (awards, corrections, ...).
    #[serde(default)]
    pub notes: Option<String>,
    /// Marks the article for the high-impact filter.
    #[serde(default)]
    pub high_impact: bool,
}

/// A book or book chapter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Book {
    /// Title.
    pub title: String,
    /// Author list, preformatted.
    pub authors: String,
    /// Publication year.
    pub year: i32,
    /// Link to the publisher page.
    #[serde(default)]
    pub link: Option<String>,
    /// Publisher name.
    pub publisher: String,
}

/// A popular science article.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PopularScience {
    /// Title.
    pub title: String,
    /// Author list, preformatted.
    pub authors: String,
    /// Publication year.
    pub year: i32,
    /// Link to the article.
    #[serde(default)]
    pub link: Option<String>,
    /// Magazine or outlet name.
    pub publication: String,
}

/// A conference abstract.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Abstract {
    /// Title.
    pub title: String,
    /// Author list, preformatted.
    pub authors: String,
    /// Presentation year.
    pub year: i32,
    /// Link to the abstract.
    #[serde(default)]
    pub link: Option<String>,
    /// Conference name.
    pub conference: String,
}

/// A doctoral thesis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Thesis {
    /// Title.
    pub title: String,
    /// Author.
    pub authors: String,
    /// Defense year.
    pub year: i32,
    /// Link to the full text.
    #[serde(default)]
    pub link: Option<String>,
    /// Awarding institution.
    pub institution: String,
}

/// A category-tagged borrow of any publication record.
///
/// The renderer matches exhaustively on this, so adding a category is a
/// compile error until every presentation handles it.
#[derive(Debug, Clone, Copy)]
pub enum Record<'a> {
    /// Journal article.
    Journal(&'a Journal),
    /// Book or chapter.
    Book(&'a Book),
    /// Popular science article.
    PopularScience(&'a PopularScience),
    /// Conference abstract.
    Abstract(&'a Abstract),
    /// Doctoral thesis.
    Thesis(&'a Thesis),
}

impl Record<'_> {
    /// Record title.
    pub fn title(&self) -> &str {
        match self {
            Record::Journal(r) => &r.title,
            Record::Book(r) => &r.title,
            Record::PopularScience(r) => &r.title,
            Record::Abstract(r) => &r.title,
            Record::Thesis(r) => &r.title,
        }
    }

    /// Author list.
    pub fn authors(&self) -> &str {
        match self {
            Record::Journal(r) => &r.authors,
            Record::Book(r) => &r.authors,
            Record::PopularScience(r) => &r.authors,
            Record::Abstract(r) => &r.authors,
            Record::Thesis(r) => &r.authors,
        }
    }

    /// Publication year.
    pub fn year(&self) -> i32 {
        match self {
            Record::Journal(r) => r.year,
            Record::Book(r) => r.year,
            Record::PopularScience(r) => r.year,
            Record::Abstract(r) => r.year,
            Record::Thesis(r) => r.year,
        }
    }

    /// Optional link.
    pub fn link(&self) -> Option<&str> {
        match self {
            Record::Journal(r) => r.link.as_deref(),
            Record::Book(r) => r.link.as_deref(),
            Record::PopularScience(r) => r.link.as_deref(),
            Record::Abstract(r) => r.link.as_deref(),
            Record::Thesis(r) => r.link.as_deref(),
        }
    }

    /// Category-specific venue field.
    pub fn venue(&self) -> &str {
        match self {
            Record::Journal(r) => &r.journal,
            Record::Book(r) => &r.publisher,
            Record::PopularScience(r) => &r.publication,
            Record::Abstract(r) => &r.conference,
            Record::Thesis(r) => &r.institution,
        }
    }

    /// Category of this record.
    pub fn category(&self) -> Category {
        match self {
            Record::Journal(_) => Category::Journals,
            Record::Book(_) => Category::Books,
            Record::PopularScience(_) => Category::PopularScience,
            Record::Abstract(_) => Category::Abstracts,
            Record::Thesis(_) => Category::Thesis,
        }
    }
}
