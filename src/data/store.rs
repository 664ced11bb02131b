//! Publication store and the all-or-nothing load pipeline.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::data::{Abstract, Book, Category, DataProvider, Journal, PopularScience, Thesis};
use crate::error::{FolioError, Result};

/// The five publication collections.
///
/// Either fully populated from one successful load or fully empty; never
/// partial. Collections keep their source order.
#[derive(Debug, Clone, Default)]
pub struct PublicationStore {
    /// Journal articles.
    pub journals: Vec<Journal>,
    /// Books and chapters.
    pub books: Vec<Book>,
    /// Popular science articles.
    pub popular_science: Vec<PopularScience>,
    /// Conference abstracts.
    pub abstracts: Vec<Abstract>,
    /// Doctoral thesis, if any.
    pub thesis: Option<Thesis>,
}

impl PublicationStore {
    /// Load all five resources from the provider.
    ///
    /// The five fetches run concurrently and are joined together before any
    /// decoding: if any fetch fails or yields undecodable content, the whole
    /// load is treated as failed and the returned store is empty. A missing
    /// thesis resource is not a failure. Failures are logged, never surfaced.
    pub fn load(provider: &dyn DataProvider) -> Self {
        match Self::try_load(provider) {
            Ok(store) => {
                tracing::info!(
                    journals = store.journals.len(),
                    books = store.books.len(),
                    popular_science = store.popular_science.len(),
                    abstracts = store.abstracts.len(),
                    thesis = store.thesis.is_some(),
                    "Publications data loaded"
                );
                store
            }
            Err(e) => {
                tracing::error!("Error loading publications data: {e}");
                Self::default()
            }
        }
    }

    fn try_load(provider: &dyn DataProvider) -> Result<Self> {
        let freshness = freshness_token();

        // One fetch per resource, all joined before any result is used.
        let raw: [Result<Option<String>>; 5] = std::thread::scope(|s| {
            Category::ALL
                .map(|category| s.spawn(move || provider.fetch(category, freshness)))
                .map(|handle| match handle.join() {
                    Ok(result) => result,
                    Err(_) => Err(FolioError::fetch("load", "fetch worker panicked")),
                })
        });
        let [journals, books, popular_science, abstracts, thesis] = raw;

        Ok(Self {
            journals: decode_list(Category::Journals, journals?)?,
            books: decode_list(Category::Books, books?)?,
            popular_science: decode_list(Category::PopularScience, popular_science?)?,
            abstracts: decode_list(Category::Abstracts, abstracts?)?,
            thesis: decode_thesis(thesis?)?,
        })
    }

    /// Number of records in a category.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Journals => self.journals.len(),
            Category::Books => self.books.len(),
            Category::PopularScience => self.popular_science.len(),
            Category::Abstracts => self.abstracts.len(),
            Category::Thesis => usize::from(self.thesis.is_some()),
        }
    }
}

fn decode_list<T: serde::de::DeserializeOwned>(
    category: Category,
    raw: Option<String>,
) -> Result<Vec<T>> {
    let name = category.resource();
    let raw = raw.ok_or_else(|| FolioError::fetch(name, "resource not found"))?;
    serde_json::from_str(&raw).map_err(|e| FolioError::decode(name, e))
}

fn decode_thesis(raw: Option<String>) -> Result<Option<Thesis>> {
    match raw {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map_err(|e| FolioError::decode(Category::Thesis.resource(), e)),
    }
}

/// Freshness token passed to providers so a caching layer between the viewer
/// and the data source cannot serve stale content.
fn freshness_token() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
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

    fn write_full_set(dir: &Path) {
        write(
            dir,
            "journals",
            r#"[
                {"title": "A", "authors": "X", "year": 2021, "journal": "J1",
                 "doi": "10.1000/a", "highImpact": true, "link": "https://example.org/a"},
                {"title": "B", "authors": "Y", "year": 2018, "journal": "J2",
                 "highImpact": false}
            ]"#,
        );
        write(
            dir,
            "books",
            r#"[{"title": "C", "authors": "X", "year": 2019, "publisher": "P"}]"#,
        );
        write(
            dir,
            "popular-science",
            r#"[{"title": "D", "authors": "X", "year": 2022, "publication": "Mag"}]"#,
        );
        write(
            dir,
            "abstracts",
            r#"[{"title": "E", "authors": "X", "year": 2020, "conference": "Conf"}]"#,
        );
        write(
            dir,
            "thesis",
            r#"{"title": "F", "authors": "X", "year": 2015, "institution": "Uni"}"#,
        );
    }

    #[test]
    fn load_populates_all_collections() {
        let dir = tempfile::tempdir().unwrap();
        write_full_set(dir.path());

        let store = PublicationStore::load(&DirProvider::new(dir.path()));

        assert_eq!(store.count(Category::Journals), 2);
        assert_eq!(store.count(Category::Books), 1);
        assert_eq!(store.count(Category::PopularScience), 1);
        assert_eq!(store.count(Category::Abstracts), 1);
        assert_eq!(store.count(Category::Thesis), 1);
        // Source order is preserved.
        assert_eq!(store.journals[0].title, "A");
        assert_eq!(store.journals[1].title, "B");
    }

    #[test]
    fn missing_required_resource_empties_the_store() {
        let dir = tempfile::tempdir().unwrap();
        write_full_set(dir.path());
        fs::remove_file(dir.path().join("books.json")).unwrap();

        let store = PublicationStore::load(&DirProvider::new(dir.path()));

        for category in Category::ALL {
            assert_eq!(store.count(category), 0, "{:?}", category);
        }
    }

    #[test]
    fn undecodable_resource_empties_the_store() {
        let dir = tempfile::tempdir().unwrap();
        write_full_set(dir.path());
        write(dir.path(), "journals", "not json at all");

        let store = PublicationStore::load(&DirProvider::new(dir.path()));

        for category in Category::ALL {
            assert_eq!(store.count(category), 0, "{:?}", category);
        }
    }

    #[test]
    fn missing_thesis_is_not_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        write_full_set(dir.path());
        fs::remove_file(dir.path().join("thesis.json")).unwrap();

        let store = PublicationStore::load(&DirProvider::new(dir.path()));

        assert_eq!(store.count(Category::Journals), 2);
        assert!(store.thesis.is_none());
    }

    #[test]
    fn null_thesis_decodes_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        write_full_set(dir.path());
        write(dir.path(), "thesis", "null");

        let store = PublicationStore::load(&DirProvider::new(dir.path()));

        assert_eq!(store.count(Category::Thesis), 0);
        assert_eq!(store.count(Category::Abstracts), 1);
    }
}
