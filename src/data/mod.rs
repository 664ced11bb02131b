//! Publication data: record types, providers, and the load pipeline.

mod provider;
mod records;
mod store;

pub use provider::{DataProvider, DirProvider, HttpProvider};
pub use records::{Abstract, Book, Category, Journal, PopularScience, Record, Thesis};
pub use store::PublicationStore;
