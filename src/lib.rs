//! Folio - a terminal-based academic portfolio viewer.
//!
//! Folio renders a curated set of publication records into a filterable
//! grid/list browser and drives a field-photo gallery with a paged carousel
//! and a full-screen lightbox, all inside the terminal.
//!
//! # Features
//!
//! - Five publication categories loaded from JSON resources
//! - Card grid and compact list views with year and impact filters
//! - Bounded carousel and cyclic lightbox over the gallery
//! - Local directory or HTTP data providers
//! - Gruvbox color themes
//! - Clipboard export of the visible citations
//!
//! # Example
//!
//! ```ignore
//! use folio::data::{DirProvider, PublicationStore};
//!
//! // Load the five publication resources from a data directory
//! let store = PublicationStore::load(&DirProvider::new("data"));
//! println!("{} journal articles", store.journals.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod gallery;
pub mod publications;
pub mod ui;
pub mod util;

pub use error::{FolioError, Result};
