//! Hardware catalog for the Aerofast site.
//!
//! Holds the fixed list of product categories and derives the ordered,
//! filtered views the catalog section renders: free-text search over a few
//! text columns, stable sorting by one column, and the view-model that
//! tracks the visitor's current query and sort toggle.

pub mod data;
pub mod engine;
pub mod error;
pub mod sort;
pub mod view;

pub use engine::{Catalog, CatalogQueryEngine};
pub use error::CatalogError;
pub use sort::SortState;
pub use view::{CatalogSnapshot, CatalogView};
