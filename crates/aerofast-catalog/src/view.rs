//! Per-visitor catalog view-model.

use aerofast_core::types::{ProductCategory, SortField};
use serde::Serialize;

use crate::engine::CatalogQueryEngine;
use crate::sort::SortState;

/// The visitor's current search text and sort toggle.
///
/// Holds no records; every read re-derives the list from the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView {
    query: String,
    sort: SortState,
    default_sort: SortState,
}

/// Serializable picture of a [`CatalogView`] at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot {
    pub query: String,
    pub sort: SortState,
    pub count: usize,
    pub items: Vec<ProductCategory>,
}

impl CatalogView {
    /// A fresh view sorted by `default_sort` with an empty query.
    pub fn new(default_sort: SortState) -> Self {
        Self {
            query: String::new(),
            sort: default_sort,
            default_sort,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
    }

    /// Clear the search text, keeping the sort.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Clear the search text and restore the default sort.
    pub fn reset(&mut self) {
        self.query.clear();
        self.sort = self.default_sort;
    }

    pub fn results<'a>(&self, engine: &'a CatalogQueryEngine) -> Vec<&'a ProductCategory> {
        engine.query(&self.query, self.sort)
    }

    pub fn count(&self, engine: &CatalogQueryEngine) -> usize {
        self.results(engine).len()
    }

    /// True when the current query matches nothing. The page shows its
    /// "no results" state with a clear control in this case.
    pub fn is_empty(&self, engine: &CatalogQueryEngine) -> bool {
        self.count(engine) == 0
    }

    pub fn snapshot(&self, engine: &CatalogQueryEngine) -> CatalogSnapshot {
        let items: Vec<ProductCategory> = self.results(engine).into_iter().cloned().collect();
        CatalogSnapshot {
            query: self.query.clone(),
            sort: self.sort,
            count: items.len(),
            items,
        }
    }
}
