//! Catalog query engine: substring search and stable column sort over a
//! fixed set of product categories.

use std::cmp::Ordering;
use std::collections::HashSet;

use aerofast_core::types::{ProductCategory, SortDirection, SortField};

use crate::data::standard_categories;
use crate::error::CatalogError;
use crate::sort::SortState;

/// An immutable, id-unique list of product categories in catalog order.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<ProductCategory>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(items: Vec<ProductCategory>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// The catalog published on the site.
    pub fn standard() -> Self {
        Self {
            items: standard_categories(),
        }
    }

    pub fn items(&self) -> &[ProductCategory] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Derives filtered and ordered views of a [`Catalog`].
///
/// Every operation is a pure function of the catalog and its arguments.
#[derive(Debug, Clone)]
pub struct CatalogQueryEngine {
    catalog: Catalog,
}

impl CatalogQueryEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Categories whose name, description, summary or standard contains
    /// `query`, compared case-insensitively, in catalog order.
    ///
    /// The query is used verbatim: no trimming or tokenising. An empty
    /// query matches everything.
    pub fn filter(&self, query: &str) -> Vec<&ProductCategory> {
        if query.is_empty() {
            return self.catalog.items.iter().collect();
        }
        let needle = query.to_lowercase();
        self.catalog
            .items
            .iter()
            .filter(|item| matches_query(item, &needle))
            .collect()
    }

    /// Stable sort of `records` by `field`.
    ///
    /// Keys compare as plain strings. Equal keys keep their input order in
    /// both directions.
    pub fn sort_by<'a>(
        mut records: Vec<&'a ProductCategory>,
        field: SortField,
        direction: SortDirection,
    ) -> Vec<&'a ProductCategory> {
        let sort = SortState::new(field, direction);
        records.sort_by(|a, b| compare(a, b, sort));
        records
    }

    /// Filter then sort.
    pub fn query(&self, query: &str, sort: SortState) -> Vec<&ProductCategory> {
        let results = Self::sort_by(self.filter(query), sort.field, sort.direction);
        tracing::debug!(
            query,
            field = %sort.field,
            direction = %sort.direction,
            matches = results.len(),
            "Catalog queried"
        );
        results
    }

    /// Look up one category by id.
    pub fn get(&self, id: &str) -> Option<&ProductCategory> {
        self.catalog.items.iter().find(|item| item.id == id)
    }

    /// Like [`CatalogQueryEngine::get`], but an unknown id is an error.
    pub fn require(&self, id: &str) -> Result<&ProductCategory, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}

impl Default for CatalogQueryEngine {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

/// `needle` must already be lowercase.
fn matches_query(item: &ProductCategory, needle: &str) -> bool {
    [&item.name, &item.description, &item.summary, &item.standard]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Compare two categories the way the manifest orders them.
pub fn compare(a: &ProductCategory, b: &ProductCategory, sort: SortState) -> Ordering {
    let ordering = a.sort_key(sort.field).cmp(b.sort_key(sort.field));
    match sort.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}
