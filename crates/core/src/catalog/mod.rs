//! Product catalog reference table.
//!
//! The table maps a category key (`toner`, `serum`, ...) to per-skin-type
//! product lists. A category may carry a `general` list that is used when the
//! requested skin type has no list of its own. The table is built once at
//! startup, either from the built-in seeds or from a TOML document, and is
//! never mutated afterwards.

mod seed;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use self::seed::{CategorySeed, CATALOG_SEEDS};

/// Skin-type key of the per-category fallback list.
pub const GENERAL_SKIN_TYPE: &str = "general";

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductRef {
    pub label: String,
    pub url: String,
}

impl ProductRef {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self { label: label.into(), url: url.into() }
    }
}

/// Skin-type key to ordered product list, for one category.
pub type SkinTypeLists = BTreeMap<String, Vec<ProductRef>>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog `{origin}`: {source}")]
    Parse { origin: String, source: toml::de::Error },
    #[error("invalid catalog entry `{location}`: {reason}")]
    Invalid { location: String, reason: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    categories: BTreeMap<String, SkinTypeLists>,
}

impl CatalogIndex {
    /// Builds the index without validating it. Loaders go through
    /// [`CatalogIndex::validated`] instead.
    pub fn new(categories: BTreeMap<String, SkinTypeLists>) -> Self {
        Self { categories }
    }

    pub fn builtin() -> Self {
        Self::from_seeds(CATALOG_SEEDS)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        Self::parse(raw, "<inline>")
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogError::ReadFile { path: path.to_path_buf(), source })?;
        Self::parse(&raw, &path.display().to_string())
    }

    pub fn validated(categories: BTreeMap<String, SkinTypeLists>) -> Result<Self, CatalogError> {
        for (category, lists) in &categories {
            validate_category(category, lists)?;
        }
        Ok(Self::new(categories))
    }

    pub fn category(&self, category: &str) -> Option<&SkinTypeLists> {
        self.categories.get(category)
    }

    /// Category keys in sorted order.
    pub fn category_keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn product_count(&self) -> usize {
        self.categories.values().flat_map(BTreeMap::values).map(Vec::len).sum()
    }

    fn parse(raw: &str, origin: &str) -> Result<Self, CatalogError> {
        let categories = toml::from_str::<BTreeMap<String, SkinTypeLists>>(raw)
            .map_err(|source| CatalogError::Parse { origin: origin.to_string(), source })?;
        Self::validated(categories)
    }

    fn from_seeds(seeds: &[CategorySeed]) -> Self {
        let categories = seeds
            .iter()
            .map(|seed| {
                let lists = seed
                    .lists
                    .iter()
                    .map(|list| {
                        let products = list
                            .products
                            .iter()
                            .map(|product| ProductRef::new(product.label, product.url))
                            .collect();
                        (list.skin_type.to_string(), products)
                    })
                    .collect();
                (seed.category.to_string(), lists)
            })
            .collect();

        Self::new(categories)
    }
}

fn validate_category(category: &str, lists: &SkinTypeLists) -> Result<(), CatalogError> {
    if category.trim().is_empty() {
        return Err(invalid(category, "category key must not be empty"));
    }
    if lists.is_empty() {
        return Err(invalid(category, "category must declare at least one skin-type list"));
    }

    for (skin_type, products) in lists {
        let location = format!("{category}.{skin_type}");
        if skin_type.trim().is_empty() {
            return Err(invalid(&location, "skin-type key must not be empty"));
        }
        if products.is_empty() {
            return Err(invalid(&location, "product list must not be empty"));
        }

        for (position, product) in products.iter().enumerate() {
            let location = format!("{location}[{position}]");
            if product.label.trim().is_empty() {
                return Err(invalid(&location, "label must not be empty"));
            }
            if !product.url.starts_with("http://") && !product.url.starts_with("https://") {
                return Err(invalid(&location, "url must start with http:// or https://"));
            }
        }
    }

    Ok(())
}

fn invalid(location: &str, reason: &str) -> CatalogError {
    CatalogError::Invalid { location: location.to_string(), reason: reason.to_string() }
}
