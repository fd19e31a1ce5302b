//! Category/skin-type lookup with the `skin type -> general -> empty` fallback chain.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::catalog::{CatalogIndex, ProductRef, GENERAL_SKIN_TYPE};

/// Resolves one category for a skin type. Unknown categories and categories
/// with neither a matching nor a `general` list resolve to an empty slice.
pub fn resolve<'a>(
    catalog: &'a CatalogIndex,
    category: &str,
    skin_type: &str,
) -> &'a [ProductRef] {
    let Some(lists) = catalog.category(category) else {
        return &[];
    };

    lists
        .get(skin_type)
        .or_else(|| lists.get(GENERAL_SKIN_TYPE))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Resolves each category in request order.
pub fn resolve_many<S: AsRef<str>>(
    catalog: &CatalogIndex,
    skin_type: &str,
    categories: &[S],
) -> LinksByCategory {
    let mut links = LinksByCategory::default();

    for category in categories {
        let category = category.as_ref();
        if links.get(category).is_some() {
            continue;
        }

        let products = resolve(catalog, category, skin_type);
        debug!(
            event_name = "core.recommend.category_resolved",
            category,
            skin_type,
            product_count = products.len(),
            "category resolved"
        );
        links
            .entries
            .push(CategoryLinks { category: category.to_string(), products: products.to_vec() });
    }

    links
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryLinks {
    pub category: String,
    pub products: Vec<ProductRef>,
}

/// Ordered category -> products mapping. Serializes as a JSON object whose
/// keys follow the request order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinksByCategory {
    entries: Vec<CategoryLinks>,
}

impl LinksByCategory {
    pub fn get(&self, category: &str) -> Option<&[ProductRef]> {
        self.entries
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.products.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryLinks> {
        self.entries.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.category.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for LinksByCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.category, &entry.products)?;
        }
        map.end()
    }
}
