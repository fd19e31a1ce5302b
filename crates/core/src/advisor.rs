use tracing::info;

use crate::catalog::{CatalogError, CatalogIndex};
use crate::classify::{Classification, IntentClassifier};
use crate::config::CatalogConfig;
use crate::errors::ValidationError;
use crate::recommend::resolve_many;
use crate::requests::{RecommendRequest, RecommendResponse, RoutineRequest};
use crate::routine::{Routine, RoutineBuilder};

/// Owns the load-once reference tables and exposes the three core
/// operations. Built once per process and shared read-only.
#[derive(Clone, Debug)]
pub struct Advisor {
    catalog: CatalogIndex,
    classifier: IntentClassifier,
    routines: RoutineBuilder,
}

impl Advisor {
    pub fn new(catalog: CatalogIndex, classifier: IntentClassifier) -> Self {
        Self { catalog, classifier, routines: RoutineBuilder }
    }

    pub fn builtin() -> Self {
        Self::new(CatalogIndex::builtin(), IntentClassifier::builtin())
    }

    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let (catalog, source) = match &config.path {
            Some(path) => (CatalogIndex::from_path(path)?, path.display().to_string()),
            None => (CatalogIndex::builtin(), "builtin".to_string()),
        };
        let advisor = Self::new(catalog, IntentClassifier::builtin());

        info!(
            event_name = "core.advisor.loaded",
            correlation_id = "bootstrap",
            catalog_source = %source,
            categories = advisor.catalog.len(),
            products = advisor.catalog.product_count(),
            rules = advisor.classifier.table().len(),
            "reference tables loaded"
        );

        Ok(advisor)
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> Result<RecommendResponse, ValidationError> {
        request.validate()?;

        Ok(RecommendResponse {
            skin_type: request.skin_type.clone(),
            categories: request.categories.clone(),
            links_by_category: resolve_many(&self.catalog, &request.skin_type, &request.categories),
        })
    }

    pub fn chat(&self, text: &str) -> Classification {
        self.classifier.classify(text)
    }

    pub fn routine(&self, request: &RoutineRequest) -> Result<Routine, ValidationError> {
        request.validate()?;
        Ok(self.routines.build(&request.skin_type, &request.concerns))
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::builtin()
    }
}
