pub mod advisor;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod errors;
pub mod recommend;
pub mod requests;
pub mod routine;

pub use advisor::Advisor;
pub use catalog::{CatalogError, CatalogIndex, ProductRef, GENERAL_SKIN_TYPE};
pub use classify::{
    Classification, ClassificationRule, IntentClassifier, MatchedRule, RuleTable, RuleTest,
};
pub use errors::{ApplicationError, InterfaceError, ValidationError};
pub use recommend::{resolve, resolve_many, CategoryLinks, LinksByCategory};
pub use requests::{ChatRequest, RecommendRequest, RecommendResponse, RoutineRequest};
pub use routine::{Routine, RoutineBuilder, RoutineStep, TimeOfDay};
