use std::sync::Arc;

use axum::Router;
use skincircuit_core::config::AppConfig;
use skincircuit_core::{Advisor, ApplicationError};
use tracing::info;

use crate::{api, health, pages};

pub struct Application {
    pub config: AppConfig,
    pub advisor: Arc<Advisor>,
}

impl Application {
    /// API and health routes first; everything else falls through to the
    /// frontend pages and static files. A known path hit with the wrong
    /// method gets the same 404 as an unknown path.
    pub fn router(&self) -> Router {
        Router::new()
            .merge(api::router(self.advisor.clone()))
            .merge(health::router(self.advisor.clone()))
            .merge(pages::router(&self.config.server.frontend_dir))
            .method_not_allowed_fallback(pages::not_found)
    }
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, ApplicationError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let advisor = Advisor::load(&config.catalog)?;
    info!(
        event_name = "system.bootstrap.tables_ready",
        correlation_id = "bootstrap",
        categories = advisor.catalog().len(),
        "reference tables ready"
    );

    Ok(Application { config, advisor: Arc::new(advisor) })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use skincircuit_core::config::{AppConfig, ConfigOverrides, LoadOptions};
    use skincircuit_core::ApplicationError;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::bootstrap::{bootstrap_with_config, Application};

    fn bootstrap(options: LoadOptions) -> Result<Application, ApplicationError> {
        bootstrap_with_config(AppConfig::load(options)?)
    }

    fn config_with_frontend(dir: &TempDir) -> AppConfig {
        let mut config = AppConfig::default();
        config.server.frontend_dir = dir.path().to_path_buf();
        config
    }

    #[test]
    fn bootstrap_fails_fast_on_missing_catalog_file() {
        let result = bootstrap(LoadOptions {
            overrides: ConfigOverrides {
                catalog_path: Some(PathBuf::from("/nonexistent/skincircuit-catalog.toml")),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        });

        assert!(matches!(result, Err(ApplicationError::Catalog(_))));
    }

    #[test]
    fn bootstrap_rejects_invalid_catalog_extension() {
        let result = bootstrap(LoadOptions {
            overrides: ConfigOverrides {
                catalog_path: Some(PathBuf::from("catalog.json")),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        });

        let message = result.err().expect("error").to_string();
        assert!(message.contains("catalog.path"));
    }

    #[tokio::test]
    async fn composed_router_serves_api_health_and_pages() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("login.html"), "<h1>login</h1>").expect("write login");
        let app = bootstrap_with_config(config_with_frontend(&dir)).expect("bootstrap");

        let health = app
            .router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request"))
            .await
            .expect("health response");
        assert_eq!(health.status(), StatusCode::OK);

        let chat = app
            .router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({ "text": "hello" }).to_string()))
                    .expect("request"),
            )
            .await
            .expect("chat response");
        assert_eq!(chat.status(), StatusCode::OK);
        let bytes = to_bytes(chat.into_body(), usize::MAX).await.expect("body");
        let payload: Value = serde_json::from_slice(&bytes).expect("json");
        assert!(payload["reply"].as_str().map(|reply| reply.starts_with("Hi, ")).unwrap_or(false));

        let login = app
            .router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
            .await
            .expect("page response");
        assert_eq!(login.status(), StatusCode::OK);

        let missing = app
            .router()
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).expect("request"))
            .await
            .expect("fallback response");
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unmatched_methods_reach_the_not_found_handler() {
        let dir = TempDir::new().expect("tempdir");
        let app = bootstrap_with_config(config_with_frontend(&dir)).expect("bootstrap");

        let cases = [("POST", "/api/nope"), ("DELETE", "/whatever"), ("GET", "/api/chat")];
        for (method, uri) in cases {
            let request =
                Request::builder().method(method).uri(uri).body(Body::empty()).expect("request");
            let response = app.router().oneshot(request).await.expect("fallback response");

            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
            let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
            assert_eq!(String::from_utf8_lossy(&bytes), format!("404 Not Found: {uri}"));
        }
    }
}
