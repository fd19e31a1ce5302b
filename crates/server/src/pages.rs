//! Frontend page routes and static assets.
//!
//! Named pages map to HTML files in the frontend directory. Any other path is
//! served from the directory itself (stylesheets, scripts, `templates/`
//! images) and falls through to a plain-text 404.

use std::path::Path;

use axum::{
    handler::HandlerWithoutStateExt,
    http::{StatusCode, Uri},
    routing::get_service,
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tracing::warn;

const PAGE_ROUTES: &[(&str, &str)] = &[
    ("/", "login.html"),
    ("/login", "login.html"),
    ("/home", "index.html"),
    ("/index", "index.html"),
    ("/quiz", "quiz.html"),
    ("/reminders", "reminders.html"),
    ("/routine", "routine.html"),
    ("/products", "products.html"),
    ("/profile", "profile.html"),
    ("/chat", "chatbot.html"),
];

pub fn router(frontend_dir: &Path) -> Router {
    let pages = PAGE_ROUTES.iter().fold(Router::new(), |router, (route, file)| {
        router.route(route, get_service(ServeFile::new(frontend_dir.join(file))))
    });

    let assets = ServeDir::new(frontend_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    pages.method_not_allowed_fallback(not_found).fallback_service(assets)
}

/// Terminal handler for every unmatched path or method.
pub(crate) async fn not_found(uri: Uri) -> (StatusCode, String) {
    warn!(event_name = "http.not_found", uri = %uri, "404 for URL");
    (StatusCode::NOT_FOUND, format!("404 Not Found: {uri}"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::pages::router;

    fn frontend() -> TempDir {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("login.html"), "<h1>login</h1>").expect("write login");
        fs::write(dir.path().join("index.html"), "<h1>home</h1>").expect("write index");
        fs::write(dir.path().join("chatbot.html"), "<h1>evi</h1>").expect("write chatbot");
        fs::create_dir(dir.path().join("templates")).expect("templates dir");
        fs::write(dir.path().join("templates").join("hero.svg"), "<svg/>").expect("write asset");
        dir
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        send(app, "GET", uri).await
    }

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, String) {
        let request =
            Request::builder().method(method).uri(uri).body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("router should respond");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn root_serves_login_page() {
        let dir = frontend();
        let (status, body) = get(router(dir.path()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<h1>login</h1>");
    }

    #[tokio::test]
    async fn named_pages_map_to_html_files() {
        let dir = frontend();
        assert_eq!(get(router(dir.path()), "/home").await.1, "<h1>home</h1>");
        assert_eq!(get(router(dir.path()), "/index").await.1, "<h1>home</h1>");
        assert_eq!(get(router(dir.path()), "/chat").await.1, "<h1>evi</h1>");
    }

    #[tokio::test]
    async fn static_assets_are_served_from_frontend_dir() {
        let dir = frontend();
        let (status, body) = get(router(dir.path()), "/templates/hero.svg").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<svg/>");
    }

    #[tokio::test]
    async fn unknown_paths_get_plain_text_404() {
        let dir = frontend();
        let (status, body) = get(router(dir.path()), "/no/such/page").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "404 Not Found: /no/such/page");
    }

    #[tokio::test]
    async fn unsupported_methods_get_plain_text_404() {
        let dir = frontend();

        let (status, body) = send(router(dir.path()), "DELETE", "/whatever").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "404 Not Found: /whatever");

        let (status, body) = send(router(dir.path()), "POST", "/login").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "404 Not Found: /login");
    }
}
