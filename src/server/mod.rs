//! Local server for the generated site
//!
//! Serves `public/` as is. Post pages that were not generated are rendered
//! on first request; unknown posts redirect to the listing.

use anyhow::Result;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::ContentLoader;
use crate::generator::{post_output_path, write_file};
use crate::source::ContentSource;
use crate::templates::TemplateRenderer;
use crate::Site;

/// Server state
struct ServerState {
    public_dir: PathBuf,
    renderer: TemplateRenderer,
    source: Arc<dyn ContentSource>,
}

/// Start the server
pub async fn start(site: &Site, source: Arc<dyn ContentSource>, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState {
        public_dir: site.public_dir.clone(),
        renderer: TemplateRenderer::new(&site.config)?,
        source,
    });

    let app = Router::new()
        .fallback(fallback_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Serve generated files, rendering missing post pages on demand
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    if let Some(uid) = post_uid(request.uri().path()) {
        let generated = post_output_path(&state.public_dir, uid).filter(|p| p.exists());
        if generated.is_none() {
            let uid = uid.to_string();
            return serve_post(&state, &uid).await;
        }
    }

    let mut service = ServeDir::new(&state.public_dir).append_index_html_on_directories(true);
    match service.try_call(request).await {
        Ok(response) => response.into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
    }
}

/// Render a post that has no generated page yet
async fn serve_post(state: &ServerState, uid: &str) -> Response {
    let loader = ContentLoader::new(state.source.as_ref());

    match loader.fetch_detail(uid).await {
        Ok(Some(post)) => {
            let html = state.renderer.render_post(&post);
            if let Some(path) = post_output_path(&state.public_dir, uid) {
                if let Err(e) = write_file(&path, &html) {
                    tracing::warn!("Failed to store rendered post {}: {}", uid, e);
                }
            }
            tracing::info!("Rendered post {} on demand", uid);
            Html(html).into_response()
        }
        Ok(None) => {
            tracing::debug!("Post {} not found, redirecting to listing", uid);
            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::error!("Failed to load post {}: {}", uid, e);
            (StatusCode::BAD_GATEWAY, "Failed to load post").into_response()
        }
    }
}

/// Extract the uid from a `/post/<uid>` path
fn post_uid(path: &str) -> Option<&str> {
    let uid = path.strip_prefix("/post/")?;
    let uid = uid
        .strip_suffix("/index.html")
        .unwrap_or(uid)
        .trim_end_matches('/');
    crate::generator::is_safe_uid(uid).then_some(uid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::source::memory::{post, MemorySource};
    use axum::http::header::LOCATION;

    fn state(dir: &std::path::Path, source: MemorySource) -> ServerState {
        let config = SiteConfig {
            timezone: "UTC".to_string(),
            ..Default::default()
        };
        ServerState {
            public_dir: dir.to_path_buf(),
            renderer: TemplateRenderer::new(&config).unwrap(),
            source: Arc::new(source),
        }
    }

    #[test]
    fn test_post_uid() {
        assert_eq!(post_uid("/post/como-utilizar-hooks"), Some("como-utilizar-hooks"));
        assert_eq!(post_uid("/post/hooks/"), Some("hooks"));
        assert_eq!(post_uid("/post/hooks/index.html"), Some("hooks"));
        assert_eq!(post_uid("/post/"), None);
        assert_eq!(post_uid("/post/../secret"), None);
        assert_eq!(post_uid("/images/logo.svg"), None);
    }

    #[tokio::test]
    async fn test_unknown_post_redirects_home() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(dir.path(), MemorySource::default());

        let response = serve_post(&state, "unknown-id").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/");
    }

    #[tokio::test]
    async fn test_post_rendered_on_demand_and_stored() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(dir.path(), MemorySource::default().with_document(post("hooks", "text")));

        let response = serve_post(&state, "hooks").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(dir.path().join("post/hooks/index.html").exists());
    }

    #[tokio::test]
    async fn test_malformed_post_is_bad_gateway() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = post("hooks", "text");
        doc.data.title = None;
        let state = state(dir.path(), MemorySource::default().with_document(doc));

        let response = serve_post(&state, "hooks").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
