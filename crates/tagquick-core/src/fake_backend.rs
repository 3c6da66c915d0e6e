//! In-process tag server for tests.
//!
//! Speaks the same two endpoints as the gallery server and applies a toggle
//! the way it does: each target's tag set gets the symmetric difference with
//! the toggled tag, and the whole catalog is returned.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use tokio::sync::RwLock;

use crate::catalog::{Catalog, ToggleRequest};

#[derive(Default)]
struct Inner {
    catalog: RwLock<Catalog>,
    malformed: AtomicBool,
    requests: AtomicUsize,
}

/// Shared handle to the fake server's state
#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Arc<Inner>,
}

impl FakeBackend {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(Inner {
                catalog: RwLock::new(catalog),
                ..Default::default()
            }),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/tags/", get(get_catalog))
            .route("/api/tags/{tag}/", put(toggle_tag))
            .with_state(self.clone())
    }

    /// Bind an ephemeral local port and serve on the current runtime
    pub async fn serve(&self) -> std::io::Result<SocketAddr> {
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await?;
        let addr = listener.local_addr()?;
        let app = self.router();
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "fake tag backend stopped");
            }
        });
        Ok(addr)
    }

    pub async fn catalog(&self) -> Catalog {
        self.inner.catalog.read().await.clone()
    }

    pub async fn set_catalog(&self, catalog: Catalog) {
        *self.inner.catalog.write().await = catalog;
    }

    /// Answer every request with a body that is not a catalog
    pub fn set_malformed(&self, malformed: bool) {
        self.inner.malformed.store(malformed, Ordering::SeqCst);
    }

    /// Number of API requests served so far
    pub fn requests(&self) -> usize {
        self.inner.requests.load(Ordering::SeqCst)
    }

    fn respond(&self, catalog: Catalog) -> Response {
        if self.inner.malformed.load(Ordering::SeqCst) {
            return (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                "<html>not json</html>",
            )
                .into_response();
        }
        Json(catalog).into_response()
    }
}

/// Flip `tag` in each target's tag list
pub fn apply_toggle(catalog: &mut Catalog, tag: &str, targets: &[String]) {
    for target in targets {
        let tags = catalog.targets.entry(target.clone()).or_default();
        if let Some(pos) = tags.iter().position(|t| t == tag) {
            tags.remove(pos);
        } else {
            tags.push(tag.to_string());
        }
    }
}

async fn get_catalog(State(backend): State<FakeBackend>) -> Response {
    backend.inner.requests.fetch_add(1, Ordering::SeqCst);
    let catalog = backend.catalog().await;
    backend.respond(catalog)
}

async fn toggle_tag(
    State(backend): State<FakeBackend>,
    Path(tag): Path<String>,
    Json(req): Json<ToggleRequest>,
) -> Response {
    backend.inner.requests.fetch_add(1, Ordering::SeqCst);
    let catalog = {
        let mut catalog = backend.inner.catalog.write().await;
        apply_toggle(&mut catalog, &tag, &req.targets);
        catalog.clone()
    };
    backend.respond(catalog)
}
