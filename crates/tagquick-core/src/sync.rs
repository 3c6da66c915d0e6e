use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::api::TagApi;
use crate::catalog::{Catalog, ImageId};
use crate::render::{self, RenderedView};
use crate::Result;

/// What happened to a successful response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The response replaced the cached catalog
    Applied,
    /// A newer request was issued before this one completed; the response
    /// was dropped
    Superseded,
}

impl SyncOutcome {
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

struct SyncState {
    catalog: Catalog,
    applied_seq: u64,
}

/// Keeps the client's tag catalog in step with the server
///
/// Every load and toggle takes a sequence number when it is issued. A
/// response is applied only if no newer request has been issued since, so
/// overlapping toggles resolve to the state returned for the latest one
/// rather than to whichever response arrives last.
pub struct TagSync<A> {
    api: A,
    state: RwLock<SyncState>,
    issued: AtomicU64,
}

impl<A: TagApi> TagSync<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RwLock::new(SyncState {
                catalog: Catalog::default(),
                applied_seq: 0,
            }),
            issued: AtomicU64::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the full catalog and replace the cached one
    pub async fn load(&self) -> Result<SyncOutcome> {
        let seq = self.issue();
        let result = self.api.fetch_catalog().await;
        self.complete(seq, result).await
    }

    /// Flip `tag` on every target and apply the catalog the server returns
    ///
    /// `targets` should be the selection at the moment of the call. The tag
    /// name is sent as given.
    pub async fn toggle(&self, tag: &str, targets: &[ImageId]) -> Result<SyncOutcome> {
        let seq = self.issue();
        let result = self.api.toggle_tag(tag, targets).await;
        self.complete(seq, result).await
    }

    /// Badge markup for the cached catalog and the displayed images
    pub async fn render(&self, displayed: &[ImageId]) -> RenderedView {
        render::render(&self.state.read().await.catalog, displayed)
    }

    pub async fn catalog(&self) -> Catalog {
        self.state.read().await.catalog.clone()
    }

    pub async fn all_tags(&self) -> Vec<String> {
        self.state.read().await.catalog.all_tags.clone()
    }

    /// Sequence number of the last applied response, 0 before the first
    pub async fn applied_seq(&self) -> u64 {
        self.state.read().await.applied_seq
    }

    fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn complete(&self, seq: u64, result: Result<Catalog>) -> Result<SyncOutcome> {
        let catalog = result.inspect_err(|e| {
            tracing::warn!(seq, error = %e, "tag sync request failed");
        })?;

        let mut state = self.state.write().await;
        let latest = self.issued.load(Ordering::SeqCst);
        if seq < latest {
            tracing::debug!(seq, latest, "discarding superseded tag response");
            return Ok(SyncOutcome::Superseded);
        }

        tracing::debug!(seq, tags = catalog.all_tags.len(), "applying tag catalog");
        state.catalog = catalog;
        state.applied_seq = seq;
        Ok(SyncOutcome::Applied)
    }
}
