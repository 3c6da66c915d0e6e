mod http;

use async_trait::async_trait;

use crate::catalog::{Catalog, ImageId};
use crate::Result;

pub use http::HttpTagApi;

/// The two tag endpoints the gallery client depends on
///
/// Both return the complete catalog as it stands after the call.
#[async_trait]
pub trait TagApi: Send + Sync {
    /// `GET /api/tags/`
    async fn fetch_catalog(&self) -> Result<Catalog>;

    /// `PUT /api/tags/{tag}/` with the targets whose membership to flip
    async fn toggle_tag(&self, tag: &str, targets: &[ImageId]) -> Result<Catalog>;
}

#[async_trait]
impl<T: TagApi + ?Sized> TagApi for std::sync::Arc<T> {
    async fn fetch_catalog(&self) -> Result<Catalog> {
        (**self).fetch_catalog().await
    }

    async fn toggle_tag(&self, tag: &str, targets: &[ImageId]) -> Result<Catalog> {
        (**self).toggle_tag(tag, targets).await
    }
}
