use async_trait::async_trait;
use reqwest::{Client, Response};
use url::Url;

use super::TagApi;
use crate::catalog::{Catalog, ImageId, ToggleRequest};
use crate::config::ClientConfig;
use crate::{Error, Result};

/// Tag API client over HTTP
pub struct HttpTagApi {
    config: ClientConfig,
    base: Url,
    client: Client,
}

impl HttpTagApi {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let base = config.base()?;
        let client = Self::build_client(&config)?;
        Ok(Self {
            config,
            base,
            client,
        })
    }

    fn build_client(config: &ClientConfig) -> Result<Client> {
        let mut builder = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout());

        if let Some(ref ua) = config.user_agent {
            builder = builder.user_agent(ua);
        }

        builder.build().map_err(Error::Transport)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `{base}/api/tags/`
    pub fn catalog_url(&self) -> Result<Url> {
        Ok(self.base.join("api/tags/")?)
    }

    /// `{base}/api/tags/{tag}/` with the tag percent-encoded as one segment
    pub fn toggle_url(&self, tag: &str) -> Result<Url> {
        let mut url = self.catalog_url()?;
        url.path_segments_mut()
            .map_err(|()| Error::UnsupportedBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .push(tag)
            .push("");
        Ok(url)
    }

    async fn read_catalog(response: Response) -> Result<Catalog> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status,
                url: response.url().to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl TagApi for HttpTagApi {
    async fn fetch_catalog(&self) -> Result<Catalog> {
        let url = self.catalog_url()?;
        tracing::debug!(%url, "fetching tag catalog");

        let response = self.client.get(url).send().await?;
        Self::read_catalog(response).await
    }

    async fn toggle_tag(&self, tag: &str, targets: &[ImageId]) -> Result<Catalog> {
        let url = self.toggle_url(tag)?;
        tracing::debug!(%url, tag, targets = targets.len(), "toggling tag");

        let body = ToggleRequest {
            targets: targets.to_vec(),
        };
        let response = self.client.put(url).json(&body).send().await?;
        Self::read_catalog(response).await
    }
}
