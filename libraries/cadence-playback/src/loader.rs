//! Catalog loading over HTTP

use async_trait::async_trait;
use cadence_core::{Catalog, CatalogSource, CoreError};
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

/// Catalog source that fetches the JSON payload over HTTP
///
/// Works natively and in the browser (reqwest uses `fetch` on wasm32).
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    http: Client,
    url: Url,
}

impl HttpCatalogSource {
    /// Create a source for an absolute URL
    pub fn new(url: &str) -> cadence_core::Result<Self> {
        let url = Url::parse(url).map_err(|e| {
            CoreError::invalid_input(format!("Invalid catalog URL '{}': {}", url, e))
        })?;
        Ok(Self {
            http: Client::new(),
            url,
        })
    }

    /// Create a source for `path` relative to `base` (the page URL in a browser)
    pub fn relative_to(base: &str, path: &str) -> cadence_core::Result<Self> {
        let base = Url::parse(base)
            .map_err(|e| CoreError::invalid_input(format!("Invalid base URL '{}': {}", base, e)))?;
        let url = base.join(path).map_err(|e| {
            CoreError::invalid_input(format!("Invalid catalog path '{}': {}", path, e))
        })?;
        Ok(Self {
            http: Client::new(),
            url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalogSource {
    async fn load(&self) -> cadence_core::Result<Catalog> {
        debug!(url = %self.url, "Fetching catalog");

        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| CoreError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::network(format!(
                "Catalog request returned {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CoreError::network(e.to_string()))?;

        let catalog = Catalog::from_json(&body)?;
        info!(url = %self.url, songs = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_path_against_page() {
        let source = HttpCatalogSource::relative_to(
            "https://example.com/player/index.html",
            "data/songs.json",
        )
        .unwrap();

        assert_eq!(source.url().as_str(), "https://example.com/player/data/songs.json");
    }

    #[test]
    fn rejects_relative_url_without_base() {
        let err = HttpCatalogSource::new("data/songs.json").unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }
}
