use crate::error::{Result, ScoutError};
use crate::models::Listing;
use crate::providers::file::parse_listings;
use crate::providers::traits::ListingProvider;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Listings served as a JSON array by a remote API
pub struct HttpProvider {
    client: Client,
    url: String,
}

impl HttpProvider {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("rental-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ScoutError::http(&url, e))?;

        Ok(Self { client, url })
    }

    /// Use a preconfigured client (proxies, TLS, headers)
    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ListingProvider for HttpProvider {
    async fn listings(&self) -> Result<Vec<Listing>> {
        debug!("Fetching URL: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ScoutError::http(&self.url, e))?;

        if !response.status().is_success() {
            warn!("Listings API returned status: {}", response.status());
            return Err(ScoutError::http(&self.url, response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScoutError::http(&self.url, e))?;
        debug!("Downloaded {} bytes", body.len());

        let listings = parse_listings(&body, &self.url)?;
        info!("✅ Fetched {} listings from {}", listings.len(), self.url);
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockCatalog;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer a single request with `status` and `body`, return the URL
    async fn serve_once(status: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/listings", addr)
    }

    fn local_provider(url: &str) -> HttpProvider {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpProvider::with_client(url, client)
    }

    #[tokio::test]
    async fn test_fetches_listings() {
        let body = serde_json::to_string(&MockCatalog::catalog()).unwrap();
        let url = serve_once("200 OK", body).await;

        let listings = local_provider(&url).listings().await.unwrap();
        assert_eq!(listings, MockCatalog::catalog());
    }

    #[tokio::test]
    async fn test_server_error_status_is_http_error() {
        let url = serve_once("500 Internal Server Error", "{}".to_string()).await;

        let err = local_provider(&url).listings().await.unwrap_err();
        match err {
            ScoutError::Http { url: failed, reason } => {
                assert_eq!(failed, url);
                assert!(reason.contains("500"), "got {}", reason);
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_records_are_rejected() {
        let url = serve_once(
            "200 OK",
            r#"[{"id": 1, "title": " ", "price": 100, "location": "Sfax", "type": "room"}]"#
                .to_string(),
        )
        .await;

        let err = local_provider(&url).listings().await.unwrap_err();
        assert!(matches!(err, ScoutError::InvalidListing { id: 1, .. }));
    }
}
