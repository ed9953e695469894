use super::data_uri::decode_data_uri;
use super::error::InfrastructureError;
use reqwest::Client;

/// Loads colouring-page artwork from an http(s) URL or an inline data URI.
pub struct DefaultExternalImageFetcher {
    client: Client,
}

impl DefaultExternalImageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn fetch_image_from_url_impl(&self, url: &str) -> Result<Vec<u8>, InfrastructureError> {
        if url.starts_with("data:") {
            return decode_data_uri(url);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(InfrastructureError::DecodingError(format!("Unsupported image source: {}", url)));
        }

        tracing::debug!(url = %url, "fetching colouring page");
        let response = self.client.get(url).send().await.map_err(InfrastructureError::ReqwestError)?;
        let status = response.status();
        if !status.is_success() {
            return Err(InfrastructureError::ExternalApiError(format!(
                "image fetch from {} returned {}",
                url, status
            )));
        }
        Ok(response.bytes().await.map_err(InfrastructureError::ReqwestError)?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_inline_data_uri_skips_network() {
        let fetcher = DefaultExternalImageFetcher::new(Client::new());
        let bytes = fetcher.fetch_image_from_url_impl("data:image/png;base64,AQID").await.unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_fetch_rejects_unknown_scheme() {
        let fetcher = DefaultExternalImageFetcher::new(Client::new());
        let result = fetcher.fetch_image_from_url_impl("ftp://example.com/pharaoh.png").await;
        assert!(matches!(result, Err(InfrastructureError::DecodingError(_))));
    }
}
