use crate::domain::model::{
    CompanyProfile, GalleryItem, ProductListing, QuoteRequest, ServiceListing,
};
use crate::domain::ports::{ConfigProvider, ContentGateway};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::validate_url;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

pub const COMPANY_PATH: &str = "company_details";
pub const SERVICES_PATH: &str = "services";
pub const GALLERY_PATH: &str = "gallery";
pub const PRODUCTS_PATH: &str = "products";
pub const QUOTE_REQUESTS_PATH: &str = "quote-requests";

/// `reqwest` client for the content gateway. All five endpoints hang off one base URL.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: Url,
    client: Client,
}

impl HttpGateway {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::with_client(config.gateway_base_url(), Client::new())
    }

    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        validate_url("gateway.base_url", base_url)?;

        // Url::join replaces the last segment unless the base ends with a slash
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized).map_err(|e| SiteError::InvalidConfigValueError {
            field: "gateway.base_url".to_string(),
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| SiteError::ConfigError {
                message: format!("Cannot build endpoint URL for {}: {}", path, e),
            })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SiteError::from_reqwest(path, e))?;

        tracing::debug!("API response status for {}: {}", path, response.status());

        let body = Self::read_success_body(path, response).await?;
        serde_json::from_str(&body).map_err(|e| SiteError::MalformedResponse {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the body text of a 2xx response, or a `ServerRejection` carrying the
    /// gateway's `error` field when it sent one.
    async fn read_success_body(path: &str, response: Response) -> Result<String> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SiteError::from_reqwest(path, e))?;

        if status.is_success() {
            return Ok(body);
        }

        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("error")
                    .and_then(|e| e.as_str())
                    .map(str::to_string)
            });

        tracing::warn!("Gateway rejected {} with HTTP {}", path, status.as_u16());
        Err(SiteError::ServerRejection {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait::async_trait]
impl ContentGateway for HttpGateway {
    async fn fetch_company(&self) -> Result<CompanyProfile> {
        let value: serde_json::Value = self.get_json(COMPANY_PATH).await?;
        CompanyProfile::from_gateway_value(value).map_err(|e| SiteError::MalformedResponse {
            endpoint: COMPANY_PATH.to_string(),
            message: e.to_string(),
        })
    }

    async fn fetch_services(&self) -> Result<Vec<ServiceListing>> {
        self.get_json(SERVICES_PATH).await
    }

    async fn fetch_gallery(&self) -> Result<Vec<GalleryItem>> {
        self.get_json(GALLERY_PATH).await
    }

    async fn fetch_products(&self) -> Result<Vec<ProductListing>> {
        self.get_json(PRODUCTS_PATH).await
    }

    async fn submit_quote(&self, request: &QuoteRequest) -> Result<serde_json::Value> {
        let url = self.endpoint(QUOTE_REQUESTS_PATH)?;
        tracing::debug!("Submitting quote request to: {}", url);

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| SiteError::from_reqwest(QUOTE_REQUESTS_PATH, e))?;

        tracing::debug!("Quote request response status: {}", response.status());

        let body = Self::read_success_body(QUOTE_REQUESTS_PATH, response).await?;
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Object(serde_json::Map::new()));
        }

        serde_json::from_str(&body).map_err(|e| SiteError::MalformedResponse {
            endpoint: QUOTE_REQUESTS_PATH.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn gateway(server: &MockServer) -> HttpGateway {
        HttpGateway::with_client(&server.base_url(), Client::new()).unwrap()
    }

    #[test]
    fn test_endpoint_joins_with_or_without_trailing_slash() {
        let with_slash = HttpGateway::with_client("http://pgsi.in/", Client::new()).unwrap();
        let without = HttpGateway::with_client("http://pgsi.in/api", Client::new()).unwrap();

        assert_eq!(
            with_slash.endpoint(SERVICES_PATH).unwrap().as_str(),
            "http://pgsi.in/services"
        );
        assert_eq!(
            without.endpoint(QUOTE_REQUESTS_PATH).unwrap().as_str(),
            "http://pgsi.in/api/quote-requests"
        );
    }

    #[tokio::test]
    async fn test_new_uses_configured_base_url() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/gallery");
            then.status(200).json_body(json!([{"id": 1}, {"id": 2}]));
        });

        let config = crate::config::SiteConfig::new(server.base_url());
        let gateway = HttpGateway::new(&config).unwrap();
        let gallery = gateway.fetch_gallery().await.unwrap();

        api_mock.assert();
        assert_eq!(gallery.len(), 2);
        assert_eq!(
            gateway.base_url().as_str(),
            format!("{}/", server.base_url())
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(HttpGateway::with_client("ftp://pgsi.in", Client::new()).is_err());
        assert!(HttpGateway::with_client("", Client::new()).is_err());
    }

    #[tokio::test]
    async fn test_fetch_services_normalizes_features() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/services");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!([
                    {"id": 1, "title": "HDPE Pipeline Installation", "features": "Expert welding, Leak-proof joints"},
                    {"id": 2, "title": "Geomembrane Installation", "features": ["Leak detection"]}
                ]));
        });

        let services = gateway(&server).fetch_services().await.unwrap();

        api_mock.assert();
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].features, vec!["Expert welding", "Leak-proof joints"]);
        assert_eq!(services[1].features, vec!["Leak detection"]);
    }

    #[tokio::test]
    async fn test_fetch_company_unwraps_array() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/company_details");
            then.status(200).json_body(json!([{"name": "Gateway Co"}]));
        });

        let company = gateway(&server).fetch_company().await.unwrap();
        assert_eq!(company.name, "Gateway Co");
    }

    #[tokio::test]
    async fn test_read_non_success_is_rejection() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gallery");
            then.status(503).json_body(json!({"error": "maintenance"}));
        });

        let err = gateway(&server).fetch_gallery().await.unwrap_err();
        match err {
            SiteError::ServerRejection { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message.as_deref(), Some("maintenance"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_garbage_body_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/products");
            then.status(200).body("<html>oops</html>");
        });

        let err = gateway(&server).fetch_products().await.unwrap_err();
        assert!(matches!(err, SiteError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_submit_posts_json_payload() {
        let server = MockServer::start();
        let request = QuoteRequest {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            phone: "919652657383".to_string(),
            service: "HDPE Sheets".to_string(),
            message: "Inquiry about HDPE Sheets".to_string(),
        };

        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/quote-requests")
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "name": "Ravi",
                    "email": "ravi@example.com",
                    "phone": "919652657383",
                    "service": "HDPE Sheets",
                    "message": "Inquiry about HDPE Sheets"
                }));
            then.status(201).json_body(json!({"id": 1}));
        });

        let ack = gateway(&server).submit_quote(&request).await.unwrap();

        api_mock.assert();
        assert_eq!(ack, json!({"id": 1}));
    }

    #[tokio::test]
    async fn test_submit_empty_success_body_is_accepted() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/quote-requests");
            then.status(204);
        });

        let ack = gateway(&server)
            .submit_quote(&QuoteRequest::default())
            .await
            .unwrap();
        assert_eq!(ack, json!({}));
    }

    #[tokio::test]
    async fn test_submit_non_json_error_body_has_no_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/quote-requests");
            then.status(500).body("Internal Server Error");
        });

        let err = gateway(&server)
            .submit_quote(&QuoteRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SiteError::ServerRejection {
                status: 500,
                message: None
            }
        ));
    }
}
