use crate::domain::model::{
    CompanyProfile, GalleryItem, ProductListing, QuoteRequest, Section, ServiceListing,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The remote content gateway: four reads and the quote-request write.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    async fn fetch_company(&self) -> Result<CompanyProfile>;
    async fn fetch_services(&self) -> Result<Vec<ServiceListing>>;
    async fn fetch_gallery(&self) -> Result<Vec<GalleryItem>>;
    async fn fetch_products(&self) -> Result<Vec<ProductListing>>;

    /// Returns the gateway's JSON acknowledgement (an empty object for an empty body).
    async fn submit_quote(&self, request: &QuoteRequest) -> Result<serde_json::Value>;
}

#[async_trait]
impl<G: ContentGateway + ?Sized> ContentGateway for std::sync::Arc<G> {
    async fn fetch_company(&self) -> Result<CompanyProfile> {
        (**self).fetch_company().await
    }

    async fn fetch_services(&self) -> Result<Vec<ServiceListing>> {
        (**self).fetch_services().await
    }

    async fn fetch_gallery(&self) -> Result<Vec<GalleryItem>> {
        (**self).fetch_gallery().await
    }

    async fn fetch_products(&self) -> Result<Vec<ProductListing>> {
        (**self).fetch_products().await
    }

    async fn submit_quote(&self, request: &QuoteRequest) -> Result<serde_json::Value> {
        (**self).submit_quote(request).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn gateway_base_url(&self) -> &str;
    fn auto_dismiss_delay(&self) -> Duration;
    fn settle_delay(&self) -> Duration;
}

/// Scroll side effects of the host view.
pub trait Viewport: Send {
    fn scroll_to_top(&mut self);
    fn scroll_to_section(&mut self, section: Section);
}
