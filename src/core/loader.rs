use crate::domain::model::{CompanyProfile, SiteContent};
use crate::domain::ports::ContentGateway;
use crate::utils::error::Result;
use std::sync::LazyLock;

static FALLBACK_CONTENT: LazyLock<SiteContent> = LazyLock::new(SiteContent::fallback);

/// What the page shows: a spinner, the loaded content, or defaults plus a retry action.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(SiteContent),
    Failed { message: String },
}

impl LoadState {
    /// Content to render. Loading and failed states render the fallback content.
    pub fn content(&self) -> &SiteContent {
        match self {
            LoadState::Ready(content) => content,
            LoadState::Loading | LoadState::Failed { .. } => &FALLBACK_CONTENT,
        }
    }

    pub fn company(&self) -> &CompanyProfile {
        &self.content().company
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, LoadState::Failed { .. })
    }
}

pub struct ContentLoader<G: ContentGateway> {
    gateway: G,
}

impl<G: ContentGateway> ContentLoader<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Fetch all four collections concurrently. Any failure fails the whole load and
    /// partial results are dropped.
    pub async fn load_all(&self) -> Result<SiteContent> {
        tracing::info!("🔄 Fetching site content from gateway");

        let (company, services, gallery, products) = tokio::try_join!(
            self.gateway.fetch_company(),
            self.gateway.fetch_services(),
            self.gateway.fetch_gallery(),
            self.gateway.fetch_products(),
        )?;

        tracing::info!(
            "✅ Site content loaded: {} services, {} gallery items, {} products",
            services.len(),
            gallery.len(),
            products.len()
        );

        Ok(SiteContent {
            company,
            services,
            gallery,
            products,
        })
    }

    pub async fn load(&self) -> LoadState {
        match self.load_all().await {
            Ok(content) => LoadState::Ready(content),
            Err(e) => {
                tracing::error!(
                    "❌ Error fetching site content: {} (Category: {:?})",
                    e,
                    e.category()
                );
                tracing::warn!("Rendering default company profile and empty catalogs");
                LoadState::Failed {
                    message: format!("Connection error: {}", e),
                }
            }
        }
    }

    /// Retry action: back to loading, then a fresh single attempt.
    pub async fn refresh(&self, state: &mut LoadState) {
        *state = LoadState::Loading;
        *state = self.load().await;
    }
}
