use crate::domain::model::{ProductListing, Section, ServiceListing};
use crate::domain::ports::{ConfigProvider, Viewport};
use std::time::Duration;

pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Which view the page shows. A single variant, so a service and a product can never
/// be selected at the same time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    #[default]
    Home,
    ServiceDetail(ServiceListing),
    ProductDetail(ProductListing),
}

impl Selection {
    pub fn selected_service(&self) -> Option<&ServiceListing> {
        match self {
            Selection::ServiceDetail(service) => Some(service),
            _ => None,
        }
    }

    pub fn selected_product(&self) -> Option<&ProductListing> {
        match self {
            Selection::ProductDetail(product) => Some(product),
            _ => None,
        }
    }

    pub fn is_detail(&self) -> bool {
        !matches!(self, Selection::Home)
    }
}

/// Owns the current [`Selection`] and drives the viewport on every transition.
pub struct SelectionController<V: Viewport> {
    selection: Selection,
    viewport: V,
    settle_delay: Duration,
}

impl<V: Viewport> SelectionController<V> {
    pub fn new(viewport: V) -> Self {
        Self {
            selection: Selection::Home,
            viewport,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }

    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    pub fn with_config<C: ConfigProvider>(self, config: &C) -> Self {
        self.with_settle_delay(config.settle_delay())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn select_service(&mut self, service: ServiceListing) {
        tracing::debug!("Showing service detail: {}", service.title);
        self.selection = Selection::ServiceDetail(service);
        self.viewport.scroll_to_top();
    }

    pub fn select_product(&mut self, product: ProductListing) {
        tracing::debug!("Showing product detail: {}", product.display_title());
        self.selection = Selection::ProductDetail(product);
        self.viewport.scroll_to_top();
    }

    /// Back to the home page, scrolled to the top.
    pub fn clear_selection(&mut self) {
        tracing::debug!("Returning to home view");
        self.selection = Selection::Home;
        self.viewport.scroll_to_top();
    }

    /// Header navigation. From a detail view this goes home first and waits for the
    /// home sections to settle before scrolling to `section`.
    pub async fn navigate_to(&mut self, section: Section) {
        if self.selection.is_detail() {
            self.clear_selection();
            tokio::time::sleep(self.settle_delay).await;
        }
        self.scroll_to(section);
    }

    fn scroll_to(&mut self, section: Section) {
        match section {
            Section::Home => self.viewport.scroll_to_top(),
            other => self.viewport.scroll_to_section(other),
        }
    }
}
