pub mod catalog;
pub mod loader;
pub mod normalize;
pub mod quote_form;
pub mod selection;

pub use crate::domain::model::{
    CompanyProfile, GalleryItem, ProductListing, QuoteRequest, Section, ServiceListing,
    SiteContent,
};
pub use crate::domain::ports::{ConfigProvider, ContentGateway, Viewport};
pub use crate::utils::error::Result;
