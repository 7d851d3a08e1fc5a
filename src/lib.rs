pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::HttpGateway;
pub use config::SiteConfig;
pub use core::{
    loader::{ContentLoader, LoadState},
    normalize::normalize_list,
    quote_form::{FormField, QuoteContext, QuoteForm, SubmissionStatus},
    selection::{Selection, SelectionController},
};
pub use utils::error::{Result, SiteError};
