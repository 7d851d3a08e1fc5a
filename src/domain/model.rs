use crate::core::normalize::{deserialize_list, deserialize_text};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CompanyProfile {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub phone: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub address: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub about_text: String,
}

impl CompanyProfile {
    /// Profile shown whenever the gateway has nothing usable.
    pub fn default_profile() -> Self {
        Self {
            name: "Pavani Geo Synthetic".to_string(),
            description: "Leading HDPE Pipe and Sheet Solutions Provider".to_string(),
            phone: "+91-9652657383".to_string(),
            email: "info@pavanigeosynthetic.com".to_string(),
            address: "Industrial Area, City, State".to_string(),
            about_text: "Professional HDPE solutions provider with years of experience."
                .to_string(),
        }
    }

    /// Resolve the `company_details` payload.
    ///
    /// The gateway answers either with a bare object or with an array of rows; in the
    /// latter case the first row wins. Anything else (empty array, `null`, scalars)
    /// falls back to [`CompanyProfile::default_profile`].
    pub fn from_gateway_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        match value {
            serde_json::Value::Array(mut rows) if !rows.is_empty() => {
                serde_json::from_value(rows.swap_remove(0))
            }
            value @ serde_json::Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default_profile()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServiceListing {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub short_description: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub image_url: String,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub features: Vec<String>,
}

impl ServiceListing {
    pub fn image(&self) -> Option<&str> {
        non_empty(&self.image_url)
    }

    pub fn summary(&self) -> &str {
        summary_of(&self.short_description, &self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductListing {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub price: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub short_description: String,
    /// A single image URL despite the plural name.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub images: String,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub applications: Vec<String>,
}

impl ProductListing {
    pub fn display_title(&self) -> &str {
        non_empty(&self.title).unwrap_or("Product Name")
    }

    pub fn image(&self) -> Option<&str> {
        non_empty(&self.images)
    }

    pub fn summary(&self) -> &str {
        summary_of(&self.short_description, &self.description)
    }

    pub fn features_or_default(&self) -> Vec<&str> {
        if self.features.is_empty() {
            vec!["High Quality Materials"]
        } else {
            self.features.iter().map(String::as_str).collect()
        }
    }
}

/// Gallery rows are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GalleryItem(pub serde_json::Value);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

/// Everything the site renders, fetched once at startup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteContent {
    pub company: CompanyProfile,
    pub services: Vec<ServiceListing>,
    pub gallery: Vec<GalleryItem>,
    pub products: Vec<ProductListing>,
}

impl SiteContent {
    /// Default company profile and empty lists.
    pub fn fallback() -> Self {
        Self {
            company: CompanyProfile::default_profile(),
            ..Self::default()
        }
    }

    pub fn services_for_display(&self) -> Vec<ServiceListing> {
        if self.services.is_empty() {
            crate::core::catalog::sample_services()
        } else {
            self.services.clone()
        }
    }

    pub fn products_for_display(&self) -> Vec<ProductListing> {
        if self.products.is_empty() {
            crate::core::catalog::sample_products()
        } else {
            self.products.clone()
        }
    }
}

/// Page sections reachable from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    Products,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Products,
        Section::Contact,
    ];

    /// Anchor id of the section on the page.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Products => "products",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn summary_of<'a>(short: &'a str, long: &'a str) -> &'a str {
    non_empty(short)
        .or_else(|| non_empty(long))
        .unwrap_or("No description available.")
}
