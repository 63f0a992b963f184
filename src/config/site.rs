//! Site identity configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Public site details echoed to the checkout UI and subscription notes
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Merchant name shown in the checkout modal
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// Host recorded in subscription notes when the request has none
    #[serde(default = "default_host")]
    pub default_host: String,
}

impl SiteConfig {
    /// Validate site configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.company_name.trim().is_empty() {
            return Err(ValidationError::EmptyCompanyName);
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            default_host: default_host(),
        }
    }
}

fn default_company_name() -> String {
    "PixelPerfect Graphix".to_string()
}

fn default_host() -> String {
    "pixelperfectgraphix.vercel.app".to_string()
}
