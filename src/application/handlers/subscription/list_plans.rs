//! ListPlansHandler - Query handler for the public checkout configuration.

use crate::domain::subscription::PlanCatalog;

/// Result of the plans query.
#[derive(Debug, Clone)]
pub struct ListPlansResult {
    /// Public key id for the checkout modal, if payments are configured.
    pub key_id: Option<String>,
    pub company_name: String,
    pub plans: PlanCatalog,
}

/// Serves the plan catalog and public checkout settings.
///
/// Everything is resolved at startup, so the query never fails.
pub struct ListPlansHandler {
    key_id: Option<String>,
    company_name: String,
    catalog: PlanCatalog,
}

impl ListPlansHandler {
    pub fn new(key_id: Option<String>, company_name: String, catalog: PlanCatalog) -> Self {
        Self {
            key_id,
            company_name,
            catalog,
        }
    }

    pub fn handle(&self) -> ListPlansResult {
        ListPlansResult {
            key_id: self.key_id.clone(),
            company_name: self.company_name.clone(),
            plans: self.catalog.clone(),
        }
    }
}
