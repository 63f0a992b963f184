//! Subscription plan configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::subscription::{Plan, PlanCatalog, PlanKind};

/// Per-plan settings; anything unset falls back to the plan kind's defaults
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanSettings {
    /// Razorpay plan id. Plans without one are not offered.
    pub plan_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Price in paise
    pub amount: Option<u32>,
}

/// Plan catalog configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlansConfig {
    #[serde(default)]
    pub monthly: PlanSettings,

    #[serde(default)]
    pub quarterly: PlanSettings,

    #[serde(default)]
    pub annual: PlanSettings,
}

impl PlansConfig {
    pub fn settings(&self, kind: PlanKind) -> &PlanSettings {
        match kind {
            PlanKind::Monthly => &self.monthly,
            PlanKind::Quarterly => &self.quarterly,
            PlanKind::Annual => &self.annual,
        }
    }

    /// Builds the catalog of plans that have a plan id.
    pub fn catalog(&self) -> PlanCatalog {
        PlanCatalog::new(PlanKind::ALL.into_iter().filter_map(|kind| {
            let settings = self.settings(kind);
            let plan_id = settings
                .plan_id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())?;

            Some(Plan {
                kind,
                plan_id: plan_id.to_string(),
                name: settings
                    .name
                    .clone()
                    .unwrap_or_else(|| kind.default_name().to_string()),
                description: settings
                    .description
                    .clone()
                    .unwrap_or_else(|| kind.default_description().to_string()),
                amount: settings.amount.unwrap_or(kind.default_amount()),
            })
        }))
    }

    /// Validate plan configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for kind in PlanKind::ALL {
            let settings = self.settings(kind);
            if let Some(plan_id) = settings.plan_id.as_deref().map(str::trim) {
                if !plan_id.is_empty() && !plan_id.starts_with("plan_") {
                    return Err(ValidationError::InvalidPlanId(kind));
                }
            }
            if settings.amount == Some(0) {
                return Err(ValidationError::InvalidPlanAmount(kind));
            }
        }
        Ok(())
    }
}
