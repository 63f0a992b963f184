//! Subscription plans offered on the pricing page.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Billing period of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    Monthly,
    Quarterly,
    Annual,
}

impl PlanKind {
    pub const ALL: [PlanKind; 3] = [PlanKind::Monthly, PlanKind::Quarterly, PlanKind::Annual];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanKind::Monthly => "monthly",
            PlanKind::Quarterly => "quarterly",
            PlanKind::Annual => "annual",
        }
    }

    /// Display name used when none is configured.
    pub fn default_name(&self) -> &'static str {
        match self {
            PlanKind::Monthly => "Monthly Graphics Plan",
            PlanKind::Quarterly => "Quarterly Graphics Plan",
            PlanKind::Annual => "Annual Graphics Plan",
        }
    }

    /// Description used when none is configured.
    pub fn default_description(&self) -> &'static str {
        match self {
            PlanKind::Monthly => "Monthly subscription for premium templates",
            PlanKind::Quarterly => "Quarterly subscription for premium templates",
            PlanKind::Annual => "Annual subscription for premium templates",
        }
    }

    /// Price in paise used when none is configured.
    pub fn default_amount(&self) -> u32 {
        match self {
            PlanKind::Monthly => 4900,
            PlanKind::Quarterly => 9900,
            PlanKind::Annual => 29900,
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchasable plan bound to a provider plan id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub kind: PlanKind,
    /// Provider plan ID (plan_xxx).
    pub plan_id: String,
    pub name: String,
    pub description: String,
    /// Price in paise.
    pub amount: u32,
}

/// The plans currently offered, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    /// Builds a catalog, keeping the first plan of each kind and sorting by period.
    pub fn new(plans: impl IntoIterator<Item = Plan>) -> Self {
        let mut kept: Vec<Plan> = Vec::new();
        for plan in plans {
            if !kept.iter().any(|p| p.kind == plan.kind) {
                kept.push(plan);
            }
        }
        kept.sort_by_key(|p| PlanKind::ALL.iter().position(|k| *k == p.kind));
        Self { plans: kept }
    }

    pub fn get(&self, kind: PlanKind) -> Option<&Plan> {
        self.plans.iter().find(|p| p.kind == kind)
    }

    pub fn find_by_plan_id(&self, plan_id: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.plan_id == plan_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plan> {
        self.plans.iter()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
