//! Subscription domain module.
//!
//! Plan catalog and validation for subscriptions created from the
//! pricing page before the hosted checkout opens.

mod errors;
mod plan;
mod request;

pub use errors::SubscriptionError;
pub use plan::{Plan, PlanCatalog, PlanKind};
pub use request::{SubscriptionRequest, DEFAULT_CUSTOMER_NOTIFY};
