//! Subscription handlers.
//!
//! ## Commands
//! - Creating a subscription for the hosted checkout
//!
//! ## Queries
//! - Listing the plan catalog

mod create_subscription;
mod list_plans;

// Commands
pub use create_subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, CreateSubscriptionResult,
    SubscriptionDefaults,
};

// Queries
pub use list_plans::{ListPlansHandler, ListPlansResult};
