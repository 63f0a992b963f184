//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::contact::{SubmitContactCommand, SubmitContactHandler, SubmitContactResult};
pub use handlers::subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, CreateSubscriptionResult,
    ListPlansHandler, ListPlansResult, SubscriptionDefaults,
};
pub use handlers::webhook::{ProcessWebhookCommand, ProcessWebhookHandler};
