//! Notifier adapters.
//!
//! - `TracingNotifier` - Reports notifications through `tracing` (production default)
//! - `InMemoryNotifier` - Captures notifications for test assertions

mod in_memory;
mod tracing_notifier;

pub use in_memory::InMemoryNotifier;
pub use tracing_notifier::TracingNotifier;
