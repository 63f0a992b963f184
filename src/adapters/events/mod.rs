//! Event recorder adapters.
//!
//! Adapters implement the `EventRecorder` port for different environments:
//!
//! - `TracingEventRecorder` - Logs accepted events (production default)
//! - `InMemoryEventRecorder` - Captures events for test assertions

mod in_memory;
mod tracing_recorder;

pub use in_memory::{InMemoryEventRecorder, RecordedEvent};
pub use tracing_recorder::TracingEventRecorder;
