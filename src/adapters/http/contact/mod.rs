//! HTTP adapter for the contact form.
//!
//! - `POST /api/contact` - Validate, record and forward a contact submission

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ContactRequest, ContactResponse};
pub use handlers::{ContactApiError, ContactAppState};
pub use routes::contact_routes;
