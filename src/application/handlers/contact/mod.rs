//! Contact form handlers.

mod submit_contact;

pub use submit_contact::{
    SubmitContactCommand, SubmitContactHandler, SubmitContactResult, CONTACT_SUBMITTED_EVENT,
};
