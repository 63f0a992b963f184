//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, errors)
//! - `webhook` - Razorpay webhook verification and event dispatch
//! - `subscription` - Plan catalog and subscription creation rules
//! - `contact` - Contact form validation

pub mod contact;
pub mod foundation;
pub mod subscription;
pub mod webhook;
