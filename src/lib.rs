//! PixelPerfect Checkout - Subscription checkout backend
//!
//! Receives signed Razorpay subscription webhooks, creates hosted
//! subscriptions for the pricing page and accepts contact form submissions.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
