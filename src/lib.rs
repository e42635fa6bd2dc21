//! budins: Budget Insight API client
//!
//! A library for calling the provider's HMAC-signed REST API and for
//! receiving its webhook notifications.

pub mod api;
pub mod config;
pub mod http;
pub mod models;
pub mod time;
pub mod webhook;
