//! Core utilities for the football match predictor
//!
//! - `http`: shared reqwest client construction
//! - `lenient`: serde helpers for string-typed numbers

pub mod http;
pub mod lenient;

pub use http::{build_client, endpoint_url};
