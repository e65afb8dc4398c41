//! Command implementations for the football match predictor CLI

pub mod common;
pub mod features;
pub mod interactive;
pub mod leagues;
pub mod predict;
pub mod teams;

pub use common::CommandContext;
