//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients for external services such as the public region API.

pub mod wilayah;
