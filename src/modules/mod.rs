//! Modules layer - Infrastructure components
//!
//! Contains the storage adapters used by the feature services.

pub mod store;
