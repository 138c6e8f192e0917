//! Networking modules for the campus access backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` resolves the backend origin, `api` owns the authenticated
//! request gateway, `error` defines the failure taxonomy, and `types`
//! defines the wire schema.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
