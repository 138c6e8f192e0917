//! Client-side session and auth state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` wraps the durable key-value store; `auth` holds the in-memory
//! user snapshot derived from it. Both are provided from the App root via
//! Leptos context.

pub mod auth;
pub mod session;
