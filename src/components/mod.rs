//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (alerts, guards, cards, tables) while
//! reading/writing shared state from Leptos context providers.

pub mod access_history;
pub mod alert;
pub mod credential_card;
pub mod guards;
pub mod user_management;
