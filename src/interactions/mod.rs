//! This module acts as a central router for all component interactions.
//!
//! The main `handler.rs` file decodes the button's custom_id into an
//! [`ids::Action`] and delegates here. Each handler module owns one action
//! family, keeping the main handler clean.

pub mod favorites_handler;
pub mod ids;
pub mod listings_handler;
