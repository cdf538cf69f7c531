//! This module acts as a central hub for all database-related logic.
//! It declares the specialized submodules so they can be accessed from
//! elsewhere in the application via their full path, e.g.,
//! `database::favorites::add_to_favorites`.

pub mod favorites;
pub mod init;
pub mod models;
pub mod subscriptions;
pub mod users;
