//! One module per command verb family. Each exposes `run_prefix`-style entry
//! points invoked by the event handler; view construction lives in the `ui`
//! submodules so the logic stays testable without a live gateway.

pub mod favorites;
pub mod help;
pub mod listings;
pub mod settings;
pub mod start;
pub mod subscription;
