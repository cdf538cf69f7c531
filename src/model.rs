//! Shared application state stored in serenity's global context.

use crate::services::listings::ListingClient;
use serenity::gateway::ShardManager;
use serenity::prelude::TypeMapKey;
use sqlx::PgPool;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// A container for the ShardManager, allowing it to be stored in the global context.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// The central, shared state of the application.
/// An `Arc<AppState>` is stored in the global context for easy and safe access
/// from any command or event handler. Every field is internally synchronized,
/// so update handlers run concurrently without further coordination.
pub struct AppState {
    /// The connection pool for the PostgreSQL database.
    pub db: PgPool,
    /// Client for the external listings API, with a last-known-result cache.
    pub listings: Arc<ListingClient>,
    /// Command prefix stripped from inbound messages.
    pub prefix: String,
    /// Flips to true once the gateway `ready` event fires. Read by `/ready`.
    pub transport_ready: Arc<AtomicBool>,
}

impl AppState {
    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
