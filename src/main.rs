use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use homescout_bot::config::Config;
use homescout_bot::model::{AppState, ShardManagerContainer};
use homescout_bot::services::listings::ListingClient;
use homescout_bot::{database, handler, health};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = Config::from_env().expect("Invalid environment configuration.");

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let db = database::init::initialize(&config.database_url)
        .await
        .expect("Failed to initialize the database.");

    let listings = Arc::new(
        ListingClient::new(config.listings_api_url.clone())
            .expect("Failed to build the listings API client."),
    );

    let transport_ready = Arc::new(AtomicBool::new(false));
    let app_state = Arc::new(AppState {
        db: db.clone(),
        listings: listings.clone(),
        prefix: config.command_prefix.clone(),
        transport_ready: transport_ready.clone(),
    });

    if config.health_check_enabled {
        let health_state = Arc::new(health::HealthState {
            transport_ready: transport_ready.clone(),
            db: db.clone(),
            listings: listings.clone(),
        });
        let port = config.health_check_port;
        tokio::spawn(async move {
            if let Err(e) = health::serve(health_state, port).await {
                error!(error = %e, "health server failed");
            }
        });
    }

    // Interactions arrive with GUILDS; messages need the content intent for
    // prefix commands.
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler::Handler)
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
        data.insert::<AppState>(app_state);
    }

    info!("starting bot");
    if let Err(why) = client.start().await {
        error!(error = %why, "client error");
    }
}
