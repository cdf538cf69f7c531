//! The serenity event handler: routes inbound messages to command modules
//! and component interactions to the interaction handlers. Serenity runs
//! each event on its own task, so everything below must tolerate concurrent
//! invocation; shared state lives behind `Arc<AppState>`.

use crate::interactions::ids::Action;
use crate::{AppState, commands, database, interactions};
use serenity::async_trait;
use serenity::builder::CreateInteractionResponse;
use serenity::client::Context;
use serenity::model::application::Interaction;
use serenity::model::{channel::Message, gateway::Ready};
use serenity::prelude::EventHandler;
use std::str::FromStr;
use std::sync::atomic::Ordering;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Listings,
    Favorites,
    Settings,
    Subscribe,
    Unsubscribe,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Command::Start),
            "help" => Ok(Command::Help),
            "listings" => Ok(Command::Listings),
            "favorites" => Ok(Command::Favorites),
            "settings" => Ok(Command::Settings),
            "subscribe" => Ok(Command::Subscribe),
            "unsubscribe" => Ok(Command::Unsubscribe),
            _ => Ok(Command::Unknown),
        }
    }
}

pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };

        // Every inbound message refreshes the sender's directory record.
        let first_name = msg.author.global_name.clone().unwrap_or_default();
        if let Err(e) = database::users::create_or_update(
            &app_state.db,
            msg.author.id,
            &msg.author.name,
            &first_name,
            "",
        )
        .await
        {
            error!(user_id = msg.author.id.get(), error = %e, "failed to upsert user");
            return;
        }

        let Some(command_body) = msg.content.strip_prefix(&app_state.prefix) else {
            let hint = format!(
                "Use commands to interact with the bot. Try `{}help`.",
                app_state.prefix
            );
            msg.channel_id.say(&ctx.http, hint).await.ok();
            return;
        };
        let Some(command_str) = command_body.split_whitespace().next() else {
            return;
        };

        let command = Command::from_str(command_str).unwrap_or(Command::Unknown);
        info!(
            user_id = msg.author.id.get(),
            command = command_str,
            "received command"
        );

        match command {
            Command::Start => commands::start::run_prefix(&ctx, &msg, app_state).await,
            Command::Help => commands::help::run_prefix(&ctx, &msg, app_state).await,
            Command::Listings => commands::listings::run::run_prefix(&ctx, &msg, app_state).await,
            Command::Favorites => commands::favorites::run::run_prefix(&ctx, &msg, app_state).await,
            Command::Settings => commands::settings::run_prefix(&ctx, &msg, app_state).await,
            Command::Subscribe => {
                commands::subscription::run_subscribe(&ctx, &msg, app_state).await
            }
            Command::Unsubscribe => {
                commands::subscription::run_unsubscribe(&ctx, &msg, app_state).await
            }
            Command::Unknown => {
                let reply = format!(
                    "Unknown command. Use `{}help` for the list of available commands.",
                    app_state.prefix
                );
                msg.channel_id.say(&ctx.http, reply).await.ok();
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Component(mut component) = interaction else {
            return;
        };
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };

        // Acknowledge first, before any work: the platform expects an answer
        // to every button press regardless of what happens afterwards.
        component
            .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
            .await
            .ok();

        let Some(action) = Action::decode(&component.data.custom_id) else {
            // Stale or malformed payload; ignore silently.
            debug!(custom_id = %component.data.custom_id, "ignoring undecodable callback payload");
            return;
        };
        debug!(user_id = component.user.id.get(), action = ?action, "received callback");

        match action {
            Action::FavRemove(listing_id) => {
                interactions::favorites_handler::handle_remove(
                    &ctx,
                    &component,
                    app_state,
                    &listing_id,
                )
                .await;
            }
            other => {
                interactions::listings_handler::handle(&ctx, &mut component, app_state, other)
                    .await;
            }
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        if let Some(app_state) = AppState::from_ctx(&ctx).await {
            app_state.transport_ready.store(true, Ordering::SeqCst);
        } else {
            warn!("ready fired before AppState was inserted");
        }
        info!(username = %ready.user.name, "connected and ready");
    }
}
