//! Ready event handler.

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

/// Logs the bot user once the gateway handshake completes.
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);
}
