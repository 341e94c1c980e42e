//! Message handler answering officer commands.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::{bot::command::OfficerCommand, error::AppError, service::officer::DiscordOfficerService};

/// Handle message creation in a channel
pub async fn handle_message(db: &DatabaseConnection, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let Some(command) = OfficerCommand::parse(&message.content) else {
        return;
    };

    let author = message.author.tag();
    let reply = match respond(db, &author, command).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("Failed to handle officer command from {}: {}", author, e);
            "Something went wrong, try again later.".to_string()
        }
    };

    if let Err(e) = message.channel_id.say(&ctx.http, reply).await {
        tracing::error!(
            "Failed to reply in channel {}: {}",
            message.channel_id,
            e
        );
    }
}

/// Runs an officer command for a message author and builds the reply.
///
/// Anyone may list the officers; adding and removing requires the author to be on the
/// list already.
///
/// # Arguments
/// - `db` - Database connection
/// - `author` - Discord tag of the message author
/// - `command` - Parsed command
///
/// # Returns
/// - `Ok(String)` - Reply text
/// - `Err(AppError)` - Database error
pub async fn respond(
    db: &DatabaseConnection,
    author: &str,
    command: OfficerCommand,
) -> Result<String, AppError> {
    let service = DiscordOfficerService::new(db);

    let login = match &command {
        OfficerCommand::List => {
            let officers = service.get_discord_officer_list().await?;
            if officers.is_empty() {
                return Ok("No officers listed.".to_string());
            }

            let logins: Vec<String> = officers.into_iter().map(|o| o.login_name).collect();
            return Ok(format!("Officers: {}", logins.join(", ")));
        }
        OfficerCommand::Add(login) | OfficerCommand::Remove(login) => login,
    };

    if !service.is_discord_officer(author).await? {
        tracing::warn!("{} tried to change the officer list", author);
        return Ok("Only officers can change the officer list.".to_string());
    }

    let reply = if matches!(command, OfficerCommand::Add(_)) {
        if service.add_discord_officer(login).await? {
            format!("Added {} to the officer list.", login)
        } else {
            format!("{} is already an officer.", login)
        }
    } else if service.remove_discord_officer(login).await? {
        format!("Removed {} from the officer list.", login)
    } else {
        format!("{} is not an officer.", login)
    };

    Ok(reply)
}
