//! Discord bot exposing the officer list.
//!
//! The bot listens for prefixed chat commands and answers in the same channel. Officers
//! are identified by their Discord tag, so only accounts already on the list can add or
//! remove officers.
//!
//! # Commands
//!
//! - `!officers` - List every officer
//! - `!officer add <login>` - Add an officer
//! - `!officer remove <login>` - Remove an officer
//!
//! # Gateway Intents
//!
//! - `GUILD_MESSAGES` - Receive messages in guild channels
//! - `DIRECT_MESSAGES` - Receive direct messages
//! - `MESSAGE_CONTENT` - Read the message text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled in the
//! Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
