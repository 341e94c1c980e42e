//! Officer command parsing.

/// Officer list command sent as a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfficerCommand {
    /// `!officers`
    List,
    /// `!officer add <login>`
    Add(String),
    /// `!officer remove <login>`
    Remove(String),
}

impl OfficerCommand {
    /// Parses a message into an officer command.
    ///
    /// The login is the rest of the message after the subcommand, trimmed, and may
    /// contain spaces.
    ///
    /// # Returns
    /// - `Some(OfficerCommand)` - Message is a well-formed command
    /// - `None` - Any other message, including a command without login
    pub fn parse(content: &str) -> Option<Self> {
        let content = content.trim();

        if content == "!officers" {
            return Some(Self::List);
        }

        let rest = content.strip_prefix("!officer ")?.trim_start();
        let (subcommand, login) = rest.split_once(char::is_whitespace)?;
        let login = login.trim();
        if login.is_empty() {
            return None;
        }

        match subcommand {
            "add" => Some(Self::Add(login.to_string())),
            "remove" => Some(Self::Remove(login.to_string())),
            _ => None,
        }
    }
}
