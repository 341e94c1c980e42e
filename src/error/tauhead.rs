use thiserror::Error;

/// Errors returned by the TauHead item lookup client.
#[derive(Error, Debug)]
pub enum TauheadError {
    /// The URL does not point at a TauHead item page.
    #[error("Not a TauHead item URL: {0}")]
    InvalidItemUrl(String),

    /// TauHead answered with a status the client does not handle.
    #[error("Unexpected response status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    /// An item returned by TauHead carries a value with no matching enum variant.
    #[error("Unknown {field} value '{value}' for item {slug}")]
    UnknownValue {
        slug: String,
        field: &'static str,
        value: String,
    },
}
