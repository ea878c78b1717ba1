use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = SuperFakturaError> = std::result::Result<T, E>;

/// Errors that can occur while configuring the client or talking to the API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SuperFakturaError {
    /// One or more required environment variables are missing or empty.
    #[error("missing credentials: {} (see README for the required variables)", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    /// A string did not name any known SuperFaktura deployment.
    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),

    /// A date string was not in `YYYY-MM-DD` format.
    #[error("date must be in format YYYY-MM-DD, got: {0}")]
    InvalidDate(String),

    /// The API answered with a status other than 200.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body, for diagnostics.
        body: String,
    },

    /// Connection, TLS or timeout failure.
    #[cfg(feature = "client")]
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 200 response whose body could not be decoded.
    #[error("unable to decode response as JSON: {source}; body: {body}")]
    Decode {
        /// Raw response body.
        body: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Writing a downloaded payload failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An outgoing payload could not be encoded.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No bank account in the account list is flagged as default.
    #[error("no default bank account found")]
    NoDefaultBankAccount,

    /// `clients/view/<id>` did not return a client.
    #[error("client {0} not found")]
    ClientNotFound(u64),

    /// An invoice response lacks the id or token needed to address the invoice.
    #[error("invoice response carries no invoice id and token")]
    MissingInvoiceReference,
}

/// A single validation finding with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "items.0.unit_price").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
