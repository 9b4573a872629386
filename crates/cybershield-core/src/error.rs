use thiserror::Error;

/// Result type alias for CyberShield operations
pub type Result<T> = std::result::Result<T, ShieldError>;

/// Errors that can occur across the CyberShield crates
#[derive(Error, Debug)]
pub enum ShieldError {
    /// URL was empty or could not be parsed, even after adding a scheme
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Email address failed the basic shape check
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// No action with this id exists in the inventory
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// An action was given a weight of zero points
    #[error("action {0} must be worth at least one point")]
    InvalidPoints(String),

    /// Password was empty
    #[error("password is empty")]
    EmptyPassword,

    /// The strength estimator could not score the password
    #[error("password could not be estimated: {0}")]
    PasswordEstimate(String),

    /// Breach lookup answered with a status we cannot interpret
    #[error("breach lookup failed with status {status}")]
    BreachLookup {
        /// HTTP status code of the lookup response
        status: u16,
    },

    /// Login or signup was rejected
    #[error("credentials rejected: {0}")]
    Credentials(String),

    /// Session storage could not be read or written
    #[error("storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShieldError {
    /// Returns true if the error stems from user input that can be corrected
    /// and should be shown as a validation message.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_)
                | Self::InvalidEmail(_)
                | Self::UnknownAction(_)
                | Self::InvalidPoints(_)
                | Self::EmptyPassword
                | Self::Credentials(_)
        )
    }
}
