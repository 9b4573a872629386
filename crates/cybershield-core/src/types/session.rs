use serde::{Deserialize, Serialize};

/// Signed-in user of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login email
    pub email: String,

    /// Display name
    pub name: String,
}

impl User {
    /// Build a user whose display name is the local part of the email.
    pub fn from_email(email: impl Into<String>) -> Self {
        let email = email.into();
        let name = email
            .split_once('@')
            .map_or(email.as_str(), |(local, _)| local)
            .to_string();
        Self { email, name }
    }
}
