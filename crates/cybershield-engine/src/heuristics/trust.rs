//! Known-safe domains and how a host is matched against them.

/// Domains treated as a-priori safe.
pub const TRUSTED_DOMAINS: &[&str] = &[
    "google.com",
    "microsoft.com",
    "apple.com",
    "amazon.com",
    "facebook.com",
    "twitter.com",
    "linkedin.com",
    "github.com",
];

/// Strategy for matching a host against [`TRUSTED_DOMAINS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrustMatch {
    /// Host contains an entry, or an entry contains the host.
    ///
    /// Matches the dashboard's historical behaviour, including the
    /// spoofable case `google.com.evil.com`.
    #[default]
    Permissive,
    /// Host equals an entry or is a subdomain of it.
    Suffix,
}

impl TrustMatch {
    /// Returns true if `domain` (already lower-cased) is trusted.
    #[must_use]
    pub fn is_trusted(self, domain: &str) -> bool {
        if domain.is_empty() {
            return false;
        }
        TRUSTED_DOMAINS.iter().any(|trusted| match self {
            Self::Permissive => domain.contains(trusted) || trusted.contains(domain),
            Self::Suffix => {
                domain == *trusted
                    || domain
                        .strip_suffix(trusted)
                        .is_some_and(|prefix| prefix.ends_with('.'))
            }
        })
    }
}

impl std::fmt::Display for TrustMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Permissive => write!(f, "permissive"),
            Self::Suffix => write!(f, "suffix"),
        }
    }
}
