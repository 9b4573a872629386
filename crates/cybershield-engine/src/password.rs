//! Password strength estimation.
//!
//! Scoring is delegated to `zxcvbn`, which rates a password from 0 to 4 by
//! the guesses a pattern-aware attacker would need. This module only maps
//! that result onto [`PasswordStrength`].

use cybershield_core::{PasswordStrength, Result, ShieldError, StrengthLabel};
use tracing::debug;
use zxcvbn::zxcvbn;

/// Estimate the strength of `password`.
///
/// The password is scored exactly as given, surrounding whitespace
/// included. An empty password is rejected.
pub fn estimate(password: &str) -> Result<PasswordStrength> {
    estimate_with_inputs(password, &[])
}

/// Like [`estimate`], penalizing passwords built from `user_inputs` such
/// as the account's email or name.
pub fn estimate_with_inputs(password: &str, user_inputs: &[&str]) -> Result<PasswordStrength> {
    if password.is_empty() {
        return Err(ShieldError::EmptyPassword);
    }

    let entropy = zxcvbn(password, user_inputs)
        .map_err(|e| ShieldError::PasswordEstimate(e.to_string()))?;

    let (warning, suggestions) = entropy.feedback().as_ref().map_or_else(
        || (None, Vec::new()),
        |feedback| {
            (
                feedback.warning().map(|w| w.to_string()),
                feedback.suggestions().iter().map(ToString::to_string).collect(),
            )
        },
    );

    let score = entropy.score();
    let strength = PasswordStrength {
        score,
        label: StrengthLabel::from_score(score),
        guesses: entropy.guesses(),
        crack_time: entropy
            .crack_times()
            .offline_slow_hashing_1e4_per_second()
            .to_string(),
        warning,
        suggestions,
    };

    // Never log the password itself.
    debug!(score, label = %strength.label, "estimated password strength");

    Ok(strength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_rejected() {
        assert!(matches!(estimate(""), Err(ShieldError::EmptyPassword)));
    }

    #[test]
    fn common_password_is_very_weak() {
        let strength = estimate("password").unwrap();
        assert_eq!(strength.score, 0);
        assert_eq!(strength.label, StrengthLabel::VeryWeak);
        assert!(strength.warning.is_some() || !strength.suggestions.is_empty());
    }

    #[test]
    fn long_random_password_is_strong() {
        let strength = estimate("x7#Qm!v2Lr$9pZ@wK4tB&eN").unwrap();
        assert_eq!(strength.score, 4);
        assert_eq!(strength.label, StrengthLabel::Strong);
        assert_eq!(strength.meter_percent(), 100);
    }

    #[test]
    fn longer_passwords_never_score_lower() {
        let short = estimate("Tr0ub4dor").unwrap();
        let long = estimate("Tr0ub4dor&3-wobbly-kettle-lantern").unwrap();
        assert!(long.score >= short.score);
        assert!(long.guesses >= short.guesses);
    }

    #[test]
    fn label_always_matches_score() {
        for password in ["123456", "monkey12", "Tr0ub4dor&3", "correct horse battery staple"] {
            let strength = estimate(password).unwrap();
            assert!(strength.score <= 4, "{password}");
            assert_eq!(strength.label, StrengthLabel::from_score(strength.score), "{password}");
            assert!(!strength.crack_time.is_empty(), "{password}");
        }
    }

    #[test]
    fn user_inputs_weaken_the_estimate() {
        let plain = estimate("adalovelace1815").unwrap();
        let personal = estimate_with_inputs("adalovelace1815", &["ada", "lovelace"]).unwrap();
        assert!(personal.guesses <= plain.guesses);
    }
}
