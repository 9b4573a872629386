//! Session context.

use cybershield_core::{Result, ShieldError, User};
use tracing::{debug, warn};

use crate::store::SessionStore;

/// Storage key the signed-in user is kept under
pub const USER_KEY: &str = "cyber-user";

/// Shortest password the demo login accepts
pub const MIN_PASSWORD_LEN: usize = 6;

/// The current user plus the store that remembers them.
#[derive(Debug)]
pub struct Session<S> {
    store: S,
    user: Option<User>,
}

impl<S: SessionStore> Session<S> {
    /// Open a session, picking up a remembered user if one is stored.
    ///
    /// A stored value that is not a valid user is ignored and the session
    /// starts signed out.
    pub fn restore(store: S) -> Result<Self> {
        let user = match store.get(USER_KEY)? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "ignoring corrupt stored user");
                    None
                }
            },
            None => None,
        };

        debug!(signed_in = user.is_some(), "restored session");
        Ok(Self { store, user })
    }

    #[must_use]
    pub const fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Sign in. The display name is the local part of the email.
    ///
    /// With `remember` the user is persisted; without it any previously
    /// remembered user is forgotten and the sign-in lasts as long as this
    /// session value.
    pub fn login(&mut self, email: &str, password: &str, remember: bool) -> Result<&User> {
        check_credentials(email, password)?;

        let user = User::from_email(email.trim());
        if remember {
            self.persist(&user)?;
        } else {
            self.store.clear(USER_KEY)?;
        }

        debug!(email = %user.email, remember, "signed in");
        Ok(&*self.user.insert(user))
    }

    /// Create an account and sign in. New accounts are always remembered.
    pub fn signup(&mut self, email: &str, password: &str, name: &str) -> Result<&User> {
        check_credentials(email, password)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ShieldError::Credentials("name is required".into()));
        }

        let user = User {
            email: email.trim().to_string(),
            name: name.to_string(),
        };
        self.persist(&user)?;

        debug!(email = %user.email, "signed up");
        Ok(&*self.user.insert(user))
    }

    /// Sign out and forget any remembered user.
    pub fn logout(&mut self) -> Result<()> {
        self.user = None;
        self.store.clear(USER_KEY)
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self, user: &User) -> Result<()> {
        let value = serde_json::to_string(user)?;
        self.store.set(USER_KEY, &value)
    }
}

fn check_credentials(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(ShieldError::Credentials("email is required".into()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ShieldError::Credentials(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn fresh() -> Session<MemoryStore> {
        Session::restore(MemoryStore::new()).unwrap()
    }

    #[test]
    fn starts_signed_out() {
        let session = fresh();
        assert!(!session.is_signed_in());
        assert!(session.current().is_none());
    }

    #[test]
    fn login_derives_name_from_email() {
        let mut session = fresh();
        let user = session.login("ada@example.com", "hunter22", false).unwrap();
        assert_eq!(user.name, "ada");
        assert!(session.is_signed_in());
        assert_eq!(session.store().get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn remembered_login_survives_restore() {
        let mut session = fresh();
        session.login("ada@example.com", "hunter22", true).unwrap();

        let restored = Session::restore(session.into_store()).unwrap();
        assert_eq!(restored.current().map(|u| u.email.as_str()), Some("ada@example.com"));
    }

    #[test]
    fn short_password_is_rejected_without_side_effects() {
        let mut session = fresh();
        let err = session.login("ada@example.com", "12345", true).unwrap_err();
        assert!(matches!(err, ShieldError::Credentials(_)));
        assert!(!session.is_signed_in());
        assert_eq!(session.store().get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn empty_email_is_rejected() {
        let mut session = fresh();
        assert!(session.login("  ", "hunter22", false).is_err());
    }

    #[test]
    fn signup_requires_name_and_persists() {
        let mut session = fresh();
        assert!(session.signup("ada@example.com", "hunter22", " ").is_err());

        let user = session.signup("ada@example.com", "hunter22", "Ada Lovelace").unwrap();
        assert_eq!(user.name, "Ada Lovelace");
        assert!(session.store().get(USER_KEY).unwrap().is_some());
    }

    #[test]
    fn logout_clears_memory_and_store() {
        let mut session = fresh();
        session.signup("ada@example.com", "hunter22", "Ada").unwrap();
        session.logout().unwrap();

        assert!(!session.is_signed_in());
        let restored = Session::restore(session.into_store()).unwrap();
        assert!(!restored.is_signed_in());
    }

    #[test]
    fn corrupt_stored_user_starts_signed_out() {
        let mut store = MemoryStore::new();
        store.set(USER_KEY, "{not a user").unwrap();
        let session = Session::restore(store).unwrap();
        assert!(!session.is_signed_in());
    }

    #[test]
    fn unremembered_login_forgets_previous_user() {
        let mut session = fresh();
        session.signup("old@example.com", "hunter22", "Old").unwrap();
        session.login("new@example.com", "hunter22", false).unwrap();

        let restored = Session::restore(session.into_store()).unwrap();
        assert!(!restored.is_signed_in());
    }
}
