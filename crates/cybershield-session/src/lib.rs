//! # cybershield-session
//!
//! Signed-in user state for CyberShield front ends.
//!
//! The dashboard keeps a single current user. Instead of a process-wide
//! global, a [`Session`] is an explicit value handed to whatever composes
//! the UI, and persistence goes through the [`SessionStore`] port so the
//! same session logic runs against memory in tests and a file on disk in
//! the CLI.
//!
//! Authentication is a demo: any non-empty email with a password of at
//! least [`MIN_PASSWORD_LEN`] characters is accepted. The scoring engine
//! does not depend on this crate.

pub mod session;
pub mod store;

pub use session::{Session, MIN_PASSWORD_LEN, USER_KEY};
pub use store::{FileStore, MemoryStore, SessionStore};
