//! Security score aggregation over action inventories.

pub mod aggregate;
pub mod inventory;

pub use aggregate::{aggregate, by_category, percentage};
pub use inventory::{checklist, security_actions, Inventory};
