//! Card catalog and board card instances.

mod catalog;
mod instance;

pub use catalog::{CardIdentity, Category};
pub use instance::BoardCard;
