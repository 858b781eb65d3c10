//! Game module - loadout editing session

mod session;

pub use session::{Session, PendingAction, PlayerId};
