//! Data loading and built-in game content
//!
//! Loads the gear catalog and player dumps from JSON or RON files, with the
//! built-in catalog as fallback.

pub mod loader;
pub mod defaults;

pub use loader::{DataError, DataFormat, PlayerRecord, load_catalog, load_catalog_or_default, load_player, export_default_catalog};
pub use defaults::default_catalog;
