//! Runtime game rules: the blot affliction

pub mod blot;
pub mod loader;
pub mod session;

pub use blot::{BlotRecord, BlotTracker};
pub use loader::{load_config, parse_config_toml};
pub use session::GameSession;
