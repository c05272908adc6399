mod builder;

mod badge;
mod catalog;
mod collection;
mod contract;
mod leaderboard;
mod moment;

pub use badge::*;
pub use catalog::*;
pub use collection::*;
pub use contract::*;
pub use leaderboard::*;
pub use moment::*;

pub(crate) const STANDARD: &str = "gridiron";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const CATALOG: &str = "CATALOG_UPDATE";
pub(crate) const MOMENT: &str = "MOMENT_UPDATE";
pub(crate) const COLLECTION: &str = "COLLECTION_UPDATE";
pub(crate) const BADGE: &str = "BADGE_UPDATE";
pub(crate) const LEADERBOARD: &str = "LEADERBOARD_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
