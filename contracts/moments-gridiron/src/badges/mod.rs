mod registry;
mod types;
mod views;

pub use types::{Badge, BadgeUpdate, EntityRef, EntityType};
