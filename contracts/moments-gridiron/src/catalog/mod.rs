mod editions;
mod plays;
mod series;
mod sets;
mod types;
mod views;

pub use types::{Edition, Play, PlayDynamicMetadata, Series, SetRecord};
