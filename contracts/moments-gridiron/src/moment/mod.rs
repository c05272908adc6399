mod mint;
mod types;
mod views;

pub use types::MomentNft;
