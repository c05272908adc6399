mod types;

pub use types::{Action, Request};
