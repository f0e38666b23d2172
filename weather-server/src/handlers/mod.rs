//! HTTP handlers.

mod assets;
mod health;
mod weather;

pub use assets::{asset, index};
pub use health::health;
pub use weather::weather;
