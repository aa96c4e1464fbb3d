//! Game-support pieces: ARGB pixel filters, an owned sprite surface to run
//! them on, and a polled keyboard state tracker.

pub mod error;
pub mod filter;
pub mod input;
pub mod pixel;
pub mod sprite;

pub use error::{Error, Result};
pub use filter::{Filter, FilterChain};
pub use sprite::Sprite;
