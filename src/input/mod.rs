pub mod keyboard;

pub use keyboard::{Key, KeyLocation, Keyboard};
