// crates/input_shared/src/lib.rs

pub mod snapshot;

pub use snapshot::{ButtonState, KeySnapshot, MouseButton, MouseSnapshot};
