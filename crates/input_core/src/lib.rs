// crates/input_core/src/lib.rs

// Logic Modules
pub mod input;
pub mod platform_runner;

// Re-export the sampler and snapshot types so hosts only depend on this crate.
pub use input::{DevicePoller, HostConfig, InputSampler, WindowPoller};
pub use input_shared::{ButtonState, KeySnapshot, MouseButton, MouseSnapshot};
pub use platform_runner::PlatformRunner;
