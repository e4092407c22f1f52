// crates/input_core/src/input/mod.rs
pub mod config;
pub mod device;
pub mod poller;
pub mod sampler;

pub use config::HostConfig;
pub use device::DevicePoller;
pub use poller::WindowPoller;
pub use sampler::InputSampler;
