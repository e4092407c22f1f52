// crates/input_core/src/input/device.rs

use std::fmt::Debug;

use input_shared::{KeySnapshot, MouseSnapshot};

/// Capability the host framework hands to the sampler at construction.
///
/// Every call is synchronous and total: a poller that has nothing to report
/// returns an empty key set and a default mouse.
pub trait DevicePoller {
    /// Identifier for a physical key.
    type Key: Copy + Eq + Debug;

    /// Keys down right now.
    fn poll_keys(&mut self) -> KeySnapshot<Self::Key>;

    /// Cursor position and button states right now.
    fn poll_mouse(&mut self) -> MouseSnapshot;

    /// Host-owned cursor visibility flag.
    fn is_cursor_visible(&self) -> bool;
}
