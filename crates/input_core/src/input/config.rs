// crates/input_core/src/input/config.rs

use winit::keyboard::KeyCode;

/// Centralized host defaults for the window that owns the input devices.
/// Kept out of the binary so it is easy to tweak in one place.
#[derive(Debug, Clone)]
pub struct HostConfig {
    pub window_title: String,
    /// Logical window size in points.
    pub window_size: (f64, f64),
    /// Initial value of the host-owned cursor visibility flag.
    pub cursor_visible: bool,
    pub toggle_cursor_key: KeyCode,
    pub exit_key: KeyCode,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            window_title: "Painter for Waves: Input".to_string(),
            window_size: (1280.0, 720.0),
            cursor_visible: true,
            toggle_cursor_key: KeyCode::Tab,
            exit_key: KeyCode::Escape,
        }
    }
}

impl HostConfig {
    /// Applies `--hide-cursor` and `--title <text>`. Unknown arguments are
    /// ignored, as is a trailing `--title` with no value.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--hide-cursor" => config.cursor_visible = false,
                "--title" => {
                    if let Some(title) = args.next() {
                        config.window_title = title;
                    }
                }
                _ => {}
            }
        }

        config
    }
}
