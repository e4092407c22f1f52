// crates/input_core/src/platform_runner.rs

use std::error::Error;

use tracing::{info, trace};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::input::{HostConfig, InputSampler, WindowPoller};

/// Owns the host config and runs the platform (winit) event loop.
/// Window events feed the poller; the sampler advances once per frame.
pub struct PlatformRunner {
    config: HostConfig,
}

impl PlatformRunner {
    pub fn new(config: HostConfig) -> Self {
        Self { config }
    }

    pub fn start(self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;
        let (width, height) = self.config.window_size;
        let window = WindowBuilder::new()
            .with_title(&self.config.window_title)
            .with_inner_size(winit::dpi::LogicalSize::new(width, height))
            .build(&event_loop)?;
        window.set_cursor_visible(self.config.cursor_visible);

        let mut sampler = InputSampler::new(WindowPoller::new(self.config.cursor_visible));
        let config = self.config;

        info!(title = %config.window_title, "input viewer started");

        event_loop.run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { event: win_event, .. } => match win_event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    other => sampler.poller_mut().handle_event(&other),
                },

                Event::AboutToWait => {
                    // --- UPDATE PHASE ---

                    // 1) Exactly one sample per frame.
                    sampler.advance();

                    // 2) Report edges.
                    log_edges(&sampler);

                    // 3) Host actions, edge-triggered.
                    if sampler.is_new_key_down(config.exit_key) {
                        elwt.exit();
                        return;
                    }

                    if sampler.is_new_key_down(config.toggle_cursor_key) {
                        let visible = !sampler.is_mouse_active();
                        window.set_cursor_visible(visible);
                        sampler.poller_mut().set_cursor_visible(visible);
                    }
                }

                _ => {}
            }
        })?;

        Ok(())
    }
}

fn log_edges(sampler: &InputSampler<WindowPoller>) {
    for key in sampler.pressed_keys() {
        if sampler.is_new_key_down(key) {
            info!(?key, "key down");
        }
    }
    for key in sampler.previous_keys().iter() {
        if sampler.is_new_key_up(key) {
            info!(?key, "key up");
        }
    }

    let position = sampler.mouse_position();
    if sampler.is_new_left_click() {
        info!(x = position.x, y = position.y, "left click");
    }
    if sampler.is_new_right_click() {
        info!(x = position.x, y = position.y, "right click");
    }

    if sampler.mouse_delta() != glam::IVec2::ZERO {
        trace!(
            x = position.x,
            y = position.y,
            mouse_active = sampler.is_mouse_active(),
            left_held = sampler.is_old_left_click(),
            right_held = sampler.is_old_right_click(),
            "cursor moved"
        );
    }
}
