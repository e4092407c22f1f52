// crates/input_core/src/input/sampler.rs

use glam::IVec2;
use input_shared::{KeySnapshot, MouseButton, MouseSnapshot};
use tracing::trace;

use super::device::DevicePoller;

/// Holds the previous and current frame's device snapshots and answers
/// held / newly-pressed / newly-released queries by comparing them.
///
/// The host calls [`advance`](Self::advance) exactly once per frame before
/// issuing any query for that frame. There is no guard against a second call;
/// it simply shifts the snapshots again.
///
/// Both snapshot pairs start empty, so anything already held on the first
/// `advance` reports as a new press.
pub struct InputSampler<P: DevicePoller> {
    poller: P,
    previous_keys: KeySnapshot<P::Key>,
    current_keys: KeySnapshot<P::Key>,
    previous_mouse: MouseSnapshot,
    current_mouse: MouseSnapshot,
}

impl<P: DevicePoller> InputSampler<P> {
    /// Wraps the host's poller; both snapshot pairs start empty.
    pub fn new(poller: P) -> Self {
        Self {
            poller,
            previous_keys: KeySnapshot::default(),
            current_keys: KeySnapshot::default(),
            previous_mouse: MouseSnapshot::default(),
            current_mouse: MouseSnapshot::default(),
        }
    }

    /// Drops both snapshot pairs back to the startup state. The poller is kept.
    pub fn reset(&mut self) {
        self.previous_keys.clear();
        self.current_keys.clear();
        self.previous_mouse = MouseSnapshot::default();
        self.current_mouse = MouseSnapshot::default();
    }

    /// Per-frame tick: current becomes previous, then a fresh poll becomes current.
    pub fn advance(&mut self) {
        // 1) Keyboard
        let polled_keys = self.poller.poll_keys();
        self.previous_keys = std::mem::replace(&mut self.current_keys, polled_keys);

        // 2) Mouse
        self.previous_mouse = self.current_mouse;
        self.current_mouse = self.poller.poll_mouse();

        trace!(
            keys = self.current_keys.len(),
            x = self.current_mouse.position.x,
            y = self.current_mouse.position.y,
            "input advanced"
        );
    }

    // --- Keyboard ---

    /// True while at least one key is held.
    pub fn is_keyboard_active(&self) -> bool {
        !self.current_keys.is_empty()
    }

    /// True if `key` is held in the current snapshot.
    pub fn is_key_down(&self, key: P::Key) -> bool {
        self.current_keys.contains(key)
    }

    /// Rising edge: down now, up on the previous tick.
    pub fn is_new_key_down(&self, key: P::Key) -> bool {
        self.current_keys.contains(key) && !self.previous_keys.contains(key)
    }

    /// Falling edge: down on the previous tick, up now.
    pub fn is_new_key_up(&self, key: P::Key) -> bool {
        self.previous_keys.contains(key) && !self.current_keys.contains(key)
    }

    /// Keys held in the current snapshot, in capture order.
    pub fn pressed_keys(&self) -> impl Iterator<Item = P::Key> + '_ {
        self.current_keys.iter()
    }

    // --- Mouse ---

    /// Delegates to the host's cursor visibility flag.
    pub fn is_mouse_active(&self) -> bool {
        self.poller.is_cursor_visible()
    }

    /// Held across the tick boundary.
    pub fn is_old_click(&self, button: MouseButton) -> bool {
        self.previous_mouse.button(button).is_pressed()
            && self.current_mouse.button(button).is_pressed()
    }

    /// Released on the previous tick, pressed now.
    pub fn is_new_click(&self, button: MouseButton) -> bool {
        !self.previous_mouse.button(button).is_pressed()
            && self.current_mouse.button(button).is_pressed()
    }

    /// Pressed on the previous tick, released now.
    pub fn is_new_release(&self, button: MouseButton) -> bool {
        self.previous_mouse.button(button).is_pressed()
            && !self.current_mouse.button(button).is_pressed()
    }

    /// Left button held across the tick boundary.
    pub fn is_old_left_click(&self) -> bool {
        self.is_old_click(MouseButton::Left)
    }

    /// Right button held across the tick boundary.
    pub fn is_old_right_click(&self) -> bool {
        self.is_old_click(MouseButton::Right)
    }

    /// Left button pressed this tick.
    pub fn is_new_left_click(&self) -> bool {
        self.is_new_click(MouseButton::Left)
    }

    /// Right button pressed this tick.
    pub fn is_new_right_click(&self) -> bool {
        self.is_new_click(MouseButton::Right)
    }

    /// Cursor position from the current snapshot, in window pixels.
    pub fn mouse_position(&self) -> IVec2 {
        self.current_mouse.position
    }

    /// Cursor movement since the previous tick, saturating at the `i32` range.
    pub fn mouse_delta(&self) -> IVec2 {
        self.current_mouse
            .position
            .saturating_sub(self.previous_mouse.position)
    }

    // --- Raw access ---

    /// Keys captured by the latest `advance`.
    pub fn current_keys(&self) -> &KeySnapshot<P::Key> {
        &self.current_keys
    }

    /// Keys captured by the `advance` before that.
    pub fn previous_keys(&self) -> &KeySnapshot<P::Key> {
        &self.previous_keys
    }

    /// Mouse captured by the latest `advance`.
    pub fn current_mouse(&self) -> &MouseSnapshot {
        &self.current_mouse
    }

    /// Mouse captured by the `advance` before that.
    pub fn previous_mouse(&self) -> &MouseSnapshot {
        &self.previous_mouse
    }

    /// The injected device poller.
    pub fn poller(&self) -> &P {
        &self.poller
    }

    /// The host feeds raw device events through here between frames.
    pub fn poller_mut(&mut self) -> &mut P {
        &mut self.poller
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use input_shared::ButtonState;

    use super::*;

    /// Replays a fixed list of polls; repeats the last one once the script runs out.
    #[derive(Default)]
    struct ScriptedPoller {
        frames: VecDeque<(KeySnapshot<char>, MouseSnapshot)>,
        last: (KeySnapshot<char>, MouseSnapshot),
        cursor_visible: bool,
        polls: usize,
    }

    impl ScriptedPoller {
        fn push(&mut self, keys: &str, mouse: MouseSnapshot) {
            self.frames.push_back((keys.chars().collect(), mouse));
        }

        fn push_keys(&mut self, keys: &str) {
            self.push(keys, MouseSnapshot::default());
        }

        fn push_right(&mut self, pressed: bool) {
            self.push(
                "",
                MouseSnapshot {
                    right: ButtonState::from_pressed(pressed),
                    ..Default::default()
                },
            );
        }
    }

    impl DevicePoller for ScriptedPoller {
        type Key = char;

        fn poll_keys(&mut self) -> KeySnapshot<char> {
            self.polls += 1;
            if let Some(frame) = self.frames.pop_front() {
                self.last = frame;
            }
            self.last.0.clone()
        }

        fn poll_mouse(&mut self) -> MouseSnapshot {
            self.last.1
        }

        fn is_cursor_visible(&self) -> bool {
            self.cursor_visible
        }
    }

    #[test]
    fn fresh_sampler_reports_nothing() {
        let sampler = InputSampler::new(ScriptedPoller::default());

        assert!(!sampler.is_keyboard_active());
        assert_eq!(sampler.mouse_position(), IVec2::new(0, 0));
        assert!(!sampler.is_key_down('a'));
        assert!(!sampler.is_new_left_click());
        assert!(!sampler.is_old_right_click());
        assert_eq!(sampler.poller().polls, 0);
    }

    #[test]
    fn first_press_is_new_then_held() {
        let mut poller = ScriptedPoller::default();
        poller.push_keys("a");
        poller.push_keys("a");
        let mut sampler = InputSampler::new(poller);

        sampler.advance();
        assert!(sampler.is_keyboard_active());
        assert!(sampler.is_key_down('a'));
        assert!(sampler.is_new_key_down('a'));

        sampler.advance();
        assert!(sampler.is_key_down('a'));
        assert!(!sampler.is_new_key_down('a'));
    }

    #[test]
    fn new_key_down_fires_on_the_rising_tick_only() {
        let mut poller = ScriptedPoller::default();
        poller.push_keys("");
        poller.push_keys("w");
        poller.push_keys("w");
        poller.push_keys("");
        poller.push_keys("w");
        let mut sampler = InputSampler::new(poller);

        let mut rising = Vec::new();
        for _ in 0..5 {
            sampler.advance();
            rising.push(sampler.is_new_key_down('w'));
        }

        assert_eq!(rising, vec![false, true, false, false, true]);
    }

    #[test]
    fn new_key_up_fires_on_release() {
        let mut poller = ScriptedPoller::default();
        poller.push_keys("ad");
        poller.push_keys("d");
        let mut sampler = InputSampler::new(poller);

        sampler.advance();
        assert!(!sampler.is_new_key_up('a'));

        sampler.advance();
        assert!(sampler.is_new_key_up('a'));
        assert!(!sampler.is_new_key_up('d'));
        assert_eq!(sampler.pressed_keys().collect::<Vec<_>>(), vec!['d']);
    }

    #[test]
    fn unrelated_keys_do_not_mask_a_new_press() {
        let mut poller = ScriptedPoller::default();
        poller.push_keys("xy");
        poller.push_keys("xyz");
        let mut sampler = InputSampler::new(poller);

        sampler.advance();
        sampler.advance();

        assert!(sampler.is_new_key_down('z'));
        assert!(!sampler.is_new_key_down('x'));
    }

    #[test]
    fn right_click_rising_then_held() {
        let mut poller = ScriptedPoller::default();
        poller.push_right(false);
        poller.push_right(true);
        poller.push_right(true);
        let mut sampler = InputSampler::new(poller);

        let mut ticks = Vec::new();
        for _ in 0..3 {
            sampler.advance();
            ticks.push((sampler.is_new_right_click(), sampler.is_old_right_click()));
        }

        assert_eq!(ticks, vec![(false, false), (true, false), (false, true)]);
    }

    #[test]
    fn old_and_new_click_are_exclusive() {
        let mut poller = ScriptedPoller::default();
        for pressed in [true, false, true, true, false, false, true] {
            poller.push_right(pressed);
        }
        let mut sampler = InputSampler::new(poller);

        for _ in 0..7 {
            sampler.advance();
            assert!(!(sampler.is_new_right_click() && sampler.is_old_right_click()));
        }
    }

    #[test]
    fn identical_polls_yield_no_new_click() {
        for pressed in [false, true] {
            let mut poller = ScriptedPoller::default();
            poller.push_right(pressed);
            let mut sampler = InputSampler::new(poller);

            sampler.advance();
            sampler.advance();

            assert!(!sampler.is_new_right_click());
            assert_eq!(sampler.is_old_right_click(), pressed);
        }
    }

    #[test]
    fn left_and_right_are_tracked_separately() {
        let mut poller = ScriptedPoller::default();
        poller.push(
            "",
            MouseSnapshot {
                left: ButtonState::Pressed,
                ..Default::default()
            },
        );
        poller.push(
            "",
            MouseSnapshot {
                left: ButtonState::Pressed,
                right: ButtonState::Pressed,
                ..Default::default()
            },
        );
        let mut sampler = InputSampler::new(poller);

        sampler.advance();
        assert!(sampler.is_new_left_click());
        assert!(!sampler.is_new_right_click());

        sampler.advance();
        assert!(sampler.is_old_left_click());
        assert!(!sampler.is_new_left_click());
        assert!(sampler.is_new_right_click());
    }

    #[test]
    fn release_edge_is_reported() {
        let mut poller = ScriptedPoller::default();
        poller.push_right(true);
        poller.push_right(false);
        let mut sampler = InputSampler::new(poller);

        sampler.advance();
        assert!(!sampler.is_new_release(MouseButton::Right));

        sampler.advance();
        assert!(sampler.is_new_release(MouseButton::Right));
        assert!(!sampler.is_old_right_click());
    }

    #[test]
    fn position_and_delta_follow_the_cursor() {
        let mut poller = ScriptedPoller::default();
        poller.push(
            "",
            MouseSnapshot {
                position: IVec2::new(10, 20),
                ..Default::default()
            },
        );
        poller.push(
            "",
            MouseSnapshot {
                position: IVec2::new(4, 25),
                ..Default::default()
            },
        );
        let mut sampler = InputSampler::new(poller);

        sampler.advance();
        assert_eq!(sampler.mouse_delta(), IVec2::new(10, 20));

        sampler.advance();
        assert_eq!(sampler.mouse_position(), IVec2::new(4, 25));
        assert_eq!(sampler.mouse_delta(), IVec2::new(-6, 5));
        assert_eq!(sampler.previous_mouse().position, IVec2::new(10, 20));
    }

    #[test]
    fn delta_saturates_across_extreme_positions() {
        let mut poller = ScriptedPoller::default();
        poller.push(
            "",
            MouseSnapshot {
                position: IVec2::new(i32::MIN, i32::MAX),
                ..Default::default()
            },
        );
        poller.push(
            "",
            MouseSnapshot {
                position: IVec2::new(i32::MAX, i32::MIN),
                ..Default::default()
            },
        );
        let mut sampler = InputSampler::new(poller);

        sampler.advance();
        sampler.advance();

        assert_eq!(sampler.mouse_delta(), IVec2::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn mouse_active_reads_host_flag() {
        let mut sampler = InputSampler::new(ScriptedPoller::default());
        assert!(!sampler.is_mouse_active());

        sampler.poller_mut().cursor_visible = true;
        assert!(sampler.is_mouse_active());
    }

    #[test]
    fn double_advance_shifts_twice() {
        let mut poller = ScriptedPoller::default();
        poller.push_keys("q");
        let mut sampler = InputSampler::new(poller);

        sampler.advance();
        sampler.advance();

        assert_eq!(sampler.poller().polls, 2);
        assert!(!sampler.is_new_key_down('q'));
        assert!(sampler.previous_keys().contains('q'));
    }

    #[test]
    fn reset_makes_held_keys_new_again() {
        let mut poller = ScriptedPoller::default();
        poller.push_keys("e");
        let mut sampler = InputSampler::new(poller);

        sampler.advance();
        sampler.advance();
        assert!(!sampler.is_new_key_down('e'));

        sampler.reset();
        assert!(!sampler.is_keyboard_active());
        assert!(sampler.current_keys().is_empty());

        sampler.advance();
        assert!(sampler.is_new_key_down('e'));
    }
}
