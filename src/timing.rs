// Time -> visual state. Pure: no drawing, no hidden state.
// Visual expectation: this decides *what* a frame shows (how much of the
// command is typed, whether the ghost suggestion or the accept flash is on,
// whether the block cursor is lit); render.rs only decides *where*.

use crate::types::{FrameState, RenderConfig};

/// When each phase of the animation begins, in seconds from frame 0.
/// Must satisfy `start_type < finish_type <= show_suggest < accept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingThresholds {
    pub start_type: f64,   // first keystroke
    pub finish_type: f64,  // whole command typed
    pub show_suggest: f64, // ghost suggestion appears
    pub accept: f64,       // suggestion accepted (tab)
}

impl Default for TimingThresholds {
    fn default() -> Self {
        Self { start_type: 0.5, finish_type: 2.0, show_suggest: 2.4, accept: 3.8 }
    }
}

impl TimingThresholds {
    pub fn is_ordered(&self) -> bool {
        let all_finite = [self.start_type, self.finish_type, self.show_suggest, self.accept]
            .iter()
            .all(|v| v.is_finite());
        all_finite
            && self.start_type < self.finish_type
            && self.finish_type <= self.show_suggest
            && self.show_suggest < self.accept
    }

    /// Open interval (start_type, finish_type): keystrokes are being simulated.
    #[inline]
    pub fn is_typing(&self, t: f64) -> bool {
        t > self.start_type && t < self.finish_type
    }
}

/// Thresholds plus the short effects that hang off the accept moment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub thresholds: TimingThresholds,
    pub flash_secs: f64,       // box flash length after accept
    pub cursor_hold_secs: f64, // cursor stays solid this long after accept
    pub blink_hz: f64,         // floor(t * blink_hz) even => cursor lit
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            thresholds: TimingThresholds::default(),
            flash_secs: 0.1,
            cursor_hold_secs: 0.2,
            blink_hz: 2.5,
        }
    }
}

/// Typed prefix of `input` at time `t`. Counts chars, so the cut never lands
/// inside a multi-byte sequence.
pub fn visible_prefix(t: f64, input: &str, th: &TimingThresholds) -> String {
    if t <= th.start_type {
        return String::new();
    }
    if t >= th.finish_type {
        return input.to_owned();
    }
    let ratio = (t - th.start_type) / (th.finish_type - th.start_type);
    let total = input.chars().count();
    let char_count = ((total as f64) * ratio).floor() as usize;
    input.chars().take(char_count.min(total)).collect()
}

/// Block cursor policy: solid while typing, solid just after accept,
/// otherwise blinking.
pub fn cursor_visible(t: f64, timing: &Timing) -> bool {
    let th = &timing.thresholds;
    if th.is_typing(t) {
        return true;
    }
    if t >= th.accept && t < th.accept + timing.cursor_hold_secs {
        return true;
    }
    ((t * timing.blink_hz).floor() as i64).rem_euclid(2) == 0
}

/// Full visual state for time `t`. Same inputs, same output.
pub fn frame_state(t: f64, config: &RenderConfig, timing: &Timing) -> FrameState {
    let th = &timing.thresholds;
    let is_accepted = t >= th.accept;
    FrameState {
        visible_prefix: visible_prefix(t, &config.input_text, th),
        show_ghost: t >= th.show_suggest && t < th.accept,
        is_accepted,
        flash_active: is_accepted && t < th.accept + timing.flash_secs,
        cursor_visible: cursor_visible(t, timing),
    }
}
