#![forbid(unsafe_code)]

//! Capsule-style numeric stepper: `[ − ]  value  [ + ]`.
//!
//! The numeric field is focus-gated against wheel input, and both buttons
//! support press-and-hold auto-repeat driven by the host's UI timer (a
//! [`Tick`](cryogrid_core::Event::Tick) per frame is enough) — no threads.
//! Value changes surface as drained [`StepperEvent`] notifications, and the
//! host can suspend notifications around programmatic loads.

use std::time::Duration;

use cryogrid_core::event::{Event, EventOutcome, WheelDelta};
use cryogrid_paint::Rgba;
use cryogrid_style::Theme;
use tracing::trace;
use web_time::Instant;

use crate::wheel::{WheelRouting, wheel_policy};

/// Hold time before auto-repeat starts.
pub const REPEAT_DELAY: Duration = Duration::from_millis(500);
/// Interval between auto-repeat steps.
pub const REPEAT_INTERVAL: Duration = Duration::from_millis(100);

/// Step direction for the two capsule buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// The `+` button.
    Up,
    /// The `−` button.
    Down,
}

/// Notification from the stepper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepperEvent {
    /// The value changed to the given amount.
    ValueChanged(f64),
}

/// Visual style for the capsule, derived from the current theme.
///
/// The step buttons are accent-on-white regardless of light/dark; only the
/// value text follows the theme.
#[derive(Debug, Clone, PartialEq)]
pub struct StepperStyle {
    /// Step button fill.
    pub button_bg: Rgba,
    /// Step button fill on hover.
    pub button_bg_hover: Rgba,
    /// Step button fill while pressed.
    pub button_bg_pressed: Rgba,
    /// Step button glyph.
    pub button_fg: Rgba,
    /// Value text.
    pub value_fg: Rgba,
}

impl StepperStyle {
    /// Derive the capsule style from a theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        Self {
            button_bg: Rgba::rgb(0x00, 0x7A, 0xFF),
            button_bg_hover: Rgba::rgb(0x00, 0x62, 0xCC),
            button_bg_pressed: Rgba::rgb(0x00, 0x51, 0xA8),
            button_fg: Rgba::WHITE,
            value_fg: theme.text_main,
        }
    }
}

impl Default for StepperStyle {
    fn default() -> Self {
        Self::for_theme(&Theme::light())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct RepeatState {
    direction: StepDirection,
    pressed_at: Instant,
    /// Repeats fired so far (excluding the step on the initial press).
    fired: u64,
}

/// The stepper widget state.
#[derive(Debug, Clone)]
pub struct Stepper {
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    decimals: u8,
    suffix: String,
    focused: bool,
    suspended: bool,
    repeat: Option<RepeatState>,
    style: StepperStyle,
    pending: Vec<StepperEvent>,
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new()
    }
}

impl Stepper {
    /// Create a stepper with value 0 over the default range.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: 0.0,
            min: 0.0,
            max: 100.0,
            step: 1.0,
            decimals: 1,
            suffix: String::new(),
            focused: false,
            suspended: false,
            repeat: None,
            style: StepperStyle::default(),
            pending: Vec::new(),
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value, clamped to the range and quantized to `decimals`.
    pub fn set_value(&mut self, value: f64) {
        let clamped = self.quantize(value.clamp(self.min, self.max));
        if clamped != self.value {
            self.value = clamped;
            self.notify(StepperEvent::ValueChanged(clamped));
        }
    }

    /// Set the inclusive range, re-clamping the current value.
    pub fn set_range(&mut self, min: f64, max: f64) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min = min;
        self.max = max;
        self.set_value(self.value);
    }

    /// Set the per-click step amount.
    pub fn set_step(&mut self, step: f64) {
        self.step = step.abs();
    }

    /// Set the display precision, re-quantizing the current value.
    pub fn set_decimals(&mut self, decimals: u8) {
        self.decimals = decimals;
        self.set_value(self.value);
    }

    /// Set the unit suffix shown after the value ("mL", "µL", ...).
    pub fn set_suffix(&mut self, suffix: impl Into<String>) {
        self.suffix = suffix.into();
    }

    /// Whether the numeric field holds input focus.
    #[must_use]
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Grant or revoke input focus.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Suspend or resume change notifications (programmatic value loads).
    pub fn suspend_notifications(&mut self, suspended: bool) {
        self.suspended = suspended;
    }

    /// Step once toward the maximum.
    pub fn step_up(&mut self) {
        self.set_value(self.value + self.step);
    }

    /// Step once toward the minimum.
    pub fn step_down(&mut self) {
        self.set_value(self.value - self.step);
    }

    /// Press the `+` button: step immediately and arm auto-repeat.
    pub fn press_increment(&mut self, now: Instant) {
        self.press(StepDirection::Up, now);
    }

    /// Press the `−` button: step immediately and arm auto-repeat.
    pub fn press_decrement(&mut self, now: Instant) {
        self.press(StepDirection::Down, now);
    }

    /// Release the held button, disarming auto-repeat.
    pub fn release(&mut self) {
        self.repeat = None;
    }

    /// Advance auto-repeat to `now`, firing any elapsed synthetic clicks.
    ///
    /// Repeats start [`REPEAT_DELAY`] after the press and then fire every
    /// [`REPEAT_INTERVAL`]. Returns the number of steps fired by this tick.
    pub fn tick(&mut self, now: Instant) -> u64 {
        let Some(mut repeat) = self.repeat else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(repeat.pressed_at);
        if elapsed < REPEAT_DELAY {
            return 0;
        }
        let due = 1 + (elapsed - REPEAT_DELAY).as_millis() as u64
            / REPEAT_INTERVAL.as_millis() as u64;
        let mut fired = 0;
        while repeat.fired < due {
            match repeat.direction {
                StepDirection::Up => self.step_up(),
                StepDirection::Down => self.step_down(),
            }
            repeat.fired += 1;
            fired += 1;
        }
        self.repeat = Some(repeat);
        if fired > 0 {
            trace!(fired, value = self.value, "stepper auto-repeat");
        }
        fired
    }

    /// Drain pending notifications.
    #[must_use]
    pub fn poll_events(&mut self) -> Vec<StepperEvent> {
        std::mem::take(&mut self.pending)
    }

    /// The value formatted with the configured precision and suffix.
    #[must_use]
    pub fn display_text(&self) -> String {
        format!(
            "{:.*}{}",
            self.decimals as usize, self.value, self.suffix
        )
    }

    /// Route an input event.
    ///
    /// Wheel input is focus-gated: an unfocused stepper ignores the notch so
    /// the surrounding panel scrolls instead of the value changing.
    pub fn handle_event(&mut self, event: &Event) -> EventOutcome {
        match event {
            Event::Wheel(wheel) => match wheel_policy(self.focused) {
                WheelRouting::Deliver => {
                    match wheel.delta {
                        WheelDelta::Up => self.step_up(),
                        WheelDelta::Down => self.step_down(),
                    }
                    EventOutcome::Consumed
                }
                WheelRouting::PassToParent => EventOutcome::Ignored,
            },
            Event::Focus(focused) => {
                self.focused = *focused;
                EventOutcome::Consumed
            }
            Event::Tick(now) => {
                self.tick(*now);
                EventOutcome::Consumed
            }
            _ => EventOutcome::Ignored,
        }
    }

    /// Re-apply the current theme's colors.
    pub fn refresh_theme(&mut self, theme: &Theme) {
        self.style = StepperStyle::for_theme(theme);
    }

    /// Current visual style.
    #[must_use]
    pub fn style(&self) -> &StepperStyle {
        &self.style
    }

    fn press(&mut self, direction: StepDirection, now: Instant) {
        match direction {
            StepDirection::Up => self.step_up(),
            StepDirection::Down => self.step_down(),
        }
        self.repeat = Some(RepeatState {
            direction,
            pressed_at: now,
            fired: 0,
        });
    }

    fn notify(&mut self, event: StepperEvent) {
        if !self.suspended {
            self.pending.push(event);
        }
    }

    fn quantize(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.decimals as i32);
        (value * scale).round() / scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryogrid_core::event::WheelEvent;

    #[test]
    fn set_value_clamps_and_notifies() {
        let mut s = Stepper::new();
        s.set_range(0.0, 10.0);
        s.set_value(250.0);
        assert_eq!(s.value(), 10.0);
        assert_eq!(s.poll_events(), vec![StepperEvent::ValueChanged(10.0)]);

        s.set_value(-3.0);
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn unchanged_value_emits_nothing() {
        let mut s = Stepper::new();
        s.set_value(5.0);
        let _ = s.poll_events();
        s.set_value(5.0);
        assert!(s.poll_events().is_empty());
    }

    #[test]
    fn suspended_loads_do_not_notify() {
        let mut s = Stepper::new();
        s.suspend_notifications(true);
        s.set_value(7.0);
        assert_eq!(s.value(), 7.0);
        assert!(s.poll_events().is_empty());
        s.suspend_notifications(false);
        s.step_up();
        assert_eq!(s.poll_events(), vec![StepperEvent::ValueChanged(8.0)]);
    }

    #[test]
    fn quantization_follows_decimals() {
        let mut s = Stepper::new();
        s.set_decimals(2);
        s.set_value(1.239);
        assert_eq!(s.value(), 1.24);

        s.set_decimals(0);
        assert_eq!(s.value(), 1.0);
    }

    #[test]
    fn display_text_includes_suffix() {
        let mut s = Stepper::new();
        s.set_suffix(" mL");
        s.set_value(2.5);
        assert_eq!(s.display_text(), "2.5 mL");

        s.set_decimals(2);
        assert_eq!(s.display_text(), "2.50 mL");
    }

    #[test]
    fn unfocused_wheel_is_passed_to_parent() {
        let mut s = Stepper::new();
        s.set_value(5.0);
        let _ = s.poll_events();

        let outcome = s.handle_event(&Event::Wheel(WheelEvent::up()));
        assert_eq!(outcome, EventOutcome::Ignored);
        assert_eq!(s.value(), 5.0);
        assert!(s.poll_events().is_empty());
    }

    #[test]
    fn focused_wheel_steps_the_value() {
        let mut s = Stepper::new();
        s.set_value(5.0);
        s.set_focused(true);
        let _ = s.poll_events();

        assert_eq!(
            s.handle_event(&Event::Wheel(WheelEvent::up())),
            EventOutcome::Consumed
        );
        assert_eq!(s.value(), 6.0);
        assert_eq!(
            s.handle_event(&Event::Wheel(WheelEvent::down())),
            EventOutcome::Consumed
        );
        assert_eq!(s.value(), 5.0);
    }

    #[test]
    fn press_steps_immediately() {
        let mut s = Stepper::new();
        s.set_value(5.0);
        s.press_increment(Instant::now());
        assert_eq!(s.value(), 6.0);
        s.release();
        s.press_decrement(Instant::now());
        assert_eq!(s.value(), 5.0);
    }

    #[test]
    fn auto_repeat_waits_for_the_initial_delay() {
        let mut s = Stepper::new();
        let t0 = Instant::now();
        s.press_increment(t0);
        assert_eq!(s.value(), 1.0);

        assert_eq!(s.tick(t0 + Duration::from_millis(499)), 0);
        assert_eq!(s.value(), 1.0);

        assert_eq!(s.tick(t0 + Duration::from_millis(500)), 1);
        assert_eq!(s.value(), 2.0);
    }

    #[test]
    fn auto_repeat_fires_at_a_fixed_cadence() {
        let mut s = Stepper::new();
        let t0 = Instant::now();
        s.press_increment(t0);

        // 500 ms delay + 3 × 100 ms intervals = 4 repeats due in total.
        assert_eq!(s.tick(t0 + Duration::from_millis(800)), 4);
        assert_eq!(s.value(), 5.0);

        // The same instant again fires nothing new.
        assert_eq!(s.tick(t0 + Duration::from_millis(800)), 0);

        // Release disarms.
        s.release();
        assert_eq!(s.tick(t0 + Duration::from_millis(2000)), 0);
        assert_eq!(s.value(), 5.0);
    }

    #[test]
    fn auto_repeat_respects_the_range_ceiling() {
        let mut s = Stepper::new();
        s.set_range(0.0, 3.0);
        let t0 = Instant::now();
        s.press_increment(t0);
        let _ = s.tick(t0 + Duration::from_millis(5000));
        assert_eq!(s.value(), 3.0);
    }

    #[test]
    fn tick_event_drives_repeat_through_handle_event() {
        let mut s = Stepper::new();
        let t0 = Instant::now();
        s.press_increment(t0);
        let _ = s.handle_event(&Event::Tick(t0 + Duration::from_millis(600)));
        assert_eq!(s.value(), 3.0); // press + 2 repeats
    }

    #[test]
    fn style_tracks_theme_text_color() {
        let mut s = Stepper::new();
        s.refresh_theme(&Theme::dark());
        assert_eq!(s.style().value_fg, Theme::dark().text_main);
        // The capsule buttons stay accent blue in both themes.
        assert_eq!(s.style().button_bg, Rgba::rgb(0x00, 0x7A, 0xFF));
    }

    #[test]
    fn swapped_range_bounds_are_normalized() {
        let mut s = Stepper::new();
        s.set_range(10.0, -10.0);
        s.set_value(-5.0);
        assert_eq!(s.value(), -5.0);
    }
}
