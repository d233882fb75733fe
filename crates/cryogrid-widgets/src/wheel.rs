#![forbid(unsafe_code)]

//! Focus-gated wheel suppression.
//!
//! A wheel notch over an unfocused value control must scroll the surrounding
//! panel, not mutate the value — otherwise a page-scroll gesture can silently
//! insert a tag or change a volume. The policy is a single function shared by
//! the tag picker and the stepper; widgets consult it inside `handle_event`
//! and report [`EventOutcome::Ignored`](cryogrid_core::EventOutcome::Ignored)
//! when the event belongs to the ancestor scroll container.

/// Where a wheel event should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelRouting {
    /// The control has focus: apply the step/selection change.
    Deliver,
    /// The control is unfocused: leave the event for the ancestor scroller.
    PassToParent,
}

/// The one rule: wheel input only reaches a control that holds focus.
#[inline]
#[must_use]
pub fn wheel_policy(focused: bool) -> WheelRouting {
    if focused {
        WheelRouting::Deliver
    } else {
        WheelRouting::PassToParent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_controls_receive_wheel() {
        assert_eq!(wheel_policy(true), WheelRouting::Deliver);
    }

    #[test]
    fn unfocused_controls_pass_wheel_to_parent() {
        assert_eq!(wheel_policy(false), WheelRouting::PassToParent);
    }
}
