use crate::animation::channel::{Channel, EaseProfile};

/// Animated property sink the controllers push into.
///
/// Contract: `ease_to` sets a new target for a channel and the sink interpolates the displayed
/// value toward it over `profile`; `snap` changes the displayed value immediately. Any backend
/// honoring this is substitutable.
pub trait PropertySink {
    /// Set `channel` to `value` with no easing, discarding any running tween on it.
    fn snap(&mut self, channel: Channel, value: f64);
    /// Start easing `channel` from its current displayed value toward `target`.
    fn ease_to(&mut self, channel: Channel, target: f64, profile: EaseProfile);
    /// Drop every pending transition. Called on teardown.
    fn cancel_all(&mut self);
}

/// One recorded sink operation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Push {
    /// Immediate assignment.
    Snap {
        /// Target channel.
        channel: Channel,
        /// Assigned value.
        value: f64,
    },
    /// Eased transition toward a target.
    EaseTo {
        /// Target channel.
        channel: Channel,
        /// Target value.
        target: f64,
        /// Easing used.
        profile: EaseProfile,
    },
    /// All transitions cancelled.
    CancelAll,
}

impl Push {
    /// Channel this push addresses, if any.
    pub fn channel(&self) -> Option<Channel> {
        match *self {
            Self::Snap { channel, .. } | Self::EaseTo { channel, .. } => Some(channel),
            Self::CancelAll => None,
        }
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pushes: Vec<Push>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the recorded pushes in order.
    pub fn pushes(&self) -> &[Push] {
        &self.pushes
    }

    /// Take the recorded pushes, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<Push> {
        std::mem::take(&mut self.pushes)
    }

    /// Eased targets pushed to `channel`, in order.
    pub fn targets(&self, channel: Channel) -> Vec<f64> {
        self.pushes
            .iter()
            .filter_map(|p| match *p {
                Push::EaseTo {
                    channel: c, target, ..
                } if c == channel => Some(target),
                _ => None,
            })
            .collect()
    }

    /// Last eased target pushed to `channel`.
    pub fn last_target(&self, channel: Channel) -> Option<f64> {
        self.targets(channel).last().copied()
    }
}

impl PropertySink for RecordingSink {
    fn snap(&mut self, channel: Channel, value: f64) {
        self.pushes.push(Push::Snap { channel, value });
    }

    fn ease_to(&mut self, channel: Channel, target: f64, profile: EaseProfile) {
        self.pushes.push(Push::EaseTo {
            channel,
            target,
            profile,
        });
    }

    fn cancel_all(&mut self) {
        self.pushes.push(Push::CancelAll);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sink.rs"]
mod tests;
