use std::collections::BTreeMap;

use crate::animation::channel::{Channel, EaseProfile};
use crate::animation::sink::PropertySink;

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f64,
    to: f64,
    elapsed_s: f64,
    profile: EaseProfile,
}

impl Tween {
    fn sample(&self) -> f64 {
        let t = self.elapsed_s / self.profile.duration_s;
        let te = self.profile.ease.apply(t);
        self.from + (self.to - self.from) * te
    }

    fn is_done(&self) -> bool {
        self.elapsed_s >= self.profile.duration_s
    }
}

/// Reference ticking backend: eases every channel toward its latest target as the host
/// advances time.
///
/// Each new target restarts that channel's tween from whatever value is displayed at that
/// moment, so rapid retargeting never jumps.
#[derive(Debug, Default)]
pub struct TweenEngine {
    values: BTreeMap<Channel, f64>,
    active: BTreeMap<Channel, Tween>,
    clock_s: f64,
}

impl TweenEngine {
    /// Create an engine with no channel values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently displayed value of `channel`, if it was ever set.
    pub fn value(&self, channel: Channel) -> Option<f64> {
        self.values.get(&channel).copied()
    }

    /// Target of the running tween on `channel`, if any.
    pub fn target(&self, channel: Channel) -> Option<f64> {
        self.active.get(&channel).map(|t| t.to)
    }

    /// True while `channel` is still easing.
    pub fn is_animating(&self, channel: Channel) -> bool {
        self.active.contains_key(&channel)
    }

    /// Number of tweens still running.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Total time advanced so far, in seconds.
    pub fn clock_s(&self) -> f64 {
        self.clock_s
    }

    /// Advance all running tweens by `dt_s` seconds. Non-positive steps are ignored.
    pub fn advance(&mut self, dt_s: f64) {
        if dt_s.is_nan() || dt_s <= 0.0 {
            return;
        }
        self.clock_s += dt_s;

        let values = &mut self.values;
        self.active.retain(|channel, tween| {
            tween.elapsed_s += dt_s;
            if tween.is_done() {
                values.insert(*channel, tween.to);
                false
            } else {
                values.insert(*channel, tween.sample());
                true
            }
        });
    }
}

impl PropertySink for TweenEngine {
    fn snap(&mut self, channel: Channel, value: f64) {
        self.active.remove(&channel);
        self.values.insert(channel, value);
    }

    fn ease_to(&mut self, channel: Channel, target: f64, profile: EaseProfile) {
        let from = self.values.get(&channel).copied().unwrap_or(target);
        if profile.duration_s.is_nan() || profile.duration_s <= 0.0 || from == target {
            self.snap(channel, target);
            return;
        }
        self.active.insert(
            channel,
            Tween {
                from,
                to: target,
                elapsed_s: 0.0,
                profile,
            },
        );
    }

    fn cancel_all(&mut self) {
        if !self.active.is_empty() {
            tracing::debug!(pending = self.active.len(), "cancelling tweens");
        }
        self.active.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
