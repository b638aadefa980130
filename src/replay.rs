//! Deterministic playback of recorded pointer/scroll sessions.
//!
//! A [`Trace`] couples a document description with timestamped host events. [`replay`] drives
//! a [`Page`] backed by the [`TweenEngine`] at a fixed frame rate and samples every channel per
//! frame; [`record_pushes`] returns the raw sink operations instead.

use crate::animation::channel::Channel;
use crate::animation::sink::{PropertySink, Push, RecordingSink};
use crate::animation::tween::TweenEngine;
use crate::foundation::core::{Fps, Point, Vec2};
use crate::foundation::error::{RevealError, RevealResult};
use crate::host::document::{Document, DocumentDef};
use crate::host::page::{InputEvent, Page};
use crate::mask::config::MaskConfig;
use crate::mask::controller::PointerMove;
use crate::mask::style::MaskStyle;

/// Recorded session: page structure plus host events in time order.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Trace {
    /// Page structure the events refer to.
    pub document: DocumentDef,
    /// Events sorted by `at`.
    #[serde(default)]
    pub events: Vec<TimedEvent>,
}

/// Host event with its timestamp in seconds since the page mounted.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TimedEvent {
    /// Seconds since mount.
    pub at: f64,
    /// The event.
    pub event: TraceEvent,
}

/// Events a trace can contain.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEvent {
    /// Pointer moved to viewport position `(x, y)` over element `target`.
    PointerMove {
        /// Viewport x.
        x: f64,
        /// Viewport y.
        y: f64,
        /// String id of the element under the pointer.
        #[serde(default)]
        target: Option<String>,
    },
    /// Page scrolled to `(x, y)`.
    Scroll {
        /// Horizontal offset.
        x: f64,
        /// Vertical offset.
        y: f64,
    },
    /// Page view mounted again.
    Mount,
    /// Page view torn down.
    Unmount,
}

impl Trace {
    /// Parse a JSON trace.
    pub fn from_json_str(s: &str) -> RevealResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Channel values displayed at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSample {
    /// Frame index from mount.
    pub frame: u64,
    /// Frame time in seconds.
    pub time_s: f64,
    /// Whether the reveal mask was mounted at this frame.
    pub mounted: bool,
    /// Displayed `cursor_x`.
    pub cursor_x: f64,
    /// Displayed `cursor_y`.
    pub cursor_y: f64,
    /// Displayed `mask_scale`.
    pub mask_scale: f64,
    /// Displayed overlay opacity.
    pub opacity: f64,
    /// Displayed parallax offset, once any was pushed.
    pub parallax_y: Option<f64>,
    /// Mask geometry derived from the values above.
    pub style: MaskStyle,
}

/// Sink operations produced by one trace event.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TimedPush {
    /// Timestamp of the triggering event (`0` for the initial mount).
    pub at: f64,
    /// The sink operation.
    pub push: Push,
}

enum Step {
    Input(InputEvent),
    Mount,
    Unmount,
}

fn resolve(trace: &Trace, doc: &Document) -> RevealResult<Vec<(f64, Step)>> {
    let mut last = 0.0;
    let mut steps = Vec::with_capacity(trace.events.len());
    for (i, ev) in trace.events.iter().enumerate() {
        if !ev.at.is_finite() || ev.at < 0.0 {
            return Err(RevealError::validation(format!(
                "event {i}: timestamp must be finite and >= 0"
            )));
        }
        if ev.at < last {
            return Err(RevealError::validation(format!(
                "event {i}: timestamps must be non-decreasing"
            )));
        }
        last = ev.at;

        let step = match &ev.event {
            TraceEvent::PointerMove { x, y, target } => {
                let target = match target.as_deref() {
                    Some(name) => Some(doc.element(name).ok_or_else(|| {
                        RevealError::document(format!("event {i}: unknown target '{name}'"))
                    })?),
                    None => None,
                };
                Step::Input(InputEvent::PointerMove(PointerMove {
                    client: Point::new(*x, *y),
                    target,
                }))
            }
            TraceEvent::Scroll { x, y } => Step::Input(InputEvent::Scroll(Vec2::new(*x, *y))),
            TraceEvent::Mount => Step::Mount,
            TraceEvent::Unmount => Step::Unmount,
        };
        steps.push((ev.at, step));
    }
    Ok(steps)
}

fn apply<S: PropertySink>(page: &mut Page<S>, step: Step) {
    match step {
        Step::Input(ev) => page.dispatch(ev),
        Step::Mount => {
            page.mount();
        }
        Step::Unmount => page.unmount(),
    }
}

/// Play `trace` at `fps` and sample every channel per frame.
///
/// Sampling stops at the first frame after the last event where no tween is running, so the
/// final sample always shows settled values.
#[tracing::instrument(skip(trace, config), fields(events = trace.events.len()))]
pub fn replay(trace: &Trace, config: &MaskConfig, fps: Fps) -> RevealResult<Vec<FrameSample>> {
    config.validate()?;
    let doc = Document::from_def(&trace.document)?;
    let steps = resolve(trace, &doc)?;

    let dt = fps.frame_duration_s();
    let mut page = Page::new(doc, TweenEngine::new(), config.clone());
    page.mount();

    let mut pending = steps.into_iter().peekable();
    let mut frames = Vec::new();
    let mut frame = 0u64;
    loop {
        let time_s = frame as f64 * f64::from(fps.den) / f64::from(fps.num);
        while let Some((_, step)) = pending.next_if(|(at, _)| *at <= time_s) {
            apply(&mut page, step);
        }
        frames.push(sample(&page, frame, time_s));
        if pending.peek().is_none() && page.sink().active_count() == 0 {
            break;
        }
        page.sink_mut().advance(dt);
        frame += 1;
    }
    tracing::debug!(frames = frames.len(), "replay finished");
    Ok(frames)
}

/// Play `trace` against a recording sink and return every push with its event time.
pub fn record_pushes(trace: &Trace, config: &MaskConfig) -> RevealResult<Vec<TimedPush>> {
    config.validate()?;
    let doc = Document::from_def(&trace.document)?;
    let steps = resolve(trace, &doc)?;

    let mut page = Page::new(doc, RecordingSink::new(), config.clone());
    page.mount();
    let mut out: Vec<TimedPush> = page
        .sink_mut()
        .drain()
        .into_iter()
        .map(|push| TimedPush { at: 0.0, push })
        .collect();

    for (at, step) in steps {
        apply(&mut page, step);
        out.extend(
            page.sink_mut()
                .drain()
                .into_iter()
                .map(|push| TimedPush { at, push }),
        );
    }
    Ok(out)
}

fn sample(page: &Page<TweenEngine>, frame: u64, time_s: f64) -> FrameSample {
    let engine = page.sink();
    let cfg = page.config();
    let cursor_x = engine
        .value(Channel::CursorX)
        .unwrap_or(cfg.offscreen_cursor);
    let cursor_y = engine
        .value(Channel::CursorY)
        .unwrap_or(cfg.offscreen_cursor);
    let mask_scale = engine.value(Channel::MaskScale).unwrap_or(0.0);
    FrameSample {
        frame,
        time_s,
        mounted: page.is_mounted(),
        cursor_x,
        cursor_y,
        mask_scale,
        opacity: engine.value(Channel::Opacity).unwrap_or(0.0),
        parallax_y: engine.value(Channel::ParallaxY),
        style: MaskStyle::new(Point::new(cursor_x, cursor_y), mask_scale, cfg.mask_unit_px),
    }
}

#[cfg(test)]
#[path = "../tests/unit/replay/replay.rs"]
mod tests;
