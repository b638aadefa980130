//! Reveal-mask is the pointer-driven "flashlight" controller of an interactive page.
//!
//! A reveal overlay (a second copy of the page) is only visible through a mask that follows
//! the pointer and grows when the pointer is over elements declaring a mask size. This crate
//! owns the logic that turns raw input into animation targets; rendering and interpolation stay
//! with the host.
//!
//! # Flow
//!
//! 1. **Input**: the host delivers pointer-move and scroll events to a [`Page`].
//! 2. **Control**: the mounted [`RevealMaskController`] resolves the hover target through an
//!    [`ElementTree`] and derives `cursor_x`, `cursor_y` and `mask_scale` targets.
//! 3. **Animate**: targets are pushed into a [`PropertySink`], which eases displayed values
//!    toward them ([`TweenEngine`] is the reference backend).
//! 4. **Style**: the host binds sampled values to the overlay, see [`MaskStyle`].
//!
//! [`replay`] drives the whole chain from a recorded [`Trace`].
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod foundation;
mod host;
mod mask;
mod replay;

pub use animation::channel::{Channel, EaseProfile};
pub use animation::ease::Ease;
pub use animation::sink::{PropertySink, Push, RecordingSink};
pub use animation::tween::TweenEngine;
pub use foundation::core::{Fps, Point, Vec2, document_point};
pub use foundation::error::{RevealError, RevealResult};
pub use host::document::{Document, DocumentDef, ElementDef, ElementId, ElementTree};
pub use host::listeners::{EventKind, ListenerId, ListenerOwner, ListenerTable};
pub use host::page::{InputEvent, Page};
pub use mask::config::{DEFAULT_BASE_SIZE, DEFAULT_SIZE_ATTRIBUTE, MaskConfig, ParallaxConfig};
pub use mask::controller::{PointerMove, PointerState, RevealMaskController};
pub use mask::parallax::ParallaxController;
pub use mask::size::{parse_declared_size, resolve_declared_size};
pub use mask::style::MaskStyle;
pub use replay::{FrameSample, TimedEvent, TimedPush, Trace, TraceEvent, record_pushes, replay};
