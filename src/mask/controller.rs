use crate::animation::channel::Channel;
use crate::animation::sink::PropertySink;
use crate::foundation::core::{Point, Vec2, document_point};
use crate::host::document::{ElementId, ElementTree};
use crate::mask::config::MaskConfig;
use crate::mask::size::resolve_declared_size;

/// Pointer-move input: viewport position and the element under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointerMove {
    /// Viewport-relative pointer position.
    pub client: Point,
    /// Element the event originated from, if any.
    pub target: Option<ElementId>,
}

/// Last known pointer state.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct PointerState {
    /// Viewport-relative position from the latest pointer-move.
    pub client: Point,
    /// Whether any pointer-move was seen since mount.
    pub has_moved: bool,
}

/// Turns pointer and scroll input into `cursor_x`, `cursor_y` and `mask_scale` targets.
///
/// One instance per mounted page; all state is owned here and nowhere else. Handlers are
/// infallible and push straight into the given sink.
#[derive(Clone, Debug)]
pub struct RevealMaskController {
    config: MaskConfig,
    pointer: PointerState,
    hover: Option<ElementId>,
}

impl RevealMaskController {
    /// Fresh controller: pointer unseen, no hover target.
    pub fn new(config: MaskConfig) -> Self {
        Self {
            config,
            pointer: PointerState::default(),
            hover: None,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    /// Last known pointer state.
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Currently recorded hover target.
    pub fn hover_target(&self) -> Option<ElementId> {
        self.hover
    }

    /// Put the outputs into their pre-interaction state: overlay hidden, mask collapsed and
    /// parked off-screen.
    pub fn reset_outputs(&self, sink: &mut impl PropertySink) {
        let offscreen = self.config.offscreen_cursor;
        sink.snap(Channel::Opacity, 0.0);
        sink.snap(Channel::MaskScale, 0.0);
        sink.snap(Channel::CursorX, offscreen);
        sink.snap(Channel::CursorY, offscreen);
    }

    /// Handle one pointer-move.
    pub fn on_pointer_move(
        &mut self,
        event: &PointerMove,
        scroll: Vec2,
        tree: &impl ElementTree,
        sink: &mut impl PropertySink,
    ) {
        self.pointer.client = event.client;

        if !self.pointer.has_moved {
            self.pointer.has_moved = true;
            let at = document_point(event.client, scroll);
            tracing::debug!(x = at.x, y = at.y, "first pointer movement, revealing overlay");
            sink.snap(Channel::CursorX, at.x);
            sink.snap(Channel::CursorY, at.y);
            sink.ease_to(Channel::Opacity, 1.0, self.config.fade_in);
            sink.ease_to(Channel::MaskScale, 1.0, self.config.scale);
        }

        let hovered = event
            .target
            .and_then(|t| tree.closest_with_attribute(t, &self.config.size_attribute));
        let hovered_id = hovered.map(|(id, _)| id);
        if hovered_id != self.hover {
            self.hover = hovered_id;
            let scale = match hovered {
                Some((id, raw)) => {
                    let size = resolve_declared_size(raw, self.config.base_size);
                    let scale = size / self.config.base_size;
                    tracing::debug!(element = id.0, size, scale, "hover target changed");
                    scale
                }
                None => {
                    tracing::debug!("hover target cleared");
                    1.0
                }
            };
            sink.ease_to(Channel::MaskScale, scale, self.config.scale);
        }

        self.push_cursor(scroll, sink);
    }

    /// Handle a scroll: the pointer stays put in the viewport while the document moves under it.
    pub fn on_scroll(&mut self, scroll: Vec2, sink: &mut impl PropertySink) {
        self.push_cursor(scroll, sink);
    }

    fn push_cursor(&self, scroll: Vec2, sink: &mut impl PropertySink) {
        let at = document_point(self.pointer.client, scroll);
        tracing::trace!(x = at.x, y = at.y, "cursor target");
        sink.ease_to(Channel::CursorX, at.x, self.config.position);
        sink.ease_to(Channel::CursorY, at.y, self.config.position);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/controller.rs"]
mod tests;
