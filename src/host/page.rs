use crate::animation::sink::PropertySink;
use crate::foundation::core::Vec2;
use crate::host::document::Document;
use crate::host::listeners::{EventKind, ListenerId, ListenerOwner};
use crate::mask::config::MaskConfig;
use crate::mask::controller::{PointerMove, RevealMaskController};
use crate::mask::parallax::ParallaxController;

/// Input delivered by the host environment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer moved.
    PointerMove(PointerMove),
    /// Page scrolled to a new offset.
    Scroll(Vec2),
}

impl InputEvent {
    /// Listener kind this event is delivered to.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PointerMove(_) => EventKind::PointerMove,
            Self::Scroll(_) => EventKind::Scroll,
        }
    }
}

#[derive(Debug)]
struct MountedMask {
    controller: RevealMaskController,
    pointer_listener: ListenerId,
    scroll_listener: ListenerId,
}

#[derive(Debug)]
struct MountedParallax {
    controller: ParallaxController,
    scroll_listener: ListenerId,
}

/// A page view: document, animation sink and the mounted effect controllers.
///
/// Controllers only ever see events through listeners registered in the document, so after
/// [`Page::unmount`] nothing reaches them.
#[derive(Debug)]
pub struct Page<S> {
    document: Document,
    sink: S,
    config: MaskConfig,
    mask: Option<MountedMask>,
    parallax: Option<MountedParallax>,
}

impl<S: PropertySink> Page<S> {
    /// Page over `document` pushing into `sink`. Nothing is mounted yet.
    pub fn new(document: Document, sink: S, config: MaskConfig) -> Self {
        Self {
            document,
            sink,
            config,
            mask: None,
            parallax: None,
        }
    }

    /// Mount the reveal mask (and parallax, when enabled).
    ///
    /// Returns whether the reveal mask is mounted afterwards. Without an overlay element the
    /// mask is skipped. Calling this while mounted registers nothing new.
    pub fn mount(&mut self) -> bool {
        if self.parallax.is_none() && self.config.parallax.enabled {
            let scroll_listener = self
                .document
                .listeners_mut()
                .add(EventKind::Scroll, ListenerOwner::Parallax);
            self.parallax = Some(MountedParallax {
                controller: ParallaxController::new(self.config.parallax.clone()),
                scroll_listener,
            });
        }

        if self.mask.is_some() {
            return true;
        }
        if self.document.overlay().is_none() {
            tracing::debug!("reveal overlay not mounted, skipping mask setup");
            return false;
        }

        let controller = RevealMaskController::new(self.config.clone());
        controller.reset_outputs(&mut self.sink);
        let listeners = self.document.listeners_mut();
        let pointer_listener = listeners.add(EventKind::PointerMove, ListenerOwner::RevealMask);
        let scroll_listener = listeners.add(EventKind::Scroll, ListenerOwner::RevealMask);
        self.mask = Some(MountedMask {
            controller,
            pointer_listener,
            scroll_listener,
        });
        tracing::debug!("reveal mask mounted");
        true
    }

    /// Remove listeners, cancel pending transitions and drop controller state.
    ///
    /// Safe to call repeatedly.
    pub fn unmount(&mut self) {
        let mask = self.mask.take();
        let parallax = self.parallax.take();
        if mask.is_none() && parallax.is_none() {
            return;
        }

        let listeners = self.document.listeners_mut();
        if let Some(m) = mask {
            listeners.remove(m.pointer_listener);
            listeners.remove(m.scroll_listener);
        }
        if let Some(p) = parallax {
            listeners.remove(p.scroll_listener);
        }
        self.sink.cancel_all();
        tracing::debug!("reveal mask unmounted");
    }

    /// True while the reveal mask is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mask.is_some()
    }

    /// Deliver a host event to every listener registered for its kind.
    pub fn dispatch(&mut self, event: InputEvent) {
        if let InputEvent::Scroll(offset) = event {
            self.document.set_scroll(offset);
        }
        let scroll = self.document.scroll();

        for (id, owner) in self.document.listeners().for_kind(event.kind()) {
            match (owner, event) {
                (ListenerOwner::RevealMask, InputEvent::PointerMove(mv)) => {
                    if let Some(m) = self.mask.as_mut().filter(|m| m.pointer_listener == id) {
                        m.controller
                            .on_pointer_move(&mv, scroll, &self.document, &mut self.sink);
                    }
                }
                (ListenerOwner::RevealMask, InputEvent::Scroll(offset)) => {
                    if let Some(m) = self.mask.as_mut().filter(|m| m.scroll_listener == id) {
                        m.controller.on_scroll(offset, &mut self.sink);
                    }
                }
                (ListenerOwner::Parallax, InputEvent::Scroll(offset)) => {
                    if let Some(p) = self.parallax.as_mut().filter(|p| p.scroll_listener == id) {
                        p.controller.on_scroll(offset, &mut self.sink);
                    }
                }
                (ListenerOwner::Parallax, InputEvent::PointerMove(_)) => {}
            }
        }
    }

    /// Mounted reveal-mask controller, if any.
    pub fn controller(&self) -> Option<&RevealMaskController> {
        self.mask.as_ref().map(|m| &m.controller)
    }

    /// Active configuration.
    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    /// Host document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable host document, e.g. to attach or detach the overlay.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Animation sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable animation sink, e.g. to advance a ticking engine.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/page.rs"]
mod tests;
