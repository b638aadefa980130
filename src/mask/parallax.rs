use crate::animation::channel::Channel;
use crate::animation::sink::PropertySink;
use crate::foundation::core::Vec2;
use crate::mask::config::ParallaxConfig;

/// Scroll-linked vertical drift of the hero video behind the page.
#[derive(Clone, Debug)]
pub struct ParallaxController {
    config: ParallaxConfig,
}

impl ParallaxController {
    /// Controller with the given tuning.
    pub fn new(config: ParallaxConfig) -> Self {
        Self { config }
    }

    /// Push the offset target for the new scroll position.
    pub fn on_scroll(&mut self, scroll: Vec2, sink: &mut impl PropertySink) {
        sink.ease_to(
            Channel::ParallaxY,
            scroll.y * self.config.factor,
            self.config.profile,
        );
    }
}
