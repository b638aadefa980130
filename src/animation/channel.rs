use crate::animation::ease::Ease;

/// Named animated property driven by the mask controllers.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Mask center x in document space.
    CursorX,
    /// Mask center y in document space.
    CursorY,
    /// Mask diameter relative to the base size.
    MaskScale,
    /// Reveal overlay opacity.
    Opacity,
    /// Vertical offset of the parallax video layer.
    ParallaxY,
}

impl Channel {
    /// Every channel, in a stable order.
    pub const ALL: [Channel; 5] = [
        Channel::CursorX,
        Channel::CursorY,
        Channel::MaskScale,
        Channel::Opacity,
        Channel::ParallaxY,
    ];

    /// Property name the host binds this channel to.
    pub fn property(self) -> &'static str {
        match self {
            Self::CursorX => "--cursor-x",
            Self::CursorY => "--cursor-y",
            Self::MaskScale => "--mask-scale",
            Self::Opacity => "opacity",
            Self::ParallaxY => "y",
        }
    }
}

/// Duration and curve used when easing a channel toward a new target.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EaseProfile {
    /// Tween length in seconds.
    pub duration_s: f64,
    /// Curve applied to tween progress.
    pub ease: Ease,
}

impl EaseProfile {
    /// Build a profile.
    pub const fn new(duration_s: f64, ease: Ease) -> Self {
        Self { duration_s, ease }
    }
}
