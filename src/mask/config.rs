use std::path::Path;

use anyhow::Context as _;

use crate::animation::channel::EaseProfile;
use crate::animation::ease::Ease;
use crate::foundation::error::{RevealError, RevealResult};

/// Attribute the page puts on elements that resize the mask on hover.
pub const DEFAULT_SIZE_ATTRIBUTE: &str = "data-mask-size";

/// Declared size that maps to a mask scale of `1.0`.
pub const DEFAULT_BASE_SIZE: f64 = 100.0;

/// Tunables for the reveal mask and its companion effects.
///
/// Every field falls back to its default when absent from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    /// Attribute carrying the declared mask size.
    pub size_attribute: String,
    /// Declared size corresponding to scale `1.0`; also the fallback for unparseable values.
    pub base_size: f64,
    /// Easing for `cursor_x`/`cursor_y` targets.
    pub position: EaseProfile,
    /// Easing for `mask_scale` targets.
    pub scale: EaseProfile,
    /// Overlay fade-in on first pointer movement.
    pub fade_in: EaseProfile,
    /// Cursor position (both axes) shown before the pointer is first seen.
    pub offscreen_cursor: f64,
    /// Mask diameter in pixels at scale `1.0`.
    pub mask_unit_px: f64,
    /// Scroll parallax of the hero video layer.
    pub parallax: ParallaxConfig,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            size_attribute: DEFAULT_SIZE_ATTRIBUTE.to_owned(),
            base_size: DEFAULT_BASE_SIZE,
            position: EaseProfile::new(0.25, Ease::InOutQuad),
            scale: EaseProfile::new(0.3, Ease::OutCubic),
            fade_in: EaseProfile::new(0.3, Ease::OutQuad),
            offscreen_cursor: -100.0,
            mask_unit_px: 50.0,
            parallax: ParallaxConfig::default(),
        }
    }
}

/// Scroll-linked vertical offset of the background video.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Register the parallax scroll listener on mount.
    pub enabled: bool,
    /// Offset per scrolled pixel.
    pub factor: f64,
    /// Easing for offset targets.
    pub profile: EaseProfile,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            factor: 0.4,
            profile: EaseProfile::new(0.28, Ease::Linear),
        }
    }
}

impl MaskConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> RevealResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: &Path) -> RevealResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read mask config {}", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Reject values the controllers cannot animate sensibly.
    pub fn validate(&self) -> RevealResult<()> {
        if self.size_attribute.trim().is_empty() {
            return Err(RevealError::validation("size_attribute must not be empty"));
        }
        if !self.base_size.is_finite() || self.base_size <= 0.0 {
            return Err(RevealError::validation(
                "base_size must be finite and > 0",
            ));
        }
        if !self.offscreen_cursor.is_finite() {
            return Err(RevealError::validation("offscreen_cursor must be finite"));
        }
        if !self.mask_unit_px.is_finite() || self.mask_unit_px <= 0.0 {
            return Err(RevealError::validation(
                "mask_unit_px must be finite and > 0",
            ));
        }
        if !self.parallax.factor.is_finite() {
            return Err(RevealError::validation("parallax.factor must be finite"));
        }
        validate_profile("position", self.position)?;
        validate_profile("scale", self.scale)?;
        validate_profile("fade_in", self.fade_in)?;
        validate_profile("parallax.profile", self.parallax.profile)?;
        Ok(())
    }
}

fn validate_profile(name: &str, profile: EaseProfile) -> RevealResult<()> {
    if !profile.duration_s.is_finite() || profile.duration_s < 0.0 {
        return Err(RevealError::validation(format!(
            "{name}.duration_s must be finite and >= 0"
        )));
    }
    if let Ease::SlowMo {
        linear_ratio,
        power,
    } = profile.ease
    {
        if !(linear_ratio > 0.0 && linear_ratio <= 1.0) {
            return Err(RevealError::validation(format!(
                "{name}: SlowMo linear_ratio must be in (0, 1]"
            )));
        }
        if !(0.0..=1.0).contains(&power) {
            return Err(RevealError::validation(format!(
                "{name}: SlowMo power must be in [0, 1]"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/mask/config.rs"]
mod tests;
