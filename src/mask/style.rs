use crate::foundation::core::Point;

/// Mask geometry the host applies to the reveal overlay.
///
/// The mask image is `scale * unit_px` wide and centered on the cursor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MaskStyle {
    /// Mask width and height in pixels.
    pub size_px: f64,
    /// Top-left corner of the mask image in document space.
    pub position: Point,
}

impl MaskStyle {
    /// Derive the mask geometry from sampled channel values.
    pub fn new(cursor: Point, scale: f64, unit_px: f64) -> Self {
        let size_px = scale * unit_px;
        let half = size_px / 2.0;
        Self {
            size_px,
            position: Point::new(cursor.x - half, cursor.y - half),
        }
    }

    /// CSS declarations for the standard and webkit-prefixed mask properties.
    pub fn css(&self) -> String {
        let size = format!("{}px", self.size_px);
        let pos = format!("{}px {}px", self.position.x, self.position.y);
        format!(
            "mask-size: {size}; mask-position: {pos}; -webkit-mask-size: {size}; -webkit-mask-position: {pos};"
        )
    }
}
