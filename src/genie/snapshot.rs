use image::{RgbaImage, imageops};

use crate::{
    foundation::{
        core::{Axis, Size},
        error::{GenieError, GenieResult},
    },
    genie::config::GenieConfig,
};

/// One rendered strip of the element.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceImage {
    /// Size in points, margin included.
    pub size: Size,
    /// Pixels per point.
    pub scale: f64,
    pub pixels: RgbaImage,
}

/// Source of element slices.
///
/// Slices come back ordered by increasing coordinate along `axis`, each already
/// padded with `config.render_margin` of transparency on the perpendicular axis.
pub trait SnapshotProvider {
    fn capture_slices(&mut self, axis: Axis, config: &GenieConfig)
    -> GenieResult<Vec<SliceImage>>;
}

/// Cuts `extent` into strips of `thickness` along `axis`; the last strip takes the
/// remainder.
pub fn slice_sizes(extent: Size, axis: Axis, thickness: f64) -> Vec<Size> {
    let total = extent.get_coord(axis);
    if !(thickness > 0.0) || !(total > 0.0) || !total.is_finite() {
        return Vec::new();
    }
    let count = (total / thickness).ceil() as usize;
    (0..count)
        .map(|i| {
            let t = (total - i as f64 * thickness).min(thickness);
            match axis {
                Axis::Horizontal => Size::new(t, extent.height),
                Axis::Vertical => Size::new(extent.width, t),
            }
        })
        .collect()
}

/// [`SnapshotProvider`] over an already rasterized element.
#[derive(Clone, Debug)]
pub struct RasterSnapshot {
    image: RgbaImage,
    scale: f64,
}

impl RasterSnapshot {
    /// `scale` is the raster's pixels per point.
    pub fn new(image: RgbaImage, scale: f64) -> GenieResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(GenieError::validation(format!(
                "snapshot scale must be finite and > 0, got {scale}"
            )));
        }
        if image.width() == 0 || image.height() == 0 {
            return Err(GenieError::snapshot("element raster is empty"));
        }
        Ok(Self { image, scale })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Element size in points.
    pub fn size(&self) -> Size {
        Size::new(
            f64::from(self.image.width()) / self.scale,
            f64::from(self.image.height()) / self.scale,
        )
    }

    fn padded(&self, axis: Axis, margin_px: u32) -> RgbaImage {
        let (w, h) = self.image.dimensions();
        let (pw, ph, ox, oy) = match axis {
            Axis::Vertical => (w + 2 * margin_px, h, margin_px, 0),
            Axis::Horizontal => (w, h + 2 * margin_px, 0, margin_px),
        };
        let mut out = RgbaImage::new(pw, ph);
        imageops::replace(&mut out, &self.image, i64::from(ox), i64::from(oy));
        out
    }
}

impl SnapshotProvider for RasterSnapshot {
    #[tracing::instrument(skip(self, config), fields(scale = self.scale))]
    fn capture_slices(
        &mut self,
        axis: Axis,
        config: &GenieConfig,
    ) -> GenieResult<Vec<SliceImage>> {
        config.validate()?;
        let margin_px = (config.render_margin * self.scale).round() as u32;
        let thickness_px = ((config.slice_thickness * self.scale).round() as u32).max(1);
        let padded = self.padded(axis, margin_px);
        let (pw, ph) = padded.dimensions();
        let total_px = match axis {
            Axis::Horizontal => pw,
            Axis::Vertical => ph,
        };

        let mut slices = Vec::with_capacity(total_px.div_ceil(thickness_px) as usize);
        let mut offset = 0u32;
        while offset < total_px {
            let t = thickness_px.min(total_px - offset);
            let (x, y, w, h) = match axis {
                Axis::Horizontal => (offset, 0, t, ph),
                Axis::Vertical => (0, offset, pw, t),
            };
            slices.push(SliceImage {
                size: Size::new(f64::from(w) / self.scale, f64::from(h) / self.scale),
                scale: self.scale,
                pixels: imageops::crop_imm(&padded, x, y, w, h).to_image(),
            });
            offset += t;
        }
        tracing::debug!(count = slices.len(), margin_px, thickness_px, "captured slices");
        Ok(slices)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/genie/snapshot.rs"]
mod tests;
