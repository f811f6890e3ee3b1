//! Thumb icon bitmap handling
//!
//! The source bitmap is decoded once at construction and never changes.
//! Each layout pass scales it to fit the thumb interior; the scaled copy is
//! cached until [`ThumbIcon::invalidate`] is called.

use std::fs;

use image::imageops::{self, FilterType};
use image::RgbaImage;
use slidelock_core::{ImageId, Size};
use tracing::debug;

use crate::config::IconSource;
use crate::error::{Result, SlideUnlockError};

/// Scale factor that fits `source` inside `available` without upscaling
///
/// Each axis contributes `available / source` only when the source is larger
/// on that axis, otherwise 1.0; the smaller of the two wins.
pub fn fit_scale(source: Size, available: Size) -> f32 {
    let axis = |src: f32, avail: f32| {
        if src > avail && src > 0.0 {
            (avail / src).max(0.0)
        } else {
            1.0
        }
    };
    let scale_w = axis(source.width, available.width);
    let scale_h = axis(source.height, available.height);
    scale_w.min(scale_h)
}

/// A scaled bitmap ready to hand to the host
#[derive(Clone, Debug)]
pub struct ScaledIcon {
    id: ImageId,
    image: RgbaImage,
    scale: f32,
}

impl ScaledIcon {
    pub fn id(&self) -> ImageId {
        self.id
    }

    /// RGBA8 pixels; upload these under [`ScaledIcon::id`]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn size(&self) -> Size {
        Size::new(self.image.width() as f32, self.image.height() as f32)
    }
}

/// Thumb icon with its per-layout scaled cache
#[derive(Clone, Debug)]
pub struct ThumbIcon {
    source: RgbaImage,
    scaled: Option<ScaledIcon>,
}

impl ThumbIcon {
    /// Decode an icon from its configured source
    pub fn load(source: &IconSource) -> Result<Self> {
        let image = match source {
            IconSource::Bitmap(image) => image.clone(),
            IconSource::Bytes(bytes) => decode(bytes)?,
            IconSource::File(path) => {
                let bytes = fs::read(path).map_err(|e| {
                    SlideUnlockError::IconLoad(format!("{}: {}", path.display(), e))
                })?;
                decode(&bytes)?
            }
        };

        if image.width() == 0 || image.height() == 0 {
            return Err(SlideUnlockError::IconDecode("icon has no pixels".into()));
        }

        Ok(Self::from_image(image))
    }

    pub fn from_image(source: RgbaImage) -> Self {
        Self {
            source,
            scaled: None,
        }
    }

    pub fn source_size(&self) -> Size {
        Size::new(self.source.width() as f32, self.source.height() as f32)
    }

    /// Scale the icon to fit `available`, reusing the cached copy if present
    pub fn prepare(&mut self, available: Size) -> &ScaledIcon {
        let source = &self.source;
        self.scaled.get_or_insert_with(|| {
            let source_size = Size::new(source.width() as f32, source.height() as f32);
            let scale = fit_scale(source_size, available);
            let width = ((source_size.width * scale) as u32).max(1);
            let height = ((source_size.height * scale) as u32).max(1);

            let image = if width == source.width() && height == source.height() {
                source.clone()
            } else {
                imageops::resize(source, width, height, FilterType::Triangle)
            };

            debug!(scale, width, height, "thumb icon scaled");
            ScaledIcon {
                id: ImageId::next(),
                image,
                scale,
            }
        })
    }

    /// The scaled icon from the last layout pass
    pub fn scaled(&self) -> Option<&ScaledIcon> {
        self.scaled.as_ref()
    }

    /// Drop the scaled copy so the next [`ThumbIcon::prepare`] rescales
    pub fn invalidate(&mut self) {
        self.scaled = None;
    }
}

fn decode(bytes: &[u8]) -> Result<RgbaImage> {
    image::load_from_memory(bytes)
        .map(|image| image.to_rgba8())
        .map_err(|e| SlideUnlockError::IconDecode(e.to_string()))
}
