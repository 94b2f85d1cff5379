//! Asset URL helpers.
//!
//! The upstream returns asset *bases* (`image`, `logo`, `symbol`) without a
//! file extension; the final URL depends on the wanted resolution and format.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageQuality {
    /// 600x825 card render.
    #[default]
    High,
    /// 245x337 thumbnail.
    Low,
}

impl ImageQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageQuality::High => "high",
            ImageQuality::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Jpg,
    Webp,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Webp => "webp",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// `<base>/<quality>.<ext>`, used for card images.
pub(crate) fn card_image_url(base: &str, quality: ImageQuality, format: ImageFormat) -> String {
    format!("{}/{}.{}", base.trim_end_matches('/'), quality.as_str(), format.extension())
}

/// `<base>.<ext>`, used for set logos and symbols.
pub(crate) fn asset_url(base: &str, format: ImageFormat) -> String {
    format!("{}.{}", base, format.extension())
}
