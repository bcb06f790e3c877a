//! Image to height field preprocessing.
//!
//! Decode, downscale, grayscale, then optional contrast stretch, blur and
//! inversion. The result is an 8-bit luma image whose samples map to
//! heights `v / 255`.

use std::path::Path;

use anyhow::{bail, Context, Result};
use hueforge::{HeightField, MeshError};
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, RgbImage};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Photometric adjustments applied before meshing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessOptions {
    /// Longest side after downscaling (px). Images are never upscaled.
    pub max_dim: u32,
    /// Linear contrast about the mean; 1.0 leaves the image unchanged.
    pub contrast: f32,
    /// Gaussian blur sigma; 0 disables.
    pub blur: f32,
    /// Map dark pixels high instead of low.
    pub invert: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            max_dim: 300,
            contrast: 1.0,
            blur: 0.0,
            invert: false,
        }
    }
}

impl PreprocessOptions {
    pub fn validate(&self) -> Result<()> {
        if self.max_dim == 0 {
            bail!("max_dim must be at least 1");
        }
        if !self.contrast.is_finite() || self.contrast < 0.0 {
            bail!("contrast must be a non-negative number, got {}", self.contrast);
        }
        if !self.blur.is_finite() || self.blur < 0.0 {
            bail!("blur must be a non-negative number, got {}", self.blur);
        }
        Ok(())
    }
}

pub fn load_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).with_context(|| format!("failed to open image {}", path.display()))?;
    Ok(img.to_rgb8())
}

/// Size that fits `(w, h)` inside a `max_dim` square, keeping aspect ratio.
pub fn fit_within(w: u32, h: u32, max_dim: u32) -> (u32, u32) {
    let longest = w.max(h);
    if longest <= max_dim {
        return (w, h);
    }
    let scale = f64::from(max_dim) / f64::from(longest);
    let fit = |v: u32| ((f64::from(v) * scale).round() as u32).max(1);
    (fit(w), fit(h))
}

pub fn image_to_heightmap(img: &RgbImage, opts: &PreprocessOptions) -> Result<GrayImage> {
    opts.validate()?;
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        bail!("image is empty");
    }

    let (new_w, new_h) = fit_within(w, h, opts.max_dim);
    let mut gray = if (new_w, new_h) != (w, h) {
        warn!("Downscaling {}x{} image to {}x{}", w, h, new_w, new_h);
        to_luma(&imageops::resize(img, new_w, new_h, FilterType::Lanczos3))
    } else {
        to_luma(img)
    };

    if opts.contrast != 1.0 {
        stretch_contrast(&mut gray, opts.contrast);
    }
    if opts.blur > 0.0 {
        gray = imageops::blur(&gray, opts.blur);
    }
    if opts.invert {
        imageops::invert(&mut gray);
    }

    debug!("Height map is {}x{}", gray.width(), gray.height());
    Ok(gray)
}

/// ITU-R 601-2 luma, `L = 0.299 R + 0.587 G + 0.114 B`, in 16-bit fixed point.
fn to_luma(img: &RgbImage) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b] = img.get_pixel(x, y).0;
        let l = (u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000) >> 16;
        Luma([l as u8])
    })
}

/// `v' = clamp((v - mean) * contrast + mean, 0, 255)`, truncated.
fn stretch_contrast(gray: &mut GrayImage, contrast: f32) {
    let n = gray.as_raw().len();
    if n == 0 {
        return;
    }
    let sum: u64 = gray.as_raw().iter().map(|&v| u64::from(v)).sum();
    let mean = (sum as f64 / n as f64) as f32;
    for p in gray.pixels_mut() {
        let v = (f32::from(p.0[0]) - mean) * contrast + mean;
        p.0[0] = v.clamp(0.0, 255.0) as u8;
    }
}

/// Rows are image rows (y), columns are image columns (x).
pub fn heightmap_to_field(gray: &GrayImage) -> Result<HeightField, MeshError> {
    let (w, h) = gray.dimensions();
    // Normalize in single precision so heights match 8-bit float32 pipelines.
    let data = gray
        .as_raw()
        .iter()
        .map(|&v| f64::from(f32::from(v) / 255.0))
        .collect();
    HeightField::from_vec(h as usize, w as usize, data)
}
