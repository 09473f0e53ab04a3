//! Signature extraction engine.

use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use tracing::debug;

use crate::color::{is_ink, DEFAULT_TOLERANCE};
use crate::density::{has_sufficient_density, DEFAULT_RANGE};
use crate::error::{Error, Result};

/// Default source image path.
pub const DEFAULT_INPUT: &str = "sign2.png";

/// Default destination image path.
pub const DEFAULT_OUTPUT: &str = "sign2_output.png";

/// Value written for every pixel that is not kept.
pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Classifier parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Per-channel tolerance against the reference ink colors.
    pub tolerance: u8,
    /// Half-width of the neighborhood window.
    pub range: u32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            range: DEFAULT_RANGE,
        }
    }
}

/// Where to read from, where to write to, and how to classify.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Source image path.
    pub input: PathBuf,
    /// Destination image path. Must name an alpha-capable format.
    pub output: PathBuf,
    /// Classifier parameters.
    pub options: ExtractOptions,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            options: ExtractOptions::default(),
        }
    }
}

/// Outcome of a single extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Number of pixels kept as ink.
    pub retained: u64,
}

impl ExtractSummary {
    fn of(image: &RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            retained: image.pixels().filter(|px| px[3] != 0).count() as u64,
        }
    }
}

/// Separates signature ink from the scanned background.
///
/// Each output pixel depends only on the read-only source, so the engine is
/// stateless apart from its options and can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct SignatureExtractor {
    options: ExtractOptions,
}

impl SignatureExtractor {
    /// Create an extractor with the given options.
    #[must_use]
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// The options this extractor classifies with.
    #[must_use]
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Decide the output value for the source pixel at `(x, y)`.
    ///
    /// Returns the source color, fully opaque, if the pixel is ink and its
    /// neighborhood is dense enough; otherwise [`TRANSPARENT`].
    #[must_use]
    pub fn classify(&self, source: &RgbImage, x: u32, y: u32) -> Rgba<u8> {
        let px = *source.get_pixel(x, y);
        let ExtractOptions { tolerance, range } = self.options;

        if is_ink(px, tolerance) && has_sufficient_density(source, x, y, tolerance, range) {
            let Rgb([r, g, b]) = px;
            Rgba([r, g, b, 255])
        } else {
            TRANSPARENT
        }
    }

    /// Build the transparent-background image for `source`.
    ///
    /// The result always has the same dimensions as `source`.
    #[must_use]
    pub fn extract(&self, source: &RgbImage) -> RgbaImage {
        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return RgbaImage::new(width, height);
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let mut output = RgbaImage::new(width, height);
            let row_len = width as usize * 4;
            output
                .par_chunks_exact_mut(row_len)
                .enumerate()
                .for_each(|(y, row)| {
                    // One chunk per row, and there are `height` rows.
                    #[allow(clippy::cast_possible_truncation)]
                    let y = y as u32;
                    for (x, dst) in (0..width).zip(row.chunks_exact_mut(4)) {
                        dst.copy_from_slice(&self.classify(source, x, y).0);
                    }
                });
            output
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.extract_sequential(source)
        }
    }

    /// Single-threaded version of [`SignatureExtractor::extract`].
    #[must_use]
    pub fn extract_sequential(&self, source: &RgbImage) -> RgbaImage {
        RgbaImage::from_fn(source.width(), source.height(), |x, y| {
            self.classify(source, x, y)
        })
    }

    /// Process a single image file: load, extract, save.
    ///
    /// # Errors
    ///
    /// Returns an error if the output format cannot store transparency, the
    /// input cannot be read or decoded, or the output cannot be encoded or
    /// written. The output format is checked first, and nothing is created on
    /// disk when it or loading fails.
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<ExtractSummary> {
        output_format(output)?;

        debug!(
            input = %input.display(),
            tolerance = self.options.tolerance,
            range = self.options.range,
            "loading source image"
        );
        let source = load_image(input)?;

        let extracted = self.extract(&source);
        let summary = ExtractSummary::of(&extracted);
        debug!(
            width = summary.width,
            height = summary.height,
            retained = summary.retained,
            "signature extracted"
        );

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        save_image(&extracted, output)?;
        debug!(output = %output.display(), "wrote output image");

        Ok(summary)
    }
}

/// Run one extraction as described by `config`.
///
/// # Errors
///
/// See [`SignatureExtractor::process_file`].
pub fn run(config: &ExtractConfig) -> Result<ExtractSummary> {
    SignatureExtractor::new(config.options).process_file(&config.input, &config.output)
}

/// Load an image from disk as RGB, dropping any alpha channel.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or not a decodable
/// image.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    Ok(image::open(path)?.to_rgb8())
}

/// Save an RGBA image in the format implied by the path's extension.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] if the extension is unknown or the
/// format cannot store transparency (JPEG), or an I/O or encoding error if
/// writing fails.
pub fn save_image(img: &RgbaImage, path: &Path) -> Result<()> {
    let format = output_format(path)?;
    img.save_with_format(path, format)?;
    Ok(())
}

/// Resolve the output format from the path's extension, accepting only
/// formats that can store transparency.
fn output_format(path: &Path) -> Result<ImageFormat> {
    let format =
        ImageFormat::from_path(path).map_err(|e| Error::UnsupportedFormat(e.to_string()))?;

    match format {
        ImageFormat::Png | ImageFormat::WebP | ImageFormat::Bmp | ImageFormat::Tiff => Ok(format),
        _ => Err(Error::UnsupportedFormat(format!(
            "{format:?} cannot store transparency"
        ))),
    }
}

/// Generate a default output path from an input path.
///
/// Example: `"scan.jpg"` becomes `"scan_output.png"`.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let parent = input.parent().unwrap_or(Path::new("."));
    parent.join(format!("{stem}_output.png"))
}
