//! Per-image operations: thin delegations to the `Magick*Image*` API.
//!
//! Every method follows the same shape: check liveness, marshal arguments,
//! invoke one native function, surface the wand's exception state. Methods
//! that produce a new image list wrap the returned pointer in a fresh
//! [`MagickWand`]. None of these do any pixel math themselves.

use std::collections::HashMap;

use libc::{c_int, c_void, size_t};

use super::drawing::DrawingWand;
use super::magick::MagickWand;
use super::pixel::PixelWand;
use super::{cstring, take_magick_string};
use crate::error::{Result, WandError};
use crate::kernel::KernelInfo;
use crate::pixels::{PixelSamples, Region, validate_channel_map};
use crate::sys;
use crate::types::{
    AlphaChannelType, ChannelType, ColorspaceType, CompositeOperator, CompressionType,
    DisposeType, DistortMethod, DitherMethod, EndianType, EvaluateOperator, FilterType,
    GravityType, ImageLayerMethod, ImageType, InterlaceType, InterpolatePixelMethod,
    MagickFunction, MetricType, MontageMode, MorphologyMethod, NoiseType, OrientationType,
    PreviewType, RenderingIntent, ResolutionType, SparseColorMethod, StatisticType, StorageType,
    VirtualPixelMethod,
};

fn magick_bool(b: bool) -> sys::MagickBooleanType {
    if b { sys::MAGICK_TRUE } else { sys::MAGICK_FALSE }
}

/// Statistics for one channel, as computed by the native library.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChannelStatistics {
    pub depth: usize,
    pub minima: f64,
    pub maxima: f64,
    pub mean: f64,
    pub standard_deviation: f64,
    pub variance: f64,
    pub kurtosis: f64,
    pub skewness: f64,
}

impl From<sys::ChannelStatistics> for ChannelStatistics {
    fn from(s: sys::ChannelStatistics) -> Self {
        Self {
            depth: s.depth,
            minima: s.minima,
            maxima: s.maxima,
            mean: s.mean,
            standard_deviation: s.standard_deviation,
            variance: s.variance,
            kurtosis: s.kurtosis,
            skewness: s.skewness,
        }
    }
}

/// Haralick texture features for one channel, one value per direction
/// (horizontal, vertical, left and right diagonals).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChannelFeatures {
    pub angular_second_moment: [f64; 4],
    pub contrast: [f64; 4],
    pub correlation: [f64; 4],
    pub variance_sum_of_squares: [f64; 4],
    pub inverse_difference_moment: [f64; 4],
    pub sum_average: [f64; 4],
    pub sum_variance: [f64; 4],
    pub sum_entropy: [f64; 4],
    pub entropy: [f64; 4],
    pub difference_variance: [f64; 4],
    pub difference_entropy: [f64; 4],
    pub measure_of_correlation_1: [f64; 4],
    pub measure_of_correlation_2: [f64; 4],
    pub maximum_correlation_coefficient: [f64; 4],
}

impl From<sys::ChannelFeatures> for ChannelFeatures {
    fn from(f: sys::ChannelFeatures) -> Self {
        Self {
            angular_second_moment: f.angular_second_moment,
            contrast: f.contrast,
            correlation: f.correlation,
            variance_sum_of_squares: f.variance_sum_of_squares,
            inverse_difference_moment: f.inverse_difference_moment,
            sum_average: f.sum_average,
            sum_variance: f.sum_variance,
            sum_entropy: f.sum_entropy,
            entropy: f.entropy,
            difference_variance: f.difference_variance,
            difference_entropy: f.difference_entropy,
            measure_of_correlation_1: f.measure_of_correlation_1,
            measure_of_correlation_2: f.measure_of_correlation_2,
            maximum_correlation_coefficient: f.maximum_correlation_coefficient,
        }
    }
}

// Per-channel result arrays are indexed by the channel's bit value, with a
// summary entry at the composite index.
const CHANNEL_INDICES: [(ChannelType, usize); 6] = [
    (ChannelType::RED, 0x01),
    (ChannelType::GREEN, 0x02),
    (ChannelType::BLUE, 0x04),
    (ChannelType::OPACITY, 0x08),
    (ChannelType::BLACK, 0x20),
    (ChannelType::COMPOSITES, 0x2f),
];

impl MagickWand {
    /// Blur less near edges and more away from them. A radius of 0 lets
    /// the library pick one from sigma.
    pub fn adaptive_blur_image(&mut self, radius: f64, sigma: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickAdaptiveBlurImage(wand, radius, sigma) };
        self.last_error()
    }

    pub fn adaptive_blur_image_channel(
        &mut self,
        channel: ChannelType,
        radius: f64,
        sigma: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickAdaptiveBlurImageChannel(wand, channel.bits() as c_int, radius, sigma)
        };
        self.last_error()
    }

    /// Resize with data-dependent triangulation.
    pub fn adaptive_resize_image(&mut self, columns: usize, rows: usize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickAdaptiveResizeImage(wand, columns, rows) };
        self.last_error()
    }

    /// Sharpen more near edges and less away from them.
    pub fn adaptive_sharpen_image(&mut self, radius: f64, sigma: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickAdaptiveSharpenImage(wand, radius, sigma) };
        self.last_error()
    }

    pub fn adaptive_sharpen_image_channel(
        &mut self,
        channel: ChannelType,
        radius: f64,
        sigma: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickAdaptiveSharpenImageChannel(wand, channel.bits() as c_int, radius, sigma)
        };
        self.last_error()
    }

    /// Threshold each pixel against the mean of its local neighborhood,
    /// for images whose global histogram has no clear peaks.
    pub fn adaptive_threshold_image(
        &mut self,
        width: usize,
        height: usize,
        offset: isize,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickAdaptiveThresholdImage(wand, width, height, offset) };
        self.last_error()
    }

    /// Insert clones of the other wand's images at the current position.
    /// Use the iterator-positioning calls to append or prepend instead.
    pub fn add_image(&mut self, other: &MagickWand) -> Result<()> {
        let wand = self.ptr()?;
        let other_wand = other.ptr()?;
        unsafe { sys::MagickAddImage(wand, other_wand) };
        self.last_error()
    }

    /// Add random noise of the given distribution.
    pub fn add_noise_image(&mut self, noise_type: NoiseType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickAddNoiseImage(wand, noise_type as c_int) };
        self.last_error()
    }

    pub fn add_noise_image_channel(
        &mut self,
        channel: ChannelType,
        noise_type: NoiseType,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickAddNoiseImageChannel(wand, channel.bits() as c_int, noise_type as c_int)
        };
        self.last_error()
    }

    /// Transform the image by the drawing wand's affine matrix.
    pub fn affine_transform_image(&mut self, drawing_wand: &DrawingWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickAffineTransformImage(wand, drawing_wand.ptr()?) };
        self.last_error()
    }

    /// Draw text on the image. `x` is the left of the text, `y` the
    /// baseline, `angle` the rotation.
    pub fn annotate_image(
        &mut self,
        drawing_wand: &DrawingWand,
        x: f64,
        y: f64,
        angle: f64,
        text: &str,
    ) -> Result<()> {
        let wand = self.ptr()?;
        let c_text = cstring(text)?;
        unsafe {
            sys::MagickAnnotateImage(wand, drawing_wand.ptr()?, x, y, angle, c_text.as_ptr())
        };
        self.last_error()
    }

    /// Animate the image sequence on an X server.
    pub fn animate_images(&self, server_name: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_server = cstring(server_name)?;
        unsafe { sys::MagickAnimateImages(wand, c_server.as_ptr()) };
        self.last_error()
    }

    /// Append the images from the current one onward into a single image:
    /// left-to-right, or top-to-bottom when `top_to_bottom` is set.
    pub fn append_images(&self, top_to_bottom: bool) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let appended = unsafe { sys::MagickAppendImages(wand, magick_bool(top_to_bottom)) };
        self.wrap_new(appended)
    }

    /// Adjust gamma so the image mean lands on a middle gray.
    pub fn auto_gamma_image(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickAutoGammaImage(wand) };
        self.last_error()
    }

    pub fn auto_gamma_image_channel(&mut self, channel: ChannelType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickAutoGammaImageChannel(wand, channel.bits() as c_int) };
        self.last_error()
    }

    /// Stretch channel minima and maxima to the full quantum range.
    pub fn auto_level_image(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickAutoLevelImage(wand) };
        self.last_error()
    }

    pub fn auto_level_image_channel(&mut self, channel: ChannelType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickAutoLevelImageChannel(wand, channel.bits() as c_int) };
        self.last_error()
    }

    /// Force pixels below the threshold to black, leaving the rest alone.
    pub fn black_threshold_image(&mut self, threshold: &PixelWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickBlackThresholdImage(wand, threshold.ptr()?) };
        self.last_error()
    }

    /// Mute colors toward a nighttime moonlight look.
    pub fn blue_shift_image(&mut self, factor: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickBlueShiftImage(wand, factor) };
        self.last_error()
    }

    /// Gaussian blur. Radius should exceed sigma; radius 0 picks one.
    pub fn blur_image(&mut self, radius: f64, sigma: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickBlurImage(wand, radius, sigma) };
        self.last_error()
    }

    pub fn blur_image_channel(
        &mut self,
        channel: ChannelType,
        radius: f64,
        sigma: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickBlurImageChannel(wand, channel.bits() as c_int, radius, sigma) };
        self.last_error()
    }

    /// Surround the image with a border of the given color.
    pub fn border_image(
        &mut self,
        border_color: &PixelWand,
        width: usize,
        height: usize,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickBorderImage(wand, border_color.ptr()?, width, height) };
        self.last_error()
    }

    /// Change brightness and/or contrast, each in percent (-100..100).
    pub fn brightness_contrast_image(&mut self, brightness: f64, contrast: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickBrightnessContrastImage(wand, brightness, contrast) };
        self.last_error()
    }

    pub fn brightness_contrast_image_channel(
        &mut self,
        channel: ChannelType,
        brightness: f64,
        contrast: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickBrightnessContrastImageChannel(
                wand,
                channel.bits() as c_int,
                brightness,
                contrast,
            )
        };
        self.last_error()
    }

    /// Simulate a charcoal drawing.
    pub fn charcoal_image(&mut self, radius: f64, sigma: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickCharcoalImage(wand, radius, sigma) };
        self.last_error()
    }

    /// Remove a region and collapse the image to occupy it.
    pub fn chop_image(&mut self, width: usize, height: usize, x: isize, y: isize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickChopImage(wand, width, height, x, y) };
        self.last_error()
    }

    /// Clamp pixel values to the quantum range.
    pub fn clamp_image(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickClampImage(wand) };
        self.last_error()
    }

    pub fn clamp_image_channel(&mut self, channel: ChannelType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickClampImageChannel(wand, channel.bits() as c_int) };
        self.last_error()
    }

    /// Clip along the first path in the image's 8BIM profile, if any.
    pub fn clip_image(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickClipImage(wand) };
        self.last_error()
    }

    /// Clip along a named 8BIM path; `"#1"` selects by number. `inside`
    /// chooses whether later operations apply inside or outside the path.
    pub fn clip_image_path(&mut self, pathname: &str, inside: bool) -> Result<()> {
        let wand = self.ptr()?;
        let c_pathname = cstring(pathname)?;
        unsafe { sys::MagickClipImagePath(wand, c_pathname.as_ptr(), magick_bool(inside)) };
        self.last_error()
    }

    /// Replace colors from a color lookup table image.
    pub fn clut_image(&mut self, clut: &MagickWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickClutImage(wand, clut.ptr()?) };
        self.last_error()
    }

    pub fn clut_image_channel(&mut self, channel: ChannelType, clut: &MagickWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickClutImageChannel(wand, channel.bits() as c_int, clut.ptr()?) };
        self.last_error()
    }

    /// Composite an animation sequence so every frame is full-size, with
    /// page offsets and disposal methods applied.
    pub fn coalesce_images(&self) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let coalesced = unsafe { sys::MagickCoalesceImages(wand) };
        self.wrap_new(coalesced)
    }

    /// Apply an ASC Color Decision List (CCC XML document).
    pub fn color_decision_list_image(&mut self, ccc_xml: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_xml = cstring(ccc_xml)?;
        unsafe { sys::MagickColorDecisionListImage(wand, c_xml.as_ptr()) };
        self.last_error()
    }

    /// Blend the fill color with each pixel.
    pub fn colorize_image(&mut self, colorize: &PixelWand, opacity: &PixelWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickColorizeImage(wand, colorize.ptr()?, opacity.ptr()?) };
        self.last_error()
    }

    /// Apply a color transformation matrix: typically 5x5 for RGBA, 6x6
    /// for CMYKA.
    pub fn color_matrix_image(&mut self, color_matrix: &KernelInfo) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickColorMatrixImage(wand, color_matrix.ptr()) };
        self.last_error()
    }

    /// Combine grayscale images into the channels of a single image, in
    /// sequence order (1 => red, 2 => green, ...).
    pub fn combine_images(&self, channel: ChannelType) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let combined = unsafe { sys::MagickCombineImages(wand, channel.bits() as c_int) };
        self.wrap_new(combined)
    }

    /// Attach a comment to the image.
    pub fn comment_image(&mut self, comment: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_comment = cstring(comment)?;
        unsafe { sys::MagickCommentImage(wand, c_comment.as_ptr()) };
        self.last_error()
    }

    /// Compare selected channels against a reconstructed image; returns
    /// the difference image and the distortion.
    pub fn compare_image_channels(
        &self,
        reference: &MagickWand,
        channel: ChannelType,
        metric: MetricType,
    ) -> Result<(MagickWand, f64)> {
        let wand = self.ptr()?;
        let mut distortion = 0.0f64;
        let diff = unsafe {
            sys::MagickCompareImageChannels(
                wand,
                reference.ptr()?,
                channel.bits() as c_int,
                metric as c_int,
                &mut distortion,
            )
        };
        Ok((self.wrap_new(diff)?, distortion))
    }

    /// Compare each image with the next in the sequence, returning the
    /// maximum bounding region of the differences.
    pub fn compare_image_layers(&self, method: ImageLayerMethod) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let layers = unsafe { sys::MagickCompareImageLayers(wand, method as c_int) };
        self.wrap_new(layers)
    }

    /// Compare against a reconstructed image; returns the difference image
    /// and the distortion under the chosen metric.
    pub fn compare_images(
        &self,
        reference: &MagickWand,
        metric: MetricType,
    ) -> Result<(MagickWand, f64)> {
        let wand = self.ptr()?;
        let mut distortion = 0.0f64;
        let diff = unsafe {
            sys::MagickCompareImages(wand, reference.ptr()?, metric as c_int, &mut distortion)
        };
        Ok((self.wrap_new(diff)?, distortion))
    }

    /// Composite another image onto this one at the given offset.
    pub fn composite_image(
        &mut self,
        source: &MagickWand,
        compose: CompositeOperator,
        x: isize,
        y: isize,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickCompositeImage(wand, source.ptr()?, compose as c_int, x, y) };
        self.last_error()
    }

    pub fn composite_image_channel(
        &mut self,
        channel: ChannelType,
        source: &MagickWand,
        compose: CompositeOperator,
        x: isize,
        y: isize,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickCompositeImageChannel(
                wand,
                channel.bits() as c_int,
                source.ptr()?,
                compose as c_int,
                x,
                y,
            )
        };
        self.last_error()
    }

    /// Composite the source image list over this one layer by layer,
    /// offsets interpreted against each layer's virtual canvas. A single
    /// trailing image on either side is repeated against the other list.
    pub fn composite_layers(
        &mut self,
        source: &MagickWand,
        compose: CompositeOperator,
        x: isize,
        y: isize,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickCompositeLayers(wand, source.ptr()?, compose as c_int, x, y) };
        self.last_error()
    }

    /// Enhance (sharpen=true) or reduce the intensity difference between
    /// lighter and darker elements.
    pub fn contrast_image(&mut self, sharpen: bool) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickContrastImage(wand, magick_bool(sharpen)) };
        self.last_error()
    }

    /// Stretch pixel values to span from `black_point` to `white_point`.
    pub fn contrast_stretch_image(&mut self, black_point: f64, white_point: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickContrastStretchImage(wand, black_point, white_point) };
        self.last_error()
    }

    pub fn contrast_stretch_image_channel(
        &mut self,
        channel: ChannelType,
        black_point: f64,
        white_point: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickContrastStretchImageChannel(
                wand,
                channel.bits() as c_int,
                black_point,
                white_point,
            )
        };
        self.last_error()
    }

    /// Convolve with a custom `order` x `order` kernel.
    pub fn convolve_image(&mut self, order: usize, kernel: &[f64]) -> Result<()> {
        let expected = order.saturating_mul(order);
        if kernel.len() != expected {
            return Err(WandError::BufferSizeMismatch {
                expected,
                actual: kernel.len(),
            });
        }
        let wand = self.ptr()?;
        unsafe { sys::MagickConvolveImage(wand, order, kernel.as_ptr()) };
        self.last_error()
    }

    pub fn convolve_image_channel(
        &mut self,
        channel: ChannelType,
        order: usize,
        kernel: &[f64],
    ) -> Result<()> {
        let expected = order.saturating_mul(order);
        if kernel.len() != expected {
            return Err(WandError::BufferSizeMismatch {
                expected,
                actual: kernel.len(),
            });
        }
        let wand = self.ptr()?;
        unsafe {
            sys::MagickConvolveImageChannel(wand, channel.bits() as c_int, order, kernel.as_ptr())
        };
        self.last_error()
    }

    /// Extract a region of the image.
    pub fn crop_image(&mut self, width: usize, height: usize, x: isize, y: isize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickCropImage(wand, width, height, x, y) };
        self.last_error()
    }

    /// Rotate the colormap by `displace` positions.
    pub fn cycle_colormap_image(&mut self, displace: isize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickCycleColormapImage(wand, displace) };
        self.last_error()
    }

    /// Add a new image built from raw pixel data, in scanline order
    /// top-to-bottom. The storage tag comes from the buffer's variant;
    /// float variants are expected normalized to [0.0, 1.0].
    pub fn constitute_image(
        &mut self,
        columns: usize,
        rows: usize,
        map: &str,
        pixels: &PixelSamples,
    ) -> Result<()> {
        validate_channel_map(map)?;
        let expected = Region::new(0, 0, columns, rows).sample_count(map.len())?;
        if pixels.len() != expected {
            return Err(WandError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        let wand = self.ptr()?;
        let c_map = cstring(map)?;
        unsafe {
            sys::MagickConstituteImage(
                wand,
                columns,
                rows,
                c_map.as_ptr(),
                pixels.storage_type() as c_int,
                pixels.as_ptr(),
            )
        };
        self.last_error()
    }

    /// Convert cipher pixels back to plain pixels.
    pub fn decipher_image(&mut self, passphrase: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_passphrase = cstring(passphrase)?;
        unsafe { sys::MagickDecipherImage(wand, c_passphrase.as_ptr()) };
        self.last_error()
    }

    /// Compare each image with the next and keep only the pixel regions
    /// that differ.
    pub fn deconstruct_images(&self) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let deconstructed = unsafe { sys::MagickDeconstructImages(wand) };
        self.wrap_new(deconstructed)
    }

    /// Straighten a scanned image. `threshold` separates background from
    /// foreground.
    pub fn deskew_image(&mut self, threshold: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickDeskewImage(wand, threshold) };
        self.last_error()
    }

    /// Reduce speckle noise while preserving edges.
    pub fn despeckle_image(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickDespeckleImage(wand) };
        self.last_error()
    }

    /// Display the image on an X server.
    pub fn display_image(&self, server_name: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_server = cstring(server_name)?;
        unsafe { sys::MagickDisplayImage(wand, c_server.as_ptr()) };
        self.last_error()
    }

    /// Display the image sequence on an X server.
    pub fn display_images(&self, server_name: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_server = cstring(server_name)?;
        unsafe { sys::MagickDisplayImages(wand, c_server.as_ptr()) };
        self.last_error()
    }

    /// Distort the image by mapping color lookups through the method's
    /// control-point or coefficient arguments. With `bestfit` the output
    /// canvas grows to hold the whole distorted source.
    pub fn distort_image(
        &mut self,
        method: DistortMethod,
        arguments: &[f64],
        bestfit: bool,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickDistortImage(
                wand,
                method as c_int,
                arguments.len(),
                arguments.as_ptr(),
                magick_bool(bestfit),
            )
        };
        self.last_error()
    }

    /// Render the drawing wand's accumulated vector operations onto the
    /// current image.
    pub fn draw_image(&mut self, drawing_wand: &DrawingWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickDrawImage(wand, drawing_wand.ptr()?) };
        self.last_error()
    }

    /// Enhance edges with a convolution filter of the given radius.
    pub fn edge_image(&mut self, radius: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickEdgeImage(wand, radius) };
        self.last_error()
    }

    /// Grayscale image with a three-dimensional emboss effect.
    pub fn emboss_image(&mut self, radius: f64, sigma: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickEmbossImage(wand, radius, sigma) };
        self.last_error()
    }

    /// Convert plain pixels to cipher pixels.
    pub fn encipher_image(&mut self, passphrase: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_passphrase = cstring(passphrase)?;
        unsafe { sys::MagickEncipherImage(wand, c_passphrase.as_ptr()) };
        self.last_error()
    }

    /// Digital filter that improves noisy images.
    pub fn enhance_image(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickEnhanceImage(wand) };
        self.last_error()
    }

    /// Equalize the image histogram.
    pub fn equalize_image(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickEqualizeImage(wand) };
        self.last_error()
    }

    pub fn equalize_image_channel(&mut self, channel: ChannelType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickEqualizeImageChannel(wand, channel.bits() as c_int) };
        self.last_error()
    }

    /// Apply an arithmetic, relational or logical operator with a constant.
    pub fn evaluate_image(&mut self, op: EvaluateOperator, value: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickEvaluateImage(wand, op as c_int, value) };
        self.last_error()
    }

    /// Fold the whole sequence into one image with the operator (Mean,
    /// Max, ...).
    pub fn evaluate_images(&self, op: EvaluateOperator) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let evaluated = unsafe { sys::MagickEvaluateImages(wand, op as c_int) };
        self.wrap_new(evaluated)
    }

    pub fn evaluate_image_channel(
        &mut self,
        channel: ChannelType,
        op: EvaluateOperator,
        value: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickEvaluateImageChannel(wand, channel.bits() as c_int, op as c_int, value)
        };
        self.last_error()
    }

    /// Extract a region's pixels as a flat, channel-interleaved buffer of
    /// the requested storage type.
    ///
    /// The region is validated against the image extent before any native
    /// call; zero-sized and out-of-bounds regions fail with
    /// [`WandError::RegionOutOfBounds`]. Integer storage gives full-range
    /// values, float storage is normalized to [0.0, 1.0].
    pub fn export_image_pixels(
        &self,
        region: Region,
        map: &str,
        storage: StorageType,
    ) -> Result<PixelSamples> {
        validate_channel_map(map)?;
        let width = self.get_image_width()?;
        let height = self.get_image_height()?;
        region.validate(width, height)?;
        let count = region.sample_count(map.len())?;
        let mut samples = PixelSamples::allocate(storage, count)?;

        let wand = self.ptr()?;
        let c_map = cstring(map)?;
        unsafe {
            sys::MagickExportImagePixels(
                wand,
                region.x,
                region.y,
                region.width,
                region.height,
                c_map.as_ptr(),
                storage as c_int,
                samples.as_mut_ptr(),
            )
        };
        self.last_error()?;
        Ok(samples)
    }

    /// Extend the canvas per the geometry, filling new space with the
    /// background color. The offset moves the original image relative to
    /// the new canvas.
    pub fn extent_image(&mut self, width: usize, height: usize, x: isize, y: isize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickExtentImage(wand, width, height, x, y) };
        self.last_error()
    }

    /// Convolve with a custom kernel.
    pub fn filter_image(&mut self, kernel: &KernelInfo) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickFilterImage(wand, kernel.ptr()) };
        self.last_error()
    }

    pub fn filter_image_channel(&mut self, channel: ChannelType, kernel: &KernelInfo) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickFilterImageChannel(wand, channel.bits() as c_int, kernel.ptr()) };
        self.last_error()
    }

    /// Mirror vertically, around the central x-axis.
    pub fn flip_image(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickFlipImage(wand) };
        self.last_error()
    }

    /// Flood-fill from (x, y): recolor neighboring pixels matching the
    /// target within `fuzz` tolerance, or every non-matching pixel when
    /// `invert` is set.
    #[allow(clippy::too_many_arguments)]
    pub fn floodfill_paint_image(
        &mut self,
        channel: ChannelType,
        fill: &PixelWand,
        fuzz: f64,
        border_color: &PixelWand,
        x: isize,
        y: isize,
        invert: bool,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickFloodfillPaintImage(
                wand,
                channel.bits() as c_int,
                fill.ptr()?,
                fuzz,
                border_color.ptr()?,
                x,
                y,
                magick_bool(invert),
            )
        };
        self.last_error()
    }

    /// Mirror horizontally, around the central y-axis.
    pub fn flop_image(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickFlopImage(wand) };
        self.last_error()
    }

    /// Discrete Fourier transform, as a magnitude/phase or real/imaginary
    /// image pair.
    pub fn forward_fourier_transform_image(&mut self, magnitude: bool) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickForwardFourierTransformImage(wand, magick_bool(magnitude)) };
        self.last_error()
    }

    /// Add a simulated three-dimensional frame with inner and outer bevels.
    pub fn frame_image(
        &mut self,
        matte_color: &PixelWand,
        width: usize,
        height: usize,
        inner_bevel: isize,
        outer_bevel: isize,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickFrameImage(wand, matte_color.ptr()?, width, height, inner_bevel, outer_bevel)
        };
        self.last_error()
    }

    /// Apply a parameterized function (polynomial, sinusoid, ...) to every
    /// pixel.
    pub fn function_image(&mut self, function: MagickFunction, arguments: &[f64]) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickFunctionImage(wand, function as c_int, arguments.len(), arguments.as_ptr())
        };
        self.last_error()
    }

    pub fn function_image_channel(
        &mut self,
        channel: ChannelType,
        function: MagickFunction,
        arguments: &[f64],
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickFunctionImageChannel(
                wand,
                channel.bits() as c_int,
                function as c_int,
                arguments.len(),
                arguments.as_ptr(),
            )
        };
        self.last_error()
    }

    /// Evaluate an fx expression for each pixel, producing a new image.
    pub fn fx_image(&self, expression: &str) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let c_expression = cstring(expression)?;
        let fx = unsafe { sys::MagickFxImage(wand, c_expression.as_ptr()) };
        self.wrap_new(fx)
    }

    pub fn fx_image_channel(&self, channel: ChannelType, expression: &str) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let c_expression = cstring(expression)?;
        let fx = unsafe {
            sys::MagickFxImageChannel(wand, channel.bits() as c_int, c_expression.as_ptr())
        };
        self.wrap_new(fx)
    }

    /// Gamma-correct the image; typical values run 0.8 to 2.3.
    pub fn gamma_image(&mut self, gamma: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickGammaImage(wand, gamma) };
        self.last_error()
    }

    pub fn gamma_image_channel(&mut self, channel: ChannelType, gamma: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickGammaImageChannel(wand, channel.bits() as c_int, gamma) };
        self.last_error()
    }

    /// Plain Gaussian blur with the given radius and sigma.
    pub fn gaussian_blur_image(&mut self, radius: f64, sigma: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickGaussianBlurImage(wand, radius, sigma) };
        self.last_error()
    }

    pub fn gaussian_blur_image_channel(
        &mut self,
        channel: ChannelType,
        radius: f64,
        sigma: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickGaussianBlurImageChannel(wand, channel.bits() as c_int, radius, sigma)
        };
        self.last_error()
    }

    /// Clone the image at the current index into its own wand.
    pub fn get_image(&self) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let image = unsafe { sys::MagickGetImage(wand) };
        self.wrap_new(image)
    }

    /// Whether the image's alpha channel is active (RGBA/CMYKA rather than
    /// RGB/CMYK).
    pub fn get_image_alpha_channel(&self) -> Result<bool> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickGetImageAlphaChannel(wand) } == sys::MAGICK_TRUE)
    }

    /// Clone the image's clip mask into its own wand.
    pub fn get_image_clip_mask(&self) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let mask = unsafe { sys::MagickGetImageClipMask(wand) };
        self.wrap_new(mask)
    }

    pub fn get_image_background_color(&self) -> Result<PixelWand> {
        let wand = self.ptr()?;
        let color = PixelWand::new()?;
        unsafe { sys::MagickGetImageBackgroundColor(wand, color.ptr()?) };
        self.last_error()?;
        Ok(color)
    }

    /// Chromaticity blue primary point.
    pub fn get_image_blue_primary(&self) -> Result<(f64, f64)> {
        let wand = self.ptr()?;
        let (mut x, mut y) = (0.0f64, 0.0f64);
        unsafe { sys::MagickGetImageBluePrimary(wand, &mut x, &mut y) };
        self.last_error()?;
        Ok((x, y))
    }

    pub fn get_image_border_color(&self) -> Result<PixelWand> {
        let wand = self.ptr()?;
        let color = PixelWand::new()?;
        unsafe { sys::MagickGetImageBorderColor(wand, color.ptr()?) };
        self.last_error()?;
        Ok(color)
    }

    pub fn get_image_channel_depth(&self, channel: ChannelType) -> Result<usize> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickGetImageChannelDepth(wand, channel.bits() as c_int) })
    }

    /// Distortion of selected channels against a reconstructed image.
    pub fn get_image_channel_distortion(
        &self,
        reference: &MagickWand,
        channel: ChannelType,
        metric: MetricType,
    ) -> Result<f64> {
        let wand = self.ptr()?;
        let mut distortion = 0.0f64;
        unsafe {
            sys::MagickGetImageChannelDistortion(
                wand,
                reference.ptr()?,
                channel.bits() as c_int,
                metric as c_int,
                &mut distortion,
            )
        };
        self.last_error()?;
        Ok(distortion)
    }

    /// Per-channel distortions against a reconstructed image, keyed by
    /// channel, with a summary entry under
    /// [`ChannelType::COMPOSITES`].
    pub fn get_image_channel_distortions(
        &self,
        reference: &MagickWand,
        metric: MetricType,
    ) -> Result<HashMap<ChannelType, f64>> {
        let wand = self.ptr()?;
        let distortions =
            unsafe { sys::MagickGetImageChannelDistortions(wand, reference.ptr()?, metric as c_int) };
        if distortions.is_null() {
            return Err(self.null_wand_error());
        }
        let mut map = HashMap::with_capacity(CHANNEL_INDICES.len());
        for (channel, index) in CHANNEL_INDICES {
            map.insert(channel, unsafe { *distortions.add(index) });
        }
        unsafe { sys::MagickRelinquishMemory(distortions as *mut c_void) };
        Ok(map)
    }

    /// Haralick texture features for each channel in four directions at
    /// the given distance.
    pub fn get_image_channel_features(
        &self,
        distance: usize,
    ) -> Result<HashMap<ChannelType, ChannelFeatures>> {
        let wand = self.ptr()?;
        let features = unsafe { sys::MagickGetImageChannelFeatures(wand, distance) };
        if features.is_null() {
            return Err(self.null_wand_error());
        }
        let mut map = HashMap::with_capacity(CHANNEL_INDICES.len());
        for (channel, index) in CHANNEL_INDICES {
            map.insert(channel, ChannelFeatures::from(unsafe { *features.add(index) }));
        }
        unsafe { sys::MagickRelinquishMemory(features as *mut c_void) };
        Ok(map)
    }

    /// Kurtosis and skewness of the selected channels.
    pub fn get_image_channel_kurtosis(&self, channel: ChannelType) -> Result<(f64, f64)> {
        let wand = self.ptr()?;
        let (mut kurtosis, mut skewness) = (0.0f64, 0.0f64);
        unsafe {
            sys::MagickGetImageChannelKurtosis(
                wand,
                channel.bits() as c_int,
                &mut kurtosis,
                &mut skewness,
            )
        };
        self.last_error()?;
        Ok((kurtosis, skewness))
    }

    /// Mean and standard deviation of the selected channels.
    pub fn get_image_channel_mean(&self, channel: ChannelType) -> Result<(f64, f64)> {
        let wand = self.ptr()?;
        let (mut mean, mut standard_deviation) = (0.0f64, 0.0f64);
        unsafe {
            sys::MagickGetImageChannelMean(
                wand,
                channel.bits() as c_int,
                &mut mean,
                &mut standard_deviation,
            )
        };
        self.last_error()?;
        Ok((mean, standard_deviation))
    }

    /// Minimum and maximum of the selected channels.
    pub fn get_image_channel_range(&self, channel: ChannelType) -> Result<(f64, f64)> {
        let wand = self.ptr()?;
        let (mut minima, mut maxima) = (0.0f64, 0.0f64);
        unsafe {
            sys::MagickGetImageChannelRange(wand, channel.bits() as c_int, &mut minima, &mut maxima)
        };
        self.last_error()?;
        Ok((minima, maxima))
    }

    /// Statistics (depth, extrema, mean, deviation, kurtosis, skewness)
    /// for each channel, with a summary entry under
    /// [`ChannelType::COMPOSITES`].
    pub fn get_image_channel_statistics(
        &self,
    ) -> Result<HashMap<ChannelType, ChannelStatistics>> {
        let wand = self.ptr()?;
        let statistics = unsafe { sys::MagickGetImageChannelStatistics(wand) };
        if statistics.is_null() {
            return Err(self.null_wand_error());
        }
        let mut map = HashMap::with_capacity(CHANNEL_INDICES.len());
        for (channel, index) in CHANNEL_INDICES {
            map.insert(
                channel,
                ChannelStatistics::from(unsafe { *statistics.add(index) }),
            );
        }
        unsafe { sys::MagickRelinquishMemory(statistics as *mut c_void) };
        Ok(map)
    }

    /// Color of the given colormap index.
    pub fn get_image_colormap_color(&self, index: usize) -> Result<PixelWand> {
        let wand = self.ptr()?;
        let color = PixelWand::new()?;
        unsafe { sys::MagickGetImageColormapColor(wand, index, color.ptr()?) };
        self.last_error()?;
        Ok(color)
    }

    /// Number of unique colors in the image.
    pub fn get_image_colors(&self) -> Result<usize> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickGetImageColors(wand) })
    }

    pub fn get_image_colorspace(&self) -> Result<ColorspaceType> {
        let wand = self.ptr()?;
        Ok(ColorspaceType::from_raw(unsafe {
            sys::MagickGetImageColorspace(wand)
        }))
    }

    pub fn get_image_compose(&self) -> Result<CompositeOperator> {
        let wand = self.ptr()?;
        Ok(CompositeOperator::from_raw(unsafe {
            sys::MagickGetImageCompose(wand)
        }))
    }

    pub fn get_image_compression(&self) -> Result<CompressionType> {
        let wand = self.ptr()?;
        Ok(CompressionType::from_raw(unsafe {
            sys::MagickGetImageCompression(wand)
        }))
    }

    pub fn get_image_compression_quality(&self) -> Result<usize> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickGetImageCompressionQuality(wand) })
    }

    /// Frame delay, in ticks.
    pub fn get_image_delay(&self) -> Result<usize> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickGetImageDelay(wand) })
    }

    pub fn get_image_depth(&self) -> Result<usize> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickGetImageDepth(wand) })
    }

    /// Distortion against a reconstructed image under the chosen metric.
    pub fn get_image_distortion(
        &self,
        reference: &MagickWand,
        metric: MetricType,
    ) -> Result<f64> {
        let wand = self.ptr()?;
        let mut distortion = 0.0f64;
        unsafe {
            sys::MagickGetImageDistortion(wand, reference.ptr()?, metric as c_int, &mut distortion)
        };
        self.last_error()?;
        Ok(distortion)
    }

    pub fn get_image_dispose(&self) -> Result<DisposeType> {
        let wand = self.ptr()?;
        Ok(DisposeType::from_raw(unsafe {
            sys::MagickGetImageDispose(wand)
        }))
    }

    pub fn get_image_endian(&self) -> Result<EndianType> {
        let wand = self.ptr()?;
        Ok(EndianType::from_raw(unsafe {
            sys::MagickGetImageEndian(wand)
        }))
    }

    pub fn get_image_filename(&self) -> Result<String> {
        let wand = self.ptr()?;
        let raw = unsafe { sys::MagickGetImageFilename(wand) };
        Ok(unsafe { take_magick_string(raw) })
    }

    /// Format of the image at the current index, e.g. `"PNG"`.
    pub fn get_image_format(&self) -> Result<String> {
        let wand = self.ptr()?;
        let raw = unsafe { sys::MagickGetImageFormat(wand) };
        Ok(unsafe { take_magick_string(raw) })
    }

    pub fn get_image_fuzz(&self) -> Result<f64> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickGetImageFuzz(wand) })
    }

    pub fn get_image_gamma(&self) -> Result<f64> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickGetImageGamma(wand) })
    }

    pub fn get_image_gravity(&self) -> Result<GravityType> {
        let wand = self.ptr()?;
        Ok(GravityType::from_raw(unsafe {
            sys::MagickGetImageGravity(wand)
        }))
    }

    /// Chromaticity green primary point.
    pub fn get_image_green_primary(&self) -> Result<(f64, f64)> {
        let wand = self.ptr()?;
        let (mut x, mut y) = (0.0f64, 0.0f64);
        unsafe { sys::MagickGetImageGreenPrimary(wand, &mut x, &mut y) };
        self.last_error()?;
        Ok((x, y))
    }

    /// Image height in pixels.
    pub fn get_image_height(&self) -> Result<usize> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickGetImageHeight(wand) })
    }

    /// The image histogram: one pixel wand per unique color, each carrying
    /// its color count.
    pub fn get_image_histogram(&self) -> Result<Vec<PixelWand>> {
        let wand = self.ptr()?;
        let mut count: size_t = 0;
        let colors = unsafe { sys::MagickGetImageHistogram(wand, &mut count) };
        if colors.is_null() {
            return Err(self.null_wand_error());
        }
        let mut histogram = Vec::with_capacity(count);
        for i in 0..count {
            if let Some(color) = PixelWand::adopt(unsafe { *colors.add(i) }) {
                histogram.push(color);
            }
        }
        unsafe { sys::MagickRelinquishMemory(colors as *mut c_void) };
        Ok(histogram)
    }

    pub fn get_image_interlace_scheme(&self) -> Result<InterlaceType> {
        let wand = self.ptr()?;
        Ok(InterlaceType::from_raw(unsafe {
            sys::MagickGetImageInterlaceScheme(wand)
        }))
    }

    pub fn get_image_interpolate_method(&self) -> Result<InterpolatePixelMethod> {
        let wand = self.ptr()?;
        Ok(InterpolatePixelMethod::from_raw(unsafe {
            sys::MagickGetImageInterpolateMethod(wand)
        }))
    }

    /// Animation loop count; 0 loops forever.
    pub fn get_image_iterations(&self) -> Result<usize> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickGetImageIterations(wand) })
    }

    /// Serialized length of the image in bytes.
    pub fn get_image_length(&self) -> Result<u64> {
        let wand = self.ptr()?;
        let mut length: u64 = 0;
        unsafe { sys::MagickGetImageLength(wand, &mut length) };
        self.last_error()?;
        Ok(length)
    }

    pub fn get_image_matte_color(&self) -> Result<PixelWand> {
        let wand = self.ptr()?;
        let color = PixelWand::new()?;
        unsafe { sys::MagickGetImageMatteColor(wand, color.ptr()?) };
        self.last_error()?;
        Ok(color)
    }

    pub fn get_image_orientation(&self) -> Result<OrientationType> {
        let wand = self.ptr()?;
        Ok(OrientationType::from_raw(unsafe {
            sys::MagickGetImageOrientation(wand)
        }))
    }

    /// Page geometry: canvas size and offset.
    pub fn get_image_page(&self) -> Result<(usize, usize, isize, isize)> {
        let wand = self.ptr()?;
        let (mut width, mut height): (size_t, size_t) = (0, 0);
        let (mut x, mut y): (libc::ssize_t, libc::ssize_t) = (0, 0);
        unsafe { sys::MagickGetImagePage(wand, &mut width, &mut height, &mut x, &mut y) };
        self.last_error()?;
        Ok((width, height, x, y))
    }

    /// Color of the pixel at (x, y).
    pub fn get_image_pixel_color(&self, x: isize, y: isize) -> Result<PixelWand> {
        let wand = self.ptr()?;
        let color = PixelWand::new()?;
        unsafe { sys::MagickGetImagePixelColor(wand, x, y, color.ptr()?) };
        self.last_error()?;
        Ok(color)
    }

    /// Chromaticity red primary point.
    pub fn get_image_red_primary(&self) -> Result<(f64, f64)> {
        let wand = self.ptr()?;
        let (mut x, mut y) = (0.0f64, 0.0f64);
        unsafe { sys::MagickGetImageRedPrimary(wand, &mut x, &mut y) };
        self.last_error()?;
        Ok((x, y))
    }

    /// Extract a region into its own wand.
    pub fn get_image_region(&self, region: Region) -> Result<MagickWand> {
        let width = self.get_image_width()?;
        let height = self.get_image_height()?;
        region.validate(width, height)?;
        let wand = self.ptr()?;
        let extracted = unsafe {
            sys::MagickGetImageRegion(wand, region.width, region.height, region.x, region.y)
        };
        self.wrap_new(extracted)
    }

    pub fn get_image_rendering_intent(&self) -> Result<RenderingIntent> {
        let wand = self.ptr()?;
        Ok(RenderingIntent::from_raw(unsafe {
            sys::MagickGetImageRenderingIntent(wand)
        }))
    }

    /// Horizontal and vertical resolution (density).
    pub fn get_image_resolution(&self) -> Result<(f64, f64)> {
        let wand = self.ptr()?;
        let (mut x, mut y) = (0.0f64, 0.0f64);
        unsafe { sys::MagickGetImageResolution(wand, &mut x, &mut y) };
        self.last_error()?;
        Ok((x, y))
    }

    pub fn get_image_scene(&self) -> Result<usize> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickGetImageScene(wand) })
    }

    /// Content signature (SHA-256 of the pixel stream).
    pub fn get_image_signature(&self) -> Result<String> {
        let wand = self.ptr()?;
        let raw = unsafe { sys::MagickGetImageSignature(wand) };
        Ok(unsafe { take_magick_string(raw) })
    }

    pub fn get_image_ticks_per_second(&self) -> Result<usize> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickGetImageTicksPerSecond(wand) })
    }

    pub fn get_image_type(&self) -> Result<ImageType> {
        let wand = self.ptr()?;
        Ok(ImageType::from_raw(unsafe { sys::MagickGetImageType(wand) }))
    }

    pub fn get_image_units(&self) -> Result<ResolutionType> {
        let wand = self.ptr()?;
        Ok(ResolutionType::from_raw(unsafe {
            sys::MagickGetImageUnits(wand)
        }))
    }

    pub fn get_image_virtual_pixel_method(&self) -> Result<VirtualPixelMethod> {
        let wand = self.ptr()?;
        Ok(VirtualPixelMethod::from_raw(unsafe {
            sys::MagickGetImageVirtualPixelMethod(wand)
        }))
    }

    /// Chromaticity white point.
    pub fn get_image_white_point(&self) -> Result<(f64, f64)> {
        let wand = self.ptr()?;
        let (mut x, mut y) = (0.0f64, 0.0f64);
        unsafe { sys::MagickGetImageWhitePoint(wand, &mut x, &mut y) };
        self.last_error()?;
        Ok((x, y))
    }

    /// Image width in pixels.
    pub fn get_image_width(&self) -> Result<usize> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickGetImageWidth(wand) })
    }

    /// Total ink density for CMYK images.
    pub fn get_image_total_ink_density(&self) -> Result<f64> {
        let wand = self.ptr()?;
        let density = unsafe { sys::MagickGetImageTotalInkDensity(wand) };
        self.last_error()?;
        Ok(density)
    }

    /// Replace colors through a Hald color lookup table image.
    pub fn hald_clut_image(&mut self, hald: &MagickWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickHaldClutImage(wand, hald.ptr()?) };
        self.last_error()
    }

    pub fn hald_clut_image_channel(&mut self, channel: ChannelType, hald: &MagickWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickHaldClutImageChannel(wand, channel.bits() as c_int, hald.ptr()?) };
        self.last_error()
    }

    /// Human-readable description of the image, as `identify` prints.
    pub fn identify_image(&self) -> Result<String> {
        let wand = self.ptr()?;
        let raw = unsafe { sys::MagickIdentifyImage(wand) };
        Ok(unsafe { take_magick_string(raw) })
    }

    /// Implode pixels toward the center by `radius`.
    pub fn implode_image(&mut self, radius: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickImplodeImage(wand, radius) };
        self.last_error()
    }

    /// Replace a region's pixels from a flat, channel-interleaved buffer.
    ///
    /// The storage tag is taken from the buffer's variant. The buffer
    /// length must equal `width * height * map.len()`; a mismatch fails
    /// with [`WandError::BufferSizeMismatch`] before any native call.
    pub fn import_image_pixels(
        &mut self,
        region: Region,
        map: &str,
        pixels: &PixelSamples,
    ) -> Result<()> {
        validate_channel_map(map)?;
        let width = self.get_image_width()?;
        let height = self.get_image_height()?;
        region.validate(width, height)?;
        let expected = region.sample_count(map.len())?;
        if pixels.len() != expected {
            return Err(WandError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let wand = self.ptr()?;
        let c_map = cstring(map)?;
        unsafe {
            sys::MagickImportImagePixels(
                wand,
                region.x,
                region.y,
                region.width,
                region.height,
                c_map.as_ptr(),
                pixels.storage_type() as c_int,
                pixels.as_ptr(),
            )
        };
        self.last_error()
    }

    /// Inverse discrete Fourier transform, combining this wand
    /// (magnitude/real) with the phase/imaginary wand.
    pub fn inverse_fourier_transform_image(
        &mut self,
        phase: &MagickWand,
        magnitude: bool,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickInverseFourierTransformImage(wand, phase.ptr()?, magick_bool(magnitude))
        };
        self.last_error()
    }

    /// Attach a label to the image.
    pub fn label_image(&mut self, label: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_label = cstring(label)?;
        unsafe { sys::MagickLabelImage(wand, c_label.as_ptr()) };
        self.last_error()
    }

    /// Remap pixel levels: values below the black point fall to zero,
    /// above the white point rise to the quantum maximum, with gamma
    /// applied in between.
    pub fn level_image(&mut self, black_point: f64, gamma: f64, white_point: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickLevelImage(wand, black_point, gamma, white_point) };
        self.last_error()
    }

    pub fn level_image_channel(
        &mut self,
        channel: ChannelType,
        black_point: f64,
        gamma: f64,
        white_point: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickLevelImageChannel(
                wand,
                channel.bits() as c_int,
                black_point,
                gamma,
                white_point,
            )
        };
        self.last_error()
    }

    /// Linearly stretch the histogram between saturation points given as
    /// pixel counts.
    pub fn linear_stretch_image(&mut self, black_point: f64, white_point: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickLinearStretchImage(wand, black_point, white_point) };
        self.last_error()
    }

    /// Content-aware (seam carving) rescale.
    pub fn liquid_rescale_image(
        &mut self,
        columns: usize,
        rows: usize,
        delta_x: f64,
        rigidity: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickLiquidRescaleImage(wand, columns, rows, delta_x, rigidity) };
        self.last_error()
    }

    /// Double the image size with pixel-art-friendly interpolation.
    pub fn magnify_image(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickMagnifyImage(wand) };
        self.last_error()
    }

    /// Merge the sequence's layers by the given method.
    pub fn merge_image_layers(&self, method: ImageLayerMethod) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let merged = unsafe { sys::MagickMergeImageLayers(wand, method as c_int) };
        self.wrap_new(merged)
    }

    /// Halve the image size.
    pub fn minify_image(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickMinifyImage(wand) };
        self.last_error()
    }

    /// Adjust brightness, saturation and hue, each as a percentage of the
    /// current value (100 leaves the component unchanged).
    pub fn modulate_image(&mut self, brightness: f64, saturation: f64, hue: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickModulateImage(wand, brightness, saturation, hue) };
        self.last_error()
    }

    /// Compose the sequence into a tiled montage image.
    pub fn montage_image(
        &self,
        drawing_wand: &DrawingWand,
        tile_geometry: &str,
        thumbnail_geometry: &str,
        mode: MontageMode,
        frame: &str,
    ) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let c_tile = cstring(tile_geometry)?;
        let c_thumb = cstring(thumbnail_geometry)?;
        let c_frame = cstring(frame)?;
        let montage = unsafe {
            sys::MagickMontageImage(
                wand,
                drawing_wand.ptr()?,
                c_tile.as_ptr(),
                c_thumb.as_ptr(),
                mode as c_int,
                c_frame.as_ptr(),
            )
        };
        self.wrap_new(montage)
    }

    /// Morph between the sequence's images over `number_frames`
    /// intermediate frames.
    pub fn morph_images(&self, number_frames: usize) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let morphed = unsafe { sys::MagickMorphImages(wand, number_frames) };
        self.wrap_new(morphed)
    }

    /// Apply a morphology method (erode, dilate, open, close, ...) with
    /// the given kernel. Negative iterations mean "to convergence".
    pub fn morphology_image(
        &mut self,
        method: MorphologyMethod,
        iterations: isize,
        kernel: &KernelInfo,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickMorphologyImage(wand, method as c_int, iterations, kernel.ptr()) };
        self.last_error()
    }

    pub fn morphology_image_channel(
        &mut self,
        channel: ChannelType,
        method: MorphologyMethod,
        iterations: isize,
        kernel: &KernelInfo,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickMorphologyImageChannel(
                wand,
                channel.bits() as c_int,
                method as c_int,
                iterations,
                kernel.ptr(),
            )
        };
        self.last_error()
    }

    /// Simulate motion blur along the given angle.
    pub fn motion_blur_image(&mut self, radius: f64, sigma: f64, angle: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickMotionBlurImage(wand, radius, sigma, angle) };
        self.last_error()
    }

    pub fn motion_blur_image_channel(
        &mut self,
        channel: ChannelType,
        radius: f64,
        sigma: f64,
        angle: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickMotionBlurImageChannel(wand, channel.bits() as c_int, radius, sigma, angle)
        };
        self.last_error()
    }

    /// Negate colors; with `gray` only grayscale pixels are inverted.
    pub fn negate_image(&mut self, gray: bool) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickNegateImage(wand, magick_bool(gray)) };
        self.last_error()
    }

    pub fn negate_image_channel(&mut self, channel: ChannelType, gray: bool) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickNegateImageChannel(wand, channel.bits() as c_int, magick_bool(gray)) };
        self.last_error()
    }

    /// Add a blank image of the given size and background color.
    pub fn new_image(&mut self, columns: usize, rows: usize, background: &PixelWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickNewImage(wand, columns, rows, background.ptr()?) };
        self.last_error()
    }

    /// Stretch channel values to span the full quantum range.
    pub fn normalize_image(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickNormalizeImage(wand) };
        self.last_error()
    }

    pub fn normalize_image_channel(&mut self, channel: ChannelType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickNormalizeImageChannel(wand, channel.bits() as c_int) };
        self.last_error()
    }

    /// Simulate an oil painting: each pixel takes the most frequent color
    /// in its neighborhood.
    pub fn oil_paint_image(&mut self, radius: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickOilPaintImage(wand, radius) };
        self.last_error()
    }

    /// Repaint pixels matching `target` (within `fuzz`) with `fill`; with
    /// `invert`, repaint those that do not match.
    pub fn opaque_paint_image(
        &mut self,
        target: &PixelWand,
        fill: &PixelWand,
        fuzz: f64,
        invert: bool,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickOpaquePaintImage(wand, target.ptr()?, fill.ptr()?, fuzz, magick_bool(invert))
        };
        self.last_error()
    }

    pub fn opaque_paint_image_channel(
        &mut self,
        channel: ChannelType,
        target: &PixelWand,
        fill: &PixelWand,
        fuzz: f64,
        invert: bool,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickOpaquePaintImageChannel(
                wand,
                channel.bits() as c_int,
                target.ptr()?,
                fill.ptr()?,
                fuzz,
                magick_bool(invert),
            )
        };
        self.last_error()
    }

    /// Optimize a sequence by replacing each frame with the smallest
    /// changed region relative to the previous one.
    pub fn optimize_image_layers(&self) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let optimized = unsafe { sys::MagickOptimizeImageLayers(wand) };
        self.wrap_new(optimized)
    }

    /// Ordered dither with a threshold map such as `"o8x8"` or
    /// `"o8x8,8,8,4"` for per-channel levels.
    pub fn ordered_posterize_image(&mut self, threshold_map: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_map = cstring(threshold_map)?;
        unsafe { sys::MagickOrderedPosterizeImage(wand, c_map.as_ptr()) };
        self.last_error()
    }

    pub fn ordered_posterize_image_channel(
        &mut self,
        channel: ChannelType,
        threshold_map: &str,
    ) -> Result<()> {
        let wand = self.ptr()?;
        let c_map = cstring(threshold_map)?;
        unsafe {
            sys::MagickOrderedPosterizeImageChannel(wand, channel.bits() as c_int, c_map.as_ptr())
        };
        self.last_error()
    }

    /// Simulate a Polaroid picture: border, caption from the drawing
    /// wand, rotated by `angle`.
    pub fn polaroid_image(&mut self, drawing_wand: &DrawingWand, angle: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickPolaroidImage(wand, drawing_wand.ptr()?, angle) };
        self.last_error()
    }

    /// Reduce to `levels` intensity levels per channel, optionally
    /// dithered.
    pub fn posterize_image(&mut self, levels: usize, dither: bool) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickPosterizeImage(wand, levels, magick_bool(dither)) };
        self.last_error()
    }

    /// Tile of variations of an effect, for parameter picking.
    pub fn preview_images(&self, preview: PreviewType) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let previews = unsafe { sys::MagickPreviewImages(wand, preview as c_int) };
        self.wrap_new(previews)
    }

    /// Quantize to `number_colors` in the given colorspace.
    pub fn quantize_image(
        &mut self,
        number_colors: usize,
        colorspace: ColorspaceType,
        treedepth: usize,
        dither: bool,
        measure_error: bool,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickQuantizeImage(
                wand,
                number_colors,
                colorspace as c_int,
                treedepth,
                magick_bool(dither),
                magick_bool(measure_error),
            )
        };
        self.last_error()
    }

    /// Quantize the whole sequence against one shared colormap.
    pub fn quantize_images(
        &mut self,
        number_colors: usize,
        colorspace: ColorspaceType,
        treedepth: usize,
        dither: bool,
        measure_error: bool,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickQuantizeImages(
                wand,
                number_colors,
                colorspace as c_int,
                treedepth,
                magick_bool(dither),
                magick_bool(measure_error),
            )
        };
        self.last_error()
    }

    /// Radial (rotational) blur by the given angle.
    pub fn radial_blur_image(&mut self, angle: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickRadialBlurImage(wand, angle) };
        self.last_error()
    }

    pub fn radial_blur_image_channel(&mut self, channel: ChannelType, angle: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickRadialBlurImageChannel(wand, channel.bits() as c_int, angle) };
        self.last_error()
    }

    /// Lighten or darken edges toward a raised-button effect.
    pub fn raise_image(
        &mut self,
        width: usize,
        height: usize,
        x: isize,
        y: isize,
        raise: bool,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickRaiseImage(wand, width, height, x, y, magick_bool(raise)) };
        self.last_error()
    }

    /// Threshold each pixel against a random value in [low, high].
    pub fn random_threshold_image(&mut self, low: f64, high: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickRandomThresholdImage(wand, low, high) };
        self.last_error()
    }

    pub fn random_threshold_image_channel(
        &mut self,
        channel: ChannelType,
        low: f64,
        high: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickRandomThresholdImageChannel(wand, channel.bits() as c_int, low, high)
        };
        self.last_error()
    }

    /// Replace colors with the closest from the remap image's colormap.
    pub fn remap_image(&mut self, remap: &MagickWand, method: DitherMethod) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickRemapImage(wand, remap.ptr()?, method as c_int) };
        self.last_error()
    }

    /// Remove the current image from the sequence.
    pub fn remove_image(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickRemoveImage(wand) };
        self.last_error()
    }

    /// Resample to the given resolution.
    pub fn resample_image(
        &mut self,
        x_resolution: f64,
        y_resolution: f64,
        filter: FilterType,
        blur: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickResampleImage(wand, x_resolution, y_resolution, filter as c_int, blur)
        };
        self.last_error()
    }

    /// Reset the page geometry from a string like `"100x100+10+10"`.
    pub fn reset_image_page(&mut self, page: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_page = cstring(page)?;
        unsafe { sys::MagickResetImagePage(wand, c_page.as_ptr()) };
        self.last_error()
    }

    /// Resize with the given filter. Blur > 1 blurs, < 1 sharpens.
    pub fn resize_image(
        &mut self,
        columns: usize,
        rows: usize,
        filter: FilterType,
        blur: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickResizeImage(wand, columns, rows, filter as c_int, blur) };
        self.last_error()
    }

    /// Offset the image (with wraparound) by the given amounts.
    pub fn roll_image(&mut self, x: isize, y: isize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickRollImage(wand, x, y) };
        self.last_error()
    }

    /// Rotate by `degrees`, filling empty corners with the background
    /// color.
    pub fn rotate_image(&mut self, background: &PixelWand, degrees: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickRotateImage(wand, background.ptr()?, degrees) };
        self.last_error()
    }

    /// Scale with pixel sampling: no interpolation or new colors.
    pub fn sample_image(&mut self, columns: usize, rows: usize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSampleImage(wand, columns, rows) };
        self.last_error()
    }

    /// Scale to the given size.
    pub fn scale_image(&mut self, columns: usize, rows: usize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickScaleImage(wand, columns, rows) };
        self.last_error()
    }

    /// Segment by analyzing the color histograms.
    pub fn segment_image(
        &mut self,
        colorspace: ColorspaceType,
        verbose: bool,
        cluster_threshold: f64,
        smooth_threshold: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickSegmentImage(
                wand,
                colorspace as c_int,
                magick_bool(verbose),
                cluster_threshold,
                smooth_threshold,
            )
        };
        self.last_error()
    }

    /// Blur only where the contrast stays below the threshold.
    pub fn selective_blur_image(&mut self, radius: f64, sigma: f64, threshold: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSelectiveBlurImage(wand, radius, sigma, threshold) };
        self.last_error()
    }

    pub fn selective_blur_image_channel(
        &mut self,
        channel: ChannelType,
        radius: f64,
        sigma: f64,
        threshold: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickSelectiveBlurImageChannel(
                wand,
                channel.bits() as c_int,
                radius,
                sigma,
                threshold,
            )
        };
        self.last_error()
    }

    /// Separate the selected channels into a grayscale image.
    pub fn separate_image_channel(&mut self, channel: ChannelType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSeparateImageChannel(wand, channel.bits() as c_int) };
        self.last_error()
    }

    /// Apply a sepia tone; 80% threshold is a good start.
    pub fn sepia_tone_image(&mut self, threshold: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSepiaToneImage(wand, threshold) };
        self.last_error()
    }

    /// Replace the current image (or the whole list when positioned at
    /// the end) with images from the source wand.
    pub fn set_image(&mut self, source: &MagickWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImage(wand, source.ptr()?) };
        self.last_error()
    }

    /// Activate, deactivate, reset or set the alpha channel.
    pub fn set_image_alpha_channel(&mut self, alpha_type: AlphaChannelType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageAlphaChannel(wand, alpha_type as c_int) };
        self.last_error()
    }

    pub fn set_image_background_color(&mut self, background: &PixelWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageBackgroundColor(wand, background.ptr()?) };
        self.last_error()
    }

    /// Convolution bias added after kernel application.
    pub fn set_image_bias(&mut self, bias: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageBias(wand, bias) };
        self.last_error()
    }

    pub fn set_image_blue_primary(&mut self, x: f64, y: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageBluePrimary(wand, x, y) };
        self.last_error()
    }

    pub fn set_image_border_color(&mut self, border: &PixelWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageBorderColor(wand, border.ptr()?) };
        self.last_error()
    }

    pub fn set_image_channel_depth(&mut self, channel: ChannelType, depth: usize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageChannelDepth(wand, channel.bits() as c_int, depth) };
        self.last_error()
    }

    pub fn set_image_clip_mask(&mut self, clip_mask: &MagickWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageClipMask(wand, clip_mask.ptr()?) };
        self.last_error()
    }

    /// Set every pixel to the given color.
    pub fn set_image_color(&mut self, color: &PixelWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageColor(wand, color.ptr()?) };
        self.last_error()
    }

    pub fn set_image_colormap_color(&mut self, index: usize, color: &PixelWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageColormapColor(wand, index, color.ptr()?) };
        self.last_error()
    }

    pub fn set_image_colorspace(&mut self, colorspace: ColorspaceType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageColorspace(wand, colorspace as c_int) };
        self.last_error()
    }

    pub fn set_image_compose(&mut self, compose: CompositeOperator) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageCompose(wand, compose as c_int) };
        self.last_error()
    }

    pub fn set_image_compression(&mut self, compression: CompressionType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageCompression(wand, compression as c_int) };
        self.last_error()
    }

    pub fn set_image_compression_quality(&mut self, quality: usize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageCompressionQuality(wand, quality) };
        self.last_error()
    }

    /// Frame delay in ticks (see `set_image_ticks_per_second`).
    pub fn set_image_delay(&mut self, delay: usize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageDelay(wand, delay) };
        self.last_error()
    }

    pub fn set_image_depth(&mut self, depth: usize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageDepth(wand, depth) };
        self.last_error()
    }

    pub fn set_image_dispose(&mut self, dispose: DisposeType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageDispose(wand, dispose as c_int) };
        self.last_error()
    }

    pub fn set_image_endian(&mut self, endian: EndianType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageEndian(wand, endian as c_int) };
        self.last_error()
    }

    /// Set the image size. Pixels outside the previous extent come from
    /// the background color.
    pub fn set_image_extent(&mut self, columns: usize, rows: usize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageExtent(wand, columns, rows) };
        self.last_error()
    }

    pub fn set_image_filename(&mut self, filename: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_filename = cstring(filename)?;
        unsafe { sys::MagickSetImageFilename(wand, c_filename.as_ptr()) };
        self.last_error()
    }

    /// Set the format used by blob and file writers, e.g. `"PNG"`.
    pub fn set_image_format(&mut self, format: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_format = cstring(format)?;
        unsafe { sys::MagickSetImageFormat(wand, c_format.as_ptr()) };
        self.last_error()
    }

    pub fn set_image_gamma(&mut self, gamma: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageGamma(wand, gamma) };
        self.last_error()
    }

    pub fn set_image_gravity(&mut self, gravity: GravityType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageGravity(wand, gravity as c_int) };
        self.last_error()
    }

    pub fn set_image_green_primary(&mut self, x: f64, y: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageGreenPrimary(wand, x, y) };
        self.last_error()
    }

    pub fn set_image_interlace_scheme(&mut self, interlace: InterlaceType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageInterlaceScheme(wand, interlace as c_int) };
        self.last_error()
    }

    pub fn set_image_interpolate_method(
        &mut self,
        method: InterpolatePixelMethod,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageInterpolateMethod(wand, method as c_int) };
        self.last_error()
    }

    /// Animation loop count; 0 loops forever.
    pub fn set_image_iterations(&mut self, iterations: usize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageIterations(wand, iterations) };
        self.last_error()
    }

    pub fn set_image_matte(&mut self, matte: bool) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageMatte(wand, magick_bool(matte)) };
        self.last_error()
    }

    pub fn set_image_matte_color(&mut self, matte: &PixelWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageMatteColor(wand, matte.ptr()?) };
        self.last_error()
    }

    /// Set the whole image's transparency level, normalized [0.0, 1.0].
    pub fn set_image_opacity(&mut self, alpha: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageOpacity(wand, alpha) };
        self.last_error()
    }

    pub fn set_image_orientation(&mut self, orientation: OrientationType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageOrientation(wand, orientation as c_int) };
        self.last_error()
    }

    pub fn set_image_page(
        &mut self,
        width: usize,
        height: usize,
        x: isize,
        y: isize,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImagePage(wand, width, height, x, y) };
        self.last_error()
    }

    pub fn set_image_red_primary(&mut self, x: f64, y: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageRedPrimary(wand, x, y) };
        self.last_error()
    }

    pub fn set_image_resolution(&mut self, x_resolution: f64, y_resolution: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageResolution(wand, x_resolution, y_resolution) };
        self.last_error()
    }

    pub fn set_image_scene(&mut self, scene: usize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageScene(wand, scene) };
        self.last_error()
    }

    pub fn set_image_ticks_per_second(&mut self, ticks_per_second: isize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageTicksPerSecond(wand, ticks_per_second) };
        self.last_error()
    }

    pub fn set_image_type(&mut self, image_type: ImageType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageType(wand, image_type as c_int) };
        self.last_error()
    }

    pub fn set_image_units(&mut self, units: ResolutionType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageUnits(wand, units as c_int) };
        self.last_error()
    }

    /// Set how pixels outside the image bounds are synthesized; returns
    /// the previous method.
    pub fn set_image_virtual_pixel_method(
        &mut self,
        method: VirtualPixelMethod,
    ) -> Result<VirtualPixelMethod> {
        let wand = self.ptr()?;
        let previous = unsafe { sys::MagickSetImageVirtualPixelMethod(wand, method as c_int) };
        Ok(VirtualPixelMethod::from_raw(previous))
    }

    pub fn set_image_white_point(&mut self, x: f64, y: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetImageWhitePoint(wand, x, y) };
        self.last_error()
    }

    /// Shine a distant light from (azimuth, elevation) to create a
    /// three-dimensional shading effect.
    pub fn shade_image(&mut self, gray: bool, azimuth: f64, elevation: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickShadeImage(wand, magick_bool(gray), azimuth, elevation) };
        self.last_error()
    }

    /// Simulate a drop shadow from the image's alpha channel.
    pub fn shadow_image(&mut self, opacity: f64, sigma: f64, x: isize, y: isize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickShadowImage(wand, opacity, sigma, x, y) };
        self.last_error()
    }

    /// Sharpen with a Gaussian operator.
    pub fn sharpen_image(&mut self, radius: f64, sigma: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSharpenImage(wand, radius, sigma) };
        self.last_error()
    }

    pub fn sharpen_image_channel(
        &mut self,
        channel: ChannelType,
        radius: f64,
        sigma: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSharpenImageChannel(wand, channel.bits() as c_int, radius, sigma) };
        self.last_error()
    }

    /// Shave pixels from the edges.
    pub fn shave_image(&mut self, columns: usize, rows: usize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickShaveImage(wand, columns, rows) };
        self.last_error()
    }

    /// Shear along x and/or y, filling exposed triangles with the
    /// background color.
    pub fn shear_image(&mut self, background: &PixelWand, x_shear: f64, y_shear: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickShearImage(wand, background.ptr()?, x_shear, y_shear) };
        self.last_error()
    }

    /// Sigmoidal contrast adjustment without saturating highlights or
    /// shadows. Alpha is the strength (3 is typical), beta the midpoint
    /// as a fraction of the quantum range.
    pub fn sigmoidal_contrast_image(&mut self, sharpen: bool, alpha: f64, beta: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSigmoidalContrastImage(wand, magick_bool(sharpen), alpha, beta) };
        self.last_error()
    }

    pub fn sigmoidal_contrast_image_channel(
        &mut self,
        channel: ChannelType,
        sharpen: bool,
        alpha: f64,
        beta: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickSigmoidalContrastImageChannel(
                wand,
                channel.bits() as c_int,
                magick_bool(sharpen),
                alpha,
                beta,
            )
        };
        self.last_error()
    }

    /// Search for the reference image inside this one; returns the
    /// correlation image, the best-match offset and the similarity score.
    pub fn similarity_image(&self, reference: &MagickWand) -> Result<(MagickWand, Region, f64)> {
        let wand = self.ptr()?;
        let mut offset = sys::RectangleInfo::default();
        let mut similarity = 0.0f64;
        let area = unsafe {
            sys::MagickSimilarityImage(wand, reference.ptr()?, &mut offset, &mut similarity)
        };
        let area = self.wrap_new(area)?;
        Ok((
            area,
            Region::new(offset.x, offset.y, offset.width, offset.height),
            similarity,
        ))
    }

    /// Simulate a pencil sketch, blurring along the given angle.
    pub fn sketch_image(&mut self, radius: f64, sigma: f64, angle: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSketchImage(wand, radius, sigma, angle) };
        self.last_error()
    }

    /// Append images with optional overlap (positive offset) or
    /// background gap (negative).
    pub fn smush_images(&self, stack: bool, offset: isize) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let smushed = unsafe { sys::MagickSmushImages(wand, magick_bool(stack), offset) };
        self.wrap_new(smushed)
    }

    /// Negate pixels above the threshold, like overexposing film.
    pub fn solarize_image(&mut self, threshold: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSolarizeImage(wand, threshold) };
        self.last_error()
    }

    /// Interpolate colors across the image from sparse control points
    /// given as (x, y, then one value per selected channel) tuples.
    pub fn sparse_color_image(
        &mut self,
        channel: ChannelType,
        method: SparseColorMethod,
        arguments: &[f64],
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickSparseColorImage(
                wand,
                channel.bits() as c_int,
                method as c_int,
                arguments.len(),
                arguments.as_ptr(),
            )
        };
        self.last_error()
    }

    /// Splice the background color into the image as a cross at (x, y).
    pub fn splice_image(&mut self, width: usize, height: usize, x: isize, y: isize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSpliceImage(wand, width, height, x, y) };
        self.last_error()
    }

    /// Displace each pixel by a random amount up to `radius`.
    pub fn spread_image(&mut self, radius: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSpreadImage(wand, radius) };
        self.last_error()
    }

    /// Replace each pixel with a statistic (median, mode, ...) of its
    /// width x height neighborhood.
    pub fn statistic_image(
        &mut self,
        statistic_type: StatisticType,
        width: usize,
        height: usize,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickStatisticImage(wand, statistic_type as c_int, width, height) };
        self.last_error()
    }

    pub fn statistic_image_channel(
        &mut self,
        channel: ChannelType,
        statistic_type: StatisticType,
        width: usize,
        height: usize,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickStatisticImageChannel(
                wand,
                channel.bits() as c_int,
                statistic_type as c_int,
                width,
                height,
            )
        };
        self.last_error()
    }

    /// Hide a digital watermark in the image at the given bit offset.
    pub fn stegano_image(&self, watermark: &MagickWand, offset: isize) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let stegano = unsafe { sys::MagickSteganoImage(wand, watermark.ptr()?, offset) };
        self.wrap_new(stegano)
    }

    /// Compose two images into a red/cyan stereo anaglyph.
    pub fn stereo_image(&self, offset_wand: &MagickWand) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let stereo = unsafe { sys::MagickStereoImage(wand, offset_wand.ptr()?) };
        self.wrap_new(stereo)
    }

    /// Strip profiles, comments and other metadata.
    pub fn strip_image(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickStripImage(wand) };
        self.last_error()
    }

    /// Swirl pixels around the center by up to `degrees`.
    pub fn swirl_image(&mut self, degrees: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSwirlImage(wand, degrees) };
        self.last_error()
    }

    /// Tile the texture image across this image's canvas.
    pub fn texture_image(&self, texture: &MagickWand) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let textured = unsafe { sys::MagickTextureImage(wand, texture.ptr()?) };
        self.wrap_new(textured)
    }

    /// Hard-threshold each pixel against the given value.
    pub fn threshold_image(&mut self, threshold: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickThresholdImage(wand, threshold) };
        self.last_error()
    }

    pub fn threshold_image_channel(&mut self, channel: ChannelType, threshold: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickThresholdImageChannel(wand, channel.bits() as c_int, threshold) };
        self.last_error()
    }

    /// Resize for thumbnails: fast, and strips metadata.
    pub fn thumbnail_image(&mut self, columns: usize, rows: usize) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickThumbnailImage(wand, columns, rows) };
        self.last_error()
    }

    /// Tint the image towards the fill color, weighted by opacity.
    pub fn tint_image(&mut self, tint: &PixelWand, opacity: &PixelWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickTintImage(wand, tint.ptr()?, opacity.ptr()?) };
        self.last_error()
    }

    /// Crop then resize per the two geometry strings, into a new wand.
    pub fn transform_image(&self, crop: &str, geometry: &str) -> Result<MagickWand> {
        let wand = self.ptr()?;
        let c_crop = cstring(crop)?;
        let c_geometry = cstring(geometry)?;
        let transformed =
            unsafe { sys::MagickTransformImage(wand, c_crop.as_ptr(), c_geometry.as_ptr()) };
        self.wrap_new(transformed)
    }

    /// Convert pixels to the given colorspace.
    pub fn transform_image_colorspace(&mut self, colorspace: ColorspaceType) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickTransformImageColorspace(wand, colorspace as c_int) };
        self.last_error()
    }

    /// Set the opacity of pixels matching `target` within `fuzz`; with
    /// `invert`, of those that do not match.
    pub fn transparent_paint_image(
        &mut self,
        target: &PixelWand,
        alpha: f64,
        fuzz: f64,
        invert: bool,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickTransparentPaintImage(wand, target.ptr()?, alpha, fuzz, magick_bool(invert))
        };
        self.last_error()
    }

    /// Mirror along the top-left to bottom-right diagonal (rotate 90° then
    /// flip).
    pub fn transpose_image(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickTransposeImage(wand) };
        self.last_error()
    }

    /// Mirror along the bottom-left to top-right diagonal (rotate 270°
    /// then flip).
    pub fn transverse_image(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickTransverseImage(wand) };
        self.last_error()
    }

    /// Remove edges matching the border color within `fuzz`.
    pub fn trim_image(&mut self, fuzz: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickTrimImage(wand, fuzz) };
        self.last_error()
    }

    /// Discard all but one of each duplicate color.
    pub fn unique_image_colors(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickUniqueImageColors(wand) };
        self.last_error()
    }

    /// Unsharp mask: subtract a blurred copy scaled by `amount`, applied
    /// only where the difference exceeds `threshold`.
    pub fn unsharp_mask_image(
        &mut self,
        radius: f64,
        sigma: f64,
        amount: f64,
        threshold: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickUnsharpMaskImage(wand, radius, sigma, amount, threshold) };
        self.last_error()
    }

    pub fn unsharp_mask_image_channel(
        &mut self,
        channel: ChannelType,
        radius: f64,
        sigma: f64,
        amount: f64,
        threshold: f64,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe {
            sys::MagickUnsharpMaskImageChannel(
                wand,
                channel.bits() as c_int,
                radius,
                sigma,
                amount,
                threshold,
            )
        };
        self.last_error()
    }

    /// Soften edges toward a vignette, centered at (x, y) offsets from
    /// the image center.
    pub fn vignette_image(
        &mut self,
        black_point: f64,
        white_point: f64,
        x: isize,
        y: isize,
    ) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickVignetteImage(wand, black_point, white_point, x, y) };
        self.last_error()
    }

    /// Ripple the image along a sine wave.
    pub fn wave_image(&mut self, amplitude: f64, wave_length: f64) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickWaveImage(wand, amplitude, wave_length) };
        self.last_error()
    }

    /// Force pixels above the threshold to white, leaving the rest alone.
    pub fn white_threshold_image(&mut self, threshold: &PixelWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickWhiteThresholdImage(wand, threshold.ptr()?) };
        self.last_error()
    }
}
