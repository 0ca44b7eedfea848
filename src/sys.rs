//! Hand-written FFI declarations for the MagickWand C API (ImageMagick 6).
//!
//! Only the functions the safe layer actually calls are declared; all
//! structures the library owns are opaque. Enum-typed C parameters are
//! declared as `c_int`/`c_uint` and cast at the call site from the typed
//! enums in [`crate::types`].

#![allow(non_snake_case)]

use libc::{FILE, c_char, c_double, c_int, c_uchar, c_uint, c_void, size_t, ssize_t};

/// C boolean as used throughout the wand API.
pub type MagickBooleanType = c_uint;
pub const MAGICK_FALSE: MagickBooleanType = 0;
pub const MAGICK_TRUE: MagickBooleanType = 1;

/// Opaque wand structures. Internal fields are never accessed; all
/// interaction goes through the C API.
#[repr(C)]
pub struct MagickWand {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct PixelWand {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct DrawingWand {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct PixelIterator {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct KernelInfo {
    _opaque: [u8; 0],
}

/// MagickCore rectangle, filled by similarity search.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct RectangleInfo {
    pub width: size_t,
    pub height: size_t,
    pub x: ssize_t,
    pub y: ssize_t,
}

/// Per-channel statistics as laid out by `MagickGetImageChannelStatistics`.
/// Field order matches the IM6 `ChannelStatistics` struct.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct ChannelStatistics {
    pub depth: size_t,
    pub minima: c_double,
    pub maxima: c_double,
    pub sum: c_double,
    pub sum_squared: c_double,
    pub sum_cubed: c_double,
    pub sum_fourth_power: c_double,
    pub mean: c_double,
    pub variance: c_double,
    pub standard_deviation: c_double,
    pub kurtosis: c_double,
    pub skewness: c_double,
}

/// Haralick texture features as laid out by `MagickGetImageChannelFeatures`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct ChannelFeatures {
    pub angular_second_moment: [c_double; 4],
    pub contrast: [c_double; 4],
    pub correlation: [c_double; 4],
    pub variance_sum_of_squares: [c_double; 4],
    pub inverse_difference_moment: [c_double; 4],
    pub sum_average: [c_double; 4],
    pub sum_variance: [c_double; 4],
    pub sum_entropy: [c_double; 4],
    pub entropy: [c_double; 4],
    pub difference_variance: [c_double; 4],
    pub difference_entropy: [c_double; 4],
    pub measure_of_correlation_1: [c_double; 4],
    pub measure_of_correlation_2: [c_double; 4],
    pub maximum_correlation_coefficient: [c_double; 4],
}

unsafe extern "C" {
    // --- Process-wide state ---

    pub fn MagickWandGenesis();
    pub fn MagickWandTerminus();
    pub fn MagickRelinquishMemory(resource: *mut c_void) -> *mut c_void;

    pub fn MagickGetResourceLimit(resource: c_int) -> u64;
    pub fn MagickSetResourceLimit(resource: c_int, limit: u64) -> MagickBooleanType;

    pub fn MagickQueryConfigureOption(option: *const c_char) -> *mut c_char;
    pub fn MagickQueryConfigureOptions(
        pattern: *const c_char,
        number_options: *mut size_t,
    ) -> *mut *mut c_char;
    pub fn MagickQueryFonts(pattern: *const c_char, number_fonts: *mut size_t)
    -> *mut *mut c_char;
    pub fn MagickQueryFormats(
        pattern: *const c_char,
        number_formats: *mut size_t,
    ) -> *mut *mut c_char;
    pub fn MagickGetQuantumDepth(depth: *mut size_t) -> *const c_char;
    pub fn MagickGetQuantumRange(range: *mut size_t) -> *const c_char;
    pub fn MagickGetVersion(version: *mut size_t) -> *const c_char;

    // --- Wand lifecycle ---

    pub fn NewMagickWand() -> *mut MagickWand;
    pub fn CloneMagickWand(wand: *const MagickWand) -> *mut MagickWand;
    pub fn DestroyMagickWand(wand: *mut MagickWand) -> *mut MagickWand;
    pub fn IsMagickWand(wand: *const MagickWand) -> MagickBooleanType;
    pub fn ClearMagickWand(wand: *mut MagickWand);

    pub fn MagickGetException(wand: *const MagickWand, severity: *mut c_int) -> *mut c_char;
    pub fn MagickClearException(wand: *mut MagickWand) -> MagickBooleanType;

    // --- Image list iterator control ---

    pub fn MagickResetIterator(wand: *mut MagickWand);
    pub fn MagickSetFirstIterator(wand: *mut MagickWand);
    pub fn MagickSetLastIterator(wand: *mut MagickWand);
    pub fn MagickNextImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickPreviousImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickHasNextImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickHasPreviousImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickGetNumberImages(wand: *mut MagickWand) -> size_t;
    pub fn MagickRemoveImage(wand: *mut MagickWand) -> MagickBooleanType;

    // --- Reading and writing ---

    pub fn MagickReadImage(wand: *mut MagickWand, filename: *const c_char) -> MagickBooleanType;
    pub fn MagickReadImageBlob(
        wand: *mut MagickWand,
        blob: *const c_void,
        length: size_t,
    ) -> MagickBooleanType;
    pub fn MagickReadImageFile(wand: *mut MagickWand, file: *mut FILE) -> MagickBooleanType;
    pub fn MagickPingImage(wand: *mut MagickWand, filename: *const c_char) -> MagickBooleanType;
    pub fn MagickPingImageFile(wand: *mut MagickWand, file: *mut FILE) -> MagickBooleanType;
    pub fn MagickWriteImage(wand: *mut MagickWand, filename: *const c_char) -> MagickBooleanType;
    pub fn MagickWriteImages(
        wand: *mut MagickWand,
        filename: *const c_char,
        adjoin: MagickBooleanType,
    ) -> MagickBooleanType;
    pub fn MagickWriteImageFile(wand: *mut MagickWand, file: *mut FILE) -> MagickBooleanType;
    pub fn MagickWriteImagesFile(wand: *mut MagickWand, file: *mut FILE) -> MagickBooleanType;
    pub fn MagickGetImageBlob(wand: *mut MagickWand, length: *mut size_t) -> *mut c_uchar;
    pub fn MagickGetImagesBlob(wand: *mut MagickWand, length: *mut size_t) -> *mut c_uchar;

    // --- Pixel marshaling ---

    pub fn MagickExportImagePixels(
        wand: *mut MagickWand,
        x: ssize_t,
        y: ssize_t,
        columns: size_t,
        rows: size_t,
        map: *const c_char,
        storage: c_int,
        pixels: *mut c_void,
    ) -> MagickBooleanType;
    pub fn MagickImportImagePixels(
        wand: *mut MagickWand,
        x: ssize_t,
        y: ssize_t,
        columns: size_t,
        rows: size_t,
        map: *const c_char,
        storage: c_int,
        pixels: *const c_void,
    ) -> MagickBooleanType;
    pub fn MagickConstituteImage(
        wand: *mut MagickWand,
        columns: size_t,
        rows: size_t,
        map: *const c_char,
        storage: c_int,
        pixels: *const c_void,
    ) -> MagickBooleanType;

    // --- Image operations (alphabetical, mirrors the Magick*Image* API) ---

    pub fn MagickAdaptiveBlurImage(
        wand: *mut MagickWand,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickAdaptiveBlurImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickAdaptiveResizeImage(
        wand: *mut MagickWand,
        columns: size_t,
        rows: size_t,
    ) -> MagickBooleanType;
    pub fn MagickAdaptiveSharpenImage(
        wand: *mut MagickWand,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickAdaptiveSharpenImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickAdaptiveThresholdImage(
        wand: *mut MagickWand,
        width: size_t,
        height: size_t,
        offset: ssize_t,
    ) -> MagickBooleanType;
    pub fn MagickAddImage(wand: *mut MagickWand, add_wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickAddNoiseImage(wand: *mut MagickWand, noise_type: c_int) -> MagickBooleanType;
    pub fn MagickAddNoiseImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        noise_type: c_int,
    ) -> MagickBooleanType;
    pub fn MagickAffineTransformImage(
        wand: *mut MagickWand,
        drawing_wand: *mut DrawingWand,
    ) -> MagickBooleanType;
    pub fn MagickAnnotateImage(
        wand: *mut MagickWand,
        drawing_wand: *mut DrawingWand,
        x: c_double,
        y: c_double,
        angle: c_double,
        text: *const c_char,
    ) -> MagickBooleanType;
    pub fn MagickAnimateImages(
        wand: *mut MagickWand,
        server_name: *const c_char,
    ) -> MagickBooleanType;
    pub fn MagickAppendImages(
        wand: *mut MagickWand,
        stack: MagickBooleanType,
    ) -> *mut MagickWand;
    pub fn MagickAutoGammaImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickAutoGammaImageChannel(wand: *mut MagickWand, channel: c_int)
    -> MagickBooleanType;
    pub fn MagickAutoLevelImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickAutoLevelImageChannel(wand: *mut MagickWand, channel: c_int)
    -> MagickBooleanType;
    pub fn MagickBlackThresholdImage(
        wand: *mut MagickWand,
        threshold: *const PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickBlueShiftImage(wand: *mut MagickWand, factor: c_double) -> MagickBooleanType;
    pub fn MagickBlurImage(
        wand: *mut MagickWand,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickBlurImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickBorderImage(
        wand: *mut MagickWand,
        border_color: *const PixelWand,
        width: size_t,
        height: size_t,
    ) -> MagickBooleanType;
    pub fn MagickBrightnessContrastImage(
        wand: *mut MagickWand,
        brightness: c_double,
        contrast: c_double,
    ) -> MagickBooleanType;
    pub fn MagickBrightnessContrastImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        brightness: c_double,
        contrast: c_double,
    ) -> MagickBooleanType;
    pub fn MagickCharcoalImage(
        wand: *mut MagickWand,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickChopImage(
        wand: *mut MagickWand,
        width: size_t,
        height: size_t,
        x: ssize_t,
        y: ssize_t,
    ) -> MagickBooleanType;
    pub fn MagickClampImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickClampImageChannel(wand: *mut MagickWand, channel: c_int) -> MagickBooleanType;
    pub fn MagickClipImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickClipImagePath(
        wand: *mut MagickWand,
        pathname: *const c_char,
        inside: MagickBooleanType,
    ) -> MagickBooleanType;
    pub fn MagickClutImage(wand: *mut MagickWand, clut_wand: *mut MagickWand)
    -> MagickBooleanType;
    pub fn MagickClutImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        clut_wand: *mut MagickWand,
    ) -> MagickBooleanType;
    pub fn MagickCoalesceImages(wand: *mut MagickWand) -> *mut MagickWand;
    pub fn MagickColorDecisionListImage(
        wand: *mut MagickWand,
        color_correction_collection: *const c_char,
    ) -> MagickBooleanType;
    pub fn MagickColorizeImage(
        wand: *mut MagickWand,
        colorize: *const PixelWand,
        opacity: *const PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickColorMatrixImage(
        wand: *mut MagickWand,
        color_matrix: *const KernelInfo,
    ) -> MagickBooleanType;
    pub fn MagickCombineImages(wand: *mut MagickWand, channel: c_int) -> *mut MagickWand;
    pub fn MagickCommentImage(wand: *mut MagickWand, comment: *const c_char)
    -> MagickBooleanType;
    pub fn MagickCompareImageChannels(
        wand: *mut MagickWand,
        reference: *mut MagickWand,
        channel: c_int,
        metric: c_int,
        distortion: *mut c_double,
    ) -> *mut MagickWand;
    pub fn MagickCompareImageLayers(wand: *mut MagickWand, method: c_int) -> *mut MagickWand;
    pub fn MagickCompareImages(
        wand: *mut MagickWand,
        reference: *mut MagickWand,
        metric: c_int,
        distortion: *mut c_double,
    ) -> *mut MagickWand;
    pub fn MagickCompositeImage(
        wand: *mut MagickWand,
        source_wand: *mut MagickWand,
        compose: c_int,
        x: ssize_t,
        y: ssize_t,
    ) -> MagickBooleanType;
    pub fn MagickCompositeImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        source_wand: *mut MagickWand,
        compose: c_int,
        x: ssize_t,
        y: ssize_t,
    ) -> MagickBooleanType;
    pub fn MagickCompositeLayers(
        wand: *mut MagickWand,
        source_wand: *mut MagickWand,
        compose: c_int,
        x: ssize_t,
        y: ssize_t,
    ) -> MagickBooleanType;
    pub fn MagickContrastImage(
        wand: *mut MagickWand,
        sharpen: MagickBooleanType,
    ) -> MagickBooleanType;
    pub fn MagickContrastStretchImage(
        wand: *mut MagickWand,
        black_point: c_double,
        white_point: c_double,
    ) -> MagickBooleanType;
    pub fn MagickContrastStretchImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        black_point: c_double,
        white_point: c_double,
    ) -> MagickBooleanType;
    pub fn MagickConvolveImage(
        wand: *mut MagickWand,
        order: size_t,
        kernel: *const c_double,
    ) -> MagickBooleanType;
    pub fn MagickConvolveImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        order: size_t,
        kernel: *const c_double,
    ) -> MagickBooleanType;
    pub fn MagickCropImage(
        wand: *mut MagickWand,
        width: size_t,
        height: size_t,
        x: ssize_t,
        y: ssize_t,
    ) -> MagickBooleanType;
    pub fn MagickCycleColormapImage(wand: *mut MagickWand, displace: ssize_t)
    -> MagickBooleanType;
    pub fn MagickDecipherImage(
        wand: *mut MagickWand,
        passphrase: *const c_char,
    ) -> MagickBooleanType;
    pub fn MagickDeconstructImages(wand: *mut MagickWand) -> *mut MagickWand;
    pub fn MagickDeleteImageArtifact(
        wand: *mut MagickWand,
        artifact: *const c_char,
    ) -> MagickBooleanType;
    pub fn MagickDeskewImage(wand: *mut MagickWand, threshold: c_double) -> MagickBooleanType;
    pub fn MagickDespeckleImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickDisplayImage(
        wand: *mut MagickWand,
        server_name: *const c_char,
    ) -> MagickBooleanType;
    pub fn MagickDisplayImages(
        wand: *mut MagickWand,
        server_name: *const c_char,
    ) -> MagickBooleanType;
    pub fn MagickDistortImage(
        wand: *mut MagickWand,
        method: c_int,
        number_arguments: size_t,
        arguments: *const c_double,
        bestfit: MagickBooleanType,
    ) -> MagickBooleanType;
    pub fn MagickDrawImage(
        wand: *mut MagickWand,
        drawing_wand: *mut DrawingWand,
    ) -> MagickBooleanType;
    pub fn MagickEdgeImage(wand: *mut MagickWand, radius: c_double) -> MagickBooleanType;
    pub fn MagickEmbossImage(
        wand: *mut MagickWand,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickEncipherImage(
        wand: *mut MagickWand,
        passphrase: *const c_char,
    ) -> MagickBooleanType;
    pub fn MagickEnhanceImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickEqualizeImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickEqualizeImageChannel(wand: *mut MagickWand, channel: c_int)
    -> MagickBooleanType;
    pub fn MagickEvaluateImage(
        wand: *mut MagickWand,
        operator: c_int,
        value: c_double,
    ) -> MagickBooleanType;
    pub fn MagickEvaluateImages(wand: *mut MagickWand, operator: c_int) -> *mut MagickWand;
    pub fn MagickEvaluateImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        operator: c_int,
        value: c_double,
    ) -> MagickBooleanType;
    pub fn MagickExtentImage(
        wand: *mut MagickWand,
        width: size_t,
        height: size_t,
        x: ssize_t,
        y: ssize_t,
    ) -> MagickBooleanType;
    pub fn MagickFilterImage(
        wand: *mut MagickWand,
        kernel: *const KernelInfo,
    ) -> MagickBooleanType;
    pub fn MagickFilterImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        kernel: *const KernelInfo,
    ) -> MagickBooleanType;
    pub fn MagickFlipImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickFloodfillPaintImage(
        wand: *mut MagickWand,
        channel: c_int,
        fill: *const PixelWand,
        fuzz: c_double,
        bordercolor: *const PixelWand,
        x: ssize_t,
        y: ssize_t,
        invert: MagickBooleanType,
    ) -> MagickBooleanType;
    pub fn MagickFlopImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickForwardFourierTransformImage(
        wand: *mut MagickWand,
        magnitude: MagickBooleanType,
    ) -> MagickBooleanType;
    pub fn MagickFrameImage(
        wand: *mut MagickWand,
        matte_color: *const PixelWand,
        width: size_t,
        height: size_t,
        inner_bevel: ssize_t,
        outer_bevel: ssize_t,
    ) -> MagickBooleanType;
    pub fn MagickFunctionImage(
        wand: *mut MagickWand,
        function: c_int,
        number_arguments: size_t,
        arguments: *const c_double,
    ) -> MagickBooleanType;
    pub fn MagickFunctionImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        function: c_int,
        number_arguments: size_t,
        arguments: *const c_double,
    ) -> MagickBooleanType;
    pub fn MagickFxImage(wand: *mut MagickWand, expression: *const c_char) -> *mut MagickWand;
    pub fn MagickFxImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        expression: *const c_char,
    ) -> *mut MagickWand;
    pub fn MagickGammaImage(wand: *mut MagickWand, gamma: c_double) -> MagickBooleanType;
    pub fn MagickGammaImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        gamma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickGaussianBlurImage(
        wand: *mut MagickWand,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickGaussianBlurImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickGetImage(wand: *mut MagickWand) -> *mut MagickWand;
    pub fn MagickGetImageAlphaChannel(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickGetImageClipMask(wand: *mut MagickWand) -> *mut MagickWand;
    pub fn MagickGetImageBackgroundColor(
        wand: *mut MagickWand,
        background_color: *mut PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickGetImageBluePrimary(
        wand: *mut MagickWand,
        x: *mut c_double,
        y: *mut c_double,
    ) -> MagickBooleanType;
    pub fn MagickGetImageBorderColor(
        wand: *mut MagickWand,
        border_color: *mut PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickGetImageChannelDepth(wand: *mut MagickWand, channel: c_int) -> size_t;
    pub fn MagickGetImageChannelDistortion(
        wand: *mut MagickWand,
        reference: *mut MagickWand,
        channel: c_int,
        metric: c_int,
        distortion: *mut c_double,
    ) -> MagickBooleanType;
    pub fn MagickGetImageChannelDistortions(
        wand: *mut MagickWand,
        reference: *mut MagickWand,
        metric: c_int,
    ) -> *mut c_double;
    pub fn MagickGetImageChannelFeatures(
        wand: *mut MagickWand,
        distance: size_t,
    ) -> *mut ChannelFeatures;
    pub fn MagickGetImageChannelKurtosis(
        wand: *mut MagickWand,
        channel: c_int,
        kurtosis: *mut c_double,
        skewness: *mut c_double,
    ) -> MagickBooleanType;
    pub fn MagickGetImageChannelMean(
        wand: *mut MagickWand,
        channel: c_int,
        mean: *mut c_double,
        standard_deviation: *mut c_double,
    ) -> MagickBooleanType;
    pub fn MagickGetImageChannelRange(
        wand: *mut MagickWand,
        channel: c_int,
        minima: *mut c_double,
        maxima: *mut c_double,
    ) -> MagickBooleanType;
    pub fn MagickGetImageChannelStatistics(wand: *mut MagickWand) -> *mut ChannelStatistics;
    pub fn MagickGetImageColormapColor(
        wand: *mut MagickWand,
        index: size_t,
        color: *mut PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickGetImageColors(wand: *mut MagickWand) -> size_t;
    pub fn MagickGetImageColorspace(wand: *mut MagickWand) -> c_int;
    pub fn MagickGetImageCompose(wand: *mut MagickWand) -> c_int;
    pub fn MagickGetImageCompression(wand: *mut MagickWand) -> c_int;
    pub fn MagickGetImageCompressionQuality(wand: *mut MagickWand) -> size_t;
    pub fn MagickGetImageDelay(wand: *mut MagickWand) -> size_t;
    pub fn MagickGetImageDepth(wand: *mut MagickWand) -> size_t;
    pub fn MagickGetImageDistortion(
        wand: *mut MagickWand,
        reference: *mut MagickWand,
        metric: c_int,
        distortion: *mut c_double,
    ) -> MagickBooleanType;
    pub fn MagickGetImageDispose(wand: *mut MagickWand) -> c_int;
    pub fn MagickGetImageEndian(wand: *mut MagickWand) -> c_int;
    pub fn MagickGetImageFilename(wand: *mut MagickWand) -> *mut c_char;
    pub fn MagickGetImageFormat(wand: *mut MagickWand) -> *mut c_char;
    pub fn MagickGetImageFuzz(wand: *mut MagickWand) -> c_double;
    pub fn MagickGetImageGamma(wand: *mut MagickWand) -> c_double;
    pub fn MagickGetImageGravity(wand: *mut MagickWand) -> c_int;
    pub fn MagickGetImageGreenPrimary(
        wand: *mut MagickWand,
        x: *mut c_double,
        y: *mut c_double,
    ) -> MagickBooleanType;
    pub fn MagickGetImageHeight(wand: *mut MagickWand) -> size_t;
    pub fn MagickGetImageHistogram(
        wand: *mut MagickWand,
        number_colors: *mut size_t,
    ) -> *mut *mut PixelWand;
    pub fn MagickGetImageInterlaceScheme(wand: *mut MagickWand) -> c_int;
    pub fn MagickGetImageInterpolateMethod(wand: *mut MagickWand) -> c_int;
    pub fn MagickGetImageIterations(wand: *mut MagickWand) -> size_t;
    pub fn MagickGetImageLength(wand: *mut MagickWand, length: *mut u64) -> MagickBooleanType;
    pub fn MagickGetImageMatteColor(
        wand: *mut MagickWand,
        matte_color: *mut PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickGetImageOrientation(wand: *mut MagickWand) -> c_int;
    pub fn MagickGetImagePage(
        wand: *mut MagickWand,
        width: *mut size_t,
        height: *mut size_t,
        x: *mut ssize_t,
        y: *mut ssize_t,
    ) -> MagickBooleanType;
    pub fn MagickGetImagePixelColor(
        wand: *mut MagickWand,
        x: ssize_t,
        y: ssize_t,
        color: *mut PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickGetImageRedPrimary(
        wand: *mut MagickWand,
        x: *mut c_double,
        y: *mut c_double,
    ) -> MagickBooleanType;
    pub fn MagickGetImageRegion(
        wand: *mut MagickWand,
        width: size_t,
        height: size_t,
        x: ssize_t,
        y: ssize_t,
    ) -> *mut MagickWand;
    pub fn MagickGetImageRenderingIntent(wand: *mut MagickWand) -> c_int;
    pub fn MagickGetImageResolution(
        wand: *mut MagickWand,
        x: *mut c_double,
        y: *mut c_double,
    ) -> MagickBooleanType;
    pub fn MagickGetImageScene(wand: *mut MagickWand) -> size_t;
    pub fn MagickGetImageSignature(wand: *mut MagickWand) -> *mut c_char;
    pub fn MagickGetImageTicksPerSecond(wand: *mut MagickWand) -> size_t;
    pub fn MagickGetImageType(wand: *mut MagickWand) -> c_int;
    pub fn MagickGetImageUnits(wand: *mut MagickWand) -> c_int;
    pub fn MagickGetImageVirtualPixelMethod(wand: *mut MagickWand) -> c_int;
    pub fn MagickGetImageWhitePoint(
        wand: *mut MagickWand,
        x: *mut c_double,
        y: *mut c_double,
    ) -> MagickBooleanType;
    pub fn MagickGetImageWidth(wand: *mut MagickWand) -> size_t;
    pub fn MagickGetImageTotalInkDensity(wand: *mut MagickWand) -> c_double;
    pub fn MagickHaldClutImage(
        wand: *mut MagickWand,
        hald_wand: *mut MagickWand,
    ) -> MagickBooleanType;
    pub fn MagickHaldClutImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        hald_wand: *mut MagickWand,
    ) -> MagickBooleanType;
    pub fn MagickIdentifyImage(wand: *mut MagickWand) -> *mut c_char;
    pub fn MagickImplodeImage(wand: *mut MagickWand, radius: c_double) -> MagickBooleanType;
    pub fn MagickInverseFourierTransformImage(
        magnitude_wand: *mut MagickWand,
        phase_wand: *mut MagickWand,
        magnitude: MagickBooleanType,
    ) -> MagickBooleanType;
    pub fn MagickLabelImage(wand: *mut MagickWand, label: *const c_char) -> MagickBooleanType;
    pub fn MagickLevelImage(
        wand: *mut MagickWand,
        black_point: c_double,
        gamma: c_double,
        white_point: c_double,
    ) -> MagickBooleanType;
    pub fn MagickLevelImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        black_point: c_double,
        gamma: c_double,
        white_point: c_double,
    ) -> MagickBooleanType;
    pub fn MagickLinearStretchImage(
        wand: *mut MagickWand,
        black_point: c_double,
        white_point: c_double,
    ) -> MagickBooleanType;
    pub fn MagickLiquidRescaleImage(
        wand: *mut MagickWand,
        columns: size_t,
        rows: size_t,
        delta_x: c_double,
        rigidity: c_double,
    ) -> MagickBooleanType;
    pub fn MagickMagnifyImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickMergeImageLayers(wand: *mut MagickWand, method: c_int) -> *mut MagickWand;
    pub fn MagickMinifyImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickModulateImage(
        wand: *mut MagickWand,
        brightness: c_double,
        saturation: c_double,
        hue: c_double,
    ) -> MagickBooleanType;
    pub fn MagickMontageImage(
        wand: *mut MagickWand,
        drawing_wand: *mut DrawingWand,
        tile_geometry: *const c_char,
        thumbnail_geometry: *const c_char,
        mode: c_int,
        frame: *const c_char,
    ) -> *mut MagickWand;
    pub fn MagickMorphImages(wand: *mut MagickWand, number_frames: size_t) -> *mut MagickWand;
    pub fn MagickMorphologyImage(
        wand: *mut MagickWand,
        method: c_int,
        iterations: ssize_t,
        kernel: *const KernelInfo,
    ) -> MagickBooleanType;
    pub fn MagickMorphologyImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        method: c_int,
        iterations: ssize_t,
        kernel: *const KernelInfo,
    ) -> MagickBooleanType;
    pub fn MagickMotionBlurImage(
        wand: *mut MagickWand,
        radius: c_double,
        sigma: c_double,
        angle: c_double,
    ) -> MagickBooleanType;
    pub fn MagickMotionBlurImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        radius: c_double,
        sigma: c_double,
        angle: c_double,
    ) -> MagickBooleanType;
    pub fn MagickNegateImage(wand: *mut MagickWand, gray: MagickBooleanType)
    -> MagickBooleanType;
    pub fn MagickNegateImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        gray: MagickBooleanType,
    ) -> MagickBooleanType;
    pub fn MagickNewImage(
        wand: *mut MagickWand,
        columns: size_t,
        rows: size_t,
        background: *const PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickNormalizeImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickNormalizeImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
    ) -> MagickBooleanType;
    pub fn MagickOilPaintImage(wand: *mut MagickWand, radius: c_double) -> MagickBooleanType;
    pub fn MagickOpaquePaintImage(
        wand: *mut MagickWand,
        target: *const PixelWand,
        fill: *const PixelWand,
        fuzz: c_double,
        invert: MagickBooleanType,
    ) -> MagickBooleanType;
    pub fn MagickOpaquePaintImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        target: *const PixelWand,
        fill: *const PixelWand,
        fuzz: c_double,
        invert: MagickBooleanType,
    ) -> MagickBooleanType;
    pub fn MagickOptimizeImageLayers(wand: *mut MagickWand) -> *mut MagickWand;
    pub fn MagickOrderedPosterizeImage(
        wand: *mut MagickWand,
        threshold_map: *const c_char,
    ) -> MagickBooleanType;
    pub fn MagickOrderedPosterizeImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        threshold_map: *const c_char,
    ) -> MagickBooleanType;
    pub fn MagickPolaroidImage(
        wand: *mut MagickWand,
        drawing_wand: *mut DrawingWand,
        angle: c_double,
    ) -> MagickBooleanType;
    pub fn MagickPosterizeImage(
        wand: *mut MagickWand,
        levels: size_t,
        dither: MagickBooleanType,
    ) -> MagickBooleanType;
    pub fn MagickPreviewImages(wand: *mut MagickWand, preview: c_int) -> *mut MagickWand;
    pub fn MagickQuantizeImage(
        wand: *mut MagickWand,
        number_colors: size_t,
        colorspace: c_int,
        treedepth: size_t,
        dither: MagickBooleanType,
        measure_error: MagickBooleanType,
    ) -> MagickBooleanType;
    pub fn MagickQuantizeImages(
        wand: *mut MagickWand,
        number_colors: size_t,
        colorspace: c_int,
        treedepth: size_t,
        dither: MagickBooleanType,
        measure_error: MagickBooleanType,
    ) -> MagickBooleanType;
    pub fn MagickRadialBlurImage(wand: *mut MagickWand, angle: c_double) -> MagickBooleanType;
    pub fn MagickRadialBlurImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        angle: c_double,
    ) -> MagickBooleanType;
    pub fn MagickRaiseImage(
        wand: *mut MagickWand,
        width: size_t,
        height: size_t,
        x: ssize_t,
        y: ssize_t,
        raise: MagickBooleanType,
    ) -> MagickBooleanType;
    pub fn MagickRandomThresholdImage(
        wand: *mut MagickWand,
        low: c_double,
        high: c_double,
    ) -> MagickBooleanType;
    pub fn MagickRandomThresholdImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        low: c_double,
        high: c_double,
    ) -> MagickBooleanType;
    pub fn MagickRemapImage(
        wand: *mut MagickWand,
        remap_wand: *mut MagickWand,
        method: c_int,
    ) -> MagickBooleanType;
    pub fn MagickResampleImage(
        wand: *mut MagickWand,
        x_resolution: c_double,
        y_resolution: c_double,
        filter: c_int,
        blur: c_double,
    ) -> MagickBooleanType;
    pub fn MagickResetImagePage(wand: *mut MagickWand, page: *const c_char)
    -> MagickBooleanType;
    pub fn MagickResizeImage(
        wand: *mut MagickWand,
        columns: size_t,
        rows: size_t,
        filter: c_int,
        blur: c_double,
    ) -> MagickBooleanType;
    pub fn MagickRollImage(wand: *mut MagickWand, x: ssize_t, y: ssize_t) -> MagickBooleanType;
    pub fn MagickRotateImage(
        wand: *mut MagickWand,
        background: *const PixelWand,
        degrees: c_double,
    ) -> MagickBooleanType;
    pub fn MagickSampleImage(
        wand: *mut MagickWand,
        columns: size_t,
        rows: size_t,
    ) -> MagickBooleanType;
    pub fn MagickScaleImage(
        wand: *mut MagickWand,
        columns: size_t,
        rows: size_t,
    ) -> MagickBooleanType;
    pub fn MagickSegmentImage(
        wand: *mut MagickWand,
        colorspace: c_int,
        verbose: MagickBooleanType,
        cluster_threshold: c_double,
        smooth_threshold: c_double,
    ) -> MagickBooleanType;
    pub fn MagickSelectiveBlurImage(
        wand: *mut MagickWand,
        radius: c_double,
        sigma: c_double,
        threshold: c_double,
    ) -> MagickBooleanType;
    pub fn MagickSelectiveBlurImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        radius: c_double,
        sigma: c_double,
        threshold: c_double,
    ) -> MagickBooleanType;
    pub fn MagickSeparateImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
    ) -> MagickBooleanType;
    pub fn MagickSepiaToneImage(wand: *mut MagickWand, threshold: c_double)
    -> MagickBooleanType;
    pub fn MagickSetImage(
        wand: *mut MagickWand,
        set_wand: *mut MagickWand,
    ) -> MagickBooleanType;
    pub fn MagickSetImageAlphaChannel(
        wand: *mut MagickWand,
        alpha_type: c_int,
    ) -> MagickBooleanType;
    pub fn MagickSetImageBackgroundColor(
        wand: *mut MagickWand,
        background: *const PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickSetImageBias(wand: *mut MagickWand, bias: c_double) -> MagickBooleanType;
    pub fn MagickSetImageBluePrimary(
        wand: *mut MagickWand,
        x: c_double,
        y: c_double,
    ) -> MagickBooleanType;
    pub fn MagickSetImageBorderColor(
        wand: *mut MagickWand,
        border: *const PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickSetImageChannelDepth(
        wand: *mut MagickWand,
        channel: c_int,
        depth: size_t,
    ) -> MagickBooleanType;
    pub fn MagickSetImageClipMask(
        wand: *mut MagickWand,
        clip_mask: *mut MagickWand,
    ) -> MagickBooleanType;
    pub fn MagickSetImageColor(
        wand: *mut MagickWand,
        color: *const PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickSetImageColormapColor(
        wand: *mut MagickWand,
        index: size_t,
        color: *const PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickSetImageColorspace(
        wand: *mut MagickWand,
        colorspace: c_int,
    ) -> MagickBooleanType;
    pub fn MagickSetImageCompose(wand: *mut MagickWand, compose: c_int) -> MagickBooleanType;
    pub fn MagickSetImageCompression(
        wand: *mut MagickWand,
        compression: c_int,
    ) -> MagickBooleanType;
    pub fn MagickSetImageCompressionQuality(
        wand: *mut MagickWand,
        quality: size_t,
    ) -> MagickBooleanType;
    pub fn MagickSetImageDelay(wand: *mut MagickWand, delay: size_t) -> MagickBooleanType;
    pub fn MagickSetImageDepth(wand: *mut MagickWand, depth: size_t) -> MagickBooleanType;
    pub fn MagickSetImageDispose(wand: *mut MagickWand, dispose: c_int) -> MagickBooleanType;
    pub fn MagickSetImageEndian(wand: *mut MagickWand, endian: c_int) -> MagickBooleanType;
    pub fn MagickSetImageExtent(
        wand: *mut MagickWand,
        columns: size_t,
        rows: size_t,
    ) -> MagickBooleanType;
    pub fn MagickSetImageFilename(
        wand: *mut MagickWand,
        filename: *const c_char,
    ) -> MagickBooleanType;
    pub fn MagickSetImageFormat(
        wand: *mut MagickWand,
        format: *const c_char,
    ) -> MagickBooleanType;
    pub fn MagickSetImageGamma(wand: *mut MagickWand, gamma: c_double) -> MagickBooleanType;
    pub fn MagickSetImageGravity(wand: *mut MagickWand, gravity: c_int) -> MagickBooleanType;
    pub fn MagickSetImageGreenPrimary(
        wand: *mut MagickWand,
        x: c_double,
        y: c_double,
    ) -> MagickBooleanType;
    pub fn MagickSetImageInterlaceScheme(
        wand: *mut MagickWand,
        interlace: c_int,
    ) -> MagickBooleanType;
    pub fn MagickSetImageInterpolateMethod(
        wand: *mut MagickWand,
        method: c_int,
    ) -> MagickBooleanType;
    pub fn MagickSetImageIterations(
        wand: *mut MagickWand,
        iterations: size_t,
    ) -> MagickBooleanType;
    pub fn MagickSetImageMatte(
        wand: *mut MagickWand,
        matte: MagickBooleanType,
    ) -> MagickBooleanType;
    pub fn MagickSetImageMatteColor(
        wand: *mut MagickWand,
        matte: *const PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickSetImageOpacity(wand: *mut MagickWand, alpha: c_double) -> MagickBooleanType;
    pub fn MagickSetImageOrientation(
        wand: *mut MagickWand,
        orientation: c_int,
    ) -> MagickBooleanType;
    pub fn MagickSetImagePage(
        wand: *mut MagickWand,
        width: size_t,
        height: size_t,
        x: ssize_t,
        y: ssize_t,
    ) -> MagickBooleanType;
    pub fn MagickSetImageRedPrimary(
        wand: *mut MagickWand,
        x: c_double,
        y: c_double,
    ) -> MagickBooleanType;
    pub fn MagickSetImageResolution(
        wand: *mut MagickWand,
        x_resolution: c_double,
        y_resolution: c_double,
    ) -> MagickBooleanType;
    pub fn MagickSetImageScene(wand: *mut MagickWand, scene: size_t) -> MagickBooleanType;
    pub fn MagickSetImageTicksPerSecond(
        wand: *mut MagickWand,
        ticks_per_second: ssize_t,
    ) -> MagickBooleanType;
    pub fn MagickSetImageType(wand: *mut MagickWand, image_type: c_int) -> MagickBooleanType;
    pub fn MagickSetImageUnits(wand: *mut MagickWand, units: c_int) -> MagickBooleanType;
    pub fn MagickSetImageVirtualPixelMethod(wand: *mut MagickWand, method: c_int) -> c_int;
    pub fn MagickSetImageWhitePoint(
        wand: *mut MagickWand,
        x: c_double,
        y: c_double,
    ) -> MagickBooleanType;
    pub fn MagickShadeImage(
        wand: *mut MagickWand,
        gray: MagickBooleanType,
        azimuth: c_double,
        elevation: c_double,
    ) -> MagickBooleanType;
    pub fn MagickShadowImage(
        wand: *mut MagickWand,
        opacity: c_double,
        sigma: c_double,
        x: ssize_t,
        y: ssize_t,
    ) -> MagickBooleanType;
    pub fn MagickSharpenImage(
        wand: *mut MagickWand,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickSharpenImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickShaveImage(
        wand: *mut MagickWand,
        columns: size_t,
        rows: size_t,
    ) -> MagickBooleanType;
    pub fn MagickShearImage(
        wand: *mut MagickWand,
        background: *const PixelWand,
        x_shear: c_double,
        y_shear: c_double,
    ) -> MagickBooleanType;
    pub fn MagickSigmoidalContrastImage(
        wand: *mut MagickWand,
        sharpen: MagickBooleanType,
        alpha: c_double,
        beta: c_double,
    ) -> MagickBooleanType;
    pub fn MagickSigmoidalContrastImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        sharpen: MagickBooleanType,
        alpha: c_double,
        beta: c_double,
    ) -> MagickBooleanType;
    pub fn MagickSimilarityImage(
        wand: *mut MagickWand,
        reference: *mut MagickWand,
        offset: *mut RectangleInfo,
        similarity: *mut c_double,
    ) -> *mut MagickWand;
    pub fn MagickSketchImage(
        wand: *mut MagickWand,
        radius: c_double,
        sigma: c_double,
        angle: c_double,
    ) -> MagickBooleanType;
    pub fn MagickSmushImages(
        wand: *mut MagickWand,
        stack: MagickBooleanType,
        offset: ssize_t,
    ) -> *mut MagickWand;
    pub fn MagickSolarizeImage(wand: *mut MagickWand, threshold: c_double)
    -> MagickBooleanType;
    pub fn MagickSparseColorImage(
        wand: *mut MagickWand,
        channel: c_int,
        method: c_int,
        number_arguments: size_t,
        arguments: *const c_double,
    ) -> MagickBooleanType;
    pub fn MagickSpliceImage(
        wand: *mut MagickWand,
        width: size_t,
        height: size_t,
        x: ssize_t,
        y: ssize_t,
    ) -> MagickBooleanType;
    pub fn MagickSpreadImage(wand: *mut MagickWand, radius: c_double) -> MagickBooleanType;
    pub fn MagickStatisticImage(
        wand: *mut MagickWand,
        statistic_type: c_int,
        width: size_t,
        height: size_t,
    ) -> MagickBooleanType;
    pub fn MagickStatisticImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        statistic_type: c_int,
        width: size_t,
        height: size_t,
    ) -> MagickBooleanType;
    pub fn MagickSteganoImage(
        wand: *mut MagickWand,
        watermark_wand: *mut MagickWand,
        offset: ssize_t,
    ) -> *mut MagickWand;
    pub fn MagickStereoImage(
        wand: *mut MagickWand,
        offset_wand: *mut MagickWand,
    ) -> *mut MagickWand;
    pub fn MagickStripImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickSwirlImage(wand: *mut MagickWand, degrees: c_double) -> MagickBooleanType;
    pub fn MagickTextureImage(
        wand: *mut MagickWand,
        texture_wand: *mut MagickWand,
    ) -> *mut MagickWand;
    pub fn MagickThresholdImage(wand: *mut MagickWand, threshold: c_double)
    -> MagickBooleanType;
    pub fn MagickThresholdImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        threshold: c_double,
    ) -> MagickBooleanType;
    pub fn MagickThumbnailImage(
        wand: *mut MagickWand,
        columns: size_t,
        rows: size_t,
    ) -> MagickBooleanType;
    pub fn MagickTintImage(
        wand: *mut MagickWand,
        tint: *const PixelWand,
        opacity: *const PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickTransformImage(
        wand: *mut MagickWand,
        crop: *const c_char,
        geometry: *const c_char,
    ) -> *mut MagickWand;
    pub fn MagickTransformImageColorspace(
        wand: *mut MagickWand,
        colorspace: c_int,
    ) -> MagickBooleanType;
    pub fn MagickTransparentPaintImage(
        wand: *mut MagickWand,
        target: *const PixelWand,
        alpha: c_double,
        fuzz: c_double,
        invert: MagickBooleanType,
    ) -> MagickBooleanType;
    pub fn MagickTransposeImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickTransverseImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickTrimImage(wand: *mut MagickWand, fuzz: c_double) -> MagickBooleanType;
    pub fn MagickUniqueImageColors(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickUnsharpMaskImage(
        wand: *mut MagickWand,
        radius: c_double,
        sigma: c_double,
        amount: c_double,
        threshold: c_double,
    ) -> MagickBooleanType;
    pub fn MagickUnsharpMaskImageChannel(
        wand: *mut MagickWand,
        channel: c_int,
        radius: c_double,
        sigma: c_double,
        amount: c_double,
        threshold: c_double,
    ) -> MagickBooleanType;
    pub fn MagickVignetteImage(
        wand: *mut MagickWand,
        black_point: c_double,
        white_point: c_double,
        x: ssize_t,
        y: ssize_t,
    ) -> MagickBooleanType;
    pub fn MagickWaveImage(
        wand: *mut MagickWand,
        amplitude: c_double,
        wave_length: c_double,
    ) -> MagickBooleanType;
    pub fn MagickWhiteThresholdImage(
        wand: *mut MagickWand,
        threshold: *const PixelWand,
    ) -> MagickBooleanType;

    // --- Pixel wand ---

    pub fn NewPixelWand() -> *mut PixelWand;
    pub fn ClonePixelWand(wand: *const PixelWand) -> *mut PixelWand;
    pub fn DestroyPixelWand(wand: *mut PixelWand) -> *mut PixelWand;
    pub fn IsPixelWand(wand: *const PixelWand) -> MagickBooleanType;
    pub fn PixelGetException(wand: *const PixelWand, severity: *mut c_int) -> *mut c_char;
    pub fn PixelClearException(wand: *mut PixelWand) -> MagickBooleanType;
    pub fn PixelSetColor(wand: *mut PixelWand, color: *const c_char) -> MagickBooleanType;
    pub fn PixelGetColorAsString(wand: *mut PixelWand) -> *mut c_char;
    pub fn PixelGetColorAsNormalizedString(wand: *mut PixelWand) -> *mut c_char;
    pub fn PixelGetRed(wand: *const PixelWand) -> c_double;
    pub fn PixelGetGreen(wand: *const PixelWand) -> c_double;
    pub fn PixelGetBlue(wand: *const PixelWand) -> c_double;
    pub fn PixelGetAlpha(wand: *const PixelWand) -> c_double;
    pub fn PixelSetRed(wand: *mut PixelWand, red: c_double);
    pub fn PixelSetGreen(wand: *mut PixelWand, green: c_double);
    pub fn PixelSetBlue(wand: *mut PixelWand, blue: c_double);
    pub fn PixelSetAlpha(wand: *mut PixelWand, alpha: c_double);

    // --- Drawing wand ---

    pub fn NewDrawingWand() -> *mut DrawingWand;
    pub fn CloneDrawingWand(wand: *const DrawingWand) -> *mut DrawingWand;
    pub fn DestroyDrawingWand(wand: *mut DrawingWand) -> *mut DrawingWand;
    pub fn IsDrawingWand(wand: *const DrawingWand) -> MagickBooleanType;
    pub fn DrawGetException(wand: *const DrawingWand, severity: *mut c_int) -> *mut c_char;
    pub fn DrawClearException(wand: *mut DrawingWand) -> MagickBooleanType;
    pub fn DrawSetFont(wand: *mut DrawingWand, font_name: *const c_char) -> MagickBooleanType;
    pub fn DrawSetFontSize(wand: *mut DrawingWand, pointsize: c_double);
    pub fn DrawSetFillColor(wand: *mut DrawingWand, fill_wand: *const PixelWand);
    pub fn DrawSetStrokeColor(wand: *mut DrawingWand, stroke_wand: *const PixelWand);
    pub fn DrawSetStrokeWidth(wand: *mut DrawingWand, stroke_width: c_double);
    pub fn DrawAnnotation(
        wand: *mut DrawingWand,
        x: c_double,
        y: c_double,
        text: *const c_uchar,
    );
    pub fn DrawLine(
        wand: *mut DrawingWand,
        sx: c_double,
        sy: c_double,
        ex: c_double,
        ey: c_double,
    );
    pub fn DrawRectangle(
        wand: *mut DrawingWand,
        x1: c_double,
        y1: c_double,
        x2: c_double,
        y2: c_double,
    );

    // --- Pixel iterator ---

    pub fn NewPixelIterator(wand: *mut MagickWand) -> *mut PixelIterator;
    pub fn NewPixelRegionIterator(
        wand: *mut MagickWand,
        x: ssize_t,
        y: ssize_t,
        width: size_t,
        height: size_t,
    ) -> *mut PixelIterator;
    pub fn DestroyPixelIterator(iterator: *mut PixelIterator) -> *mut PixelIterator;
    pub fn IsPixelIterator(iterator: *const PixelIterator) -> MagickBooleanType;
    pub fn PixelGetIteratorException(
        iterator: *const PixelIterator,
        severity: *mut c_int,
    ) -> *mut c_char;
    pub fn PixelClearIteratorException(iterator: *mut PixelIterator) -> MagickBooleanType;
    pub fn PixelGetNextIteratorRow(
        iterator: *mut PixelIterator,
        number_wands: *mut size_t,
    ) -> *mut *mut PixelWand;
    pub fn PixelSyncIterator(iterator: *mut PixelIterator) -> MagickBooleanType;
    pub fn PixelResetIterator(iterator: *mut PixelIterator);
    pub fn PixelSetIteratorRow(
        iterator: *mut PixelIterator,
        row: ssize_t,
    ) -> MagickBooleanType;

    // --- Convolution kernels (MagickCore) ---

    pub fn AcquireKernelInfo(kernel_string: *const c_char) -> *mut KernelInfo;
    pub fn DestroyKernelInfo(kernel: *mut KernelInfo) -> *mut KernelInfo;
}
