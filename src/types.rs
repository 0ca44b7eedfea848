//! Typed parameters for wand operations.
//!
//! Each enum mirrors the corresponding ImageMagick 6 C enum, with the same
//! discriminants, so values can be passed straight through the FFI boundary
//! as `c_int`. Only enums consumed by bound operations are defined.

use bitflags::bitflags;

/// Severity classification of a native exception, derived from the
/// exception code range the library reserves for each class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExceptionSeverity {
    Warning,
    Error,
    Fatal,
}

impl ExceptionSeverity {
    /// Classify a raw `ExceptionType` code. Codes 300-399 are warnings,
    /// 400-699 recoverable errors, 700+ fatal.
    pub(crate) fn from_code(code: i32) -> Self {
        match code {
            ..=399 => ExceptionSeverity::Warning,
            400..=699 => ExceptionSeverity::Error,
            _ => ExceptionSeverity::Fatal,
        }
    }
}

bitflags! {
    /// Channel selection mask for the `*_channel` operation variants.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ChannelType: u32 {
        const RED     = 0x0001;
        const GRAY    = 0x0001;
        const CYAN    = 0x0001;
        const GREEN   = 0x0002;
        const MAGENTA = 0x0002;
        const BLUE    = 0x0004;
        const YELLOW  = 0x0004;
        const ALPHA   = 0x0008;
        const OPACITY = 0x0008;
        const BLACK   = 0x0020;
        const INDEX   = 0x0020;
        const COMPOSITES = 0x002f;
        const TRUE_ALPHA = 0x0040;
        const RGB     = 0x0080;
        const SYNC    = 0x0100;
        const ALL     = 0x7fff_fff;
        /// All channels except opacity, with channel syncing enabled.
        const DEFAULT = (0x7fff_fff | 0x0100) & !0x0008;
    }
}

impl Default for ChannelType {
    fn default() -> Self {
        ChannelType::DEFAULT
    }
}

/// Element type of a flat pixel buffer crossing the FFI boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum StorageType {
    Undefined = 0,
    /// 8-bit unsigned integer.
    Char = 1,
    /// 64-bit float, normalized to [0.0, 1.0].
    Double = 2,
    /// 32-bit float, normalized to [0.0, 1.0].
    Float = 3,
    /// 32-bit signed integer.
    Integer = 4,
    /// 64-bit signed integer.
    Long = 5,
    /// The library's build-time quantum type; no stable host representation.
    Quantum = 6,
    /// 16-bit signed integer.
    Short = 7,
}

/// Resampling filters for `resize_image` and `resample_image`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum FilterType {
    Undefined = 0,
    Point = 1,
    Box = 2,
    Triangle = 3,
    Hermite = 4,
    Hanning = 5,
    Hamming = 6,
    Blackman = 7,
    Gaussian = 8,
    Quadratic = 9,
    Cubic = 10,
    Catrom = 11,
    Mitchell = 12,
    Jinc = 13,
    Sinc = 14,
    SincFast = 15,
    Kaiser = 16,
    Welsh = 17,
    Parzen = 18,
    Bohman = 19,
    Bartlett = 20,
    Lagrange = 21,
    Lanczos = 22,
    LanczosSharp = 23,
    Lanczos2 = 24,
    Lanczos2Sharp = 25,
    Robidoux = 26,
    RobidouxSharp = 27,
    Cosine = 28,
    Spline = 29,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum NoiseType {
    Undefined = 0,
    Uniform = 1,
    Gaussian = 2,
    MultiplicativeGaussian = 3,
    Impulse = 4,
    Laplacian = 5,
    Poisson = 6,
    Random = 7,
}

/// Composition operators, as consumed by `composite_image` and friends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum CompositeOperator {
    Undefined = 0,
    No = 1,
    ModulusAdd = 2,
    Atop = 3,
    Blend = 4,
    Bumpmap = 5,
    ChangeMask = 6,
    Clear = 7,
    ColorBurn = 8,
    ColorDodge = 9,
    Colorize = 10,
    CopyBlack = 11,
    CopyBlue = 12,
    Copy = 13,
    CopyCyan = 14,
    CopyGreen = 15,
    CopyMagenta = 16,
    CopyOpacity = 17,
    CopyRed = 18,
    CopyYellow = 19,
    Darken = 20,
    DstAtop = 21,
    Dst = 22,
    DstIn = 23,
    DstOut = 24,
    DstOver = 25,
    Difference = 26,
    Displace = 27,
    Dissolve = 28,
    Exclusion = 29,
    HardLight = 30,
    Hue = 31,
    In = 32,
    Lighten = 33,
    LinearLight = 34,
    Luminize = 35,
    MinusDst = 36,
    Modulate = 37,
    Multiply = 38,
    Out = 39,
    Over = 40,
    Overlay = 41,
    Plus = 42,
    Replace = 43,
    Saturate = 44,
    Screen = 45,
    SoftLight = 46,
    SrcAtop = 47,
    Src = 48,
    SrcIn = 49,
    SrcOut = 50,
    SrcOver = 51,
    ModulusSubtract = 52,
    Threshold = 53,
    Xor = 54,
    DivideDst = 55,
    Distort = 56,
    Blur = 57,
    PegtopLight = 58,
    VividLight = 59,
    PinLight = 60,
    LinearDodge = 61,
    LinearBurn = 62,
    Mathematics = 63,
    DivideSrc = 64,
    MinusSrc = 65,
    DarkenIntensity = 66,
    LightenIntensity = 67,
}

/// Distortion metrics for image comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum MetricType {
    Undefined = 0,
    AbsoluteError = 1,
    MeanAbsoluteError = 2,
    MeanErrorPerPixel = 3,
    MeanSquaredError = 4,
    PeakAbsoluteError = 5,
    PeakSignalToNoiseRatio = 6,
    RootMeanSquaredError = 7,
    NormalizedCrossCorrelationError = 8,
    FuzzError = 9,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum ImageLayerMethod {
    Undefined = 0,
    Coalesce = 1,
    CompareAny = 2,
    CompareClear = 3,
    CompareOverlay = 4,
    Dispose = 5,
    Optimize = 6,
    OptimizeImage = 7,
    OptimizePlus = 8,
    OptimizeTrans = 9,
    RemoveDups = 10,
    RemoveZero = 11,
    Composite = 12,
    Merge = 13,
    Flatten = 14,
    Mosaic = 15,
    TrimBounds = 16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum DistortMethod {
    Undefined = 0,
    Affine = 1,
    AffineProjection = 2,
    ScaleRotateTranslate = 3,
    Perspective = 4,
    PerspectiveProjection = 5,
    BilinearForward = 6,
    BilinearReverse = 7,
    Polynomial = 8,
    Arc = 9,
    Polar = 10,
    DePolar = 11,
    Cylinder2Plane = 12,
    Plane2Cylinder = 13,
    Barrel = 14,
    BarrelInverse = 15,
    Shepards = 16,
    Resize = 17,
}

/// Arithmetic/relational operators for `evaluate_image`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum EvaluateOperator {
    Undefined = 0,
    Add = 1,
    And = 2,
    Divide = 3,
    LeftShift = 4,
    Max = 5,
    Min = 6,
    Multiply = 7,
    Or = 8,
    RightShift = 9,
    Set = 10,
    Subtract = 11,
    Xor = 12,
    Pow = 13,
    Log = 14,
    Threshold = 15,
    ThresholdBlack = 16,
    ThresholdWhite = 17,
    GaussianNoise = 18,
    ImpulseNoise = 19,
    LaplacianNoise = 20,
    MultiplicativeNoise = 21,
    PoissonNoise = 22,
    UniformNoise = 23,
    Cosine = 24,
    Sine = 25,
    AddModulus = 26,
    Mean = 27,
    Abs = 28,
    Exponential = 29,
    Median = 30,
    Sum = 31,
    RootMeanSquare = 32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum MagickFunction {
    Undefined = 0,
    Polynomial = 1,
    Sinusoid = 2,
    ArcSin = 3,
    ArcTan = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum ColorspaceType {
    Undefined = 0,
    Rgb = 1,
    Gray = 2,
    Transparent = 3,
    Ohta = 4,
    Lab = 5,
    Xyz = 6,
    YCbCr = 7,
    Ycc = 8,
    Yiq = 9,
    YPbPr = 10,
    Yuv = 11,
    Cmyk = 12,
    Srgb = 13,
    Hsb = 14,
    Hsl = 15,
    Hwb = 16,
    Rec601Luma = 17,
    Rec601YCbCr = 18,
    Rec709Luma = 19,
    Rec709YCbCr = 20,
    Log = 21,
    Cmy = 22,
    Luv = 23,
    Hcl = 24,
    Lch = 25,
    Lms = 26,
    LchAb = 27,
    LchUv = 28,
    ScRgb = 29,
    Hsi = 30,
    Hsv = 31,
    HclP = 32,
    YDbDr = 33,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum CompressionType {
    Undefined = 0,
    No = 1,
    BZip = 2,
    Dxt1 = 3,
    Dxt3 = 4,
    Dxt5 = 5,
    Fax = 6,
    Group4 = 7,
    Jpeg = 8,
    Jpeg2000 = 9,
    LosslessJpeg = 10,
    Lzw = 11,
    Rle = 12,
    Zip = 13,
    ZipS = 14,
    Piz = 15,
    Pxr24 = 16,
    B44 = 17,
    B44A = 18,
    Lzma = 19,
    Jbig1 = 20,
    Jbig2 = 21,
}

/// GIF frame disposal methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum DisposeType {
    Undefined = 0,
    None = 1,
    Background = 2,
    Previous = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum EndianType {
    Undefined = 0,
    Lsb = 1,
    Msb = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum GravityType {
    Undefined = 0,
    NorthWest = 1,
    North = 2,
    NorthEast = 3,
    West = 4,
    Center = 5,
    East = 6,
    SouthWest = 7,
    South = 8,
    SouthEast = 9,
    Static = 10,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum InterlaceType {
    Undefined = 0,
    None = 1,
    Line = 2,
    Plane = 3,
    Partition = 4,
    Gif = 5,
    Jpeg = 6,
    Png = 7,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum InterpolatePixelMethod {
    Undefined = 0,
    Average = 1,
    Bicubic = 2,
    Bilinear = 3,
    Filter = 4,
    Integer = 5,
    Mesh = 6,
    NearestNeighbor = 7,
    Spline = 8,
}

/// EXIF-style orientations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum OrientationType {
    Undefined = 0,
    TopLeft = 1,
    TopRight = 2,
    BottomRight = 3,
    BottomLeft = 4,
    LeftTop = 5,
    RightTop = 6,
    RightBottom = 7,
    LeftBottom = 8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum RenderingIntent {
    Undefined = 0,
    Saturation = 1,
    Perceptual = 2,
    Absolute = 3,
    Relative = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum ResolutionType {
    Undefined = 0,
    PixelsPerInch = 1,
    PixelsPerCentimeter = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum ImageType {
    Undefined = 0,
    Bilevel = 1,
    Grayscale = 2,
    GrayscaleMatte = 3,
    Palette = 4,
    PaletteMatte = 5,
    TrueColor = 6,
    TrueColorMatte = 7,
    ColorSeparation = 8,
    ColorSeparationMatte = 9,
    Optimize = 10,
    PaletteBilevelMatte = 11,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum VirtualPixelMethod {
    Undefined = 0,
    Background = 1,
    Constant = 2,
    Dither = 3,
    Edge = 4,
    Mirror = 5,
    Random = 6,
    Tile = 7,
    Transparent = 8,
    Mask = 9,
    Black = 10,
    Gray = 11,
    White = 12,
    HorizontalTile = 13,
    VerticalTile = 14,
    HorizontalTileEdge = 15,
    VerticalTileEdge = 16,
    CheckerTile = 17,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum AlphaChannelType {
    Undefined = 0,
    Activate = 1,
    Background = 2,
    Copy = 3,
    Deactivate = 4,
    Extract = 5,
    Opaque = 6,
    Reset = 7,
    Set = 8,
    Shape = 9,
    Transparent = 10,
    Flatten = 11,
    Remove = 12,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum MontageMode {
    Undefined = 0,
    Frame = 1,
    Unframe = 2,
    Concatenate = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum MorphologyMethod {
    Undefined = 0,
    Convolve = 1,
    Correlate = 2,
    Erode = 3,
    Dilate = 4,
    ErodeIntensity = 5,
    DilateIntensity = 6,
    Distance = 7,
    Open = 8,
    Close = 9,
    OpenIntensity = 10,
    CloseIntensity = 11,
    Smooth = 12,
    EdgeIn = 13,
    EdgeOut = 14,
    Edge = 15,
    TopHat = 16,
    BottomHat = 17,
    HitAndMiss = 18,
    Thinning = 19,
    Thicken = 20,
    Voronoi = 21,
    IterativeDistance = 22,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum PreviewType {
    Undefined = 0,
    Rotate = 1,
    Shear = 2,
    Roll = 3,
    Hue = 4,
    Saturation = 5,
    Brightness = 6,
    Gamma = 7,
    Spiff = 8,
    Dull = 9,
    Grayscale = 10,
    Quantize = 11,
    Despeckle = 12,
    ReduceNoise = 13,
    AddNoise = 14,
    Sharpen = 15,
    Blur = 16,
    Threshold = 17,
    EdgeDetect = 18,
    Spread = 19,
    Solarize = 20,
    Shade = 21,
    Raise = 22,
    Segment = 23,
    Swirl = 24,
    Implode = 25,
    Wave = 26,
    OilPaint = 27,
    CharcoalDrawing = 28,
    Jpeg = 29,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum DitherMethod {
    Undefined = 0,
    None = 1,
    Riemersma = 2,
    FloydSteinberg = 3,
}

/// Interpolation methods for `sparse_color_image`. Discriminants are
/// aliases into the distortion method table, as in the C headers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum SparseColorMethod {
    Undefined = 0,
    Barycentric = 1,
    Bilinear = 7,
    Polynomial = 8,
    Shepards = 16,
    Voronoi = 18,
    Inverse = 19,
    Manhattan = 20,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum StatisticType {
    Undefined = 0,
    Gradient = 1,
    Maximum = 2,
    Mean = 3,
    Median = 4,
    Minimum = 5,
    Mode = 6,
    Nonpeak = 7,
    StandardDeviation = 8,
    RootMeanSquare = 9,
}

/// Process-wide resource classes for `get_resource_limit`/`set_resource_limit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum ResourceType {
    Undefined = 0,
    Area = 1,
    Disk = 2,
    File = 3,
    Map = 4,
    Memory = 5,
    Thread = 6,
    Time = 7,
    Throttle = 8,
    Width = 9,
    Height = 10,
}

/// Recover a typed enum from a raw C value returned by a property getter.
/// All of these enums have contiguous discriminants starting at zero, so a
/// range check plus transmute is exact; anything else maps to `Undefined`.
macro_rules! contiguous_from_raw {
    ($($name:ident : $max:literal),+ $(,)?) => {
        $(impl $name {
            pub(crate) fn from_raw(raw: i32) -> Self {
                if (0..=$max).contains(&raw) {
                    unsafe { core::mem::transmute::<i32, $name>(raw) }
                } else {
                    Self::Undefined
                }
            }
        })+
    };
}

contiguous_from_raw! {
    ColorspaceType: 33,
    CompositeOperator: 67,
    CompressionType: 21,
    DisposeType: 3,
    EndianType: 2,
    GravityType: 10,
    InterlaceType: 7,
    InterpolatePixelMethod: 8,
    OrientationType: 8,
    RenderingIntent: 4,
    ResolutionType: 2,
    ImageType: 11,
    VirtualPixelMethod: 17,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification_by_code_range() {
        assert_eq!(ExceptionSeverity::from_code(300), ExceptionSeverity::Warning);
        assert_eq!(ExceptionSeverity::from_code(399), ExceptionSeverity::Warning);
        assert_eq!(ExceptionSeverity::from_code(400), ExceptionSeverity::Error);
        assert_eq!(ExceptionSeverity::from_code(499), ExceptionSeverity::Error);
        assert_eq!(ExceptionSeverity::from_code(700), ExceptionSeverity::Fatal);
        assert_eq!(ExceptionSeverity::from_code(785), ExceptionSeverity::Fatal);
    }

    #[test]
    fn default_channels_exclude_opacity() {
        let d = ChannelType::default();
        assert!(d.contains(ChannelType::RED));
        assert!(d.contains(ChannelType::GREEN));
        assert!(d.contains(ChannelType::BLUE));
        assert!(!d.contains(ChannelType::OPACITY));
    }
}
