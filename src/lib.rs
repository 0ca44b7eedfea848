//! # zenwand
//!
//! Safe Rust bindings for the ImageMagick 6 MagickWand C API.
//!
//! Every operation is a thin delegation: arguments are marshaled into the
//! C calling convention, one native function runs, and the wand's exception
//! state comes back as a [`WandError`]. All image algorithms, codecs and
//! color math live in the native library; this crate's own design surface
//! is the handle lifetime model and the typed pixel-buffer marshaling.
//!
//! ## Handles
//!
//! Four wrapper types own native resources: [`MagickWand`] (an image list),
//! [`PixelWand`] (a color), [`DrawingWand`] (a vector drawing context) and
//! [`PixelIterator`] (row-wise pixel access). Each releases its resource
//! exactly once, explicitly via `destroy()` or implicitly on drop, and
//! every operation on a released handle fails with
//! [`WandError::HandleInvalid`]. Cloning (`try_clone`) deep-copies the
//! native resource; the two handles have independent lifetimes.
//!
//! Handles are `Send` but not `Sync`: sharing one across threads requires
//! external synchronization.
//!
//! ## Process lifecycle
//!
//! Call [`genesis`] once at startup before creating any handle, and
//! [`terminus`] at shutdown after the last handle is destroyed. Both are
//! idempotent; handle creation outside the active window is rejected.
//!
//! ## Pixel marshaling
//!
//! [`MagickWand::export_image_pixels`] and
//! [`MagickWand::import_image_pixels`] move flat, channel-interleaved
//! buffers across the FFI boundary as [`PixelSamples`], a tagged union of
//! the six supported element types. Regions and buffer sizes are validated
//! before any native call.
//!
//! ## Example
//!
//! ```no_run
//! use zenwand::{MagickWand, Region, StorageType};
//!
//! zenwand::genesis();
//! {
//!     let mut wand = MagickWand::new()?;
//!     wand.read_image("logo:")?;
//!     wand.scale_image(100, 100)?;
//!     let pixels =
//!         wand.export_image_pixels(Region::new(0, 0, 100, 100), "RGB", StorageType::Double)?;
//!     assert_eq!(pixels.len(), 100 * 100 * 3);
//! }
//! zenwand::terminus();
//! # Ok::<(), zenwand::WandError>(())
//! ```
//!
//! ## Versioning
//!
//! Binds ImageMagick 6 (the `MagickWand` pkg-config package). ImageMagick 7
//! renamed the package and changed several signatures and is not supported.

#![deny(unsafe_op_in_unsafe_fn)]

mod error;
mod genesis;
mod kernel;
mod pixels;
mod queries;
mod sys;
mod types;
mod wand;

// Re-exports
pub use error::{Result, WandError};
pub use genesis::{genesis, is_initialized, live_handle_count, terminus};
pub use kernel::KernelInfo;
pub use pixels::{PixelSamples, Region};
pub use queries::{
    get_resource_limit, quantum_depth, quantum_range, query_configure_option,
    query_configure_options, query_fonts, query_formats, set_resource_limit, version,
};
pub use types::{
    AlphaChannelType, ChannelType, ColorspaceType, CompositeOperator, CompressionType,
    DisposeType, DistortMethod, DitherMethod, EndianType, EvaluateOperator, ExceptionSeverity,
    FilterType, GravityType, ImageLayerMethod, ImageType, InterlaceType, InterpolatePixelMethod,
    MagickFunction, MetricType, MontageMode, MorphologyMethod, NoiseType, OrientationType,
    PreviewType, RenderingIntent, ResolutionType, ResourceType, SparseColorMethod, StatisticType,
    StorageType, VirtualPixelMethod,
};
pub use wand::{
    ChannelFeatures, ChannelStatistics, DrawingWand, MagickWand, PixelIterator, PixelRef,
    PixelWand,
};
