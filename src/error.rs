use crate::types::ExceptionSeverity;

/// Errors from wand operations and pixel marshaling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WandError {
    #[error("operation on a destroyed or uninitialized handle")]
    HandleInvalid,

    #[error("{severity:?} exception {code}: {message}")]
    NativeOperationFailed {
        severity: ExceptionSeverity,
        code: i32,
        message: String,
    },

    #[error("region {width}x{height}{x:+}{y:+} exceeds image extent {image_width}x{image_height}")]
    RegionOutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
        image_width: usize,
        image_height: usize,
    },

    #[error("pixel buffer holds {actual} samples, region needs {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("no native storage type for this buffer element type")]
    UnsupportedStorageType,

    #[error("invalid channel map: {0:?}")]
    InvalidChannelMap(String),

    #[error("invalid kernel geometry: {0:?}")]
    InvalidKernel(String),

    #[error("zero-length input blob")]
    ZeroLengthInput,

    #[error("string parameter contains an interior NUL byte")]
    EmbeddedNul(#[from] std::ffi::NulError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl WandError {
    /// Whether the native library reported this as a fatal exception.
    ///
    /// After a fatal exception the handle may no longer be usable; the
    /// caller decides whether to destroy it.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            WandError::NativeOperationFailed {
                severity: ExceptionSeverity::Fatal,
                ..
            }
        )
    }
}

pub type Result<T> = std::result::Result<T, WandError>;
