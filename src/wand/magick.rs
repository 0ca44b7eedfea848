//! The image-list wand: lifecycle, exception plumbing, and I/O.

use std::fs::File;
use std::sync::atomic::{AtomicBool, Ordering};

use libc::{c_int, c_void, size_t};

use super::{cstring, take_magick_string, with_c_file};
use crate::error::{Result, WandError};
use crate::genesis::{self, MAGICK_WANDS};
use crate::sys;
use crate::types::ExceptionSeverity;

/// Owns one native magick wand: an image list plus per-image state.
///
/// Not `Sync`: concurrent operations against one handle must be externally
/// synchronized (one mutex per handle, or confine the handle to a thread).
pub struct MagickWand {
    wand: *mut sys::MagickWand,
    live: AtomicBool,
}

// A wand may move between threads; the native library only requires that a
// given wand is used by one thread of control at a time.
unsafe impl Send for MagickWand {}

impl MagickWand {
    /// Allocate a fresh wand with an empty image list.
    ///
    /// Fails with [`WandError::HandleInvalid`] before
    /// [`genesis`](crate::genesis) or after [`terminus`](crate::terminus).
    pub fn new() -> Result<Self> {
        genesis::ensure_active()?;
        let wand = unsafe { sys::NewMagickWand() };
        if wand.is_null() {
            return Err(WandError::HandleInvalid);
        }
        MAGICK_WANDS.fetch_add(1, Ordering::SeqCst);
        Ok(Self {
            wand,
            live: AtomicBool::new(true),
        })
    }

    /// Deep-copy the native wand, images included. The copy has its own
    /// independent lifetime; destroying one side never affects the other.
    pub fn try_clone(&self) -> Result<Self> {
        let wand = self.ptr()?;
        let copy = unsafe { sys::CloneMagickWand(wand) };
        Self::adopt(copy).ok_or(WandError::HandleInvalid)
    }

    /// Whether the native resource has not yet been released.
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
            && unsafe { sys::IsMagickWand(self.wand) } == sys::MAGICK_TRUE
    }

    /// Release the native resource. Idempotent: the first call releases,
    /// later calls (and `Drop`) are no-ops.
    pub fn destroy(&self) {
        if self.live.swap(false, Ordering::SeqCst) {
            unsafe { sys::DestroyMagickWand(self.wand) };
            MAGICK_WANDS.fetch_sub(1, Ordering::SeqCst);
        }
    }

    /// Remove all images and reset the wand to its freshly-created state.
    pub fn clear(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::ClearMagickWand(wand) };
        Ok(())
    }

    /// Take ownership of a native wand pointer returned by the library.
    /// Returns `None` for NULL so callers can surface the pending exception.
    pub(crate) fn adopt(wand: *mut sys::MagickWand) -> Option<Self> {
        if wand.is_null() {
            return None;
        }
        MAGICK_WANDS.fetch_add(1, Ordering::SeqCst);
        Some(Self {
            wand,
            live: AtomicBool::new(true),
        })
    }

    /// The raw pointer, or `HandleInvalid` once released.
    pub(crate) fn ptr(&self) -> Result<*mut sys::MagickWand> {
        if self.live.load(Ordering::SeqCst) {
            Ok(self.wand)
        } else {
            Err(WandError::HandleInvalid)
        }
    }

    /// Query the wand's exception state; if one is pending, clear it and
    /// return it as an error. Every delegated operation funnels through
    /// here after its native call, so warnings surface as errors too.
    pub(crate) fn last_error(&self) -> Result<()> {
        let mut code: c_int = 0;
        let raw = unsafe { sys::MagickGetException(self.wand, &mut code) };
        let message = unsafe { take_magick_string(raw) };
        if code == 0 {
            return Ok(());
        }
        unsafe { sys::MagickClearException(self.wand) };
        let severity = ExceptionSeverity::from_code(code);
        if severity == ExceptionSeverity::Fatal {
            log::warn!("fatal wand exception {code}: {message}");
        }
        Err(WandError::NativeOperationFailed {
            severity,
            code,
            message,
        })
    }

    /// Error for a native call that returned a NULL wand: the pending
    /// exception if one is set, `HandleInvalid` otherwise.
    pub(crate) fn null_wand_error(&self) -> WandError {
        match self.last_error() {
            Err(e) => e,
            Ok(()) => WandError::HandleInvalid,
        }
    }

    /// Wrap a native call result that should be a new wand.
    pub(crate) fn wrap_new(&self, wand: *mut sys::MagickWand) -> Result<MagickWand> {
        MagickWand::adopt(wand).ok_or_else(|| self.null_wand_error())
    }

    // --- Reading ---

    /// Read an image (or image sequence) from a file path or pseudo-format
    /// such as `logo:` or `xc:white`.
    pub fn read_image(&mut self, filename: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_filename = cstring(filename)?;
        unsafe { sys::MagickReadImage(wand, c_filename.as_ptr()) };
        self.last_error()
    }

    /// Read an image from an in-memory encoded blob. Format detection is
    /// the native library's.
    pub fn read_image_blob(&mut self, blob: &[u8]) -> Result<()> {
        if blob.is_empty() {
            return Err(WandError::ZeroLengthInput);
        }
        let wand = self.ptr()?;
        unsafe { sys::MagickReadImageBlob(wand, blob.as_ptr() as *const c_void, blob.len()) };
        self.last_error()
    }

    /// Read an image from an open file.
    pub fn read_image_file(&mut self, file: &File) -> Result<()> {
        let wand = self.ptr()?;
        with_c_file(file, c"rb", |stream| {
            unsafe { sys::MagickReadImageFile(wand, stream) };
            self.last_error()
        })?
    }

    /// Read only the image metadata (dimensions, format) from a file path.
    pub fn ping_image(&mut self, filename: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_filename = cstring(filename)?;
        unsafe { sys::MagickPingImage(wand, c_filename.as_ptr()) };
        self.last_error()
    }

    /// Read only the image metadata from an open file.
    pub fn ping_image_file(&mut self, file: &File) -> Result<()> {
        let wand = self.ptr()?;
        with_c_file(file, c"rb", |stream| {
            unsafe { sys::MagickPingImageFile(wand, stream) };
            self.last_error()
        })?
    }

    // --- Writing ---

    /// Write the current image to a file path; the extension (or a prior
    /// `set_image_format`) selects the encoder.
    pub fn write_image(&self, filename: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_filename = cstring(filename)?;
        unsafe { sys::MagickWriteImage(wand, c_filename.as_ptr()) };
        self.last_error()
    }

    /// Write the whole image sequence. `adjoin` joins all images into one
    /// file when the format supports it.
    pub fn write_images(&self, filename: &str, adjoin: bool) -> Result<()> {
        let wand = self.ptr()?;
        let c_filename = cstring(filename)?;
        unsafe {
            sys::MagickWriteImages(
                wand,
                c_filename.as_ptr(),
                if adjoin { sys::MAGICK_TRUE } else { sys::MAGICK_FALSE },
            )
        };
        self.last_error()
    }

    /// Write the current image to an open file.
    pub fn write_image_file(&self, file: &File) -> Result<()> {
        let wand = self.ptr()?;
        with_c_file(file, c"wb", |stream| {
            unsafe { sys::MagickWriteImageFile(wand, stream) };
            self.last_error()
        })?
    }

    /// Write the whole image sequence to an open file.
    pub fn write_images_file(&self, file: &File) -> Result<()> {
        let wand = self.ptr()?;
        with_c_file(file, c"wb", |stream| {
            unsafe { sys::MagickWriteImagesFile(wand, stream) };
            self.last_error()
        })?
    }

    /// Encode the current image to an in-memory blob in the image's format
    /// (use `set_image_format` to change it first).
    pub fn get_image_blob(&self) -> Result<Vec<u8>> {
        let wand = self.ptr()?;
        let mut length: size_t = 0;
        let blob = unsafe { sys::MagickGetImageBlob(wand, &mut length) };
        if blob.is_null() {
            return Err(self.null_wand_error());
        }
        let bytes = unsafe { std::slice::from_raw_parts(blob, length) }.to_vec();
        unsafe { sys::MagickRelinquishMemory(blob as *mut c_void) };
        Ok(bytes)
    }

    /// Encode the whole image sequence to a single in-memory blob. Formats
    /// that cannot hold multiple images yield just the first.
    pub fn get_images_blob(&self) -> Result<Vec<u8>> {
        let wand = self.ptr()?;
        let mut length: size_t = 0;
        let blob = unsafe { sys::MagickGetImagesBlob(wand, &mut length) };
        if blob.is_null() {
            return Err(self.null_wand_error());
        }
        let bytes = unsafe { std::slice::from_raw_parts(blob, length) }.to_vec();
        unsafe { sys::MagickRelinquishMemory(blob as *mut c_void) };
        Ok(bytes)
    }

    // --- Image list traversal ---

    /// Position the iterator before the first image, so the next
    /// `next_image` lands on it and sequence-wide operations see the
    /// whole list.
    pub fn reset_iterator(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickResetIterator(wand) };
        Ok(())
    }

    /// Make the first image in the list the current image.
    pub fn set_first_iterator(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetFirstIterator(wand) };
        Ok(())
    }

    /// Make the last image in the list the current image.
    pub fn set_last_iterator(&mut self) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::MagickSetLastIterator(wand) };
        Ok(())
    }

    /// Advance to the next image; `false` when the end of the list is
    /// reached.
    pub fn next_image(&mut self) -> Result<bool> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickNextImage(wand) } == sys::MAGICK_TRUE)
    }

    /// Step back to the previous image; `false` at the start of the list.
    pub fn previous_image(&mut self) -> Result<bool> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickPreviousImage(wand) } == sys::MAGICK_TRUE)
    }

    pub fn has_next_image(&self) -> Result<bool> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickHasNextImage(wand) } == sys::MAGICK_TRUE)
    }

    pub fn has_previous_image(&self) -> Result<bool> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickHasPreviousImage(wand) } == sys::MAGICK_TRUE)
    }

    pub fn get_number_images(&self) -> Result<usize> {
        let wand = self.ptr()?;
        Ok(unsafe { sys::MagickGetNumberImages(wand) })
    }

    /// Delete image artifacts matching a glob pattern (`"*"` for all).
    pub fn delete_image_artifact(&mut self, artifact: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_artifact = cstring(artifact)?;
        unsafe { sys::MagickDeleteImageArtifact(wand, c_artifact.as_ptr()) };
        self.last_error()
    }
}

impl Drop for MagickWand {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl std::fmt::Debug for MagickWand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MagickWand")
            .field("live", &self.live.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
