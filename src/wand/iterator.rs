//! The pixel iterator: row-wise access to an image's pixels.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};

use libc::{c_int, size_t};

use super::magick::MagickWand;
use super::take_magick_string;
use crate::error::{Result, WandError};
use crate::genesis::PIXEL_ITERATORS;
use crate::pixels::Region;
use crate::sys;
use crate::types::ExceptionSeverity;

/// Owns one native pixel iterator over a wand's current image.
///
/// The iterator borrows the source [`MagickWand`] for its whole lifetime,
/// so the image cannot be destroyed out from under it.
pub struct PixelIterator<'a> {
    iterator: *mut sys::PixelIterator,
    live: AtomicBool,
    _wand: PhantomData<&'a MagickWand>,
}

unsafe impl Send for PixelIterator<'_> {}

/// One pixel inside a row handed out by [`PixelIterator::next_row`].
///
/// Non-owning: the underlying pixel wand belongs to the iterator and is
/// recycled on the next row fetch. Writes become visible in the image only
/// after [`PixelIterator::sync`].
pub struct PixelRef<'a> {
    wand: *mut sys::PixelWand,
    _row: PhantomData<&'a ()>,
}

impl PixelRef<'_> {
    pub fn get_red(&self) -> f64 {
        unsafe { sys::PixelGetRed(self.wand) }
    }

    pub fn get_green(&self) -> f64 {
        unsafe { sys::PixelGetGreen(self.wand) }
    }

    pub fn get_blue(&self) -> f64 {
        unsafe { sys::PixelGetBlue(self.wand) }
    }

    pub fn get_alpha(&self) -> f64 {
        unsafe { sys::PixelGetAlpha(self.wand) }
    }

    pub fn set_red(&self, red: f64) {
        unsafe { sys::PixelSetRed(self.wand, red) }
    }

    pub fn set_green(&self, green: f64) {
        unsafe { sys::PixelSetGreen(self.wand, green) }
    }

    pub fn set_blue(&self, blue: f64) {
        unsafe { sys::PixelSetBlue(self.wand, blue) }
    }

    pub fn set_alpha(&self, alpha: f64) {
        unsafe { sys::PixelSetAlpha(self.wand, alpha) }
    }
}

impl<'a> PixelIterator<'a> {
    /// Iterate over every pixel of the wand's current image.
    pub fn new(wand: &'a MagickWand) -> Result<Self> {
        let iterator = unsafe { sys::NewPixelIterator(wand.ptr()?) };
        Self::adopt(iterator).ok_or_else(|| wand.null_wand_error())
    }

    /// Iterate over a sub-region of the wand's current image.
    pub fn new_region(wand: &'a MagickWand, region: Region) -> Result<Self> {
        let width = wand.get_image_width()?;
        let height = wand.get_image_height()?;
        region.validate(width, height)?;
        let iterator = unsafe {
            sys::NewPixelRegionIterator(
                wand.ptr()?,
                region.x,
                region.y,
                region.width,
                region.height,
            )
        };
        Self::adopt(iterator).ok_or_else(|| wand.null_wand_error())
    }

    fn adopt(iterator: *mut sys::PixelIterator) -> Option<Self> {
        if iterator.is_null() {
            return None;
        }
        PIXEL_ITERATORS.fetch_add(1, Ordering::SeqCst);
        Some(Self {
            iterator,
            live: AtomicBool::new(true),
            _wand: PhantomData,
        })
    }

    fn ptr(&self) -> Result<*mut sys::PixelIterator> {
        if self.live.load(Ordering::SeqCst) {
            Ok(self.iterator)
        } else {
            Err(WandError::HandleInvalid)
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
            && unsafe { sys::IsPixelIterator(self.iterator) } == sys::MAGICK_TRUE
    }

    /// Release the native resource. Idempotent.
    pub fn destroy(&self) {
        if self.live.swap(false, Ordering::SeqCst) {
            unsafe { sys::DestroyPixelIterator(self.iterator) };
            PIXEL_ITERATORS.fetch_sub(1, Ordering::SeqCst);
        }
    }

    fn last_error(&self) -> Result<()> {
        let mut code: c_int = 0;
        let raw = unsafe { sys::PixelGetIteratorException(self.iterator, &mut code) };
        let message = unsafe { take_magick_string(raw) };
        if code == 0 {
            return Ok(());
        }
        unsafe { sys::PixelClearIteratorException(self.iterator) };
        Err(WandError::NativeOperationFailed {
            severity: ExceptionSeverity::from_code(code),
            code,
            message,
        })
    }

    /// Fetch the next row of pixels; `None` past the last row. The
    /// returned refs are recycled by the following `next_row` call.
    pub fn next_row(&self) -> Result<Option<Vec<PixelRef<'_>>>> {
        let iterator = self.ptr()?;
        let mut count: size_t = 0;
        let row = unsafe { sys::PixelGetNextIteratorRow(iterator, &mut count) };
        if row.is_null() {
            // NULL signals either end-of-rows or a pending exception.
            self.last_error()?;
            return Ok(None);
        }
        let mut pixels = Vec::with_capacity(count);
        for i in 0..count {
            pixels.push(PixelRef {
                wand: unsafe { *row.add(i) },
                _row: PhantomData,
            });
        }
        Ok(Some(pixels))
    }

    /// Seek to a specific row.
    pub fn set_row(&self, row: isize) -> Result<()> {
        let iterator = self.ptr()?;
        unsafe { sys::PixelSetIteratorRow(iterator, row) };
        self.last_error()
    }

    /// Write any modified pixel rows back into the image.
    pub fn sync(&self) -> Result<()> {
        let iterator = self.ptr()?;
        unsafe { sys::PixelSyncIterator(iterator) };
        self.last_error()
    }

    /// Rewind to the first row.
    pub fn reset(&self) -> Result<()> {
        let iterator = self.ptr()?;
        unsafe { sys::PixelResetIterator(iterator) };
        Ok(())
    }
}

impl Drop for PixelIterator<'_> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl std::fmt::Debug for PixelIterator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelIterator")
            .field("live", &self.live.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
