//! The drawing wand: a vector drawing context rendered onto images.

use std::sync::atomic::{AtomicBool, Ordering};

use libc::c_int;

use super::pixel::PixelWand;
use super::{cstring, take_magick_string};
use crate::error::{Result, WandError};
use crate::genesis::{self, DRAWING_WANDS};
use crate::sys;
use crate::types::ExceptionSeverity;

/// Owns one native drawing wand. Consumed by
/// [`MagickWand::draw_image`](crate::MagickWand::draw_image),
/// [`MagickWand::annotate_image`](crate::MagickWand::annotate_image) and
/// related operations.
pub struct DrawingWand {
    wand: *mut sys::DrawingWand,
    live: AtomicBool,
}

unsafe impl Send for DrawingWand {}

impl DrawingWand {
    pub fn new() -> Result<Self> {
        genesis::ensure_active()?;
        let wand = unsafe { sys::NewDrawingWand() };
        if wand.is_null() {
            return Err(WandError::HandleInvalid);
        }
        DRAWING_WANDS.fetch_add(1, Ordering::SeqCst);
        Ok(Self {
            wand,
            live: AtomicBool::new(true),
        })
    }

    /// Deep-copy the native drawing wand and its accumulated drawing state.
    pub fn try_clone(&self) -> Result<Self> {
        let wand = self.ptr()?;
        let copy = unsafe { sys::CloneDrawingWand(wand) };
        if copy.is_null() {
            return Err(WandError::HandleInvalid);
        }
        DRAWING_WANDS.fetch_add(1, Ordering::SeqCst);
        Ok(Self {
            wand: copy,
            live: AtomicBool::new(true),
        })
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
            && unsafe { sys::IsDrawingWand(self.wand) } == sys::MAGICK_TRUE
    }

    /// Release the native resource. Idempotent.
    pub fn destroy(&self) {
        if self.live.swap(false, Ordering::SeqCst) {
            unsafe { sys::DestroyDrawingWand(self.wand) };
            DRAWING_WANDS.fetch_sub(1, Ordering::SeqCst);
        }
    }

    pub(crate) fn ptr(&self) -> Result<*mut sys::DrawingWand> {
        if self.live.load(Ordering::SeqCst) {
            Ok(self.wand)
        } else {
            Err(WandError::HandleInvalid)
        }
    }

    fn last_error(&self) -> Result<()> {
        let mut code: c_int = 0;
        let raw = unsafe { sys::DrawGetException(self.wand, &mut code) };
        let message = unsafe { take_magick_string(raw) };
        if code == 0 {
            return Ok(());
        }
        unsafe { sys::DrawClearException(self.wand) };
        Err(WandError::NativeOperationFailed {
            severity: ExceptionSeverity::from_code(code),
            code,
            message,
        })
    }

    /// Select the font used for subsequent text operations.
    pub fn set_font(&self, font_name: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_font = cstring(font_name)?;
        unsafe { sys::DrawSetFont(wand, c_font.as_ptr()) };
        self.last_error()
    }

    pub fn set_font_size(&self, pointsize: f64) -> Result<()> {
        unsafe { sys::DrawSetFontSize(self.ptr()?, pointsize) };
        Ok(())
    }

    pub fn set_fill_color(&self, fill: &PixelWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::DrawSetFillColor(wand, fill.ptr()?) };
        Ok(())
    }

    pub fn set_stroke_color(&self, stroke: &PixelWand) -> Result<()> {
        let wand = self.ptr()?;
        unsafe { sys::DrawSetStrokeColor(wand, stroke.ptr()?) };
        Ok(())
    }

    pub fn set_stroke_width(&self, stroke_width: f64) -> Result<()> {
        unsafe { sys::DrawSetStrokeWidth(self.ptr()?, stroke_width) };
        Ok(())
    }

    /// Queue text to be drawn at (x, y), in the current font and fill.
    pub fn annotation(&self, x: f64, y: f64, text: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_text = cstring(text)?;
        unsafe { sys::DrawAnnotation(wand, x, y, c_text.as_ptr() as *const libc::c_uchar) };
        self.last_error()
    }

    pub fn line(&self, sx: f64, sy: f64, ex: f64, ey: f64) -> Result<()> {
        unsafe { sys::DrawLine(self.ptr()?, sx, sy, ex, ey) };
        Ok(())
    }

    pub fn rectangle(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()> {
        unsafe { sys::DrawRectangle(self.ptr()?, x1, y1, x2, y2) };
        Ok(())
    }
}

impl Drop for DrawingWand {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl std::fmt::Debug for DrawingWand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingWand")
            .field("live", &self.live.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
