//! The pixel wand: a single color value.

use std::sync::atomic::{AtomicBool, Ordering};

use libc::c_int;

use super::{cstring, take_magick_string};
use crate::error::{Result, WandError};
use crate::genesis::{self, PIXEL_WANDS};
use crate::sys;
use crate::types::ExceptionSeverity;

/// Owns one native pixel wand. Used as a parameter object for color-taking
/// image operations and as the result of color queries.
///
/// Channel values are normalized `f64` in `[0.0, 1.0]` regardless of the
/// native library's build-time quantum depth.
pub struct PixelWand {
    wand: *mut sys::PixelWand,
    live: AtomicBool,
}

unsafe impl Send for PixelWand {}

impl PixelWand {
    pub fn new() -> Result<Self> {
        genesis::ensure_active()?;
        let wand = unsafe { sys::NewPixelWand() };
        if wand.is_null() {
            return Err(WandError::HandleInvalid);
        }
        PIXEL_WANDS.fetch_add(1, Ordering::SeqCst);
        Ok(Self {
            wand,
            live: AtomicBool::new(true),
        })
    }

    /// Deep-copy the native pixel wand.
    pub fn try_clone(&self) -> Result<Self> {
        let wand = self.ptr()?;
        let copy = unsafe { sys::ClonePixelWand(wand) };
        Self::adopt(copy).ok_or(WandError::HandleInvalid)
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
            && unsafe { sys::IsPixelWand(self.wand) } == sys::MAGICK_TRUE
    }

    /// Release the native resource. Idempotent.
    pub fn destroy(&self) {
        if self.live.swap(false, Ordering::SeqCst) {
            unsafe { sys::DestroyPixelWand(self.wand) };
            PIXEL_WANDS.fetch_sub(1, Ordering::SeqCst);
        }
    }

    pub(crate) fn adopt(wand: *mut sys::PixelWand) -> Option<Self> {
        if wand.is_null() {
            return None;
        }
        PIXEL_WANDS.fetch_add(1, Ordering::SeqCst);
        Some(Self {
            wand,
            live: AtomicBool::new(true),
        })
    }

    pub(crate) fn ptr(&self) -> Result<*mut sys::PixelWand> {
        if self.live.load(Ordering::SeqCst) {
            Ok(self.wand)
        } else {
            Err(WandError::HandleInvalid)
        }
    }

    fn last_error(&self) -> Result<()> {
        let mut code: c_int = 0;
        let raw = unsafe { sys::PixelGetException(self.wand, &mut code) };
        let message = unsafe { take_magick_string(raw) };
        if code == 0 {
            return Ok(());
        }
        unsafe { sys::PixelClearException(self.wand) };
        Err(WandError::NativeOperationFailed {
            severity: ExceptionSeverity::from_code(code),
            code,
            message,
        })
    }

    /// Set the color from a name or specification the native parser
    /// accepts: `"blue"`, `"#0000ff"`, `"rgb(0,0,255)"`, ...
    pub fn set_color(&self, color: &str) -> Result<()> {
        let wand = self.ptr()?;
        let c_color = cstring(color)?;
        unsafe { sys::PixelSetColor(wand, c_color.as_ptr()) };
        self.last_error()
    }

    /// The color as a string, e.g. `"srgb(255,0,0)"`.
    pub fn get_color_as_string(&self) -> Result<String> {
        let wand = self.ptr()?;
        let raw = unsafe { sys::PixelGetColorAsString(wand) };
        Ok(unsafe { take_magick_string(raw) })
    }

    /// The color as a normalized string, e.g. `"srgb(1,0,0)"`.
    pub fn get_color_as_normalized_string(&self) -> Result<String> {
        let wand = self.ptr()?;
        let raw = unsafe { sys::PixelGetColorAsNormalizedString(wand) };
        Ok(unsafe { take_magick_string(raw) })
    }

    pub fn get_red(&self) -> Result<f64> {
        Ok(unsafe { sys::PixelGetRed(self.ptr()?) })
    }

    pub fn get_green(&self) -> Result<f64> {
        Ok(unsafe { sys::PixelGetGreen(self.ptr()?) })
    }

    pub fn get_blue(&self) -> Result<f64> {
        Ok(unsafe { sys::PixelGetBlue(self.ptr()?) })
    }

    pub fn get_alpha(&self) -> Result<f64> {
        Ok(unsafe { sys::PixelGetAlpha(self.ptr()?) })
    }

    pub fn set_red(&self, red: f64) -> Result<()> {
        unsafe { sys::PixelSetRed(self.ptr()?, red) };
        Ok(())
    }

    pub fn set_green(&self, green: f64) -> Result<()> {
        unsafe { sys::PixelSetGreen(self.ptr()?, green) };
        Ok(())
    }

    pub fn set_blue(&self, blue: f64) -> Result<()> {
        unsafe { sys::PixelSetBlue(self.ptr()?, blue) };
        Ok(())
    }

    pub fn set_alpha(&self, alpha: f64) -> Result<()> {
        unsafe { sys::PixelSetAlpha(self.ptr()?, alpha) };
        Ok(())
    }
}

impl Drop for PixelWand {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl std::fmt::Debug for PixelWand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelWand")
            .field("live", &self.live.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
