//! Convolution/morphology kernels.

use crate::error::{Result, WandError};
use crate::sys;
use crate::wand::cstring;

/// An owned convolution or morphology kernel, parsed from a kernel
/// geometry string such as `"3x3: -1,-1,-1 -1,8,-1 -1,-1,-1"` or a named
/// built-in like `"Octagon:3"`.
pub struct KernelInfo {
    kernel: *mut sys::KernelInfo,
}

unsafe impl Send for KernelInfo {}

impl KernelInfo {
    /// Parse a kernel geometry string.
    pub fn from_string(geometry: &str) -> Result<Self> {
        let c_geometry = cstring(geometry)?;
        let kernel = unsafe { sys::AcquireKernelInfo(c_geometry.as_ptr()) };
        if kernel.is_null() {
            return Err(WandError::InvalidKernel(geometry.to_owned()));
        }
        Ok(Self { kernel })
    }

    pub(crate) fn ptr(&self) -> *const sys::KernelInfo {
        self.kernel
    }
}

impl Drop for KernelInfo {
    fn drop(&mut self) {
        unsafe { sys::DestroyKernelInfo(self.kernel) };
    }
}

impl std::fmt::Debug for KernelInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KernelInfo").finish_non_exhaustive()
    }
}
