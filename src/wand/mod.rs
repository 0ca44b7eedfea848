//! Handle wrappers for the four native wand kinds.
//!
//! Each wrapper owns exactly one opaque native handle. The native resource
//! is released exactly once: `destroy()` and `Drop` share an atomic
//! checked-and-set liveness flag, so explicit teardown, double-destroy and
//! drop-after-destroy are all safe. Operations on a released handle fail
//! with [`WandError::HandleInvalid`](crate::WandError::HandleInvalid).

mod drawing;
mod iterator;
mod magick;
mod pixel;

mod image;

pub use drawing::DrawingWand;
pub use image::{ChannelFeatures, ChannelStatistics};
pub use iterator::{PixelIterator, PixelRef};
pub use magick::MagickWand;
pub use pixel::PixelWand;

use std::ffi::{CStr, CString};
use std::fs::File;
use std::os::fd::AsRawFd;

use libc::{c_char, c_void, size_t};

use crate::error::Result;
use crate::sys;

/// Convert a `&str` parameter to a NUL-terminated C string. The returned
/// `CString` lives only for the duration of the native call.
pub(crate) fn cstring(s: &str) -> Result<CString> {
    Ok(CString::new(s)?)
}

/// Copy a library-allocated C string and hand the allocation back to the
/// library. A NULL pointer becomes an empty string.
pub(crate) unsafe fn take_magick_string(ptr: *mut c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    let s = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
    unsafe { sys::MagickRelinquishMemory(ptr as *mut c_void) };
    s
}

/// Copy a library-allocated array of C strings, relinquishing each entry
/// and then the array itself.
pub(crate) unsafe fn take_magick_string_array(
    ptr: *mut *mut c_char,
    count: size_t,
) -> Vec<String> {
    if ptr.is_null() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let entry = unsafe { *ptr.add(i) };
        out.push(unsafe { take_magick_string(entry) });
    }
    unsafe { sys::MagickRelinquishMemory(ptr as *mut c_void) };
    out
}

/// Run `f` with a `FILE*` view of an open file descriptor.
///
/// The descriptor is duplicated first so that closing the C stream does not
/// close the caller's `File`; the stream is flushed and closed before
/// returning regardless of what `f` does.
pub(crate) fn with_c_file<R>(
    file: &File,
    mode: &CStr,
    f: impl FnOnce(*mut libc::FILE) -> R,
) -> Result<R> {
    let fd = unsafe { libc::dup(file.as_raw_fd()) };
    if fd < 0 {
        return Err(std::io::Error::last_os_error().into());
    }
    let stream = unsafe { libc::fdopen(fd, mode.as_ptr()) };
    if stream.is_null() {
        let err = std::io::Error::last_os_error();
        unsafe { libc::close(fd) };
        return Err(err.into());
    }
    let result = f(stream);
    unsafe {
        libc::fflush(stream);
        libc::fclose(stream);
    }
    Ok(result)
}
