//! Process-wide queries against the native library's registries.

use libc::size_t;
use std::ffi::CStr;

use crate::error::Result;
use crate::sys;
use crate::types::ResourceType;
use crate::wand::{cstring, take_magick_string, take_magick_string_array};

/// Look up a build-time configure option (`"VERSION"`, `"DELEGATES"`, ...).
/// `None` if the option does not exist.
pub fn query_configure_option(option: &str) -> Result<Option<String>> {
    let c_option = cstring(option)?;
    let raw = unsafe { sys::MagickQueryConfigureOption(c_option.as_ptr()) };
    if raw.is_null() {
        return Ok(None);
    }
    Ok(Some(unsafe { take_magick_string(raw) }))
}

/// Configure option names matching a glob pattern (`"*"` for all).
pub fn query_configure_options(pattern: &str) -> Result<Vec<String>> {
    let c_pattern = cstring(pattern)?;
    let mut count: size_t = 0;
    let raw = unsafe { sys::MagickQueryConfigureOptions(c_pattern.as_ptr(), &mut count) };
    Ok(unsafe { take_magick_string_array(raw, count) })
}

/// Font names matching a glob pattern.
pub fn query_fonts(pattern: &str) -> Result<Vec<String>> {
    let c_pattern = cstring(pattern)?;
    let mut count: size_t = 0;
    let raw = unsafe { sys::MagickQueryFonts(c_pattern.as_ptr(), &mut count) };
    Ok(unsafe { take_magick_string_array(raw, count) })
}

/// Supported image format names matching a glob pattern.
pub fn query_formats(pattern: &str) -> Result<Vec<String>> {
    let c_pattern = cstring(pattern)?;
    let mut count: size_t = 0;
    let raw = unsafe { sys::MagickQueryFormats(c_pattern.as_ptr(), &mut count) };
    Ok(unsafe { take_magick_string_array(raw, count) })
}

/// The library's build-time quantum depth: name (e.g. `"Q16"`) and bit depth.
pub fn quantum_depth() -> (String, usize) {
    let mut depth: size_t = 0;
    // Returns a pointer to a static constant; not relinquished.
    let raw = unsafe { sys::MagickGetQuantumDepth(&mut depth) };
    let name = if raw.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned()
    };
    (name, depth)
}

/// The maximum quantum value for the build-time depth (65535 for Q16),
/// with its name string.
pub fn quantum_range() -> (String, usize) {
    let mut range: size_t = 0;
    let raw = unsafe { sys::MagickGetQuantumRange(&mut range) };
    let name = if raw.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned()
    };
    (name, range)
}

/// The native library version: description string and packed number.
pub fn version() -> (String, usize) {
    let mut number: size_t = 0;
    let raw = unsafe { sys::MagickGetVersion(&mut number) };
    let text = if raw.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned()
    };
    (text, number)
}

/// Current process-wide limit for a resource class, in the class's unit.
pub fn get_resource_limit(resource: ResourceType) -> u64 {
    unsafe { sys::MagickGetResourceLimit(resource as libc::c_int) }
}

/// Set a process-wide resource limit. Returns whether the native library
/// accepted the new limit.
pub fn set_resource_limit(resource: ResourceType, limit: u64) -> bool {
    unsafe { sys::MagickSetResourceLimit(resource as libc::c_int, limit) == sys::MAGICK_TRUE }
}
