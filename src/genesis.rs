//! Process-wide library state.
//!
//! The native library keeps global state (format registry, security policy,
//! resource limits) that must be set up once per process before any wand is
//! created and torn down once after the last wand is destroyed. [`genesis`]
//! and [`terminus`] wrap that pair behind an idempotent atomic guard; handle
//! constructors call [`ensure_active`] and fail with
//! [`WandError::HandleInvalid`](crate::WandError::HandleInvalid) outside the
//! active window.

use std::sync::atomic::{AtomicI64, AtomicU8, Ordering};

use crate::error::{Result, WandError};
use crate::sys;

const UNINITIALIZED: u8 = 0;
const ACTIVE: u8 = 1;
const TERMINATED: u8 = 2;

static STATE: AtomicU8 = AtomicU8::new(UNINITIALIZED);

// Live-handle counters, one per handle kind. Diagnostic only: tests assert
// that everything created was destroyed.
pub(crate) static MAGICK_WANDS: AtomicI64 = AtomicI64::new(0);
pub(crate) static PIXEL_WANDS: AtomicI64 = AtomicI64::new(0);
pub(crate) static DRAWING_WANDS: AtomicI64 = AtomicI64::new(0);
pub(crate) static PIXEL_ITERATORS: AtomicI64 = AtomicI64::new(0);

/// Initialize the native library. Must be called before the first handle is
/// created. Idempotent while active; calling again after [`terminus`]
/// re-instantiates the native library (the native pair supports this).
pub fn genesis() {
    let prev = STATE.swap(ACTIVE, Ordering::SeqCst);
    if prev != ACTIVE {
        log::debug!("MagickWandGenesis");
        unsafe { sys::MagickWandGenesis() };
    }
}

/// Tear down the native library. Must be called after the last handle is
/// destroyed; any handle still live afterwards fails all operations.
/// Idempotent.
pub fn terminus() {
    let prev = STATE.swap(TERMINATED, Ordering::SeqCst);
    if prev == ACTIVE {
        let leaked = live_handle_count();
        if leaked != 0 {
            log::warn!("MagickWandTerminus with {leaked} live handle(s)");
        } else {
            log::debug!("MagickWandTerminus");
        }
        unsafe { sys::MagickWandTerminus() };
    }
}

/// Whether [`genesis`] has run and [`terminus`] has not.
pub fn is_initialized() -> bool {
    STATE.load(Ordering::SeqCst) == ACTIVE
}

/// Total live handles across all handle kinds.
pub fn live_handle_count() -> i64 {
    MAGICK_WANDS.load(Ordering::SeqCst)
        + PIXEL_WANDS.load(Ordering::SeqCst)
        + DRAWING_WANDS.load(Ordering::SeqCst)
        + PIXEL_ITERATORS.load(Ordering::SeqCst)
}

pub(crate) fn ensure_active() -> Result<()> {
    if is_initialized() {
        Ok(())
    } else {
        Err(WandError::HandleInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero() {
        // Other tests create handles, but the counters must never go
        // negative; a raw load here at least pins the invariant's type.
        assert!(live_handle_count() >= 0);
    }
}
