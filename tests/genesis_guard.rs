//! Process-lifecycle and handle-accounting checks.
//!
//! Everything lives in one test so genesis/terminus transitions and the
//! process-wide live-handle counter are observed without interference from
//! parallel tests.

use zenwand::{MagickWand, PixelWand, WandError};

#[test]
fn genesis_guard_and_handle_accounting() {
    // Before genesis: handle creation is rejected.
    assert!(matches!(MagickWand::new(), Err(WandError::HandleInvalid)));
    assert!(!zenwand::is_initialized());

    zenwand::genesis();
    zenwand::genesis(); // idempotent
    assert!(zenwand::is_initialized());

    let base = zenwand::live_handle_count();

    // Create/destroy accounting across handle kinds.
    let wand = MagickWand::new().unwrap();
    let pixel = PixelWand::new().unwrap();
    assert_eq!(zenwand::live_handle_count(), base + 2);

    // Clone counts as its own handle.
    let clone = wand.try_clone().unwrap();
    assert_eq!(zenwand::live_handle_count(), base + 3);

    // Destroy is idempotent: the second call must not double-free or
    // double-decrement.
    clone.destroy();
    clone.destroy();
    assert_eq!(zenwand::live_handle_count(), base + 2);
    assert!(!clone.is_live());

    // Drop releases exactly once, even after an explicit destroy.
    drop(clone);
    assert_eq!(zenwand::live_handle_count(), base + 2);

    pixel.destroy();
    drop(wand);
    assert_eq!(zenwand::live_handle_count(), base);

    // After terminus: creation is rejected again.
    zenwand::terminus();
    zenwand::terminus(); // idempotent
    assert!(!zenwand::is_initialized());
    assert!(matches!(MagickWand::new(), Err(WandError::HandleInvalid)));
}
