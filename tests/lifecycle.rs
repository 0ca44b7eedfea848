//! Handle lifetime behavior: liveness, clone independence, dead-handle
//! rejection.

use zenwand::{DrawingWand, MagickWand, PixelWand, WandError};

#[test]
fn new_wand_is_live() {
    zenwand::genesis();
    let wand = MagickWand::new().unwrap();
    assert!(wand.is_live());
}

#[test]
fn destroyed_wand_rejects_operations() {
    zenwand::genesis();
    let mut wand = MagickWand::new().unwrap();
    wand.read_image("logo:").unwrap();
    wand.destroy();

    assert!(!wand.is_live());
    assert!(matches!(
        wand.read_image("logo:"),
        Err(WandError::HandleInvalid)
    ));
    assert!(matches!(wand.get_image_width(), Err(WandError::HandleInvalid)));
    assert!(matches!(wand.try_clone(), Err(WandError::HandleInvalid)));
}

#[test]
fn clone_has_independent_lifetime() {
    zenwand::genesis();
    let mut wand = MagickWand::new().unwrap();
    wand.read_image("logo:").unwrap();

    let clone = wand.try_clone().unwrap();
    assert!(clone.is_live());
    assert_eq!(
        clone.get_image_width().unwrap(),
        wand.get_image_width().unwrap()
    );

    // Destroying the clone must leave the original live and functional.
    clone.destroy();
    assert!(!clone.is_live());
    assert!(wand.is_live());
    wand.scale_image(10, 10).unwrap();
    assert_eq!(wand.get_image_width().unwrap(), 10);
}

#[test]
fn clone_is_a_deep_copy() {
    zenwand::genesis();
    let mut wand = MagickWand::new().unwrap();
    wand.read_image("logo:").unwrap();

    let mut clone = wand.try_clone().unwrap();
    clone.scale_image(32, 32).unwrap();

    // Resizing the clone must not touch the original's pixels.
    assert_eq!(clone.get_image_width().unwrap(), 32);
    assert_ne!(wand.get_image_width().unwrap(), 32);
}

#[test]
fn pixel_wand_lifecycle() {
    zenwand::genesis();
    let pixel = PixelWand::new().unwrap();
    pixel.set_color("red").unwrap();
    assert!((pixel.get_red().unwrap() - 1.0).abs() < 1e-9);
    assert!(pixel.get_green().unwrap().abs() < 1e-9);

    let clone = pixel.try_clone().unwrap();
    clone.set_color("blue").unwrap();
    // Independent native state.
    assert!((pixel.get_red().unwrap() - 1.0).abs() < 1e-9);
    assert!((clone.get_blue().unwrap() - 1.0).abs() < 1e-9);

    pixel.destroy();
    assert!(!pixel.is_live());
    assert!(matches!(pixel.get_red(), Err(WandError::HandleInvalid)));
    assert!(clone.is_live());
}

#[test]
fn drawing_wand_lifecycle() {
    zenwand::genesis();
    let drawing = DrawingWand::new().unwrap();
    drawing.set_font_size(12.0).unwrap();
    drawing.set_stroke_width(2.0).unwrap();

    drawing.destroy();
    drawing.destroy();
    assert!(!drawing.is_live());
    assert!(matches!(
        drawing.set_font_size(14.0),
        Err(WandError::HandleInvalid)
    ));
}

#[test]
fn clear_resets_image_list() {
    zenwand::genesis();
    let mut wand = MagickWand::new().unwrap();
    wand.read_image("logo:").unwrap();
    assert_eq!(wand.get_number_images().unwrap(), 1);

    wand.clear().unwrap();
    assert_eq!(wand.get_number_images().unwrap(), 0);
    assert!(wand.is_live());
}

#[test]
fn delete_image_artifact() {
    zenwand::genesis();
    let mut wand = MagickWand::new().unwrap();
    wand.read_image("logo:").unwrap();
    wand.delete_image_artifact("*").unwrap();
}
