//! Pixel marshaling: export/import validation, storage tags, round-trips.

use zenwand::{MagickWand, PixelSamples, PixelWand, Region, StorageType, WandError};

fn logo_100x100() -> MagickWand {
    zenwand::genesis();
    let mut wand = MagickWand::new().unwrap();
    wand.read_image("logo:").unwrap();
    wand.scale_image(100, 100).unwrap();
    wand
}

#[test]
fn export_region_and_map_grid() {
    let wand = logo_100x100();

    // (x, y, w, h, map, storage, expect_error)
    let cases: &[(isize, isize, usize, usize, &str, StorageType, bool)] = &[
        (0, 0, 100, 100, "RGB", StorageType::Float, false),
        (0, 0, 100, 100, "RGBA", StorageType::Double, false),
        (0, 0, 100, 100, "R", StorageType::Float, false),
        (0, 0, 100, 100, "GB", StorageType::Float, false),
        (0, 1, 100, 1, "RGB", StorageType::Double, false),
        (0, 0, 100, 0, "RGB", StorageType::Double, true),
        (0, 0, 0, 100, "RGB", StorageType::Double, true),
        (0, 0, 0, 0, "RGB", StorageType::Double, true),
        (101, 0, 100, 100, "RGB", StorageType::Double, true),
        (0, 101, 100, 100, "RGB", StorageType::Double, true),
        (0, 101, 100, 1, "RGB", StorageType::Double, true),
    ];

    for (i, &(x, y, w, h, map, storage, expect_error)) in cases.iter().enumerate() {
        let result = wand.export_image_pixels(Region::new(x, y, w, h), map, storage);
        if expect_error {
            assert!(
                matches!(&result, Err(WandError::RegionOutOfBounds { .. })),
                "case #{i}: expected RegionOutOfBounds, got {result:?}"
            );
            continue;
        }
        let samples = result.unwrap_or_else(|e| panic!("case #{i}: {e}"));
        assert_eq!(samples.storage_type(), storage, "case #{i}");
        assert_eq!(samples.len(), w * h * map.len(), "case #{i}");
    }
}

#[test]
fn export_double_is_normalized() {
    let wand = logo_100x100();
    let samples = wand
        .export_image_pixels(Region::new(0, 0, 100, 100), "RGB", StorageType::Double)
        .unwrap();
    let PixelSamples::F64(values) = samples else {
        panic!("expected F64 samples");
    };
    assert_eq!(values.len(), 100 * 100 * 3);
    assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
}

#[test]
fn export_rejects_bad_channel_map() {
    let wand = logo_100x100();
    let region = Region::new(0, 0, 10, 10);
    assert!(matches!(
        wand.export_image_pixels(region, "", StorageType::Char),
        Err(WandError::InvalidChannelMap(_))
    ));
    assert!(matches!(
        wand.export_image_pixels(region, "RGZ", StorageType::Char),
        Err(WandError::InvalidChannelMap(_))
    ));
}

#[test]
fn export_rejects_quantum_storage() {
    let wand = logo_100x100();
    assert!(matches!(
        wand.export_image_pixels(Region::new(0, 0, 10, 10), "RGB", StorageType::Quantum),
        Err(WandError::UnsupportedStorageType)
    ));
}

#[test]
fn import_rejects_size_mismatch() {
    zenwand::genesis();
    let mut wand = MagickWand::new().unwrap();
    let white = PixelWand::new().unwrap();
    white.set_color("white").unwrap();
    wand.new_image(8, 8, &white).unwrap();

    // 8*8*3 = 192 samples needed; hand it 10.
    let result = wand.import_image_pixels(
        Region::new(0, 0, 8, 8),
        "RGB",
        &PixelSamples::U8(vec![0; 10]),
    );
    assert!(matches!(
        result,
        Err(WandError::BufferSizeMismatch {
            expected: 192,
            actual: 10
        })
    ));
}

#[test]
fn export_import_round_trip_u8() {
    zenwand::genesis();

    // Checkerboard test pattern.
    let (w, h) = (4usize, 4usize);
    let mut pattern = vec![0u8; w * h * 3];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 3;
            if (x + y) % 2 == 0 {
                pattern[off] = 255;
                pattern[off + 2] = 128;
            } else {
                pattern[off + 1] = 200;
                pattern[off + 2] = 50;
            }
        }
    }

    let mut wand = MagickWand::new().unwrap();
    let white = PixelWand::new().unwrap();
    white.set_color("white").unwrap();
    wand.new_image(w, h, &white).unwrap();
    wand.import_image_pixels(
        Region::new(0, 0, w, h),
        "RGB",
        &PixelSamples::U8(pattern.clone()),
    )
    .unwrap();

    let exported = wand
        .export_image_pixels(Region::new(0, 0, w, h), "RGB", StorageType::Char)
        .unwrap();
    assert_eq!(exported, PixelSamples::U8(pattern.clone()));

    // Import into an equivalently-sized fresh image and export again:
    // integer storage round-trips exactly.
    let mut fresh = MagickWand::new().unwrap();
    fresh.new_image(w, h, &white).unwrap();
    fresh
        .import_image_pixels(Region::new(0, 0, w, h), "RGB", &exported)
        .unwrap();
    let again = fresh
        .export_image_pixels(Region::new(0, 0, w, h), "RGB", StorageType::Char)
        .unwrap();
    assert_eq!(again, PixelSamples::U8(pattern));
}

#[test]
fn export_import_round_trip_f64() {
    let wand = logo_100x100();
    let exported = wand
        .export_image_pixels(Region::new(0, 0, 100, 100), "RGB", StorageType::Double)
        .unwrap();

    zenwand::genesis();
    let white = PixelWand::new().unwrap();
    white.set_color("white").unwrap();
    let mut fresh = MagickWand::new().unwrap();
    fresh.new_image(100, 100, &white).unwrap();
    fresh
        .import_image_pixels(Region::new(0, 0, 100, 100), "RGB", &exported)
        .unwrap();

    let again = fresh
        .export_image_pixels(Region::new(0, 0, 100, 100), "RGB", StorageType::Double)
        .unwrap();
    let (PixelSamples::F64(a), PixelSamples::F64(b)) = (&exported, &again) else {
        panic!("expected F64 samples");
    };
    // Normalized doubles survive a quantum round-trip within one quantum
    // step (1/65535 for Q16 builds; 1/255 is a safe bound for any build).
    assert!(
        a.iter()
            .zip(b)
            .all(|(x, y)| (x - y).abs() <= 1.0 / 255.0 + 1e-9)
    );
}

#[test]
fn constitute_image_from_samples() {
    zenwand::genesis();
    let mut wand = MagickWand::new().unwrap();
    let pixels = PixelSamples::I16(vec![0; 6 * 5 * 3]);
    wand.constitute_image(6, 5, "RGB", &pixels).unwrap();
    assert_eq!(wand.get_image_width().unwrap(), 6);
    assert_eq!(wand.get_image_height().unwrap(), 5);

    // Length must match columns * rows * channels.
    let short = PixelSamples::I16(vec![0; 7]);
    assert!(matches!(
        wand.constitute_image(6, 5, "RGB", &short),
        Err(WandError::BufferSizeMismatch { .. })
    ));
}

#[test]
fn read_image_blob_rejects_empty_input() {
    zenwand::genesis();
    let mut wand = MagickWand::new().unwrap();
    assert!(matches!(
        wand.read_image_blob(&[]),
        Err(WandError::ZeroLengthInput)
    ));

    // And a valid blob round-trips through the codec layer.
    wand.read_image("logo:").unwrap();
    let blob = wand.get_image_blob().unwrap();
    assert!(!blob.is_empty());
    let mut second = MagickWand::new().unwrap();
    second.read_image_blob(&blob).unwrap();
    assert_eq!(
        second.get_image_width().unwrap(),
        wand.get_image_width().unwrap()
    );
}

#[test]
fn import_rejects_out_of_bounds_region() {
    zenwand::genesis();
    let mut wand = MagickWand::new().unwrap();
    let white = PixelWand::new().unwrap();
    white.set_color("white").unwrap();
    wand.new_image(8, 8, &white).unwrap();

    let result = wand.import_image_pixels(
        Region::new(4, 4, 8, 8),
        "RGB",
        &PixelSamples::U8(vec![0; 8 * 8 * 3]),
    );
    assert!(matches!(result, Err(WandError::RegionOutOfBounds { .. })));
}
