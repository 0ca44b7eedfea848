//! Process-wide queries and image property accessors.

use zenwand::{ChannelType, FilterType, MagickWand};

#[test]
fn configure_options() {
    zenwand::genesis();
    let options = zenwand::query_configure_options("*").unwrap();
    assert!(!options.is_empty());
    for option in &options {
        // Every listed option must resolve.
        zenwand::query_configure_option(option).unwrap();
    }
}

#[test]
fn nonexistent_configure_option_is_none() {
    zenwand::genesis();
    let value = zenwand::query_configure_option("4321foobaramps1234").unwrap();
    assert!(value.is_none());
}

#[test]
fn formats_are_registered() {
    zenwand::genesis();
    let formats = zenwand::query_formats("*").unwrap();
    assert!(!formats.is_empty());
}

#[test]
fn fonts_query_succeeds() {
    zenwand::genesis();
    // Font availability depends on the host; the query itself must work.
    zenwand::query_fonts("*").unwrap();
}

#[test]
fn quantum_depth_and_range() {
    zenwand::genesis();
    let (name, depth) = zenwand::quantum_depth();
    assert!(!name.is_empty());
    assert!(depth > 0);

    let (name, range) = zenwand::quantum_range();
    assert!(!name.is_empty());
    assert!(range > 0);
}

#[test]
fn version_text() {
    zenwand::genesis();
    let (text, number) = zenwand::version();
    assert!(text.contains("ImageMagick"));
    assert!(number > 0);
}

#[test]
fn resource_limits_round_trip() {
    zenwand::genesis();
    let previous = zenwand::get_resource_limit(zenwand::ResourceType::Thread);
    // Setting the limit to its current value must always be accepted.
    assert!(zenwand::set_resource_limit(
        zenwand::ResourceType::Thread,
        previous
    ));
}

#[test]
fn image_properties_after_read() {
    zenwand::genesis();
    let mut wand = MagickWand::new().unwrap();
    wand.read_image("logo:").unwrap();

    assert!(wand.get_image_width().unwrap() > 0);
    assert!(wand.get_image_height().unwrap() > 0);
    assert!(!wand.get_image_format().unwrap().is_empty());
    assert!(!wand.get_image_signature().unwrap().is_empty());
    assert!(wand.get_image_colors().unwrap() > 0);
    assert!(wand.get_image_depth().unwrap() > 0);

    let (mean, stddev) = wand
        .get_image_channel_mean(ChannelType::DEFAULT)
        .unwrap();
    assert!(mean > 0.0);
    assert!(stddev >= 0.0);
}

#[test]
fn resize_and_properties() {
    zenwand::genesis();
    let mut wand = MagickWand::new().unwrap();
    wand.read_image("logo:").unwrap();
    wand.resize_image(40, 30, FilterType::Lanczos, 1.0).unwrap();
    assert_eq!(wand.get_image_width().unwrap(), 40);
    assert_eq!(wand.get_image_height().unwrap(), 30);
}

#[test]
fn channel_statistics_cover_rgb() {
    zenwand::genesis();
    let mut wand = MagickWand::new().unwrap();
    wand.read_image("logo:").unwrap();
    let statistics = wand.get_image_channel_statistics().unwrap();
    for channel in [ChannelType::RED, ChannelType::GREEN, ChannelType::BLUE] {
        let stats = statistics.get(&channel).unwrap();
        assert!(stats.maxima >= stats.minima);
    }
}

#[test]
fn histogram_lists_unique_colors() {
    zenwand::genesis();
    let mut wand = MagickWand::new().unwrap();
    let white = zenwand::PixelWand::new().unwrap();
    white.set_color("white").unwrap();
    wand.new_image(4, 4, &white).unwrap();
    let histogram = wand.get_image_histogram().unwrap();
    assert_eq!(histogram.len(), 1);
    // Handle accounting covers adopted wands too.
    for color in &histogram {
        assert!(color.is_live());
    }
}
