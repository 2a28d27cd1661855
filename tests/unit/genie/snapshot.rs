use super::*;
use image::Rgba;

fn solid(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba([200, 30, 40, 255]))
}

#[test]
fn slice_sizes_cover_the_extent() {
    let sizes = slice_sizes(Size::new(210.0, 205.0), Axis::Vertical, 10.0);
    assert_eq!(sizes.len(), 21);
    assert!(sizes[..20].iter().all(|s| *s == Size::new(210.0, 10.0)));
    assert_eq!(sizes[20], Size::new(210.0, 5.0));

    let sizes = slice_sizes(Size::new(30.0, 8.0), Axis::Horizontal, 10.0);
    assert_eq!(sizes, vec![Size::new(10.0, 8.0); 3]);
}

#[test]
fn slice_sizes_of_nothing_is_empty() {
    assert!(slice_sizes(Size::new(0.0, 10.0), Axis::Horizontal, 10.0).is_empty());
    assert!(slice_sizes(Size::new(10.0, 10.0), Axis::Horizontal, 0.0).is_empty());
}

#[test]
fn raster_slices_carry_the_margin_across_the_travel_axis() {
    let mut snap = RasterSnapshot::new(solid(40, 50), 2.0).unwrap();
    assert_eq!(snap.size(), Size::new(20.0, 25.0));

    let config = GenieConfig::default();
    let slices = snap.capture_slices(Axis::Vertical, &config).unwrap();
    // 50px tall at 20px per slice.
    assert_eq!(slices.len(), 3);
    assert_eq!(slices[0].pixels.dimensions(), (60, 20));
    assert_eq!(slices[2].pixels.dimensions(), (60, 10));
    assert_eq!(slices[0].size, Size::new(30.0, 10.0));
    assert_eq!(slices[2].size, Size::new(30.0, 5.0));

    let expected = slice_sizes(Size::new(30.0, 25.0), Axis::Vertical, config.slice_thickness);
    let got: Vec<Size> = slices.iter().map(|s| s.size).collect();
    assert_eq!(got, expected);

    // Margin columns are transparent, the body is the element.
    let first = &slices[0].pixels;
    assert_eq!(first.get_pixel(0, 0)[3], 0);
    assert_eq!(first.get_pixel(9, 5)[3], 0);
    assert_eq!(*first.get_pixel(10, 5), Rgba([200, 30, 40, 255]));
    assert_eq!(first.get_pixel(59, 19)[3], 0);
}

#[test]
fn horizontal_travel_pads_rows() {
    let mut snap = RasterSnapshot::new(solid(25, 10), 1.0).unwrap();
    let slices = snap.capture_slices(Axis::Horizontal, &GenieConfig::default()).unwrap();
    assert_eq!(slices.len(), 3);
    assert_eq!(slices[0].pixels.dimensions(), (10, 20));
    assert_eq!(slices[2].pixels.dimensions(), (5, 20));
    assert_eq!(slices[1].pixels.get_pixel(3, 2)[3], 0);
    assert_eq!(slices[1].pixels.get_pixel(3, 5)[3], 255);
}

#[test]
fn bad_rasters_are_rejected() {
    assert!(matches!(
        RasterSnapshot::new(RgbaImage::new(0, 4), 1.0),
        Err(GenieError::Snapshot(_))
    ));
    assert!(matches!(
        RasterSnapshot::new(solid(4, 4), 0.0),
        Err(GenieError::Validation(_))
    ));
}
