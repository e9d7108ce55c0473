use ndarray::Array2;

use droppy_core::autocrop::Bounds;
use droppy_core::frame::Frame;
use droppy_core::io::image_io::{load_image, save_edge_map, save_png, save_tiff};
use droppy_core::{crop_image, save_edge_overlay, save_image, EdgeMap};

#[test]
fn test_save_load_roundtrip_tiff() {
    let mut data = Array2::<f32>::zeros((4, 5));
    data[[0, 1]] = 0.5;
    data[[1, 0]] = 1.0;
    data[[3, 4]] = 0.25;
    let frame = Frame::new(data, 16);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.tiff");

    save_tiff(&frame, &path).unwrap();
    let loaded = load_image(&path).unwrap();

    assert_eq!(loaded.width(), 5);
    assert_eq!(loaded.height(), 4);
    assert_eq!(loaded.original_bit_depth, 16);
    assert!((loaded.data[[0, 0]] - 0.0).abs() < 1e-4);
    assert!((loaded.data[[0, 1]] - 0.5).abs() < 1e-3);
    assert!((loaded.data[[1, 0]] - 1.0).abs() < 1e-4);
    assert!((loaded.data[[3, 4]] - 0.25).abs() < 1e-3);
}

#[test]
fn test_png_is_eight_bit() {
    let data = Array2::<f32>::from_elem((8, 6), 0.5);
    let frame = Frame::new(data, 8);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.png");

    save_png(&frame, &path).unwrap();
    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded.original_bit_depth, 8);
    assert_eq!((loaded.height(), loaded.width()), (8, 6));
    assert!((loaded.data[[3, 3]] - 128.0 / 255.0).abs() < 1e-3);
}

#[test]
fn test_save_image_picks_format_by_extension() {
    let frame = Frame::new(Array2::<f32>::from_elem((3, 3), 0.2), 8);
    let dir = tempfile::tempdir().unwrap();

    let png = dir.path().join("a.png");
    let tif = dir.path().join("a.tif");
    save_image(&frame, &png).unwrap();
    save_image(&frame, &tif).unwrap();

    assert_eq!(load_image(&png).unwrap().original_bit_depth, 8);
    assert_eq!(load_image(&tif).unwrap().original_bit_depth, 16);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_image(&dir.path().join("missing.png")).is_err());
}

#[test]
fn test_edge_outputs_written() {
    let image = Array2::<f32>::from_elem((20, 30), 0.4);
    let mut edges = EdgeMap::from_elem((20, 30), false);
    edges[[10, 10]] = true;
    let bounds = Bounds { left: 2, right: 25, top: 3, bottom: 18 };

    let dir = tempfile::tempdir().unwrap();
    let map_path = dir.path().join("edges.png");
    let overlay_path = dir.path().join("overlay.png");
    save_edge_map(&edges, &map_path).unwrap();
    save_edge_overlay(&image, &edges, Some(&bounds), &overlay_path).unwrap();

    let map = load_image(&map_path).unwrap();
    assert!((map.data[[10, 10]] - 1.0).abs() < 1e-4);
    assert!(map.data[[0, 0]].abs() < 1e-4);

    let overlay = image::open(&overlay_path).unwrap().to_rgb8();
    assert_eq!(overlay.dimensions(), (30, 20));
    assert_eq!(overlay.get_pixel(10, 10).0, [255, 0, 0]);
    assert_eq!(overlay.get_pixel(2, 10).0, [0, 255, 0]);
}

#[test]
fn test_crop_matches_bounds() {
    let image = Array2::from_shape_fn((50, 60), |(r, c)| (r * 60 + c) as f32 / 3000.0);
    let bounds = Bounds { left: 5, right: 44, top: 10, bottom: 29 };
    let cropped = crop_image(&image, &bounds).unwrap();
    assert_eq!(cropped.dim(), (bounds.height(), bounds.width()));
    assert_eq!(cropped[[0, 0]], image[[10, 5]]);
    assert_eq!(cropped[[19, 39]], image[[29, 44]]);
}
