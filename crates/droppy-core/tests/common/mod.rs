#![allow(dead_code)]

use ndarray::Array2;

use droppy_core::edges::EdgeMap;
use droppy_core::hough::circle_perimeter_offsets;

/// Dark background with a bright disk and, optionally, a bright surface
/// filling every row from `surface_row` down.
pub fn droplet_image(
    h: usize,
    w: usize,
    cx: f64,
    cy: f64,
    radius: f64,
    surface_row: Option<usize>,
) -> Array2<f32> {
    Array2::from_shape_fn((h, w), |(row, col)| {
        let dx = col as f64 - cx;
        let dy = row as f64 - cy;
        let in_disk = (dx * dx + dy * dy).sqrt() <= radius;
        let in_surface = surface_row.is_some_and(|s| row >= s);
        if in_disk || in_surface {
            0.9
        } else {
            0.1
        }
    })
}

/// The reference scene: r = 40 droplet at (x = 100, y = 120) resting above a
/// surface starting at row 170, on a 200 x 200 image.
pub fn reference_scene() -> Array2<f32> {
    droplet_image(200, 200, 100.0, 120.0, 40.0, Some(170))
}

/// Edge map holding a single Bresenham ring.
pub fn ring_edges(h: usize, w: usize, cx: usize, cy: usize, radius: usize) -> EdgeMap {
    let mut edges = EdgeMap::from_elem((h, w), false);
    for (dy, dx) in circle_perimeter_offsets(radius) {
        let y = cy as isize + dy;
        let x = cx as isize + dx;
        if y >= 0 && x >= 0 && (y as usize) < h && (x as usize) < w {
            edges[[y as usize, x as usize]] = true;
        }
    }
    edges
}

/// Set every pixel of `row` between `from` and `to` (exclusive).
pub fn draw_row(edges: &mut EdgeMap, row: usize, from: usize, to: usize) {
    for x in from..to {
        edges[[row, x]] = true;
    }
}
