use std::path::Path;

use image::{ColorType, GrayImage, ImageBuffer, ImageFormat, Luma, Rgb, RgbImage};
use ndarray::Array2;

use crate::autocrop::Bounds;
use crate::edges::EdgeMap;
use crate::error::{DroppyError, Result};
use crate::frame::Frame;

const EDGE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const BOUNDS_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Decode any supported image as grayscale with values in [0, 1].
///
/// Color images are converted to luma; 16-bit sources keep full precision.
pub fn load_image(path: &Path) -> Result<Frame> {
    let img = image::open(path)?;
    let bit_depth = match img.color() {
        ColorType::L16 | ColorType::La16 | ColorType::Rgb16 | ColorType::Rgba16 => 16,
        _ => 8,
    };
    let gray = img.to_luma16();
    let (w, h) = gray.dimensions();
    if w == 0 || h == 0 {
        return Err(DroppyError::InvalidDimensions {
            width: w as usize,
            height: h as usize,
        });
    }

    let data = Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
        gray.get_pixel(col as u32, row as u32).0[0] as f32 / 65535.0
    });

    Ok(Frame::new(data, bit_depth))
}

/// Write the frame as 16-bit grayscale TIFF.
pub fn save_tiff(frame: &Frame, path: &Path) -> Result<()> {
    let (w, h) = (frame.width(), frame.height());
    let pixels: Vec<u16> = frame
        .data
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 65535.0).round() as u16)
        .collect();

    let img = ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(w as u32, h as u32, pixels)
        .ok_or(DroppyError::InvalidDimensions { width: w, height: h })?;
    img.save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Write the frame as 8-bit grayscale PNG.
pub fn save_png(frame: &Frame, path: &Path) -> Result<()> {
    to_gray8(&frame.data).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a frame, picking the format from the file extension (TIFF otherwise).
pub fn save_image(frame: &Frame, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => save_png(frame, path),
        _ => save_tiff(frame, path),
    }
}

/// Write an edge map as a black and white PNG.
pub fn save_edge_map(edges: &EdgeMap, path: &Path) -> Result<()> {
    let (h, w) = edges.dim();
    let img = GrayImage::from_fn(w as u32, h as u32, |x, y| {
        Luma([if edges[[y as usize, x as usize]] { 255 } else { 0 }])
    });
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Render the image in gray with edge pixels in red and, when given, the
/// crop rectangle outlined in green.
pub fn edge_overlay(image: &Array2<f32>, edges: &EdgeMap, bounds: Option<&Bounds>) -> RgbImage {
    let (h, w) = image.dim();
    let mut img = RgbImage::from_fn(w as u32, h as u32, |x, y| {
        let (row, col) = (y as usize, x as usize);
        if edges.get((row, col)).copied().unwrap_or(false) {
            EDGE_COLOR
        } else {
            let g = to_u8(image[[row, col]]);
            Rgb([g, g, g])
        }
    });

    if let Some(b) = bounds {
        draw_rect(&mut img, b);
    }
    img
}

/// Write [`edge_overlay`] as PNG.
pub fn save_edge_overlay(
    image: &Array2<f32>,
    edges: &EdgeMap,
    bounds: Option<&Bounds>,
    path: &Path,
) -> Result<()> {
    edge_overlay(image, edges, bounds).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn to_gray8(data: &Array2<f32>) -> GrayImage {
    let (h, w) = data.dim();
    GrayImage::from_fn(w as u32, h as u32, |x, y| {
        Luma([to_u8(data[[y as usize, x as usize]])])
    })
}

/// Outline `b`, skipping any side that lies outside the image.
fn draw_rect(img: &mut RgbImage, b: &Bounds) {
    let (w, h) = (img.width() as usize, img.height() as usize);
    let mut put = |x: usize, y: usize| {
        if x < w && y < h {
            img.put_pixel(x as u32, y as u32, BOUNDS_COLOR);
        }
    };
    for x in b.left..=b.right {
        put(x, b.top);
        put(x, b.bottom);
    }
    for y in b.top..=b.bottom {
        put(b.left, y);
        put(b.right, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_colors() {
        let image = Array2::<f32>::from_elem((10, 10), 0.5);
        let mut edges = EdgeMap::from_elem((10, 10), false);
        edges[[5, 5]] = true;
        let b = Bounds { left: 1, right: 8, top: 2, bottom: 7 };

        let img = edge_overlay(&image, &edges, Some(&b));
        assert_eq!(*img.get_pixel(5, 5), EDGE_COLOR);
        assert_eq!(*img.get_pixel(1, 4), BOUNDS_COLOR);
        assert_eq!(*img.get_pixel(4, 7), BOUNDS_COLOR);
        assert_eq!(*img.get_pixel(4, 4), Rgb([128, 128, 128]));
        assert_eq!(*img.get_pixel(0, 0), Rgb([128, 128, 128]));
    }

    #[test]
    fn test_overlay_without_bounds() {
        let image = Array2::<f32>::zeros((3, 4));
        let edges = EdgeMap::from_elem((3, 4), false);
        let img = edge_overlay(&image, &edges, None);
        assert_eq!(img.dimensions(), (4, 3));
        assert!(img.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }
}
