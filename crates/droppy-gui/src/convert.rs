use droppy_core::autocrop::Bounds;
use droppy_core::EdgeMap;
use ndarray::Array2;

/// Edge pixels are blended over the image with this color and opacity.
const EDGE_COLOR: [f32; 3] = [255.0, 60.0, 0.0];
const EDGE_ALPHA: f32 = 0.6;

/// Grayscale image with the edge map blended on top, restricted to `view`
/// (inclusive) when given.
pub fn overlay_to_color_image(
    image: &Array2<f32>,
    edges: &EdgeMap,
    view: Option<&Bounds>,
) -> egui::ColorImage {
    let (h, w) = image.dim();
    let (left, right, top, bottom) = match view {
        Some(b) => (b.left, b.right, b.top, b.bottom),
        None => (0, w.saturating_sub(1), 0, h.saturating_sub(1)),
    };
    let out_w = right + 1 - left;
    let out_h = bottom + 1 - top;
    let mut pixels = Vec::with_capacity(out_w * out_h);

    for row in top..=bottom {
        for col in left..=right {
            let v = image[[row, col]].clamp(0.0, 1.0) * 255.0;
            let px = if edges[[row, col]] {
                let mix = |c: f32| ((1.0 - EDGE_ALPHA) * v + EDGE_ALPHA * c).round() as u8;
                egui::Color32::from_rgb(mix(EDGE_COLOR[0]), mix(EDGE_COLOR[1]), mix(EDGE_COLOR[2]))
            } else {
                egui::Color32::from_gray(v.round() as u8)
            };
            pixels.push(px);
        }
    }

    egui::ColorImage {
        size: [out_w, out_h],
        pixels,
        source_size: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_image_overlay() {
        let image = Array2::<f32>::from_elem((4, 6), 1.0);
        let mut edges = EdgeMap::from_elem((4, 6), false);
        edges[[1, 2]] = true;
        let img = overlay_to_color_image(&image, &edges, None);
        assert_eq!(img.size, [6, 4]);
        assert_eq!(img.pixels[0], egui::Color32::from_gray(255));
        assert_ne!(img.pixels[6 + 2], egui::Color32::from_gray(255));
    }

    #[test]
    fn test_view_restricts_region() {
        let image = Array2::from_shape_fn((10, 10), |(r, _)| r as f32 / 10.0);
        let edges = EdgeMap::from_elem((10, 10), false);
        let view = Bounds { left: 2, right: 4, top: 5, bottom: 9 };
        let img = overlay_to_color_image(&image, &edges, Some(&view));
        assert_eq!(img.size, [3, 5]);
        assert_eq!(img.pixels[0], egui::Color32::from_gray(128));
    }
}
