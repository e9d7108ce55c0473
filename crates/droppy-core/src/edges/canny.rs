//! Canny edge detection on `f64` grayscale arrays.
//!
//! Smoothing uses zero padding renormalized by the smoothed support mask,
//! gradients use 3x3 Sobel kernels with half-sample reflection at the border,
//! and non-maximum suppression interpolates the magnitude bilinearly along the
//! gradient direction. The outermost 1-pixel frame never carries edges.

use ndarray::Array2;

use crate::filters::gaussian_blur::masked_gaussian_blur;

use super::hysteresis::hysteresis;
use super::EdgeMap;

/// Run the full Canny pipeline with already-validated parameters.
pub fn canny(image: &Array2<f64>, sigma: f64, low: f64, high: f64) -> EdgeMap {
    let (h, w) = image.dim();
    if h == 0 || w == 0 {
        return EdgeMap::from_elem((h, w), false);
    }

    let smoothed = masked_gaussian_blur(image, sigma);
    let (isobel, jsobel) = sobel(&smoothed);
    let magnitude = ndarray::Zip::from(&isobel)
        .and(&jsobel)
        .map_collect(|&gi, &gj| gi.hypot(gj));

    let suppressed = non_maximum_suppression(&isobel, &jsobel, &magnitude, low);
    hysteresis(&suppressed, high)
}

#[inline]
fn reflect(i: isize, n: usize) -> usize {
    let n = n as isize;
    if i < 0 {
        (-i - 1).min(n - 1) as usize
    } else if i >= n {
        (2 * n - i - 1).max(0) as usize
    } else {
        i as usize
    }
}

/// Sobel derivatives along rows (`isobel`) and columns (`jsobel`).
pub fn sobel(data: &Array2<f64>) -> (Array2<f64>, Array2<f64>) {
    let (h, w) = data.dim();
    let mut isobel = Array2::<f64>::zeros((h, w));
    let mut jsobel = Array2::<f64>::zeros((h, w));
    const SMOOTH: [f64; 3] = [1.0, 2.0, 1.0];
    const DIFF: [f64; 3] = [-1.0, 0.0, 1.0];

    for row in 0..h {
        for col in 0..w {
            let mut gi = 0.0f64;
            let mut gj = 0.0f64;
            for dr in 0..3 {
                let r = reflect(row as isize + dr as isize - 1, h);
                for dc in 0..3 {
                    let c = reflect(col as isize + dc as isize - 1, w);
                    let v = data[[r, c]];
                    gi += v * DIFF[dr] * SMOOTH[dc];
                    gj += v * SMOOTH[dr] * DIFF[dc];
                }
            }
            isobel[[row, col]] = gi;
            jsobel[[row, col]] = gj;
        }
    }

    (isobel, jsobel)
}

/// Keep the magnitude of pixels that are local maxima along the gradient
/// direction and reach `low`; every other pixel is zero.
pub fn non_maximum_suppression(
    isobel: &Array2<f64>,
    jsobel: &Array2<f64>,
    magnitude: &Array2<f64>,
    low: f64,
) -> Array2<f64> {
    let (h, w) = magnitude.dim();
    let mut out = Array2::<f64>::zeros((h, w));
    if h < 3 || w < 3 {
        return out;
    }

    for row in 1..h - 1 {
        for col in 1..w - 1 {
            let m = magnitude[[row, col]];
            if m < low {
                continue;
            }

            let gi = isobel[[row, col]];
            let gj = jsobel[[row, col]];
            let is_down = gi <= 0.0;
            let is_up = gi >= 0.0;
            let is_left = gj <= 0.0;
            let is_right = gj >= 0.0;

            let diag_main = (is_up && is_right) || (is_down && is_left);
            let diag_anti = (is_down && is_right) || (is_up && is_left);
            if !diag_main && !diag_anti {
                continue;
            }

            let abs_i = gi.abs();
            let abs_j = gj.abs();
            let mag = |r: usize, c: usize| magnitude[[r, c]];

            let (n1_1, n1_2, n2_1, n2_2, weight) = if diag_main {
                if abs_i > abs_j {
                    (
                        mag(row + 1, col),
                        mag(row + 1, col + 1),
                        mag(row - 1, col),
                        mag(row - 1, col - 1),
                        abs_j / abs_i,
                    )
                } else {
                    (
                        mag(row, col + 1),
                        mag(row + 1, col + 1),
                        mag(row, col - 1),
                        mag(row - 1, col - 1),
                        abs_i / abs_j,
                    )
                }
            } else if abs_i < abs_j {
                (
                    mag(row, col + 1),
                    mag(row - 1, col + 1),
                    mag(row, col - 1),
                    mag(row + 1, col - 1),
                    abs_i / abs_j,
                )
            } else {
                (
                    mag(row - 1, col),
                    mag(row - 1, col + 1),
                    mag(row + 1, col),
                    mag(row + 1, col - 1),
                    abs_j / abs_i,
                )
            };

            // NaN weights (flat gradient) fail both comparisons.
            if n1_2 * weight + n1_1 * (1.0 - weight) <= m
                && n2_2 * weight + n2_1 * (1.0 - weight) <= m
            {
                out[[row, col]] = m;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_image(h: usize, w: usize, split_col: usize) -> Array2<f64> {
        Array2::from_shape_fn((h, w), |(_, c)| if c >= split_col { 1.0 } else { 0.0 })
    }

    #[test]
    fn test_reflect_indices() {
        assert_eq!(reflect(-1, 5), 0);
        assert_eq!(reflect(5, 5), 4);
        assert_eq!(reflect(2, 5), 2);
        assert_eq!(reflect(-1, 1), 0);
        assert_eq!(reflect(1, 1), 0);
    }

    #[test]
    fn test_sobel_vertical_step() {
        let data = step_image(5, 6, 3);
        let (gi, gj) = sobel(&data);
        assert_eq!(gi[[2, 2]], 0.0);
        assert_eq!(gj[[2, 2]], 4.0);
        assert_eq!(gj[[2, 0]], 0.0);
    }

    #[test]
    fn test_flat_image_has_no_edges() {
        let data = Array2::from_elem((20, 20), 0.4);
        let edges = canny(&data, 1.0, 0.1, 0.2);
        assert!(edges.iter().all(|&e| !e));
    }

    #[test]
    fn test_vertical_step_single_column_edge() {
        let data = step_image(30, 30, 15);
        let edges = canny(&data, 1.0, 0.1, 0.2);
        let row = 15;
        let cols: Vec<usize> = (0..30).filter(|&c| edges[[row, c]]).collect();
        assert!(!cols.is_empty());
        assert!(cols.iter().all(|&c| c == 14 || c == 15), "cols = {cols:?}");
        // The 1-pixel frame is excluded.
        for r in 0..30 {
            assert!(!edges[[r, 0]] && !edges[[r, 29]]);
        }
        assert!((0..30).all(|c| !edges[[0, c]] && !edges[[29, c]]));
    }

    #[test]
    fn test_tiny_images_produce_empty_maps() {
        for (h, w) in [(1, 1), (2, 5), (5, 2)] {
            let data = Array2::from_elem((h, w), 1.0);
            let edges = canny(&data, 1.0, 0.1, 0.2);
            assert_eq!(edges.dim(), (h, w));
            assert!(edges.iter().all(|&e| !e));
        }
    }
}
