use std::borrow::Cow;

use ndarray::Array2;

use crate::consts::REDUCE_BINARIZE_LEVEL;
use crate::edges::EdgeMap;

use super::scale::ScaleFactor;

/// Edge map prepared for the circle search.
#[derive(Clone, Debug)]
pub struct ReducedEdges<'a> {
    /// Borrowed input when no reduction was needed.
    pub map: Cow<'a, EdgeMap>,
    pub scale: ScaleFactor,
}

/// Downsample `edges` so that its largest side does not exceed
/// `target_max_dim`.
///
/// The map is resampled bilinearly to `(h / scale, w / scale)` and the
/// interpolated edge density is binarized at 0.5.
pub fn reduce(edges: &EdgeMap, target_max_dim: usize) -> ReducedEdges<'_> {
    let (h, w) = edges.dim();
    let scale = ScaleFactor::for_dims(h, w, target_max_dim);
    if scale.is_identity() {
        return ReducedEdges {
            map: Cow::Borrowed(edges),
            scale,
        };
    }

    let out_h = h / scale.get();
    let out_w = w / scale.get();
    let density = edges.mapv(|e| if e { 1.0f32 } else { 0.0 });
    let resampled = resize_bilinear(&density, out_h, out_w);

    ReducedEdges {
        map: Cow::Owned(resampled.mapv(|v| v > REDUCE_BINARIZE_LEVEL)),
        scale,
    }
}

/// Bilinear resampling with pixel-center alignment and no anti-aliasing.
///
/// Output pixel `i` samples input coordinate `(i + 0.5) * (n_in / n_out) - 0.5`.
pub fn resize_bilinear(data: &Array2<f32>, out_h: usize, out_w: usize) -> Array2<f32> {
    let (h, w) = data.dim();
    let mut out = Array2::<f32>::zeros((out_h, out_w));
    if h == 0 || w == 0 || out_h == 0 || out_w == 0 {
        return out;
    }

    let row_ratio = h as f64 / out_h as f64;
    let col_ratio = w as f64 / out_w as f64;
    let cols: Vec<(usize, usize, f32)> = (0..out_w)
        .map(|c| source_taps(c, col_ratio, w))
        .collect();

    for r in 0..out_h {
        let (r0, r1, fr) = source_taps(r, row_ratio, h);
        for (c, &(c0, c1, fc)) in cols.iter().enumerate() {
            let top = data[[r0, c0]] * (1.0 - fc) + data[[r0, c1]] * fc;
            let bottom = data[[r1, c0]] * (1.0 - fc) + data[[r1, c1]] * fc;
            out[[r, c]] = top * (1.0 - fr) + bottom * fr;
        }
    }

    out
}

fn source_taps(i: usize, ratio: f64, len: usize) -> (usize, usize, f32) {
    let pos = ((i as f64 + 0.5) * ratio - 0.5).clamp(0.0, (len - 1) as f64);
    let i0 = pos.floor() as usize;
    let i1 = (i0 + 1).min(len - 1);
    (i0, i1, (pos - i0 as f64) as f32)
}
