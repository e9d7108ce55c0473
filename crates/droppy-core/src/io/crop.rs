use ndarray::{s, Array2};

use crate::autocrop::Bounds;
use crate::error::{DroppyError, Result};

/// Copy the region covered by `bounds` (inclusive on all sides).
pub fn crop_image(image: &Array2<f32>, bounds: &Bounds) -> Result<Array2<f32>> {
    let (h, w) = image.dim();
    if bounds.right >= w || bounds.bottom >= h {
        return Err(DroppyError::InvalidConfig(format!(
            "Crop bounds {bounds} exceed image dimensions ({w}x{h})"
        )));
    }
    Ok(image
        .slice(s![bounds.top..=bounds.bottom, bounds.left..=bounds.right])
        .to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_inclusive() {
        let image = Array2::from_shape_fn((6, 8), |(r, c)| (r * 8 + c) as f32);
        let b = Bounds { left: 2, right: 4, top: 1, bottom: 2 };
        let out = crop_image(&image, &b).unwrap();
        assert_eq!(out.dim(), (2, 3));
        assert_eq!(out[[0, 0]], 10.0);
        assert_eq!(out[[1, 2]], 20.0);
    }

    #[test]
    fn test_crop_out_of_range() {
        let image = Array2::<f32>::zeros((4, 4));
        let b = Bounds { left: 0, right: 4, top: 0, bottom: 3 };
        assert!(crop_image(&image, &b).is_err());
    }
}
