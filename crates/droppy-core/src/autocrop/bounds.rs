use std::fmt;

use crate::hough::CircleCandidate;

use super::scale::ScaleFactor;

/// Inclusive crop rectangle in full-resolution pixel coordinates.
///
/// Always satisfies `left <= right` and `top <= bottom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
}

impl Bounds {
    /// `[left, right, top, bottom]`.
    pub fn to_array(&self) -> [usize; 4] {
        [self.left, self.right, self.top, self.bottom]
    }

    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.left..=self.right).contains(&x) && (self.top..=self.bottom).contains(&y)
    }
}

impl From<Bounds> for [usize; 4] {
    fn from(b: Bounds) -> Self {
        b.to_array()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.left, self.right, self.top, self.bottom
        )
    }
}

/// Combine the reduced-resolution circle and the baseline row into padded
/// bounds clipped to a `height x width` image.
pub fn reconcile(
    candidate: &CircleCandidate,
    scale: ScaleFactor,
    baseline_y: i64,
    pad: usize,
    height: usize,
    width: usize,
) -> Bounds {
    let circle = scale.to_full(candidate);
    let pad = pad as i64;

    let clip = |v: i64, len: usize| -> usize { v.clamp(0, len.saturating_sub(1) as i64) as usize };

    let mut left = clip(circle.center_x - circle.radius - pad, width);
    let mut right = clip(circle.center_x + circle.radius + pad, width);
    let mut top = clip(circle.center_y - circle.radius - pad, height);
    let mut bottom = clip(baseline_y + pad, height);

    if right < left {
        std::mem::swap(&mut left, &mut right);
    }
    if bottom < top {
        std::mem::swap(&mut top, &mut bottom);
    }

    Bounds {
        left,
        right,
        top,
        bottom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(cx: usize, cy: usize, r: usize) -> CircleCandidate {
        CircleCandidate {
            score: 1,
            center_x: cx,
            center_y: cy,
            radius: r,
        }
    }

    #[test]
    fn test_unclipped_bounds() {
        let b = reconcile(&candidate(100, 120, 40), ScaleFactor::IDENTITY, 170, 25, 200, 200);
        assert_eq!(b.to_array(), [35, 165, 55, 195]);
        assert_eq!(b.width(), 131);
        assert_eq!(b.height(), 141);
        assert_eq!(b.to_string(), "[35, 165, 55, 195]");
    }

    #[test]
    fn test_scaled_candidate() {
        let scale = ScaleFactor::for_dims(4000, 4000, 2000);
        let b = reconcile(&candidate(500, 600, 200), scale, 1700, 10, 4000, 4000);
        assert_eq!(b.to_array(), [590, 1410, 790, 1710]);
    }

    #[test]
    fn test_clipped_to_image() {
        let b = reconcile(&candidate(5, 5, 10), ScaleFactor::IDENTITY, 300, 25, 100, 80);
        assert_eq!(b.to_array(), [0, 40, 0, 99]);
    }

    #[test]
    fn test_baseline_above_top_is_swapped() {
        let b = reconcile(&candidate(50, 80, 10), ScaleFactor::IDENTITY, 10, 0, 100, 100);
        assert_eq!((b.top, b.bottom), (10, 70));
        assert!(b.top <= b.bottom);
    }

    #[test]
    fn test_negative_baseline_still_valid() {
        let b = reconcile(&candidate(50, 50, 10), ScaleFactor::IDENTITY, -500, 5, 100, 100);
        assert!(b.top <= b.bottom && b.bottom <= 99);
        assert!(b.left <= b.right && b.right <= 99);
    }

    #[test]
    fn test_contains() {
        let b = Bounds { left: 2, right: 5, top: 1, bottom: 3 };
        assert!(b.contains(2, 1) && b.contains(5, 3));
        assert!(!b.contains(6, 2) && !b.contains(3, 0));
    }
}
