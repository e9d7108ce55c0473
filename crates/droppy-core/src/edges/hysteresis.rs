use ndarray::Array2;

use super::EdgeMap;

/// Hysteresis thresholding on a non-maximum-suppressed magnitude map.
///
/// Every positive pixel of `suppressed` is a weak edge. A weak edge survives
/// if its 8-connected component contains at least one pixel `>= high`.
pub fn hysteresis(suppressed: &Array2<f64>, high: f64) -> EdgeMap {
    let (h, w) = suppressed.dim();
    let weak = suppressed.mapv(|v| v > 0.0);
    let (labels, count) = label_components(&weak);
    if count == 0 {
        return weak;
    }

    let mut strong_label = vec![false; count as usize + 1];
    for row in 0..h {
        for col in 0..w {
            let lbl = labels[[row, col]];
            if lbl != 0 && suppressed[[row, col]] >= high {
                strong_label[lbl as usize] = true;
            }
        }
    }

    labels.mapv(|lbl| lbl != 0 && strong_label[lbl as usize])
}

/// Two-pass 8-connected component labeling with union-find.
///
/// Returns the label image (0 = background, 1..=count dense) and the number
/// of components.
pub fn label_components(mask: &Array2<bool>) -> (Array2<u32>, u32) {
    let (h, w) = mask.dim();
    let mut labels = Array2::<u32>::zeros((h, w));
    if h == 0 || w == 0 {
        return (labels, 0);
    }

    let mut next_label: u32 = 1;
    // Index 0 unused; labels start at 1.
    let mut parent: Vec<u32> = vec![0; 2];

    // Pass 1: provisional labels from the four already-visited neighbors.
    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }

            let mut neighbors = [0u32; 4];
            if col > 0 {
                neighbors[0] = labels[[row, col - 1]];
            }
            if row > 0 {
                if col > 0 {
                    neighbors[1] = labels[[row - 1, col - 1]];
                }
                neighbors[2] = labels[[row - 1, col]];
                if col + 1 < w {
                    neighbors[3] = labels[[row - 1, col + 1]];
                }
            }

            let smallest = neighbors.iter().copied().filter(|&l| l > 0).min();
            match smallest {
                None => {
                    if next_label as usize >= parent.len() {
                        parent.resize(parent.len() * 2, 0);
                    }
                    parent[next_label as usize] = next_label;
                    labels[[row, col]] = next_label;
                    next_label += 1;
                }
                Some(smallest) => {
                    labels[[row, col]] = smallest;
                    for &l in neighbors.iter().filter(|&&l| l > 0 && l != smallest) {
                        union(&mut parent, smallest, l);
                    }
                }
            }
        }
    }

    // Pass 2: map roots to dense labels.
    let mut dense = vec![0u32; next_label as usize];
    let mut count = 0u32;
    for i in 1..next_label as usize {
        let root = find(&parent, i as u32) as usize;
        if dense[root] == 0 {
            count += 1;
            dense[root] = count;
        }
        dense[i] = dense[root];
    }

    labels.mapv_inplace(|l| if l == 0 { 0 } else { dense[l as usize] });
    (labels, count)
}

fn find(parent: &[u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        x = parent[x as usize];
    }
    x
}

fn union(parent: &mut [u32], a: u32, b: u32) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        // Merge larger root into smaller root to keep labels consistent.
        let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[big as usize] = small;
    }
}
