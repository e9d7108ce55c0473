use ndarray::{Array2, Axis};
use ndarray::parallel::prelude::*;

use crate::consts::{GAUSSIAN_TRUNCATE, PARALLEL_PIXEL_THRESHOLD};

/// How samples outside the image are treated during convolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Border {
    /// Out-of-range samples read as zero.
    Zero,
    /// Out-of-range samples repeat the nearest edge sample.
    Clamp,
}

/// Apply Gaussian blur to a raw array using separable 1D convolution.
pub fn gaussian_blur_array(data: &Array2<f64>, sigma: f64, border: Border) -> Array2<f64> {
    let kernel = make_gaussian_kernel(sigma, GAUSSIAN_TRUNCATE);
    let row_pass = convolve_rows(data, &kernel, border);
    convolve_cols(&row_pass, &kernel, border)
}

/// Gaussian blur with zero padding, renormalized by the blurred all-ones mask
/// so that the image border does not darken.
pub fn masked_gaussian_blur(data: &Array2<f64>, sigma: f64) -> Array2<f64> {
    let blurred = gaussian_blur_array(data, sigma, Border::Zero);
    let ones = Array2::<f64>::ones(data.dim());
    let weight = gaussian_blur_array(&ones, sigma, Border::Zero);
    blurred / (weight + f64::EPSILON)
}

/// Build a normalized 1D Gaussian kernel of radius `floor(truncate * sigma + 0.5)`.
///
/// A zero sigma yields the identity kernel.
pub fn make_gaussian_kernel(sigma: f64, truncate: f64) -> Vec<f64> {
    if sigma <= 0.0 {
        return vec![1.0];
    }
    let radius = (truncate * sigma + 0.5).floor() as usize;
    let size = 2 * radius + 1;
    let mut kernel = vec![0.0f64; size];
    let s2 = 2.0 * sigma * sigma;
    let mut sum = 0.0f64;

    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f64 - radius as f64;
        *k = (-x * x / s2).exp();
        sum += *k;
    }

    for v in &mut kernel {
        *v /= sum;
    }

    kernel
}

fn sample(line_len: usize, pos: isize, border: Border) -> Option<usize> {
    if pos >= 0 && (pos as usize) < line_len {
        return Some(pos as usize);
    }
    match border {
        Border::Zero => None,
        Border::Clamp => Some(pos.clamp(0, line_len as isize - 1) as usize),
    }
}

fn convolve_rows(data: &Array2<f64>, kernel: &[f64], border: Border) -> Array2<f64> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;
    let mut result = Array2::<f64>::zeros((h, w));

    let pixel = |row: usize, col: usize| -> f64 {
        let mut sum = 0.0f64;
        for (ki, &kv) in kernel.iter().enumerate() {
            let pos = col as isize + ki as isize - radius as isize;
            if let Some(src_col) = sample(w, pos, border) {
                sum += data[[row, src_col]] * kv;
            }
        }
        sum
    };

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        result
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, mut out)| {
                for col in 0..w {
                    out[col] = pixel(row, col);
                }
            });
    } else {
        for row in 0..h {
            for col in 0..w {
                result[[row, col]] = pixel(row, col);
            }
        }
    }
    result
}

fn convolve_cols(data: &Array2<f64>, kernel: &[f64], border: Border) -> Array2<f64> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;
    let mut result = Array2::<f64>::zeros((h, w));

    let pixel = |row: usize, col: usize| -> f64 {
        let mut sum = 0.0f64;
        for (ki, &kv) in kernel.iter().enumerate() {
            let pos = row as isize + ki as isize - radius as isize;
            if let Some(src_row) = sample(h, pos, border) {
                sum += data[[src_row, col]] * kv;
            }
        }
        sum
    };

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        result
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, mut out)| {
                for col in 0..w {
                    out[col] = pixel(row, col);
                }
            });
    } else {
        for row in 0..h {
            for col in 0..w {
                result[[row, col]] = pixel(row, col);
            }
        }
    }
    result
}
