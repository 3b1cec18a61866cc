//! A "wavelet" hash that is really a global FFT over the luminance of every pixel,
//! thresholded at the median magnitude. It is not a multiresolution decomposition, but
//! the numbers it produces are kept stable.

use image::{GenericImageView, Pixel};
use rustfft::{num_complex::Complex, FftPlanner};

use crate::utils::imgutils;

use super::{hamming::Hamming, kind::HashError};

pub fn hash<I>(img: &I) -> Result<Hamming, HashError>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    // NOTE: iterating the pixels of a 0xN image panics
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(HashError::EmptyImage);
    }

    let mut buffer: Vec<Complex<f64>> = imgutils::luminance(img)
        .map(|lum| Complex::new(lum, 0.0))
        .collect();

    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(buffer.len()).process(&mut buffer);

    let magnitudes: Vec<f64> = buffer.iter().map(|c| c.norm()).collect();
    Ok(above_median(&magnitudes))
}

/// The upper median, i.e., the middle element for odd lengths.
fn median(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.get(sorted.len() / 2).copied()
}

/// Bit `i` is set iff `values[i]` is strictly greater than the median. Only the first
/// `Hamming::BITS` values get a bit.
fn above_median(values: &[f64]) -> Hamming {
    let Some(median) = median(values) else {
        return Hamming(0);
    };

    let bits = values
        .iter()
        .take(Hamming::BITS as usize)
        .enumerate()
        .filter(|(_, value)| **value > median)
        .fold(0, |bits, (i, _)| bits | 1 << i);
    Hamming(bits)
}
