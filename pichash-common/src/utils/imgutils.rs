use image::{GenericImageView, ImageBuffer, Pixel, Rgb, RgbImage, Rgba};

pub const WHITE: u8 = u8::MAX;
pub const BLACK: u8 = u8::MIN;

/// ITU-R 601 luma weights
const RED_WEIGHT: f64 = 0.299;
const GREEN_WEIGHT: f64 = 0.587;
const BLUE_WEIGHT: f64 = 0.114;

/// The luminance of every pixel, row by row, on a 16 bit scale. The channels are
/// premultiplied by alpha first, so a fully transparent pixel is black.
pub fn luminance<I>(img: &I) -> impl Iterator<Item = f64> + '_
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    img.pixels().map(|(_, _, pixel)| {
        let Rgba([r, g, b, a]) = pixel.to_rgba();
        RED_WEIGHT * premultiplied(r, a)
            + GREEN_WEIGHT * premultiplied(g, a)
            + BLUE_WEIGHT * premultiplied(b, a)
    })
}

/// Widens both to 16 bits and scales the channel by alpha, truncating.
fn premultiplied(channel: u8, alpha: u8) -> f64 {
    let channel = u32::from(channel) * 0x101;
    let alpha = u32::from(alpha) * 0x101;
    f64::from(channel * alpha / 0xffff)
}

pub fn filled(width: u32, height: u32, red: u8, green: u8, blue: u8) -> RgbImage {
    let mut buf = ImageBuffer::new(width, height);
    buf.enumerate_pixels_mut()
        .for_each(|(_, _, pixel)| *pixel = image::Rgb([red, green, blue]));
    buf
}

/// Black on the left half, white on the right half.
pub fn halves(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        let color = if x < width / 2 { BLACK } else { WHITE };
        Rgb([color; 3])
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn luminance_weights() {
        let lum: Vec<f64> = luminance(&filled(1, 1, 255, 0, 0)).collect();
        assert!(close(0.299 * 65535.0, lum[0]));

        let lum: Vec<f64> = luminance(&filled(2, 1, 255, 255, 255)).collect();
        assert_eq!(2, lum.len());
        assert!(lum.iter().all(|l| close(65535.0, *l)));
    }

    #[test]
    fn row_major() {
        let img = RgbImage::from_fn(2, 2, |x, y| Rgb([(x + 2 * y) as u8; 3]));
        let lum: Vec<f64> = luminance(&img).collect();
        for (i, l) in lum.into_iter().enumerate() {
            assert!(close(i as f64 * 257.0, l));
        }
    }

    #[test]
    fn alpha_is_premultiplied() {
        let img = image::RgbaImage::from_fn(3, 1, |x, _| {
            Rgba([255, 255, 255, [0, 128, 255][x as usize]])
        });
        let lum: Vec<f64> = luminance(&img).collect();
        assert!(close(0.0, lum[0]));
        assert!(close(32896.0, lum[1]));
        assert!(close(65535.0, lum[2]));
    }

    #[test]
    fn premultiply_truncates() {
        assert_eq!(0.0, premultiplied(200, 0));
        assert_eq!(65535.0, premultiplied(255, 255));
        // 100 * 257 * 50 * 257 / 65535
        assert_eq!(5039.0, premultiplied(100, 50));
    }

    #[test]
    fn halves_split() {
        let img = halves(4, 1);
        assert_eq!(&Rgb([BLACK; 3]), img.get_pixel(1, 0));
        assert_eq!(&Rgb([WHITE; 3]), img.get_pixel(2, 0));
    }
}
