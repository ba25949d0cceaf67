use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Fits `source` onto an opaque white canvas of exactly `target` pixels.
/// The source is scaled down proportionally when it exceeds the target in
/// either dimension, never up, and composited centered. The output
/// dimensions always equal `target`.
pub fn normalize_to_frame(source: &RgbaImage, target: (u32, u32)) -> RgbaImage {
    let (target_width, target_height) = target;
    let (width, height) = source.dimensions();

    let resized;
    let scaled = if width > target_width || height > target_height {
        let ratio = f64::min(
            target_width as f64 / width as f64,
            target_height as f64 / height as f64,
        );
        let scaled_width = ((width as f64 * ratio).round() as u32).clamp(1, target_width);
        let scaled_height = ((height as f64 * ratio).round() as u32).clamp(1, target_height);
        resized = imageops::resize(source, scaled_width, scaled_height, FilterType::Lanczos3);
        &resized
    } else {
        source
    };

    let mut canvas = RgbaImage::from_pixel(target_width, target_height, Rgba([255, 255, 255, 255]));
    let offset_x = ((target_width - scaled.width()) / 2) as i64;
    let offset_y = ((target_height - scaled.height()) / 2) as i64;
    imageops::overlay(&mut canvas, scaled, offset_x, offset_y);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn output_always_matches_the_target_size() {
        let targets = [(700, 340), (64, 64), (10, 200)];
        let sources = [(1, 1), (700, 340), (1920, 1080), (340, 700)];
        for target in targets {
            for (width, height) in sources {
                let source = RgbaImage::from_pixel(width, height, BLACK);
                let framed = normalize_to_frame(&source, target);
                assert_eq!(framed.dimensions(), target);
            }
        }
    }

    #[test]
    fn small_images_are_padded_not_upscaled() {
        let source = RgbaImage::from_pixel(4, 4, BLACK);
        let framed = normalize_to_frame(&source, (10, 10));

        // Source lands centered at (3..7, 3..7); the border stays canvas white.
        assert_eq!(*framed.get_pixel(0, 0), WHITE);
        assert_eq!(*framed.get_pixel(9, 9), WHITE);
        assert_eq!(*framed.get_pixel(5, 5), BLACK);
    }

    #[test]
    fn wide_images_keep_their_aspect_ratio() {
        let source = RgbaImage::from_pixel(1400, 340, BLACK);
        let framed = normalize_to_frame(&source, (700, 340));

        // Scaled to 700x170 and centered vertically: rows 85..255 carry the
        // image, the letterbox bands above and below stay white.
        assert_eq!(framed.dimensions(), (700, 340));
        assert_eq!(*framed.get_pixel(350, 10), WHITE);
        assert_eq!(*framed.get_pixel(350, 330), WHITE);
        assert_eq!(*framed.get_pixel(350, 170), BLACK);
    }

    #[test]
    fn normalizing_is_deterministic() {
        let mut source = RgbaImage::from_pixel(123, 77, BLACK);
        source.put_pixel(10, 10, Rgba([200, 30, 40, 255]));
        let first = normalize_to_frame(&source, (64, 64));
        let second = normalize_to_frame(&source, (64, 64));
        assert_eq!(first.as_raw(), second.as_raw());
    }
}
