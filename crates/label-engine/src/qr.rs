//! QR symbol generation for disc labels.

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, Luma};
use qrcode::QrCode;

use crate::LabelError;

/// Generate a QR symbol from the given payload, rescaled to a square of
/// `target_size` pixels.
///
/// Modules are painted at an integer scale first, then the symbol is resized
/// exactly to the target. Nearest-neighbour filtering keeps module edges
/// sharp.
pub fn generate_qr(data: &str, target_size: u32) -> Result<DynamicImage, LabelError> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| LabelError::QrEncode(e.to_string()))?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;

    let scale = (target_size / module_count).max(1);
    let img_size = module_count * scale;

    let mut img = GrayImage::from_pixel(img_size, img_size, Luma([255u8]));

    for (i, color) in modules.iter().enumerate() {
        let x = (i as u32) % module_count;
        let y = (i as u32) / module_count;

        if *color == qrcode::Color::Dark {
            for dx in 0..scale {
                for dy in 0..scale {
                    img.put_pixel(x * scale + dx, y * scale + dy, Luma([0u8]));
                }
            }
        }
    }

    let img = DynamicImage::ImageLuma8(img);
    if img_size == target_size {
        Ok(img)
    } else {
        Ok(img.resize_exact(target_size, target_size, FilterType::Nearest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_qr_matches_target_size() {
        let img = generate_qr("disc_1", 200).unwrap();
        assert_eq!(img.width(), 200);
        assert_eq!(img.height(), 200);
    }

    #[test]
    fn generate_qr_contains_dark_and_light_modules() {
        let img = generate_qr("disc_1", 200).unwrap().to_luma8();
        let mut has_dark = false;
        let mut has_light = false;
        for pixel in img.pixels() {
            match pixel[0] {
                0 => has_dark = true,
                255 => has_light = true,
                _ => {}
            }
        }
        assert!(has_dark && has_light);
    }

    #[test]
    fn generate_qr_is_deterministic() {
        let a = generate_qr("disc_1", 200).unwrap().to_luma8();
        let b = generate_qr("disc_1", 200).unwrap().to_luma8();
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
