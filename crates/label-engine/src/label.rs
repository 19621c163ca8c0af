//! Label composition: QR symbol plus caption lines on a fixed canvas.

use std::path::{Path, PathBuf};

use ab_glyph::PxScale;
use image::{Rgba, RgbaImage, imageops};
use imageproc::drawing::draw_text_mut;

use disc_store::DiscRecord;

use crate::font::LabelFont;
use crate::text::measure_text_width;
use crate::{
    CANVAS_HEIGHT, CANVAS_WIDTH, FONT_SIZE, LabelError, QR_SIZE, QR_X, QR_Y, TEXT_LINE_YS, TEXT_X,
    qr,
};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Render the label image for one record.
///
/// Deterministic in the record's four fields and the font: the QR symbol is
/// generated from the uid alone, the caption lines show uid, company, mold
/// and color in that order. Records with an empty uid are rejected.
pub fn render(record: &DiscRecord, font: &LabelFont) -> Result<RgbaImage, LabelError> {
    if record.uid.is_empty() {
        return Err(LabelError::EmptyUid);
    }

    let qr = qr::generate_qr(&record.uid, QR_SIZE)?;
    let mut canvas = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, WHITE);
    imageops::overlay(&mut canvas, &qr.to_rgba8(), i64::from(QR_X), i64::from(QR_Y));

    let scale = PxScale::from(FONT_SIZE);
    for (line, y) in caption_lines(record).iter().zip(TEXT_LINE_YS) {
        let width = measure_text_width(font.font(), scale, line);
        if TEXT_X as u32 + width > CANVAS_WIDTH {
            tracing::warn!(line = %line, "Caption line exceeds canvas width and will be clipped");
        }
        draw_text_mut(&mut canvas, BLACK, TEXT_X, y, scale, font.font(), line);
    }

    tracing::debug!(uid = %record.uid, "Rendered label image");
    Ok(canvas)
}

/// The four caption lines for a record, in drawing order.
pub fn caption_lines(record: &DiscRecord) -> [String; 4] {
    [
        format!("UID: {}", record.uid),
        format!("Company: {}", record.company),
        format!("Mold: {}", record.mold),
        format!("Color: {}", record.color),
    ]
}

/// Write the label image as `<uid>.png` inside `dir`, overwriting silently.
pub fn persist(image: &RgbaImage, uid: &str, dir: &Path) -> Result<PathBuf, LabelError> {
    let path = dir.join(format!("{uid}.png"));
    image.save(&path)?;
    tracing::debug!(uid, path = %path.display(), "Label image written");
    Ok(path)
}
