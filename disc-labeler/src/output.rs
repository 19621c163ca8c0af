//! Collect rendered label images and compile them into one multi-page PDF.

use std::fs;
use std::io::BufWriter;
use std::path::Path;

use image::DynamicImage;
use printpdf::{Image as PdfImage, ImageTransform, Mm, PdfDocument, image_crate};

/// Resolution used to map canvas pixels onto PDF page geometry.
const PDF_DPI: f32 = 96.0;

const PDF_TITLE: &str = "Disc QR Codes";
const PDF_LAYER: &str = "labels";

/// Errors raised while collecting or compiling label images.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("PDF write error: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("image buffer size mismatch")]
    BufferMismatch,
}

/// Result of a compile call.
#[derive(Debug, PartialEq, Eq)]
pub enum CompileOutcome {
    /// The PDF was written with this many pages.
    Written { pages: usize },
    /// No input images; nothing was written.
    NothingToDo,
}

/// Load every `*.png` in the directory, sorted by filename.
///
/// Sorting by filename (the uid) makes page order deterministic instead of
/// inheriting whatever order the directory listing happens to yield.
pub fn collect(dir: &Path) -> Result<Vec<DynamicImage>, OutputError> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("png"))
        .collect();
    paths.sort();

    let mut images = Vec::with_capacity(paths.len());
    for path in &paths {
        images.push(image::open(path)?);
    }
    tracing::debug!(count = images.len(), dir = %dir.display(), "Collected label images");
    Ok(images)
}

/// Write one PDF page per input image, in input order.
///
/// An empty input returns [`CompileOutcome::NothingToDo`] without touching
/// the filesystem. An existing artifact at `path` is overwritten.
pub fn compile(images: &[DynamicImage], path: &Path) -> Result<CompileOutcome, OutputError> {
    let Some(first) = images.first() else {
        return Ok(CompileOutcome::NothingToDo);
    };

    let (doc, first_page, first_layer) = PdfDocument::new(
        PDF_TITLE,
        px_to_mm(first.width()),
        px_to_mm(first.height()),
        PDF_LAYER,
    );

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    for (i, img) in images.iter().enumerate() {
        if i > 0 {
            let (page, new_layer) =
                doc.add_page(px_to_mm(img.width()), px_to_mm(img.height()), PDF_LAYER);
            layer = doc.get_page(page).get_layer(new_layer);
        }

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let buffer = image_crate::RgbImage::from_raw(width, height, rgb.into_raw())
            .ok_or(OutputError::BufferMismatch)?;
        let pdf_image =
            PdfImage::from_dynamic_image(&image_crate::DynamicImage::ImageRgb8(buffer));
        pdf_image.add_to_layer(
            layer.clone(),
            ImageTransform {
                dpi: Some(PDF_DPI),
                ..Default::default()
            },
        );
    }

    let file = fs::File::create(path)?;
    doc.save(&mut BufWriter::new(file))?;

    Ok(CompileOutcome::Written {
        pages: images.len(),
    })
}

fn px_to_mm(px: u32) -> Mm {
    Mm(px as f32 * 25.4 / PDF_DPI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn solid_image(size: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255])))
    }

    #[test]
    fn compile_empty_input_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("out.pdf");
        let outcome = compile(&[], &pdf).unwrap();
        assert_eq!(outcome, CompileOutcome::NothingToDo);
        assert!(!pdf.exists());
    }

    #[test]
    fn compile_writes_one_page_per_image() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("out.pdf");
        let images = [solid_image(30), solid_image(40)];
        let outcome = compile(&images, &pdf).unwrap();
        assert_eq!(outcome, CompileOutcome::Written { pages: 2 });

        let bytes = fs::read(&pdf).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn collect_returns_images_sorted_by_filename() {
        let dir = tempfile::tempdir().unwrap();
        // Written out of order on purpose; sizes mark identity.
        solid_image(20).save(dir.path().join("b.png")).unwrap();
        solid_image(10).save(dir.path().join("a.png")).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let images = collect(dir.path()).unwrap();
        let widths: Vec<u32> = images.iter().map(|i| i.width()).collect();
        assert_eq!(widths, [10, 20]);
    }

    #[test]
    fn collect_empty_directory_yields_no_images() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect(dir.path()).unwrap().is_empty());
    }
}
