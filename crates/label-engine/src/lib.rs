//! Label rendering for disc records.
//!
//! Produces a fixed-layout raster label per record: a QR symbol encoding the
//! uid, pasted onto a white canvas above four caption lines (uid, company,
//! mold, color).

pub mod font;
pub mod label;
pub mod qr;
pub mod text;

// Re-exports for convenience
pub use font::{FontOrigin, LabelFont};
pub use label::{persist, render};
pub use qr::generate_qr;

/// Label canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 300;

/// Label canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 350;

/// Side length of the rescaled QR symbol in pixels.
pub const QR_SIZE: u32 = 200;

/// Top-left position of the QR symbol on the canvas.
pub const QR_X: u32 = 50;
pub const QR_Y: u32 = 10;

/// Left edge of the caption block.
pub const TEXT_X: i32 = 10;

/// Vertical offsets of the four caption lines (uid, company, mold, color).
pub const TEXT_LINE_YS: [i32; 4] = [220, 250, 280, 310];

/// Caption font size in pixels.
pub const FONT_SIZE: f32 = 15.0;

/// Errors raised while rendering or persisting a label.
#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("QR encode error: {0}")]
    QrEncode(String),

    #[error("record has an empty uid")]
    EmptyUid,

    #[error("no usable label font found (set a font path or install system fonts)")]
    NoFont,

    #[error("failed to parse font data (TTF/OTF)")]
    FontParse,

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
