//! Caption font loading with system fallback.

use std::path::{Path, PathBuf};

use ab_glyph::FontVec;

use crate::LabelError;

/// Whether the loaded font came from the preferred path or a system fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontOrigin {
    Preferred,
    Fallback,
}

/// An owned caption font plus where it was loaded from.
pub struct LabelFont {
    font: FontVec,
    origin: FontOrigin,
    path: PathBuf,
}

impl LabelFont {
    /// Load the preferred font file if given, otherwise (or on failure) probe
    /// well-known system font locations.
    ///
    /// A failed preferred load is a warning, not an error; only the absence
    /// of any usable font is fatal.
    pub fn load(preferred: Option<&Path>) -> Result<Self, LabelError> {
        if let Some(path) = preferred {
            match load_font_file(path) {
                Ok(font) => {
                    tracing::debug!(path = %path.display(), "Loaded preferred label font");
                    return Ok(Self {
                        font,
                        origin: FontOrigin::Preferred,
                        path: path.to_path_buf(),
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Preferred font unavailable, trying system fonts"
                    );
                }
            }
        }

        for candidate in system_font_candidates() {
            let path = Path::new(candidate);
            if let Ok(font) = load_font_file(path) {
                tracing::debug!(path = candidate, "Using system font for labels");
                return Ok(Self {
                    font,
                    origin: FontOrigin::Fallback,
                    path: path.to_path_buf(),
                });
            }
        }

        Err(LabelError::NoFont)
    }

    pub fn font(&self) -> &FontVec {
        &self.font
    }

    pub fn origin(&self) -> FontOrigin {
        self.origin
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == FontOrigin::Fallback
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn load_font_file(path: &Path) -> Result<FontVec, LabelError> {
    let data = std::fs::read(path)?;
    FontVec::try_from_vec(data).map_err(|_| LabelError::FontParse)
}

fn system_font_candidates() -> &'static [&'static str] {
    #[cfg(target_os = "macos")]
    {
        &[
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Helvetica.ttf",
            "/System/Library/Fonts/Supplemental/Courier New.ttf",
        ]
    }
    #[cfg(target_os = "windows")]
    {
        &["C:\\Windows\\Fonts\\arial.ttf", "C:\\Windows\\Fonts\\segoeui.ttf"]
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        ]
    }
}
