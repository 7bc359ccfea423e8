// Monospace glyph resource: the first TrueType font that loads from an ordered
// candidate list, or the built-in 5x7 bitmap font when none does.
// Visual: with a system font the GIF looks like a real terminal; without one
// the text is blocky but still laid out at the same positions.
//
// Loaded once per run and only read afterwards; ASCII glyph bitmaps are
// rasterized up front so frames never touch the rasterizer for them.

use std::fs;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings, Metrics};
use log::{debug, info, warn};

use crate::draw::{self, GLYPH_ADVANCE, GLYPH_ROWS};
use crate::gamma::GammaLut;
use crate::types::{FrameBuffer, Rgb};

/// Monospace fonts tried in order after any user-supplied path.
pub fn default_candidates() -> Vec<PathBuf> {
    [
        // macOS
        "/System/Library/Fonts/Monaco.ttf",
        "/System/Library/Fonts/Menlo.ttc",
        "/Library/Fonts/Courier New.ttf",
        "/System/Library/Fonts/Supplemental/Courier New.ttf",
        // Linux
        "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
        "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
        "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
        // Windows
        "C:\\Windows\\Fonts\\consola.ttf",
        "C:\\Windows\\Fonts\\cour.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

struct RasterGlyph {
    metrics: Metrics,
    coverage: Vec<u8>, // metrics.width * metrics.height, row-major
}

struct TrueType {
    font: Font,
    ascent: f32,
    ascii: Vec<RasterGlyph>, // index = byte - 0x20
    lut: GammaLut,
}

enum Source {
    TrueType(Box<TrueType>),
    Bitmap { scale: i32 },
}

pub struct TextFont {
    size: f32,
    origin: String,
    source: Source,
}

impl TextFont {
    /// Try each candidate in order; the first that reads and parses wins.
    /// Never fails: exhausting the list yields the built-in bitmap font.
    pub fn load(candidates: &[PathBuf], size: f32) -> Self {
        for path in candidates {
            match Self::from_file(path, size) {
                Ok(font) => {
                    info!("Using font {}", path.display());
                    return font;
                }
                Err(reason) => debug!("Skipping font {}: {reason}", path.display()),
            }
        }
        warn!("No TrueType font found; using built-in 5x7 bitmap font");
        Self::builtin(size)
    }

    /// Built-in 5x7 font, scaled in whole pixels so one cell advances
    /// about 0.6em, the usual monospace proportion.
    pub fn builtin(size: f32) -> Self {
        let scale = ((size * 0.6 / GLYPH_ADVANCE as f32).round() as i32).max(1);
        Self { size, origin: "built-in 5x7".into(), source: Source::Bitmap { scale } }
    }

    fn from_file(path: &Path, size: f32) -> Result<Self, String> {
        let bytes = fs::read(path).map_err(|e| e.to_string())?;
        let mut font = Self::from_bytes(&bytes, size)?;
        font.origin = path.display().to_string();
        Ok(font)
    }

    pub fn from_bytes(bytes: &[u8], size: f32) -> Result<Self, String> {
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(str::to_owned)?;
        let ascent = font
            .horizontal_line_metrics(size)
            .map(|m| m.ascent)
            .unwrap_or(size);
        let ascii = (0x20u8..0x7F)
            .map(|b| {
                let (metrics, coverage) = font.rasterize(b as char, size);
                RasterGlyph { metrics, coverage }
            })
            .collect();
        Ok(Self {
            size,
            origin: "memory".into(),
            source: Source::TrueType(Box::new(TrueType { font, ascent, ascii, lut: GammaLut::new() })),
        })
    }

    /// Where the glyphs came from (file path or "built-in 5x7").
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Horizontal advance of `text` in pixels. Empty text measures 0.
    pub fn measure(&self, text: &str) -> f32 {
        match &self.source {
            Source::Bitmap { scale } => (text.chars().count() as i32 * GLYPH_ADVANCE * scale) as f32,
            Source::TrueType(tt) => text
                .chars()
                .map(|ch| match tt.cached(ch) {
                    Some(g) => g.metrics.advance_width,
                    None => tt.font.metrics(ch, self.size).advance_width,
                })
                .sum(),
        }
    }

    /// Draw `text` with its top-left (ascender line) at (x,y).
    pub fn draw(&self, fb: &mut FrameBuffer, x: f32, y: f32, text: &str, color: Rgb) {
        match &self.source {
            Source::Bitmap { scale } => {
                // centre the 7-row glyphs in the nominal line height
                let pad = ((self.size as i32 - GLYPH_ROWS * scale) / 2).max(0);
                draw::draw_text_5x7(fb, x.round() as i32, y.round() as i32 + pad, text, *scale, color);
            }
            Source::TrueType(tt) => {
                let baseline = y + tt.ascent;
                let mut pen = x;
                for ch in text.chars() {
                    let advance = match tt.cached(ch) {
                        Some(g) => {
                            tt.blit(fb, pen, baseline, &g.metrics, &g.coverage, color);
                            g.metrics.advance_width
                        }
                        None => {
                            let (metrics, coverage) = tt.font.rasterize(ch, self.size);
                            tt.blit(fb, pen, baseline, &metrics, &coverage, color);
                            metrics.advance_width
                        }
                    };
                    pen += advance;
                }
            }
        }
    }
}

impl TrueType {
    fn cached(&self, ch: char) -> Option<&RasterGlyph> {
        let code = ch as u32;
        if (0x20..0x7F).contains(&code) {
            self.ascii.get((code - 0x20) as usize)
        } else {
            None
        }
    }

    fn blit(&self, fb: &mut FrameBuffer, pen: f32, baseline: f32, m: &Metrics, coverage: &[u8], color: Rgb) {
        let left = pen.round() as i32 + m.xmin;
        let top = baseline.round() as i32 - (m.height as i32 + m.ymin);
        for row in 0..m.height {
            let py = top + row as i32;
            if py < 0 || py >= fb.height as i32 {
                continue;
            }
            for col in 0..m.width {
                let px = left + col as i32;
                if px < 0 || px >= fb.width as i32 {
                    continue;
                }
                let cov = coverage[row * m.width + col];
                if cov == 0 {
                    continue;
                }
                let idx = py as usize * fb.width + px as usize;
                let dst = Rgb::from_packed(fb.pixels[idx]);
                fb.pixels[idx] = self.lut.blend(dst, color, cov).packed();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_candidates_fall_back_to_builtin() {
        let font = TextFont::load(&[PathBuf::from("/definitely/not/here.ttf")], 24.0);
        assert_eq!(font.origin(), "built-in 5x7");
    }

    #[test]
    fn unparseable_candidate_is_skipped() {
        let mut bogus = tempfile::NamedTempFile::new().unwrap();
        bogus.write_all(b"this is not a font").unwrap();
        let font = TextFont::load(&[bogus.path().to_path_buf()], 24.0);
        assert_eq!(font.origin(), "built-in 5x7");
    }

    #[test]
    fn empty_list_is_builtin() {
        assert_eq!(TextFont::load(&[], 24.0).origin(), "built-in 5x7");
    }

    #[test]
    fn builtin_measures_fixed_cells() {
        let font = TextFont::builtin(24.0);
        assert_eq!(font.measure(""), 0.0);
        // 24 px => scale 2 => 12 px cells
        assert_eq!(font.measure("abc"), 36.0);
        assert_eq!(font.measure("ñ"), 12.0);
    }

    #[test]
    fn builtin_draw_stays_inside_line_height() {
        let font = TextFont::builtin(24.0);
        let mut fb = FrameBuffer::filled(100, 60, Rgb(0, 0, 0));
        font.draw(&mut fb, 10.0, 20.0, "Wg", Rgb(255, 255, 255));
        let lit_rows: Vec<usize> = (0..60)
            .filter(|&y| (0..100).any(|x| fb.get(x, y) != Some(Rgb(0, 0, 0))))
            .collect();
        assert!(!lit_rows.is_empty());
        assert!(*lit_rows.first().unwrap() >= 20);
        assert!(*lit_rows.last().unwrap() < 44);
    }
}
