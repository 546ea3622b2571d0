//! Back-label rasterization.
//!
//! The shell renders the "Back Menu" text into a fixed 256x64 RGBA buffer
//! and hands it across the bridge once per session, after the host window
//! exists. The host treats it as replaceable chrome; a missing font degrades
//! to a transparent buffer of the same shape.

use genesis_bridge::LabelBitmap;
use genesis_config::LabelConfig;
use log::warn;

pub const LABEL_WIDTH: u32 = 256;
pub const LABEL_HEIGHT: u32 = 64;
pub const LABEL_TEXT: &str = "Back Menu";

const LABEL_PX: f32 = 32.0;

/// Font search order when no override is configured.
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// Load the label font from the configured override or the system paths.
pub fn load_label_font(config: &LabelConfig) -> Option<fontdue::Font> {
    let configured = config.font.as_ref().and_then(|path| {
        match std::fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(error) => {
                warn!(
                    "failed to read configured label font {}: {error}",
                    path.display()
                );
                None
            }
        }
    });

    let bytes =
        configured.or_else(|| SYSTEM_FONT_PATHS.iter().find_map(|p| std::fs::read(p).ok()))?;

    match fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()) {
        Ok(font) => Some(font),
        Err(error) => {
            warn!("failed to parse label font: {error}");
            None
        }
    }
}

/// Rasterize `text` centered into the fixed label buffer: white glyphs with
/// coverage as alpha on a transparent background.
pub fn render_label(font: Option<&fontdue::Font>, text: &str) -> LabelBitmap {
    let width = LABEL_WIDTH as usize;
    let height = LABEL_HEIGHT as usize;
    let mut pixels = vec![0u8; width * height * 4];

    if let Some(font) = font {
        blit_text(font, text, width, height, &mut pixels);
    } else {
        warn!("no label font available; pushing a transparent label");
    }

    LabelBitmap::new(LABEL_WIDTH, LABEL_HEIGHT, pixels)
        .expect("label buffer is built with the declared shape")
}

fn blit_text(font: &fontdue::Font, text: &str, width: usize, height: usize, pixels: &mut [u8]) {
    let (ascent, descent) = font
        .horizontal_line_metrics(LABEL_PX)
        .map(|m| (m.ascent, m.descent))
        .unwrap_or((LABEL_PX * 0.8, -(LABEL_PX * 0.2)));

    // Simple horizontal advance; kerning is not worth it at this size.
    let rasterized: Vec<(fontdue::Metrics, Vec<u8>)> =
        text.chars().map(|ch| font.rasterize(ch, LABEL_PX)).collect();
    let run_width: f32 = rasterized.iter().map(|(m, _)| m.advance_width).sum();

    let mut pen_x = (width as f32 - run_width) / 2.0;
    let baseline = (height as f32 + ascent + descent) / 2.0;

    for (m, coverage) in &rasterized {
        let left = (pen_x + m.xmin as f32) as i32;
        let top = (baseline - (m.ymin + m.height as i32) as f32) as i32;

        for row in 0..m.height {
            for col in 0..m.width {
                let x = left + col as i32;
                let y = top + row as i32;
                if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
                    continue;
                }

                let alpha = coverage[row * m.width + col];
                if alpha == 0 {
                    continue;
                }

                let idx = (y as usize * width + x as usize) * 4;
                pixels[idx] = 255;
                pixels[idx + 1] = 255;
                pixels[idx + 2] = 255;
                pixels[idx + 3] = pixels[idx + 3].max(alpha);
            }
        }

        pen_x += m.advance_width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_shape_holds_without_a_font() {
        let label = render_label(None, LABEL_TEXT);
        assert_eq!(label.width(), LABEL_WIDTH);
        assert_eq!(label.height(), LABEL_HEIGHT);
        assert_eq!(
            label.pixels().len(),
            (LABEL_WIDTH * LABEL_HEIGHT * 4) as usize
        );
        assert!(label.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn label_shape_holds_with_a_font() {
        let Some(font) = load_label_font(&LabelConfig::default()) else {
            // No system font in this environment; the transparent path above
            // covers the shape invariant.
            return;
        };

        let label = render_label(Some(&font), LABEL_TEXT);
        assert_eq!(
            label.pixels().len(),
            (LABEL_WIDTH * LABEL_HEIGHT * 4) as usize
        );
        // Some glyph coverage landed inside the buffer.
        assert!(label.pixels().chunks_exact(4).any(|px| px[3] > 0));
    }
}
