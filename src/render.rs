// Paints one frame from a FrameState. Stateless: every call starts from a
// blank canvas, so frames never leak drawing into each other.
//
// What the frame looks like:
//   Using: 1 GEMINI.md file                       accepting edits (shift + tab to toggle)
//   +--------------------------------------------------------------------------------+
//   | > git commit -m "perf: improve database query...                               |
//   +--------------------------------------------------------------------------------+
//   ~/projects/tab-auto-complete-demo        no sandbox (see /docs)                auto

use crate::draw::{fill_rect, stroke_rect};
use crate::font::TextFont;
use crate::settings::RenderSettings;
use crate::types::{FrameBuffer, FrameState, RenderConfig};

pub const TOP_LEFT: &str = "Using: 1 GEMINI.md file";
pub const ACCEPT_MSG: &str = "accepting edits";
pub const TOGGLE_MSG: &str = " (shift + tab to toggle)";
pub const CWD: &str = "~/projects/tab-auto-complete-demo";
pub const AUTO: &str = "auto";
pub const SANDBOX: &str = "no sandbox";
pub const DOCS: &str = " (see /docs)";
pub const PROMPT: &str = "> ";

/// Where the dynamic parts of the prompt line land, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PromptGeometry {
    pub text_x: f32,   // start of typed text (after "> ")
    pub text_y: f32,
    pub ghost_x: f32,  // start of ghost suggestion
    pub cursor_x: f32, // left edge of the block cursor
}

/// Horizontal positions for the prompt line given the text currently shown.
pub fn prompt_geometry(display_text: &str, settings: &RenderSettings, font: &TextFont) -> PromptGeometry {
    let l = &settings.layout;
    let start_x = (l.box_x + l.text_inset_x) as f32;
    let text_y = (l.box_y + l.text_inset_y) as f32;
    let text_x = start_x + font.measure(PROMPT);
    let end_x = text_x + font.measure(display_text);
    PromptGeometry { text_x, text_y, ghost_x: end_x, cursor_x: end_x }
}

/// Left edge of "no sandbox (see /docs)": a fixed gap before the right-aligned
/// "auto", widened when the measured fragments would not fit in it.
pub fn sandbox_x(settings: &RenderSettings, font: &TextFont) -> f32 {
    let l = &settings.layout;
    let auto_x = settings.width as f32 - l.margin as f32 - font.measure(AUTO);
    let needed = font.measure(SANDBOX) + font.measure(DOCS) + font.measure(" ");
    auto_x - (l.sandbox_gap as f32).max(needed)
}

/// Paint the full frame for `state`.
pub fn paint_frame(state: &FrameState, config: &RenderConfig, settings: &RenderSettings, font: &TextFont) -> FrameBuffer {
    let p = &settings.palette;
    let l = &settings.layout;
    let width = settings.width as f32;
    let margin = l.margin as f32;
    let mut fb = FrameBuffer::filled(settings.width, settings.height, p.background);

    /* --- Static chrome --- */
    let top = l.top_y as f32;
    font.draw(&mut fb, margin, top, TOP_LEFT, p.grey);

    let accept_w = font.measure(ACCEPT_MSG);
    let toggle_w = font.measure(TOGGLE_MSG);
    font.draw(&mut fb, width - margin - accept_w - toggle_w, top, ACCEPT_MSG, p.yellow);
    font.draw(&mut fb, width - margin - toggle_w, top, TOGGLE_MSG, p.grey);

    let bottom = l.bottom_y as f32;
    font.draw(&mut fb, margin, bottom, CWD, p.blue);

    let auto_w = font.measure(AUTO);
    font.draw(&mut fb, width - margin - auto_w, bottom, AUTO, p.purple);

    let sx = sandbox_x(settings, font);
    font.draw(&mut fb, sx, bottom, SANDBOX, p.red);
    font.draw(&mut fb, sx + font.measure(SANDBOX), bottom, DOCS, p.grey);

    /* --- Prompt box --- */
    let box_w = settings.width as i32 - 2 * l.box_x;
    let (x0, y0, x1, y1) = (l.box_x, l.box_y, l.box_x + box_w, l.box_y + l.box_h);
    stroke_rect(&mut fb, x0, y0, x1, y1, l.border_width, p.border);
    if state.flash_active {
        fill_rect(&mut fb, x0 + l.border_width, y0 + l.border_width, x1 - l.border_width, y1 - l.border_width, p.flash);
    }

    /* --- Dynamic content --- */
    let text = state.display_text(config);
    let g = prompt_geometry(&text, settings, font);
    font.draw(&mut fb, (l.box_x + l.text_inset_x) as f32, g.text_y, PROMPT, p.yellow);
    font.draw(&mut fb, g.text_x, g.text_y, &text, p.white);

    if state.show_ghost {
        font.draw(&mut fb, g.ghost_x, g.text_y, &config.suggestion_text, p.dark_grey);
    }

    if state.cursor_visible {
        let cx = g.cursor_x.round() as i32;
        let cy = g.text_y.round() as i32;
        fill_rect(&mut fb, cx, cy, cx + l.cursor_width, cy + settings.font_size.round() as i32, p.cursor);
    }

    fb
}
