// Core types shared by timing, drawing and the sequence writer.

/// One canvas. Created fresh per frame, handed to the encoder, then dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,      // canvas width in pixels
    pub height: usize,     // canvas height in pixels
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB
}

impl FrameBuffer {
    /// A blank canvas filled with `color`.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self { width, height, pixels: vec![color.packed(); width * height] }
    }

    /// Pixel at (x,y), or None when out of bounds.
    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Rgb::from_packed(self.pixels[y * self.width + x]))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    #[inline]
    pub fn packed(self) -> u32 {
        ((self.0 as u32) << 16) | ((self.1 as u32) << 8) | self.2 as u32
    }

    #[inline]
    pub fn from_packed(px: u32) -> Self {
        Rgb(((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8)
    }
}

/// The two strings one animation is built from. Immutable for the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub input_text: String,
    pub suggestion_text: String,
}

impl RenderConfig {
    pub fn new(input_text: impl Into<String>, suggestion_text: impl Into<String>) -> Self {
        Self { input_text: input_text.into(), suggestion_text: suggestion_text.into() }
    }
}

/// Visual state for a single instant. Derived, never stored between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameState {
    pub visible_prefix: String,
    pub show_ghost: bool,
    pub is_accepted: bool,
    pub flash_active: bool,
    pub cursor_visible: bool,
}

impl FrameState {
    /// Text drawn after the prompt marker: the typed prefix, or the whole
    /// completed command once the suggestion is accepted.
    pub fn display_text(&self, config: &RenderConfig) -> String {
        if self.is_accepted {
            format!("{}{}", config.input_text, config.suggestion_text)
        } else {
            self.visible_prefix.clone()
        }
    }
}
