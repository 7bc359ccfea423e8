// Every fixed number the animation uses, gathered in one place and passed
// explicitly into the renderer and the sequence writer.

use crate::error::Error;
use crate::timing::Timing;
use crate::types::Rgb;

/// Terminal colour scheme (dark theme).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    pub grey: Rgb,
    pub dark_grey: Rgb, // ghost suggestion
    pub white: Rgb,     // typed text
    pub yellow: Rgb,    // prompt marker, "accepting edits"
    pub blue: Rgb,      // working directory
    pub red: Rgb,       // "no sandbox"
    pub purple: Rgb,    // "auto"
    pub border: Rgb,
    pub cursor: Rgb,
    pub flash: Rgb,     // box fill right after accept
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(0, 0, 0),
            grey: Rgb(128, 128, 128),
            dark_grey: Rgb(96, 96, 96),
            white: Rgb(230, 230, 230),
            yellow: Rgb(220, 220, 170),
            blue: Rgb(86, 156, 214),
            red: Rgb(206, 145, 120),
            purple: Rgb(197, 134, 192),
            border: Rgb(51, 51, 51),
            cursor: Rgb(204, 204, 204),
            flash: Rgb(30, 30, 30),
        }
    }
}

/// Pixel geometry of the chrome and the prompt box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub margin: i32,         // left/right inset of status text
    pub top_y: i32,          // top status line
    pub bottom_y: i32,       // bottom status line
    pub sandbox_gap: i32,    // space between "no sandbox" and right-aligned "auto"
    pub box_x: i32,
    pub box_y: i32,
    pub box_h: i32,          // width is canvas width - 2 * box_x
    pub border_width: i32,
    pub text_inset_x: i32,   // prompt marker offset inside the box
    pub text_inset_y: i32,
    pub cursor_width: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            margin: 20,
            top_y: 15,
            bottom_y: 170,
            sandbox_gap: 350,
            box_x: 20,
            box_y: 60,
            box_h: 80,
            border_width: 2,
            text_inset_x: 20,
            text_inset_y: 25,
            cursor_width: 12,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub fps: u32,
    pub duration_secs: f64,
    pub font_size: f32,
    pub timing: Timing,
    pub palette: Palette,
    pub layout: Layout,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 220,
            fps: 30,
            duration_secs: 5.0,
            font_size: 24.0,
            timing: Timing::default(),
            palette: Palette::default(),
            layout: Layout::default(),
        }
    }
}

impl RenderSettings {
    /// Reject settings that would produce an empty or nonsensical animation.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidSettings(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > u16::MAX as usize || self.height > u16::MAX as usize {
            return Err(Error::InvalidSettings(format!(
                "GIF canvas is limited to 65535 px per side, got {}x{}",
                self.width, self.height
            )));
        }
        if self.fps == 0 {
            return Err(Error::InvalidSettings("fps must be > 0".into()));
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(Error::InvalidSettings(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration_secs
            )));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(Error::InvalidSettings("font size must be > 0".into()));
        }
        if !self.timing.thresholds.is_ordered() {
            return Err(Error::InvalidSettings(format!(
                "timing thresholds must satisfy start < finish <= suggest < accept, got {:?}",
                self.timing.thresholds
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::TimingThresholds;

    #[test]
    fn defaults_validate() {
        assert!(RenderSettings::default().validate().is_ok());
    }

    #[test]
    fn rejects_broken_values() {
        let base = RenderSettings::default();
        let cases = [
            RenderSettings { fps: 0, ..base.clone() },
            RenderSettings { duration_secs: 0.0, ..base.clone() },
            RenderSettings { duration_secs: f64::INFINITY, ..base.clone() },
            RenderSettings { width: 0, ..base.clone() },
            RenderSettings { font_size: -1.0, ..base.clone() },
            RenderSettings {
                timing: Timing {
                    thresholds: TimingThresholds { show_suggest: 4.0, ..TimingThresholds::default() },
                    ..Timing::default()
                },
                ..base.clone()
            },
        ];
        for bad in cases {
            assert!(matches!(bad.validate(), Err(Error::InvalidSettings(_))), "{bad:?}");
        }
    }
}
