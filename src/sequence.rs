// Turns a config into a finished GIF: sample time at a fixed rate, derive the
// state, paint the frame, feed it straight to the encoder, write the file.
// Visual expectation: a 5 s loop at 30 fps that replays forever.

use std::fs;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use log::{debug, info};

use crate::error::Error;
use crate::font::TextFont;
use crate::render::paint_frame;
use crate::settings::RenderSettings;
use crate::timing::frame_state;
use crate::types::{FrameBuffer, RenderConfig, Rgb};

/// NeuQuant sampling factor (1 = best/slowest, 30 = fastest).
const QUANT_SPEED: i32 = 10;

/// floor(duration * fps)
pub fn frame_count(settings: &RenderSettings) -> usize {
    (settings.duration_secs * settings.fps as f64).floor() as usize
}

/// (index, t) for every frame, in playback order; t = index / fps.
pub fn frame_times(settings: &RenderSettings) -> impl Iterator<Item = (usize, f64)> {
    let fps = settings.fps as f64;
    (0..frame_count(settings)).map(move |f| (f, f as f64 / fps))
}

/// Per-frame delay, truncated to whole milliseconds.
pub fn frame_delay_ms(fps: u32) -> u32 {
    1000 / fps.max(1)
}

fn to_rgba(fb: &FrameBuffer) -> RgbaImage {
    RgbaImage::from_fn(fb.width as u32, fb.height as u32, |x, y| {
        let Rgb(r, g, b) = Rgb::from_packed(fb.pixels[y as usize * fb.width + x as usize]);
        Rgba([r, g, b, 255])
    })
}

/// Encode canvases, in the order given, into an infinitely looping GIF.
pub fn encode_gif<I>(frames: I, fps: u32) -> Result<Vec<u8>, Error>
where
    I: IntoIterator<Item = FrameBuffer>,
{
    let delay = Delay::from_numer_denom_ms(frame_delay_ms(fps), 1);
    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new_with_speed(&mut bytes, QUANT_SPEED);
        encoder.set_repeat(Repeat::Infinite)?;
        for fb in frames {
            encoder.encode_frame(Frame::from_parts(to_rgba(&fb), 0, 0, delay))?;
        }
        // encoder drop writes the GIF trailer
    }
    Ok(bytes)
}

/// Render `config` with `settings` and write the GIF to `path`.
/// Returns the number of frames written.
pub fn render_animation(
    config: &RenderConfig,
    settings: &RenderSettings,
    font: &TextFont,
    path: &Path,
) -> Result<usize, Error> {
    settings.validate()?;
    let total = frame_count(settings);
    info!("Generating {}...", path.display());
    debug!(
        "{} frames at {} fps, {}x{}, font {}",
        total,
        settings.fps,
        settings.width,
        settings.height,
        font.origin()
    );

    let frames = frame_times(settings).map(|(_, t)| {
        let state = frame_state(t, config, &settings.timing);
        paint_frame(&state, config, settings, font)
    });
    let bytes = encode_gif(frames, settings.fps)?;

    fs::write(path, &bytes).map_err(|e| Error::io(path, e))?;
    info!("Saved {} ({} frames, {} bytes)", path.display(), total, bytes.len());
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::AnimationDecoder;
    use image::codecs::gif::GifDecoder;
    use std::io::BufReader;

    fn small() -> RenderSettings {
        RenderSettings { width: 240, height: 60, fps: 10, duration_secs: 1.0, ..RenderSettings::default() }
    }

    #[test]
    fn default_run_has_150_frames() {
        assert_eq!(frame_count(&RenderSettings::default()), 150);
        assert_eq!(frame_delay_ms(30), 33);
    }

    #[test]
    fn frame_times_cover_each_index_once_in_order() {
        let settings = RenderSettings::default();
        let times: Vec<(usize, f64)> = frame_times(&settings).collect();
        assert_eq!(times.len(), 150);
        for (i, (f, t)) in times.iter().enumerate() {
            assert_eq!(*f, i);
            assert_eq!(*t, i as f64 / 30.0);
        }
        assert!(times.windows(2).all(|w| w[0].1 < w[1].1));
        assert!(times.last().map(|(_, t)| *t < 5.0).unwrap_or(false));
    }

    #[test]
    fn fractional_duration_rounds_down() {
        let settings = RenderSettings { fps: 30, duration_secs: 0.99, ..RenderSettings::default() };
        assert_eq!(frame_count(&settings), 29);
    }

    #[test]
    fn writes_a_decodable_looping_gif() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.gif");
        let settings = small();
        let font = TextFont::builtin(settings.font_size);
        let cfg = RenderConfig::new("plan", " a migration");

        let written = render_animation(&cfg, &settings, &font, &path).unwrap();
        assert_eq!(written, 10);

        let file = fs::File::open(&path).unwrap();
        let decoder = GifDecoder::new(BufReader::new(file)).unwrap();
        let frames = decoder.into_frames().collect_frames().unwrap();
        assert_eq!(frames.len(), 10);
        for frame in &frames {
            assert_eq!(frame.buffer().dimensions(), (240, 60));
        }
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.gif");
        let settings = small();
        let font = TextFont::builtin(settings.font_size);
        let err = render_animation(&RenderConfig::new("a", "b"), &settings, &font, &path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }), "{err}");
    }

    #[test]
    fn invalid_settings_abort_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.gif");
        let settings = RenderSettings { fps: 0, ..small() };
        let font = TextFont::builtin(settings.font_size);
        let err = render_animation(&RenderConfig::new("a", "b"), &settings, &font, &path).unwrap_err();
        assert!(matches!(err, Error::InvalidSettings(_)));
        assert!(!path.exists());
    }
}
