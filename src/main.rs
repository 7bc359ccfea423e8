// What you GET:
// • One looping GIF per preset (autocomplete_alpha.gif, ..._beta.gif, ..._gamma.gif).
// • Each shows a terminal prompt: a command is typed, a grey suggestion
//   appears after it, then the suggestion is accepted with a brief flash.
// • RUST_LOG=debug shows which fonts were tried.

mod draw;
mod error;
mod font;
mod gamma;
mod presets;
mod render;
mod sequence;
mod settings;
mod timing;
mod types;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use error::Error;
use font::TextFont;
use presets::Preset;
use settings::RenderSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Selection {
    All,
    Alpha,
    Beta,
    Gamma,
}

impl Selection {
    fn presets(self) -> Vec<Preset> {
        match self {
            Selection::All => Preset::ALL.to_vec(),
            Selection::Alpha => vec![Preset::Alpha],
            Selection::Beta => vec![Preset::Beta],
            Selection::Gamma => vec![Preset::Gamma],
        }
    }
}

/// Render terminal autocomplete demo GIFs.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Which preset animation(s) to render
    #[arg(short, long, value_enum, default_value_t = Selection::All)]
    preset: Selection,

    /// Directory the GIFs are written to (created if missing)
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// TrueType font tried before the built-in candidate list
    #[arg(short, long)]
    font: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), Error> {
    let settings = RenderSettings::default();
    settings.validate()?;

    fs::create_dir_all(&args.out_dir).map_err(|e| Error::io(&args.out_dir, e))?;

    /* Font is resolved once and shared by every frame of every preset. */
    let mut candidates: Vec<PathBuf> = args.font.into_iter().collect();
    candidates.extend(font::default_candidates());
    let font = TextFont::load(&candidates, settings.font_size);

    for preset in args.preset.presets() {
        let path = args.out_dir.join(preset.file_name());
        sequence::render_animation(&preset.config(), &settings, &font, &path)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .ok();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_render_every_preset_into_cwd() {
        let args = Args::try_parse_from(["autocomplete-gif"]).unwrap();
        assert_eq!(args.preset.presets(), Preset::ALL.to_vec());
        assert_eq!(args.out_dir, PathBuf::from("."));
        assert!(args.font.is_none());
    }

    #[test]
    fn single_preset_and_font() {
        let args = Args::try_parse_from([
            "autocomplete-gif", "--preset", "beta", "--out-dir", "gifs", "--font", "/tmp/mono.ttf",
        ])
        .unwrap();
        assert_eq!(args.preset.presets(), vec![Preset::Beta]);
        assert_eq!(args.out_dir, PathBuf::from("gifs"));
        assert_eq!(args.font, Some(PathBuf::from("/tmp/mono.ttf")));
    }

    #[test]
    fn unknown_preset_is_rejected() {
        assert!(Args::try_parse_from(["autocomplete-gif", "--preset", "delta"]).is_err());
    }
}
