//! Replays a short mirrored stroke on an in-memory image.
//!
//! Usage: `mirrorstroke [--json] [--save] [SETTINGS_FILE]`
//!
//! Mirror settings are read from `SETTINGS_FILE` (JSON or TOML) or from the
//! default settings location. With `--save` the settings in effect after the
//! session are written back.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use mirrorstroke::{
    init_logging_with, Coords, Document, EventBus, EventFilter, Extent, LogFormat, MultiStroke,
    SettingsPersistence, BUILD_DATE, VERSION,
};

const CANVAS: Extent = Extent {
    width: 800,
    height: 600,
};

/// Brush size used for transform lookups
const BRUSH_SIZE: i32 = 32;

/// MirrorStroke - replay a mirrored stroke
#[derive(Parser, Debug)]
#[command(name = "mirrorstroke")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Emit logs as JSON
    #[arg(long)]
    json: bool,

    /// Write the settings in effect back after the session
    #[arg(long)]
    save: bool,

    /// Settings file (JSON or TOML); defaults to the user config location
    settings: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let format = if args.json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_logging_with(format)?;
    tracing::info!("MirrorStroke {} (built {})", VERSION, BUILD_DATE);

    let path = match args.settings {
        Some(path) => path,
        None => SettingsPersistence::default_path()?,
    };
    let mut persistence = SettingsPersistence::load_or_default(&path)?;

    let events = Arc::new(EventBus::new());
    events.subscribe(EventFilter::All, |event| {
        tracing::debug!("{}", event.description());
    });

    let mut document = Document::new(CANVAS, events);
    document.apply_mirror_settings(persistence.settings())?;
    if document.mirror().is_some_and(|m| !m.state().is_mirroring()) {
        tracing::warn!("No symmetry enabled in {}", path.display());
    }

    let stroke = [(120.0, 80.0), (140.0, 95.0), (165.0, 115.0)];
    for (x, y) in stroke {
        let count = document.begin_stroke(Coords::new(x, y)).len();
        for index in 0..count {
            let coords = document.image().strokes()[index];
            match document.transform_for(index, BRUSH_SIZE, BRUSH_SIZE) {
                Some(transform) => {
                    tracing::info!("stroke {} at {}: {}", index, coords, transform.kind())
                }
                None => tracing::info!("stroke {} at {}: identity", index, coords),
            }
        }
    }

    if args.save {
        if let Some(mirror) = document.mirror() {
            tracing::info!("Saving {} settings to {}", mirror.label(), path.display());
            persistence.replace(mirror.to_settings());
            persistence.save()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_and_settings_path() {
        let args =
            Args::try_parse_from(["mirrorstroke", "--json", "--save", "mirror.toml"]).unwrap();
        assert!(args.json);
        assert!(args.save);
        assert_eq!(args.settings, Some(PathBuf::from("mirror.toml")));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["mirrorstroke", "--sav"]).is_err());
        assert!(Args::try_parse_from(["mirrorstroke", "--verbose", "mirror.toml"]).is_err());
    }

    #[test]
    fn test_settings_path_is_optional() {
        let args = Args::try_parse_from(["mirrorstroke"]).unwrap();
        assert!(!args.json);
        assert!(args.settings.is_none());
    }
}
