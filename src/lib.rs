//! # MirrorStroke
//!
//! Mirror symmetry for multi-stroke painting: every stroke is expanded into
//! up to four synchronized copies across two movable axis guides and an
//! optional central symmetry, each painted with its own brush transform.
//!
//! ## Architecture
//!
//! MirrorStroke is organized as a workspace with multiple crates:
//!
//! 1. **mirrorstroke-core** - Coordinates, extents, errors, event bus
//! 2. **mirrorstroke-settings** - Mirror property catalogue, settings files
//! 3. **mirrorstroke-paint** - Guide binding, mirror state, stroke derivation,
//!    brush transforms, in-memory image host
//! 4. **mirrorstroke** - Logging setup and the session replay binary

pub use mirrorstroke_core::{
    AppEvent, Coords, Error, EventBus, EventCategory, EventFilter, Extent, GuideError, GuideEvent,
    GuideId, Orientation, Result, StrokeEvent, SymmetryError, SymmetryEvent,
};

pub use mirrorstroke_settings::{
    MirrorSettings, PropertySpec, SettingValue, SettingsError, SettingsPersistence,
    MIRROR_PROPERTIES,
};

pub use mirrorstroke_paint::{
    derive_strokes, select_transform, Document, GuideBinding, GuideHandle, GuideRemoval, Image,
    Mirror, MirrorState, MultiStroke, SymmetryHost, TransformDescriptor, TransformKind,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable, multi-line records
    #[default]
    Pretty,
    /// One JSON object per record
    Json,
}

/// Initialize logging with the default configuration
///
/// Pretty console output on stdout, filtered by `RUST_LOG` (INFO by default).
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::default())
}

/// Initialize logging with an explicit output format
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.as_str()));

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .pretty();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .json();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
