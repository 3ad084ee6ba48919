//! Settings errors.

use std::io;
use std::path::PathBuf;

use mirrorstroke_core::SymmetryError;
use thiserror::Error;

/// Failure reading, writing or checking mirror settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No platform config directory, or it could not be created
    #[error("settings directory unavailable: {0}")]
    Directory(String),

    #[error("{} is neither a .json nor a .toml file", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("malformed settings: {0}")]
    Format(#[from] FormatError),

    /// A stored value lies outside its property's domain
    #[error("invalid setting: {0}")]
    Property(#[from] SymmetryError),
}

/// Encoding or decoding failure in one of the supported file formats
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML: {0}")]
    TomlDecode(#[from] toml::de::Error),

    #[error("TOML: {0}")]
    TomlEncode(#[from] toml::ser::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_name_the_file() {
        let err = SettingsError::Read {
            path: PathBuf::from("/tmp/mirror.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "cannot read /tmp/mirror.toml: gone");

        let err = SettingsError::UnsupportedFormat {
            path: PathBuf::from("mirror.ini"),
        };
        assert_eq!(err.to_string(), "mirror.ini is neither a .json nor a .toml file");
    }

    #[test]
    fn test_rejected_position_converts() {
        let err: SettingsError = SymmetryError::PositionOutOfRange {
            name: "vertical-position".to_string(),
            value: -1.0,
        }
        .into();
        assert!(matches!(
            err,
            SettingsError::Property(SymmetryError::PositionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_format_errors_nest() {
        let decode = toml::from_str::<toml::Table>("= 1").unwrap_err();
        let err: SettingsError = FormatError::from(decode).into();
        assert!(matches!(err, SettingsError::Format(FormatError::TomlDecode(_))));
        assert!(err.to_string().starts_with("malformed settings: TOML: "));
    }
}
