//! Central error type for the conversion pipeline.
//!
//! Only I/O failures abort a conversion. Every other fault class degrades
//! silently inside its own stage: malformed plane lines are skipped,
//! unclassifiable faces are omitted from the orientation map, out-of-range
//! edge offsets are clamped, and unknown texture names resolve to the sky
//! slot.

/// Centralized error type for all conversion operations.
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
  /// Reading the source map or writing the destination container failed.
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  /// Conversion settings failed validation.
  #[error("config error: {0}")]
  Config(String),

  /// Conversion settings file was not valid TOML.
  #[error("config parse error: {0}")]
  ConfigParse(#[from] toml::de::Error),
}

impl ConvertError {
  /// Convenience constructor for validation failures.
  pub fn config<T: ToString>(msg: T) -> Self {
    ConvertError::Config(msg.to_string())
  }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
