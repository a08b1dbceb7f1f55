//! Crate-level error types.

use std::fmt;

/// Errors produced by the molvr crate.
///
/// Only lifecycle, runtime queries and options I/O report errors; the
/// per-frame laser and menu passes degrade to "no hit / not visible"
/// instead.
#[derive(Debug)]
pub enum VrError {
    /// No head-mounted display is connected.
    HmdNotPresent,
    /// The VR runtime rejected a call.
    Runtime(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A GUI preset name did not match any known preset.
    UnknownPreset(String),
}

impl fmt::Display for VrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HmdNotPresent => {
                write!(f, "VR system is not available: no headset present")
            }
            Self::Runtime(msg) => write!(f, "VR runtime error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::UnknownPreset(name) => {
                write!(f, "unknown GUI preset: {name}")
            }
        }
    }
}

impl std::error::Error for VrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VrError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
