//! Error types for matcha-os.

use std::io;

/// Errors produced by the matcha-os framework.
#[derive(Debug, thiserror::Error)]
pub enum MatchaError {
    #[error("config error: {0}")]
    Config(String),

    #[error("network error: {0}")]
    Net(String),

    #[error("text generation error: {0}")]
    TextGen(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, MatchaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let e = MatchaError::Config("missing pin".into());
        assert_eq!(format!("{e}"), "config error: missing pin");
    }

    #[test]
    fn net_error_display() {
        let e = MatchaError::Net("connect refused".into());
        assert_eq!(format!("{e}"), "network error: connect refused");
    }

    #[test]
    fn textgen_error_display() {
        let e = MatchaError::TextGen("quota exceeded".into());
        assert_eq!(format!("{e}"), "text generation error: quota exceeded");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: MatchaError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let bad_toml = "this is [[[not valid toml";
        let toml_err = toml::from_str::<toml::Value>(bad_toml).unwrap_err();
        let e: MatchaError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: MatchaError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn result_alias_ok() {
        let r: Result<i32> = Ok(42);
        assert_eq!(r.unwrap(), 42);
    }
}
