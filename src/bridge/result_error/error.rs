use crate::bridge::result_error::WithMsg;
use crate::bridge::source::database::SUPPORTED_DRIVERS;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required key {path:?}")]
    MissingKey { path: String },
    #[error("Invalid value at {path:?}, expected {expected}")]
    InvalidValue { path: String, expected: &'static str },
    #[error("Unknown database connection {name:?} referenced at {path:?}")]
    UnknownConnection { name: String, path: String },
    #[error(
        "Unsupported driver {driver:?} for database connection {connection:?}, supported drivers: {}",
        itertools::join(SUPPORTED_DRIVERS, ", ")
    )]
    UnsupportedDriver { connection: String, driver: String },
    #[error("Invalid target at {path:?}: {field} has to be configured")]
    InvalidTarget { path: String, field: &'static str },
    #[error("Unknown backup kind {kind:?} at {path:?}")]
    UnknownKind { kind: String, path: String },
    #[error(transparent)]
    ValidationError(#[from] validator::ValidationErrors),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error(transparent)]
    SerdeYml(#[from] serde_yml::Error),
    #[error("{}:\n{}", msg, indent::indent_all_with("  ", error.to_string()))]
    WithMsg { msg: String, error: Box<Error> },
}

impl<S: Into<String>> WithMsg<S> for Error {
    fn with_msg(self, msg: S) -> Self {
        Self::WithMsg {
            msg: msg.into(),
            error: Box::new(self),
        }
    }
}

impl Error {
    pub(crate) fn missing_key<S: Into<String>>(path: S) -> Self {
        Self::MissingKey { path: path.into() }
    }

    pub(crate) fn invalid_value<S: Into<String>>(path: S, expected: &'static str) -> Self {
        Self::InvalidValue {
            path: path.into(),
            expected,
        }
    }

    /// The innermost error with every `WithMsg` context layer removed.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::WithMsg { error, .. } => error.root_cause(),
            e => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_with_msg() {
        let error = Error::missing_key("phpbu.config").with_msg("Custom message");

        match error {
            Error::WithMsg { msg, .. } => assert_eq!(msg, "Custom message"),
            _ => panic!("Expected WithMsg error"),
        }
    }

    #[test]
    fn test_error_with_msg_display() {
        let error = Error::missing_key("phpbu.config").with_msg("Operation failed");
        let error_str = error.to_string();

        assert!(error_str.starts_with("Operation failed:\n  "));
        assert!(error_str.contains("\"phpbu.config\""));
    }

    #[test]
    fn test_root_cause_strips_nested_context() {
        let error = Error::invalid_value("phpbu.directories", "list")
            .with_msg("inner")
            .with_msg("outer");

        match error.root_cause() {
            Error::InvalidValue { path, expected } => {
                assert_eq!(path, "phpbu.directories");
                assert_eq!(*expected, "list");
            }
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_root_cause_of_plain_error_is_itself() {
        let error = Error::missing_key("a.b");
        assert!(matches!(error.root_cause(), Error::MissingKey { path } if path == "a.b"));
    }

    #[test]
    fn test_unsupported_driver_display_lists_supported_drivers() {
        let error = Error::UnsupportedDriver {
            connection: "legacy".into(),
            driver: "sqlsrv".into(),
        };
        let error_str = error.to_string();

        assert!(error_str.contains("\"sqlsrv\""));
        assert!(error_str.contains("\"legacy\""));
        assert!(error_str.contains("mysql, pgsql, postgres"));
    }

    #[test]
    fn test_invalid_target_display_names_field() {
        let error = Error::InvalidTarget {
            path: "phpbu.directories[0].target".into(),
            field: "filename",
        };
        assert_eq!(
            error.to_string(),
            "Invalid target at \"phpbu.directories[0].target\": filename has to be configured"
        );
    }
}
