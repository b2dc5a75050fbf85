//! Validation functions for translator settings.

use validator::ValidationError;

pub fn validate_dotted_path<S: AsRef<str>>(path: S) -> Result<(), ValidationError> {
    let path = path.as_ref();
    if path.is_empty() {
        return Err(ValidationError::new("InvalidPath").with_message("path must not be empty".into()));
    }

    if path.split('.').any(str::is_empty) {
        return Err(ValidationError::new("InvalidPath").with_message(
            format!("{path:?} contains an empty segment").into(),
        ));
    }

    Ok(())
}

pub fn validate_path_segment<S: AsRef<str>>(segment: S) -> Result<(), ValidationError> {
    let segment = segment.as_ref();
    if segment.is_empty() || segment.contains('.') {
        return Err(ValidationError::new("InvalidKey").with_message(
            format!("{segment:?} must be a single non-empty key").into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dotted_path() {
        assert!(validate_dotted_path("phpbu").is_ok());
        assert!(validate_dotted_path("database.connections").is_ok());
        assert!(validate_dotted_path("").is_err());
        assert!(validate_dotted_path("database..connections").is_err());
        assert!(validate_dotted_path(".phpbu").is_err());
        assert!(validate_dotted_path("phpbu.").is_err());
    }

    #[test]
    fn test_validate_path_segment() {
        assert!(validate_path_segment("config").is_ok());
        assert!(validate_path_segment("").is_err());
        assert!(validate_path_segment("phpbu.config").is_err());
    }
}
