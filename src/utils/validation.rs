use crate::utils::error::{MatchError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_delay_seconds(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Delay must be a non-negative number of seconds".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| MatchError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("source", "./names.txt").is_ok());
        assert!(validate_path("source", "").is_err());
        assert!(validate_path("source", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_delay_seconds() {
        assert!(validate_delay_seconds("delay", 0.0).is_ok());
        assert!(validate_delay_seconds("delay", 0.5).is_ok());
        assert!(validate_delay_seconds("delay", -0.1).is_err());
        assert!(validate_delay_seconds("delay", f64::NAN).is_err());
        assert!(validate_delay_seconds("delay", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("value".to_string());
        let absent: Option<String> = None;
        assert!(validate_required_field("source", &present).is_ok());
        assert!(validate_required_field("source", &absent).is_err());
    }

    #[test]
    fn test_validation_is_idempotent() {
        // Same malformed input must produce the same error kind every time.
        for _ in 0..2 {
            let err = validate_delay_seconds("delay", -1.0).unwrap_err();
            assert!(matches!(err, MatchError::InvalidConfigValueError { .. }));
        }
    }
}
