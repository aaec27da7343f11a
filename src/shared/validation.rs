use validator::ValidationError;

/// Rejects strings that are empty or contain only whitespace
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank_valid() {
        assert!(validate_not_blank("Who painted the Mona Lisa?").is_ok());
        assert!(validate_not_blank(" x ").is_ok());
    }

    #[test]
    fn test_not_blank_invalid() {
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\n\t").is_err());
    }
}
