//! Composer input validation

/// A message is sendable when it has something besides whitespace.
pub fn validate_message(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err("Message cannot be empty".to_string());
    }
    Ok(())
}

pub fn is_sendable(text: &str) -> bool {
    validate_message(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_message() {
        assert!(validate_message("Como funcionam os climas?").is_ok());
        assert!(validate_message("  x  ").is_ok());
        assert!(validate_message("").is_err());
        assert!(validate_message("   ").is_err());
        assert!(validate_message("\t\n").is_err());
    }
}
