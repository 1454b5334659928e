use validator::ValidationError;
use zxcvbn::zxcvbn;

const MIN_LENGTH: usize = 12;
const MIN_STRENGTH_SCORE: u8 = 3;

/// Strength policy for the seeded admin password.
///
/// The user's own identifiers (email, name) are passed to zxcvbn so that a
/// password derived from them scores as weak.
pub fn validate_password_strength(password: &str, user_inputs: &[&str]) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_LENGTH {
        let mut error = ValidationError::new("password_length");
        error.message = Some(format!("Must be at least {} characters", MIN_LENGTH).into());
        return Err(error);
    }

    let estimate = zxcvbn(password, user_inputs);
    let score = estimate.score() as u8;

    if score < MIN_STRENGTH_SCORE {
        let feedback = estimate.feedback()
            .and_then(|f| f.warning().map(|w| w.to_string()))
            .unwrap_or_else(|| "Password is too weak".to_string());

        let mut error = ValidationError::new("password_strength");
        error.message = Some(feedback.into());
        return Err(error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_password_is_rejected() {
        assert!(validate_password_strength("password", &[]).is_err());
    }

    #[test]
    fn long_random_passphrase_is_accepted() {
        assert!(validate_password_strength("violet-harbor-tundra-92-quill", &[]).is_ok());
    }

    #[test]
    fn password_built_from_email_is_weak() {
        let result = validate_password_strength("admin@example.com", &["admin@example.com"]);
        assert!(result.is_err());
    }
}
