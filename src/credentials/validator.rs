//! Password policy checks.

/// Minimum password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length in characters.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Human-readable summary of the policy.
pub const PASSWORD_REQUIREMENTS: &str = "Password must be 8-128 characters and contain at least one uppercase letter, one lowercase letter, one number, and one special character.";

/// Checks `password` against the policy and returns every violation found,
/// in check order. An empty vector means the password is acceptable.
///
/// Email and employee ID comparisons are case-insensitive; empty values are
/// treated as absent.
///
/// # Example
///
/// ```
/// use hrms_engine::credentials::validate_password;
///
/// assert!(validate_password("Str0ng!Pass", None, None).is_empty());
/// assert_eq!(validate_password("weak", None, None).len(), 4);
/// ```
pub fn validate_password(password: &str, email: Option<&str>, employee_id: Option<&str>) -> Vec<String> {
    let mut errors = Vec::new();
    let length = password.chars().count();

    if length < MIN_PASSWORD_LENGTH {
        errors.push("Password must be at least 8 characters long.".to_string());
    }
    if length > MAX_PASSWORD_LENGTH {
        errors.push("Password must not exceed 128 characters.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one number.".to_string());
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        errors.push(
            "Password must contain at least one special character (!@#$%^&*()_+-=[]{}|;:,.<>?)."
                .to_string(),
        );
    }

    let lowered = password.to_lowercase();
    let email = email.filter(|e| !e.is_empty()).map(str::to_lowercase);
    let employee_id = employee_id.filter(|id| !id.is_empty()).map(str::to_lowercase);

    if email.as_deref() == Some(lowered.as_str()) {
        errors.push("Password cannot be the same as your email address.".to_string());
    }
    if employee_id.as_deref() == Some(lowered.as_str()) {
        errors.push("Password cannot be the same as your Employee ID.".to_string());
    }
    if email.as_deref().is_some_and(|e| lowered.contains(e)) {
        errors.push("Password cannot contain your email address.".to_string());
    }
    if employee_id.as_deref().is_some_and(|id| lowered.contains(id)) {
        errors.push("Password cannot contain your Employee ID.".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_password_accepted() {
        assert!(validate_password("Correct#Horse9", Some("jane@example.com"), Some("OIJADO20240001")).is_empty());
    }

    #[test]
    fn test_every_violation_reported() {
        let errors = validate_password("abc", None, None);
        assert_eq!(
            errors,
            vec![
                "Password must be at least 8 characters long.",
                "Password must contain at least one uppercase letter.",
                "Password must contain at least one number.",
                "Password must contain at least one special character (!@#$%^&*()_+-=[]{}|;:,.<>?).",
            ]
        );
    }

    #[test]
    fn test_length_bounds() {
        let at_max = format!("Aa1!{}", "x".repeat(MAX_PASSWORD_LENGTH - 4));
        assert!(validate_password(&at_max, None, None).is_empty());

        let over_max = format!("Aa1!{}", "x".repeat(MAX_PASSWORD_LENGTH - 3));
        assert_eq!(
            validate_password(&over_max, None, None),
            vec!["Password must not exceed 128 characters."]
        );
    }

    #[test]
    fn test_password_equal_to_email_rejected() {
        let errors = validate_password("Jane.Doe1@Example.com", Some("jane.doe1@example.com"), None);
        assert!(errors.contains(&"Password cannot be the same as your email address.".to_string()));
        assert!(errors.contains(&"Password cannot contain your email address.".to_string()));
    }

    #[test]
    fn test_password_containing_employee_id_rejected() {
        let errors = validate_password("!Xoijado20240001", None, Some("OIJADO20240001"));
        assert_eq!(errors, vec!["Password cannot contain your Employee ID."]);
    }

    #[test]
    fn test_empty_email_ignored() {
        assert!(validate_password("Str0ng!Pass", Some(""), Some("")).is_empty());
    }
}
