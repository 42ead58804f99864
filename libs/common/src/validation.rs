//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

use crate::{
    error::{DomainError, DomainResult},
    models::Role,
};

const MAX_NAME_LEN: usize = 60;
const MAX_ADDRESS_LEN: usize = 400;
const MAX_DESCRIPTION_LEN: usize = 1000;

fn invalid(message: impl Into<String>) -> DomainError {
    DomainError::Validation(message.into())
}

/// Validate a user or store display name
pub fn validate_name(name: &str) -> DomainResult<()> {
    if name.is_empty() {
        return Err(invalid("Name is required"));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(invalid(format!(
            "Name must be at most {MAX_NAME_LEN} characters long"
        )));
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> DomainResult<()> {
    if email.is_empty() {
        return Err(invalid("Email is required"));
    }

    if email.len() > 254 {
        return Err(invalid("Email must be at most 254 characters long"));
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err(invalid("Invalid email format"));
    }

    Ok(())
}

/// Validate a postal address
pub fn validate_address(address: &str) -> DomainResult<()> {
    if address.is_empty() {
        return Err(invalid("Address is required"));
    }

    if address.chars().count() > MAX_ADDRESS_LEN {
        return Err(invalid(format!(
            "Address must be at most {MAX_ADDRESS_LEN} characters long"
        )));
    }

    Ok(())
}

/// Validate a store description. Empty is allowed.
pub fn validate_description(description: &str) -> DomainResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(invalid(format!(
            "Description must be at most {MAX_DESCRIPTION_LEN} characters long"
        )));
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> DomainResult<()> {
    if password.is_empty() {
        return Err(invalid("Password is required"));
    }

    if password.len() < 8 {
        return Err(invalid("Password must be at least 8 characters long"));
    }

    if password.len() > 128 {
        return Err(invalid("Password must be at most 128 characters long"));
    }

    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;
    let mut has_special = false;

    for c in password.chars() {
        if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if !c.is_alphanumeric() {
            has_special = true;
        }
    }

    if !has_upper {
        return Err(invalid("Password must contain at least one uppercase letter"));
    }

    if !has_lower {
        return Err(invalid("Password must contain at least one lowercase letter"));
    }

    if !has_digit {
        return Err(invalid("Password must contain at least one digit"));
    }

    if !has_special {
        return Err(invalid("Password must contain at least one special character"));
    }

    Ok(())
}

/// Public registration may create normal and store accounts only
pub fn validate_self_registration_role(role: Role) -> DomainResult<()> {
    match role {
        Role::Normal | Role::Store => Ok(()),
        Role::Admin => Err(invalid("Admin accounts cannot be self-registered")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_format() {
        assert!(validate_email("jane@example.com").is_ok());
        assert!(validate_email("info@coffeehaven.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("jane@example").is_err());
    }

    #[test]
    fn name_bounds() {
        assert!(validate_name("Coffee Haven").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(&"x".repeat(61)).is_err());
    }

    #[test]
    fn password_rules() {
        assert!(validate_password("Secret#123").is_ok());
        assert!(validate_password("short1!").is_err());
        assert!(validate_password("alllowercase1!").is_err());
        assert!(validate_password("NoDigitsHere!").is_err());
        assert!(validate_password("NoSpecial123").is_err());
    }

    #[test]
    fn admin_cannot_self_register() {
        assert!(validate_self_registration_role(Role::Normal).is_ok());
        assert!(validate_self_registration_role(Role::Store).is_ok());
        assert!(matches!(
            validate_self_registration_role(Role::Admin),
            Err(DomainError::Validation(_))
        ));
    }
}
