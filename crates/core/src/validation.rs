//! Form input validation.
//!
//! Runs before any storage access. Checks happen in a fixed order so the
//! first failing rule decides the message shown to the user.

use thiserror::Error;

use crate::constants::{MAX_NAME_LEN, MAX_NUMBER_LEN};
use crate::contact::{ContactName, PhoneNumber};

/// Rejected form input. The `Display` text is shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid input: Name can not be empty")]
    EmptyName,

    #[error("Invalid input: Name of person should be text")]
    NumericName,

    #[error("Invalid input: Name can not be longer than 100 characters")]
    NameTooLong,

    #[error("Invalid input: Phone number can not be empty")]
    EmptyNumber,

    #[error("Invalid input: Phone number should be in numeric format")]
    NonNumericNumber,

    #[error("Invalid input: Phone number can not be longer than 100 characters")]
    NumberTooLong,
}

/// Validate a name used to look up an existing contact.
pub fn parse_name(raw: &str) -> Result<ContactName, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    // Lower-casing can lengthen a string, so the limit applies to the stored form.
    let name = ContactName::normalize(trimmed);
    if name.as_str().chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong);
    }
    Ok(name)
}

/// Validate the name of a contact about to be created. Purely numeric names
/// are rejected on top of the [`parse_name`] rules.
pub fn parse_new_name(raw: &str) -> Result<ContactName, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if is_all_digits(trimmed) {
        return Err(ValidationError::NumericName);
    }
    parse_name(trimmed)
}

/// Validate a phone number. The number is kept exactly as submitted, so
/// surrounding whitespace fails the digits check.
pub fn parse_number(raw: &str) -> Result<PhoneNumber, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyNumber);
    }
    if !is_all_digits(raw) {
        return Err(ValidationError::NonNumericNumber);
    }
    if raw.len() > MAX_NUMBER_LEN {
        return Err(ValidationError::NumberTooLong);
    }
    Ok(PhoneNumber::from_stored(raw.to_owned()))
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_names_are_rejected() {
        assert_eq!(parse_name(""), Err(ValidationError::EmptyName));
        assert_eq!(parse_name("   "), Err(ValidationError::EmptyName));
        assert_eq!(parse_new_name("\t\n"), Err(ValidationError::EmptyName));
    }

    #[test]
    fn numeric_name_only_rejected_for_new_contacts() {
        assert_eq!(parse_new_name(" 12345 "), Err(ValidationError::NumericName));
        assert_eq!(parse_name("12345").unwrap().as_str(), "12345");
        assert_eq!(parse_new_name("r2d2").unwrap().as_str(), "r2d2");
    }

    #[test]
    fn overlong_name_is_rejected() {
        let long = "a".repeat(MAX_NAME_LEN + 1);
        assert_eq!(parse_name(&long), Err(ValidationError::NameTooLong));
        let exact = format!("  {}  ", "a".repeat(MAX_NAME_LEN));
        assert!(parse_new_name(&exact).is_ok());
    }

    #[test]
    fn limit_counts_the_lower_cased_name() {
        // 'İ' lower-cases to 'i' plus a combining dot.
        let widening = "İ".repeat(MAX_NAME_LEN);
        assert_eq!(parse_name(&widening), Err(ValidationError::NameTooLong));
        assert_eq!(parse_new_name(&widening), Err(ValidationError::NameTooLong));

        let fits = "İ".repeat(MAX_NAME_LEN / 2);
        let name = parse_new_name(&fits).unwrap();
        assert!(name.as_str().chars().count() <= MAX_NAME_LEN);
    }

    #[test]
    fn name_is_normalized() {
        assert_eq!(parse_new_name("  John Smith ").unwrap().as_str(), "john smith");
    }

    #[test]
    fn number_rules() {
        assert_eq!(parse_number(""), Err(ValidationError::EmptyNumber));
        assert_eq!(parse_number("  "), Err(ValidationError::EmptyNumber));
        assert_eq!(parse_number("555-1234"), Err(ValidationError::NonNumericNumber));
        assert_eq!(parse_number(" 5551234"), Err(ValidationError::NonNumericNumber));
        assert_eq!(parse_number("+15551234"), Err(ValidationError::NonNumericNumber));
        assert_eq!(parse_number("0015551234").unwrap().as_str(), "0015551234");
        let long = "1".repeat(MAX_NUMBER_LEN + 1);
        assert_eq!(parse_number(&long), Err(ValidationError::NumberTooLong));
    }

    #[test]
    fn messages_match_form_text() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Invalid input: Name can not be empty");
        assert_eq!(
            ValidationError::NonNumericNumber.to_string(),
            "Invalid input: Phone number should be in numeric format"
        );
        assert_eq!(
            ValidationError::NameTooLong.to_string(),
            "Invalid input: Name can not be longer than 100 characters"
        );
    }
}
