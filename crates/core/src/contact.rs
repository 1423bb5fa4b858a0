//! Contact entity and its value types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized contact name: trimmed and lower-cased.
///
/// The stored form is the lookup key; [`ContactName::display_name`] gives the
/// title-cased form shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactName(String);

impl ContactName {
    /// Normalize raw input without validating it.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Wrap a value read back from the `contact_list.name` column.
    #[must_use]
    pub fn from_stored(stored: String) -> Self {
        Self(stored)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        title_case(&self.0)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Phone number kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    #[must_use]
    pub fn from_stored(stored: String) -> Self {
        Self(stored)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A row of the `contact_list` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: i64,
    pub name: ContactName,
    pub number: PhoneNumber,
}

impl Contact {
    #[must_use]
    pub fn new(id: i64, name: ContactName, number: PhoneNumber) -> Self {
        Self { id, name, number }
    }

    #[must_use]
    pub fn view(&self) -> ContactView {
        ContactView {
            id: self.id,
            name: self.name.display_name(),
            number: self.number.as_str().to_owned(),
        }
    }
}

/// Presentation form of a [`Contact`], with the name title-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactView {
    pub id: i64,
    pub name: String,
    pub number: String,
}

/// Trim and lower-case a search keyword.
#[must_use]
pub fn normalize_keyword(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Title-case `s`: the first letter of every run of alphabetic characters is
/// upper-cased, the rest lower-cased. Any non-alphabetic character ends a run.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(ContactName::normalize("  John SMITH \t").as_str(), "john smith");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("john smith"), "John Smith");
        assert_eq!(title_case("mary-jane o'neil"), "Mary-Jane O'Neil");
        assert_eq!(title_case("JOHN"), "John");
        assert_eq!(title_case("agent 007bond"), "Agent 007Bond");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn title_case_non_ascii() {
        assert_eq!(title_case("çağrı öztürk"), "Çağrı Öztürk");
    }

    #[test]
    fn view_uses_display_name() {
        let contact = Contact::new(
            1,
            ContactName::normalize("  John  "),
            PhoneNumber::from_stored("5551234".to_owned()),
        );
        assert_eq!(
            contact.view(),
            ContactView { id: 1, name: "John".to_owned(), number: "5551234".to_owned() }
        );
    }

    #[test]
    fn keyword_normalization() {
        assert_eq!(normalize_keyword("  JoH "), "joh");
        assert_eq!(normalize_keyword("   "), "");
    }
}
