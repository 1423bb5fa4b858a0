//! Outcome messages for write operations.

use std::fmt;

use serde::Serialize;

use crate::contact::ContactName;

/// Result of an add, update, or delete. Rejections such as "already exists"
/// are outcomes, not errors: they render as plain messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "name", rename_all = "snake_case")]
pub enum Outcome {
    Added(ContactName),
    /// Carries the name as stored in the existing row.
    AlreadyExists(ContactName),
    Updated(ContactName),
    UpdateTargetMissing(ContactName),
    Deleted(ContactName),
    DeleteTargetMissing(ContactName),
}

impl Outcome {
    /// Whether the write changed the table.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Added(_) | Self::Updated(_) | Self::Deleted(_))
    }

    #[must_use]
    pub fn name(&self) -> &ContactName {
        match self {
            Self::Added(n)
            | Self::AlreadyExists(n)
            | Self::Updated(n)
            | Self::UpdateTargetMissing(n)
            | Self::Deleted(n)
            | Self::DeleteTargetMissing(n) => n,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name().display_name();
        match self {
            Self::Added(_) => write!(f, "Person {name} added to contact_list successfully"),
            Self::AlreadyExists(_) => write!(f, "Person with name {name} already exists."),
            Self::Updated(_) => {
                write!(f, "contact_list record of {name} is updated successfully")
            },
            Self::UpdateTargetMissing(_) => write!(f, "Person with name {name} does not exist."),
            Self::Deleted(_) => {
                write!(f, "Phone record of {name} is deleted from the contact_list successfully")
            },
            Self::DeleteTargetMissing(_) => {
                write!(f, "Person with name {name} does not exist, no need to delete.")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> ContactName {
        ContactName::normalize("JOHN smith")
    }

    #[test]
    fn messages_use_title_cased_name() {
        assert_eq!(
            Outcome::Added(john()).message(),
            "Person John Smith added to contact_list successfully"
        );
        assert_eq!(
            Outcome::AlreadyExists(john()).message(),
            "Person with name John Smith already exists."
        );
        assert_eq!(
            Outcome::Updated(john()).message(),
            "contact_list record of John Smith is updated successfully"
        );
        assert_eq!(
            Outcome::UpdateTargetMissing(john()).message(),
            "Person with name John Smith does not exist."
        );
        assert_eq!(
            Outcome::Deleted(john()).message(),
            "Phone record of John Smith is deleted from the contact_list successfully"
        );
        assert_eq!(
            Outcome::DeleteTargetMissing(john()).message(),
            "Person with name John Smith does not exist, no need to delete."
        );
    }

    #[test]
    fn applied_flag() {
        assert!(Outcome::Added(john()).is_applied());
        assert!(Outcome::Deleted(john()).is_applied());
        assert!(!Outcome::AlreadyExists(john()).is_applied());
        assert!(!Outcome::DeleteTargetMissing(john()).is_applied());
    }

    #[test]
    fn serializes_with_stored_name() {
        let json = serde_json::to_value(Outcome::AlreadyExists(john())).unwrap();
        assert_eq!(json, serde_json::json!({"outcome": "already_exists", "name": "john smith"}));
    }
}
