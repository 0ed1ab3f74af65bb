//! User directory input handling

use crate::types::{User, UserId};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Validated input of the add-user form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    /// Trim the form fields. Returns `None` when either is left empty.
    pub fn parse(name: &str, email: &str) -> Option<Self> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() || email.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    pub fn into_user(self) -> User {
        User {
            id: UserId::new(uuid::Uuid::new_v4().to_string()),
            name: self.name,
            email: self.email,
            created_at: Utc::now(),
        }
    }
}
