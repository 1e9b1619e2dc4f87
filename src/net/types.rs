//! Wire DTOs returned by the auth service.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Signed-in identity as returned by `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable user identifier.
    pub id: String,
    /// Login email address.
    pub email: String,
    /// Optional profile name; the header greets by email instead.
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// Short greeting name: the part of the email before the first `@`.
    ///
    /// An email without `@` is returned whole.
    pub fn display_name(&self) -> &str {
        self.email
            .split_once('@')
            .map_or(self.email.as_str(), |(local, _)| local)
    }
}
