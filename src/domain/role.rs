//! User roles.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role of an authenticated user.
///
/// The wire format is a plain string. Only `"admin"` maps to
/// [`Role::Admin`]; every other value is an ordinary user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Administrator with access to the user management console
    Admin,
    /// Regular user with access to the dashboard pages
    #[default]
    User,
}

impl Role {
    /// Parse a role string.
    pub fn from_claim(value: &str) -> Self {
        match value {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }

    /// Wire representation of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Check if this role is an administrator.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Role::from_claim(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_claim() {
        assert_eq!(Role::from_claim("admin"), Role::Admin);
        assert_eq!(Role::from_claim("user"), Role::User);
        assert_eq!(Role::from_claim("Admin"), Role::User);
        assert_eq!(Role::from_claim(""), Role::User);
    }

    #[test]
    fn test_serde_roundtrip_strings() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"editor\"").unwrap();
        assert_eq!(role, Role::User);
    }
}
