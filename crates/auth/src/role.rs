use core::str::FromStr;

use serde::{Deserialize, Serialize};

use skillbridge_core::DomainError;

/// Platform role.
///
/// Modeled as a closed set so the access policy matches exhaustively:
/// adding a role forces every gate to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Volunteer,
    Guardian,
}

impl Role {
    /// Whether accounts are approved immediately on taking this role.
    ///
    /// Volunteers queue for administrative approval; every other role
    /// is approved on creation or role change.
    pub fn auto_approved(self) -> bool {
        match self {
            Role::Admin | Role::Guardian => true,
            Role::Volunteer => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Volunteer => "VOLUNTEER",
            Role::Guardian => "GUARDIAN",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "VOLUNTEER" => Ok(Role::Volunteer),
            "GUARDIAN" => Ok(Role::Guardian),
            other => Err(DomainError::validation(format!("unknown role '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volunteers_are_not_auto_approved() {
        assert!(Role::Admin.auto_approved());
        assert!(Role::Guardian.auto_approved());
        assert!(!Role::Volunteer.auto_approved());
    }

    #[test]
    fn roles_round_trip_through_strings() {
        for role in [Role::Admin, Role::Volunteer, Role::Guardian] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("PARENT".parse::<Role>().is_err());
    }
}
