use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skillbridge_core::{AccountId, DomainError, DomainResult, Entity, GuardianId};

/// Guardian profile: the one-to-one extension of a Guardian-role
/// account that holds the contact email and owns dependents.
///
/// # Invariants
/// - exactly one Guardian per account (store constraint on `account_id`)
/// - `email` is globally unique (store constraint)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guardian {
    pub id: GuardianId,
    pub account_id: AccountId,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Guardian {
    type Id = GuardianId;

    fn id(&self) -> &GuardianId {
        &self.id
    }
}

/// Fields for registering a guardian profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGuardian {
    pub account_id: AccountId,
    pub email: String,
}

impl NewGuardian {
    pub fn new(account_id: AccountId, email: impl Into<String>) -> Self {
        Self {
            account_id,
            email: email.into(),
        }
    }

    /// Validate and normalize the contact email.
    ///
    /// Minimal shape check; deliverability is not this layer's concern.
    pub fn validate(&mut self) -> DomainResult<()> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("invalid email format"));
        }
        self.email = email.to_lowercase();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let mut new = NewGuardian::new(AccountId::new(1), "  A@X.Com ");
        new.validate().unwrap();
        assert_eq!(new.email, "a@x.com");
    }

    #[test]
    fn rejects_malformed_email() {
        let mut missing_at = NewGuardian::new(AccountId::new(1), "ax.com");
        assert!(missing_at.validate().is_err());

        let mut blank = NewGuardian::new(AccountId::new(1), "   ");
        assert!(blank.validate().is_err());
    }
}
