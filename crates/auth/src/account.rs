use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skillbridge_core::{AccountId, Entity, SubjectId};

use crate::Role;

/// A platform account linked to an external identity subject.
///
/// # Invariants
/// - `subject` is unique across accounts (store constraint).
/// - `approved` is meaningful only for [`Role::Volunteer`]; Admin and
///   Guardian accounts are always approved on creation or role change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub subject: SubjectId,
    pub role: Role,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Whether this account is a volunteer still waiting for approval.
    pub fn is_pending_volunteer(&self) -> bool {
        self.role == Role::Volunteer && !self.approved
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &AccountId {
        &self.id
    }
}

/// Fields for creating an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub subject: SubjectId,
    pub role: Role,
    pub approved: bool,
}

impl NewAccount {
    /// Build a registration record for a requested role, applying the
    /// auto-approval rule.
    pub fn for_role(subject: SubjectId, role: Role) -> Self {
        Self {
            subject,
            role,
            approved: role.auto_approved(),
        }
    }
}

/// Partial account update (unset fields keep their stored value).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPatch {
    pub role: Option<Role>,
    pub approved: Option<bool>,
}

impl AccountPatch {
    /// Patch that moves an account to `role`, recomputing approval.
    ///
    /// Switching into Volunteer resets approval even if the account was
    /// approved under a different role; re-approval is required.
    pub fn role_change(role: Role) -> Self {
        Self {
            role: Some(role),
            approved: Some(role.auto_approved()),
        }
    }

    /// Patch that marks an account approved.
    pub fn approve() -> Self {
        Self {
            role: None,
            approved: Some(true),
        }
    }
}

impl Account {
    /// Apply a partial update in place.
    pub fn apply(&mut self, patch: AccountPatch) {
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(approved) = patch.approved {
            self.approved = approved;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(role: Role, approved: bool) -> Account {
        Account {
            id: AccountId::new(1),
            subject: SubjectId::new("sub_1"),
            role,
            approved,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn registration_applies_auto_approval() {
        let admin = NewAccount::for_role(SubjectId::new("a"), Role::Admin);
        assert!(admin.approved);

        let guardian = NewAccount::for_role(SubjectId::new("g"), Role::Guardian);
        assert!(guardian.approved);

        let volunteer = NewAccount::for_role(SubjectId::new("v"), Role::Volunteer);
        assert!(!volunteer.approved);
    }

    #[test]
    fn role_change_into_volunteer_resets_approval() {
        let mut acct = account(Role::Guardian, true);
        acct.apply(AccountPatch::role_change(Role::Volunteer));
        assert_eq!(acct.role, Role::Volunteer);
        assert!(!acct.approved);
        assert!(acct.is_pending_volunteer());
    }

    #[test]
    fn role_change_out_of_volunteer_approves() {
        let mut acct = account(Role::Volunteer, false);
        acct.apply(AccountPatch::role_change(Role::Guardian));
        assert_eq!(acct.role, Role::Guardian);
        assert!(acct.approved);
    }

    #[test]
    fn approve_patch_touches_nothing_else() {
        let mut acct = account(Role::Volunteer, false);
        acct.apply(AccountPatch::approve());
        assert_eq!(acct.role, Role::Volunteer);
        assert!(acct.approved);
    }
}
