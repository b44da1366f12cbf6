//! Access policy.
//!
//! - No IO
//! - No panics
//! - No business logic beyond the gate rules themselves
//!
//! The policy consumes pre-fetched entities; services look records up
//! first and ask for a decision second, so ownership rules live in one
//! place instead of drifting across inline checks.

use thiserror::Error;

use skillbridge_core::{AccountId, DomainError};

use crate::{Account, Role};

/// Action classes gated by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Reading one's own account record.
    ReadOwnAccount,
    /// Account administration: approvals and account listings.
    ManageAccounts,
    /// Creating or mutating offerings, engagements and video links.
    ManageCatalog,
    /// Guardian, dependent and enrollment operations.
    ManageFamily,
    /// Reading catalog and engagement data.
    ReadCatalog,
}

/// Denial reasons surfaced by the policy.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenied {
    /// Volunteer account awaiting administrative approval.
    #[error("account is pending approval")]
    PendingApproval,

    /// The actor's role does not cover the action class.
    #[error("role not permitted for this action")]
    RoleNotPermitted,

    /// The actor does not own the targeted record.
    #[error("actor does not own the target")]
    NotOwner,
}

impl From<AccessDenied> for DomainError {
    fn from(denied: AccessDenied) -> Self {
        match denied {
            AccessDenied::PendingApproval => DomainError::PendingApproval,
            AccessDenied::RoleNotPermitted => DomainError::RoleNotPermitted,
            AccessDenied::NotOwner => DomainError::Forbidden,
        }
    }
}

/// Authorize an action class for an actor.
///
/// Rules, evaluated in order:
/// 1. an unapproved volunteer may do nothing except read their own
///    account;
/// 2. role gates per action class;
/// 3. everything else is denied.
pub fn authorize(actor: &Account, action: Action) -> Result<(), AccessDenied> {
    if actor.is_pending_volunteer() && action != Action::ReadOwnAccount {
        return Err(AccessDenied::PendingApproval);
    }

    let allowed = match action {
        Action::ReadOwnAccount => true,
        Action::ManageAccounts => actor.role == Role::Admin,
        Action::ManageCatalog => matches!(actor.role, Role::Volunteer | Role::Admin),
        Action::ManageFamily => matches!(actor.role, Role::Guardian | Role::Admin),
        Action::ReadCatalog => true,
    };

    if allowed {
        Ok(())
    } else {
        Err(AccessDenied::RoleNotPermitted)
    }
}

/// Ownership gate for records mutable only by their creating account
/// (engagements by their presenter, videos by their uploader).
///
/// There is no admin bypass: only the owning account passes.
pub fn require_owner(actor: &Account, owner: AccountId) -> Result<(), AccessDenied> {
    if actor.id == owner {
        Ok(())
    } else {
        Err(AccessDenied::NotOwner)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use skillbridge_core::SubjectId;

    use super::*;

    fn actor(id: u64, role: Role, approved: bool) -> Account {
        Account {
            id: AccountId::new(id),
            subject: SubjectId::new(format!("sub_{id}")),
            role,
            approved,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn pending_volunteer_may_only_read_own_account() {
        let pending = actor(1, Role::Volunteer, false);

        assert_eq!(authorize(&pending, Action::ReadOwnAccount), Ok(()));
        for action in [
            Action::ManageAccounts,
            Action::ManageCatalog,
            Action::ManageFamily,
            Action::ReadCatalog,
        ] {
            assert_eq!(
                authorize(&pending, action),
                Err(AccessDenied::PendingApproval)
            );
        }
    }

    #[test]
    fn account_administration_is_admin_only() {
        assert_eq!(
            authorize(&actor(1, Role::Admin, true), Action::ManageAccounts),
            Ok(())
        );
        assert_eq!(
            authorize(&actor(2, Role::Volunteer, true), Action::ManageAccounts),
            Err(AccessDenied::RoleNotPermitted)
        );
        assert_eq!(
            authorize(&actor(3, Role::Guardian, true), Action::ManageAccounts),
            Err(AccessDenied::RoleNotPermitted)
        );
    }

    #[test]
    fn catalog_mutation_requires_volunteer_or_admin() {
        assert_eq!(
            authorize(&actor(1, Role::Volunteer, true), Action::ManageCatalog),
            Ok(())
        );
        assert_eq!(
            authorize(&actor(2, Role::Admin, true), Action::ManageCatalog),
            Ok(())
        );
        assert_eq!(
            authorize(&actor(3, Role::Guardian, true), Action::ManageCatalog),
            Err(AccessDenied::RoleNotPermitted)
        );
    }

    #[test]
    fn family_actions_require_guardian_or_admin() {
        assert_eq!(
            authorize(&actor(1, Role::Guardian, true), Action::ManageFamily),
            Ok(())
        );
        assert_eq!(
            authorize(&actor(2, Role::Admin, true), Action::ManageFamily),
            Ok(())
        );
        assert_eq!(
            authorize(&actor(3, Role::Volunteer, true), Action::ManageFamily),
            Err(AccessDenied::RoleNotPermitted)
        );
    }

    #[test]
    fn catalog_reads_are_open_to_all_approved_roles() {
        for role in [Role::Admin, Role::Volunteer, Role::Guardian] {
            assert_eq!(authorize(&actor(1, role, true), Action::ReadCatalog), Ok(()));
        }
    }

    #[test]
    fn ownership_gate_has_no_admin_bypass() {
        let admin = actor(1, Role::Admin, true);
        let presenter = actor(2, Role::Volunteer, true);

        assert_eq!(require_owner(&presenter, presenter.id), Ok(()));
        assert_eq!(
            require_owner(&admin, presenter.id),
            Err(AccessDenied::NotOwner)
        );
    }

    #[test]
    fn denials_map_into_the_error_taxonomy() {
        assert_eq!(
            DomainError::from(AccessDenied::PendingApproval),
            DomainError::PendingApproval
        );
        assert_eq!(
            DomainError::from(AccessDenied::RoleNotPermitted),
            DomainError::RoleNotPermitted
        );
        assert_eq!(DomainError::from(AccessDenied::NotOwner), DomainError::Forbidden);
    }
}
