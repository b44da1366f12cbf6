use std::sync::Arc;

use skillbridge_auth::{
    authorize, resolve_bearer, Account, AccountPatch, Action, NewAccount, Role,
};
use skillbridge_core::{AccountId, DomainError, DomainResult, SubjectId};
use skillbridge_store::{AccountStore, Page};

/// Account lifecycle and the volunteer-approval workflow.
pub struct AccountService {
    accounts: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }

    /// Resolve an inbound credential to the registered account.
    ///
    /// Full chain: claims resolution, then subject lookup. An
    /// unregistered subject surfaces as `NotFound` so callers can
    /// prompt for registration.
    pub fn authenticate(&self, credential: &str) -> DomainResult<Account> {
        let claims = resolve_bearer(credential)?;
        self.current(&claims.subject)
    }

    /// Look up the account for a subject.
    pub fn current(&self, subject: &SubjectId) -> DomainResult<Account> {
        self.accounts
            .find_by_subject(subject)?
            .ok_or(DomainError::NotFound)
    }

    /// Register a subject under a requested role, or re-register an
    /// existing account.
    ///
    /// Admin and Guardian accounts are approved immediately; Volunteer
    /// accounts queue for administrative approval. Re-registering with
    /// the stored role is a no-op. Switching roles recomputes approval,
    /// so moving into Volunteer always requires re-approval.
    ///
    /// The store's uniqueness constraint on the subject is the guard
    /// against concurrent first-registration creating two accounts.
    pub fn register(&self, subject: SubjectId, requested: Role) -> DomainResult<Account> {
        if let Some(existing) = self.accounts.find_by_subject(&subject)? {
            if existing.role == requested {
                return Ok(existing);
            }
            let updated = self
                .accounts
                .update(existing.id, AccountPatch::role_change(requested))?;
            tracing::info!(account = %updated.id, role = %requested, "account role updated");
            return Ok(updated);
        }

        let created = self
            .accounts
            .insert(NewAccount::for_role(subject, requested))?;
        tracing::info!(account = %created.id, role = %requested, "account registered");
        Ok(created)
    }

    /// Approve a volunteer account. Admin only; idempotent.
    pub fn approve(&self, actor: &Account, account_id: AccountId) -> DomainResult<Account> {
        authorize(actor, Action::ManageAccounts)?;

        let target = self
            .accounts
            .get(account_id)?
            .ok_or(DomainError::NotFound)?;
        if target.approved {
            return Ok(target);
        }

        let updated = self.accounts.update(account_id, AccountPatch::approve())?;
        tracing::info!(account = %updated.id, "account approved");
        Ok(updated)
    }

    /// Volunteer accounts awaiting approval, in creation order. Admin only.
    pub fn list_pending(&self, actor: &Account) -> DomainResult<Vec<Account>> {
        authorize(actor, Action::ManageAccounts)?;
        Ok(self.accounts.list_pending_volunteers()?)
    }

    /// All accounts, paginated. Admin only.
    pub fn list(&self, actor: &Account, page: Page) -> DomainResult<Vec<Account>> {
        authorize(actor, Action::ManageAccounts)?;
        Ok(self.accounts.list(page)?)
    }
}
