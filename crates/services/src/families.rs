use std::sync::Arc;

use skillbridge_auth::{authorize, Account, Action, Role};
use skillbridge_core::{DependentId, DomainError, DomainResult};
use skillbridge_families::{Dependent, DependentPatch, Guardian, NewDependent, NewGuardian};
use skillbridge_store::{DependentStore, GuardianStore};

/// Guardian profile registration and lookup.
pub struct GuardianService {
    guardians: Arc<dyn GuardianStore>,
}

impl GuardianService {
    pub fn new(guardians: Arc<dyn GuardianStore>) -> Self {
        Self { guardians }
    }

    /// Register the actor's guardian profile.
    ///
    /// Only accounts holding the Guardian role carry a profile; there
    /// is no registering on someone else's behalf (admins included).
    /// The store constraints on account and email back the two
    /// pre-checks here.
    pub fn register(&self, actor: &Account, email: impl Into<String>) -> DomainResult<Guardian> {
        authorize(actor, Action::ManageFamily)?;
        if actor.role != Role::Guardian {
            return Err(DomainError::Forbidden);
        }

        let mut new = NewGuardian::new(actor.id, email);
        new.validate()?;

        if self.guardians.find_by_account(actor.id)?.is_some() {
            return Err(DomainError::conflict(
                "guardian profile already exists for this account",
            ));
        }
        if self.guardians.find_by_email(&new.email)?.is_some() {
            return Err(DomainError::conflict("email already registered"));
        }

        let created = self.guardians.insert(new)?;
        tracing::info!(guardian = %created.id, account = %actor.id, "guardian registered");
        Ok(created)
    }

    /// The actor's own guardian profile.
    pub fn profile(&self, actor: &Account) -> DomainResult<Guardian> {
        authorize(actor, Action::ManageFamily)?;
        self.guardians
            .find_by_account(actor.id)?
            .ok_or(DomainError::NotFound)
    }
}

/// Dependent records, gated to their owning guardian.
pub struct DependentService {
    guardians: Arc<dyn GuardianStore>,
    dependents: Arc<dyn DependentStore>,
}

impl DependentService {
    pub fn new(guardians: Arc<dyn GuardianStore>, dependents: Arc<dyn DependentStore>) -> Self {
        Self {
            guardians,
            dependents,
        }
    }

    fn own_guardian(&self, actor: &Account) -> DomainResult<Guardian> {
        self.guardians
            .find_by_account(actor.id)?
            .ok_or(DomainError::NotFound)
    }

    /// Register a dependent under the actor's guardian profile.
    pub fn create(&self, actor: &Account, new: NewDependent) -> DomainResult<Dependent> {
        authorize(actor, Action::ManageFamily)?;
        let guardian = self.own_guardian(actor)?;
        new.validate()?;

        let created = self.dependents.insert(guardian.id, new)?;
        tracing::info!(dependent = %created.id, guardian = %guardian.id, "dependent registered");
        Ok(created)
    }

    /// Update a dependent. Only the owning guardian may mutate; a
    /// non-owner is refused and the record is left unchanged.
    pub fn update(
        &self,
        actor: &Account,
        id: DependentId,
        patch: DependentPatch,
    ) -> DomainResult<Dependent> {
        authorize(actor, Action::ManageFamily)?;
        let guardian = self.own_guardian(actor)?;

        let existing = self.dependents.get(id)?.ok_or(DomainError::NotFound)?;
        if existing.guardian_id != guardian.id {
            return Err(DomainError::Forbidden);
        }

        patch.validate()?;
        Ok(self.dependents.update(id, patch)?)
    }

    /// Read a dependent. Reads carry the same ownership gate as
    /// mutations, but a foreign dependent is indistinguishable from a
    /// missing one.
    pub fn get(&self, actor: &Account, id: DependentId) -> DomainResult<Dependent> {
        authorize(actor, Action::ManageFamily)?;
        let guardian = self.own_guardian(actor)?;

        match self.dependents.get(id)? {
            Some(dependent) if dependent.guardian_id == guardian.id => Ok(dependent),
            _ => Err(DomainError::NotFound),
        }
    }

    /// All dependents of the actor's guardian profile.
    pub fn list(&self, actor: &Account) -> DomainResult<Vec<Dependent>> {
        authorize(actor, Action::ManageFamily)?;
        let guardian = self.own_guardian(actor)?;
        Ok(self.dependents.list_by_guardian(guardian.id)?)
    }
}
