use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skillbridge_core::{DependentId, DomainError, DomainResult, Entity, GuardianId};

/// Inclusive age bounds for dependents.
pub const MIN_AGE: u8 = 5;
pub const MAX_AGE: u8 = 18;

/// A minor profile owned by exactly one guardian.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependent {
    pub id: DependentId,
    pub guardian_id: GuardianId,
    pub name: String,
    pub age: u8,
    /// Free-text interests, e.g. "chess, astronomy".
    pub interests: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Dependent {
    type Id = DependentId;

    fn id(&self) -> &DependentId {
        &self.id
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    Ok(())
}

fn validate_age(age: u8) -> DomainResult<()> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(DomainError::validation(format!(
            "age must be between {MIN_AGE} and {MAX_AGE}"
        )));
    }
    Ok(())
}

/// Fields for registering a dependent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDependent {
    pub name: String,
    pub age: u8,
    pub interests: Option<String>,
}

impl NewDependent {
    pub fn validate(&self) -> DomainResult<()> {
        validate_name(&self.name)?;
        validate_age(self.age)
    }
}

/// Partial dependent update (unset fields keep their stored value).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentPatch {
    pub name: Option<String>,
    pub age: Option<u8>,
    pub interests: Option<String>,
}

impl DependentPatch {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(age) = self.age {
            validate_age(age)?;
        }
        Ok(())
    }
}

impl Dependent {
    /// Apply a pre-validated partial update in place.
    pub fn apply(&mut self, patch: DependentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(interests) = patch.interests {
            self.interests = Some(interests);
        }
    }
}
