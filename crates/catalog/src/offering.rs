use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skillbridge_core::{AccountId, DomainError, DomainResult, Entity, OfferingId};

/// A named topic that can be taught.
///
/// The creator reference is informational; it does not gate read
/// access or mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offering {
    pub id: OfferingId,
    pub name: String,
    pub description: Option<String>,
    pub created_by: Option<AccountId>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Offering {
    type Id = OfferingId;

    fn id(&self) -> &OfferingId {
        &self.id
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    Ok(())
}

/// Fields for creating an offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOffering {
    pub name: String,
    pub description: Option<String>,
}

impl NewOffering {
    pub fn validate(&self) -> DomainResult<()> {
        validate_name(&self.name)
    }
}

/// Partial offering update (unset fields keep their stored value).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferingPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl OfferingPatch {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        Ok(())
    }
}

impl Offering {
    /// Apply a pre-validated partial update in place.
    pub fn apply(&mut self, patch: OfferingPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_name() {
        let new = NewOffering {
            name: "  ".to_string(),
            description: None,
        };
        assert!(new.validate().is_err());
    }

    #[test]
    fn patch_keeps_unset_fields() {
        let mut offering = Offering {
            id: OfferingId::new(1),
            name: "Chess".to_string(),
            description: Some("Openings and endgames".to_string()),
            created_by: Some(AccountId::new(7)),
            created_at: Utc::now(),
        };

        offering.apply(OfferingPatch {
            description: Some("Openings only".to_string()),
            ..OfferingPatch::default()
        });

        assert_eq!(offering.name, "Chess");
        assert_eq!(offering.description.as_deref(), Some("Openings only"));
    }
}
