use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skillbridge_core::{AccountId, DomainError, DomainResult, Entity, OfferingId, VideoId};

/// External video link attached to an offering.
///
/// Only the URL is stored; hosting is out of scope. Mutation and
/// deletion are gated to the creating account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    pub offering_id: OfferingId,
    pub title: String,
    pub url: String,
    pub created_by: AccountId,
    pub created_at: DateTime<Utc>,
}

impl Entity for Video {
    type Id = VideoId;

    fn id(&self) -> &VideoId {
        &self.id
    }
}

fn validate_field(value: &str, what: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{what} cannot be empty")));
    }
    Ok(())
}

/// Fields for adding a video link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVideo {
    pub offering_id: OfferingId,
    pub title: String,
    pub url: String,
}

impl NewVideo {
    pub fn validate(&self) -> DomainResult<()> {
        validate_field(&self.title, "title")?;
        validate_field(&self.url, "url")
    }
}

/// Partial video update (unset fields keep their stored value).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPatch {
    pub title: Option<String>,
    pub url: Option<String>,
}

impl VideoPatch {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(title) = &self.title {
            validate_field(title, "title")?;
        }
        if let Some(url) = &self.url {
            validate_field(url, "url")?;
        }
        Ok(())
    }
}

impl Video {
    /// Apply a pre-validated partial update in place.
    pub fn apply(&mut self, patch: VideoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_title_or_url() {
        let blank_title = NewVideo {
            offering_id: OfferingId::new(1),
            title: String::new(),
            url: "https://example.com/v".to_string(),
        };
        assert!(blank_title.validate().is_err());

        let blank_url = NewVideo {
            offering_id: OfferingId::new(1),
            title: "Intro".to_string(),
            url: "  ".to_string(),
        };
        assert!(blank_url.validate().is_err());
    }
}
