//! Strongly-typed identifiers used across the domain.
//!
//! Record identifiers are opaque integers assigned sequentially by the
//! persistence store; this crate never mints them. [`SubjectId`] is the
//! opaque external identity key issued by the identity provider.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a platform account.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u64);

/// Identifier of a guardian profile.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuardianId(u64);

/// Identifier of a dependent record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependentId(u64);

/// Identifier of a catalog offering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferingId(u64);

/// Identifier of a scheduled engagement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EngagementId(u64);

/// Identifier of a video link record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(u64);

/// Identifier of an enrollment record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnrollmentId(u64);

macro_rules! impl_record_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw store-assigned value.
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = u64::from_str(s)
                    .map_err(|e| DomainError::validation(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_record_id!(AccountId, "AccountId");
impl_record_id!(GuardianId, "GuardianId");
impl_record_id!(DependentId, "DependentId");
impl_record_id!(OfferingId, "OfferingId");
impl_record_id!(EngagementId, "EngagementId");
impl_record_id!(VideoId, "VideoId");
impl_record_id!(EnrollmentId, "EnrollmentId");

/// Opaque external identity key for an account.
///
/// Issued by the identity provider; the platform treats it as a stable
/// unique string and never inspects its structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SubjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
