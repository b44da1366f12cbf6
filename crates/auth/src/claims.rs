//! Bearer-credential claims resolution (transport-agnostic).
//!
//! Decodes the payload segment of a bearer token into the minimal claim
//! set the platform needs: the stable subject identifier and an
//! optional email. Signature verification is intentionally outside
//! this crate: a production deployment must verify token signatures
//! against the identity provider's keys before trusting the resolved
//! claims.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;

use skillbridge_core::{DomainError, DomainResult, SubjectId};

/// Claims resolved from an inbound credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    pub subject: SubjectId,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawClaims {
    sub: Option<String>,
    email: Option<String>,
}

/// Resolve a bearer credential into identity claims.
///
/// Accepts either a bare token or an `Authorization` header value with
/// a `Bearer ` prefix. Fails with `InvalidCredential` when the
/// credential is absent or malformed (not a three-segment token,
/// undecodable payload, or missing `sub` claim).
pub fn resolve_bearer(credential: &str) -> DomainResult<IdentityClaims> {
    let token = credential
        .strip_prefix("Bearer ")
        .unwrap_or(credential)
        .trim();
    if token.is_empty() {
        return Err(DomainError::invalid_credential("credential missing"));
    }

    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(DomainError::invalid_credential(
            "expected a three-segment token",
        ));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| DomainError::invalid_credential(format!("payload decode: {e}")))?;
    let raw: RawClaims = serde_json::from_slice(&bytes)
        .map_err(|e| DomainError::invalid_credential(format!("payload parse: {e}")))?;

    let subject = raw
        .sub
        .filter(|s| !s.is_empty())
        .ok_or_else(|| DomainError::invalid_credential("missing 'sub' claim"))?;

    Ok(IdentityClaims {
        subject: SubjectId::new(subject),
        email: raw.email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn resolves_subject_and_email() {
        let token = token_with_payload(r#"{"sub":"user_2abc","email":"a@x.com"}"#);
        let claims = resolve_bearer(&token).unwrap();
        assert_eq!(claims.subject.as_str(), "user_2abc");
        assert_eq!(claims.email.as_deref(), Some("a@x.com"));
    }

    #[test]
    fn strips_bearer_prefix() {
        let token = token_with_payload(r#"{"sub":"user_2abc"}"#);
        let claims = resolve_bearer(&format!("Bearer {token}")).unwrap();
        assert_eq!(claims.subject.as_str(), "user_2abc");
        assert_eq!(claims.email, None);
    }

    #[test]
    fn rejects_empty_credential() {
        assert!(matches!(
            resolve_bearer(""),
            Err(DomainError::InvalidCredential(_))
        ));
        assert!(matches!(
            resolve_bearer("Bearer "),
            Err(DomainError::InvalidCredential(_))
        ));
    }

    #[test]
    fn rejects_malformed_token() {
        assert!(matches!(
            resolve_bearer("not-a-token"),
            Err(DomainError::InvalidCredential(_))
        ));
        assert!(matches!(
            resolve_bearer("a.b"),
            Err(DomainError::InvalidCredential(_))
        ));
        assert!(matches!(
            resolve_bearer("a.%%%.c"),
            Err(DomainError::InvalidCredential(_))
        ));
    }

    #[test]
    fn rejects_missing_subject() {
        let token = token_with_payload(r#"{"email":"a@x.com"}"#);
        assert!(matches!(
            resolve_bearer(&token),
            Err(DomainError::InvalidCredential(_))
        ));

        let token = token_with_payload(r#"{"sub":""}"#);
        assert!(matches!(
            resolve_bearer(&token),
            Err(DomainError::InvalidCredential(_))
        ));
    }
}
