//! Typed records for GitHub Actions secrets API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository public key used to seal secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    /// Identifier sent back alongside every sealed value.
    pub key_id: String,
    /// X25519 public key, standard base64.
    pub key: String,
}

/// Secret metadata. GitHub never returns secret values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretMetadata {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One snapshot of a repository's secrets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretList {
    pub total_count: usize,
    pub secrets: Vec<SecretMetadata>,
}

impl SecretList {
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.secrets.iter().map(|s| s.name.as_str())
    }
}

/// Body of a create-or-update request.
#[derive(Debug, Clone, Serialize)]
pub struct SealedSecret {
    pub encrypted_value: String,
    pub key_id: String,
}

/// Result of a create-or-update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    Created,
    Updated,
}

impl std::fmt::Display for SetOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetOutcome::Created => write!(f, "created"),
            SetOutcome::Updated => write!(f, "updated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key_from_api_payload() {
        let json = r#"{"key_id":"012345678912345678","key":"2Sg8iYjAxxmI2LvUXpJjkYrMxURPc8r+dB7TJyvv1234"}"#;
        let key: PublicKey = serde_json::from_str(json).unwrap();
        assert_eq!(key.key_id, "012345678912345678");
        assert!(key.key.starts_with("2Sg8"));
    }

    #[test]
    fn test_public_key_missing_field_rejected() {
        assert!(serde_json::from_str::<PublicKey>(r#"{"key":"abc"}"#).is_err());
    }

    #[test]
    fn test_secret_list_from_api_payload() {
        let json = r#"{
            "total_count": 2,
            "secrets": [
                {"name": "GH_TOKEN", "created_at": "2019-08-10T14:59:22Z", "updated_at": "2020-01-10T14:59:22Z"},
                {"name": "GIST_ID", "created_at": "2020-01-10T10:59:22Z", "updated_at": "2020-01-11T11:59:22Z"}
            ]
        }"#;
        let list: SecretList = serde_json::from_str(json).unwrap();
        assert_eq!(list.total_count, 2);
        assert_eq!(list.len(), 2);
        assert_eq!(list.names().collect::<Vec<_>>(), ["GH_TOKEN", "GIST_ID"]);
    }

    #[test]
    fn test_sealed_secret_body() {
        let body = SealedSecret {
            encrypted_value: "c2VhbGVk".to_string(),
            key_id: "abc".to_string(),
        };
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(value["encrypted_value"], "c2VhbGVk");
        assert_eq!(value["key_id"], "abc");
    }
}
