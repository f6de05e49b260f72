use serde::{Deserialize, Serialize};

/// Declared kind of a [`Secret`].
///
/// Kinds introduced by newer peers land on `Unknown`, so a component built
/// before the kind existed can still carry the secret through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SecretKind {
    /// Named pointer to secret material stored elsewhere.
    Reference,
    /// Inline secret bytes.
    Value,
    /// A kind this build does not know about.
    #[serde(other)]
    Unknown,
}

/// Named pointer to secret material held by an external store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretReference {
    /// Name of the secret in the store.
    pub name: String,
    /// Key selecting a single entry of the named secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl SecretReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: None,
        }
    }
}

/// Inline secret bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretValue(pub Vec<u8>);

impl SecretValue {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self(data.into())
    }

    pub fn data(&self) -> &[u8] {
        &self.0
    }
}

/// A secret attached to a message, either inline or by reference.
///
/// The declared kind and the payload fields travel independently on the wire;
/// their agreement is checked at admission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    pub kind: SecretKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<SecretReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<SecretValue>,
}

impl Secret {
    /// Build a well-formed reference secret.
    pub fn with_reference(reference: SecretReference) -> Self {
        Self {
            kind: SecretKind::Reference,
            reference: Some(reference),
            value: None,
        }
    }

    /// Build a well-formed inline secret.
    pub fn with_value(data: impl Into<Vec<u8>>) -> Self {
        Self {
            kind: SecretKind::Value,
            reference: None,
            value: Some(SecretValue::new(data)),
        }
    }
}
