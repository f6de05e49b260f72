use serde::{Deserialize, Serialize};

use crate::Secret;

/// Declared kind of an environment [`Variable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum VariableKind {
    /// Literal string value.
    ///
    /// This is the wire default when the field is absent.
    #[default]
    Value,
    /// Value resolved from an embedded [`Secret`].
    Secret,
    /// A kind this build does not know about.
    #[serde(other)]
    Unknown,
}

/// A single name/value (or name/secret) pair in an [`Environment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    /// Name under which the value is exported to the process.
    pub name: String,
    #[serde(default)]
    pub kind: VariableKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<Secret>,
}

impl Variable {
    /// Build a literal variable.
    pub fn value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: VariableKind::Value,
            value: Some(value.into()),
            secret: None,
        }
    }

    /// Build a secret-backed variable.
    pub fn secret(name: impl Into<String>, secret: Secret) -> Self {
        Self {
            name: name.into(),
            kind: VariableKind::Secret,
            value: None,
            secret: Some(secret),
        }
    }
}

/// Ordered collection of environment variables passed to a task.
///
/// Internally stored as a list and serialized as a transparent array wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment(pub Vec<Variable>);

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the variables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.0.iter()
    }

    /// Append a variable to the environment.
    pub fn push(&mut self, variable: Variable) {
        self.0.push(variable);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
