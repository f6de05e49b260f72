use serde::{Deserialize, Serialize};

const CPUS: &str = "cpus";
const MEM: &str = "mem";
const DISK: &str = "disk";
const GPUS: &str = "gpus";

/// Representation kind of a [`Resource`] quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    /// Fractional-precision scalar quantity.
    #[default]
    Scalar,
    /// Set of value ranges (e.g. port ranges).
    Ranges,
    /// Set of discrete items.
    Set,
}

/// A named quantity consumed from an agent's pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub name: String,
    #[serde(default)]
    pub kind: ResourceKind,
    /// Scalar quantity; meaningful only when `kind` is [`ResourceKind::Scalar`].
    pub value: f64,
}

impl Resource {
    /// Build a scalar resource entry.
    pub fn scalar(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            kind: ResourceKind::Scalar,
            value,
        }
    }
}

/// Multiset of resource entries offered to or consumed by a task.
///
/// Serialized as a transparent array wrapper. Entries with the same name are
/// not merged; the scalar accessors sum them on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resources(pub Vec<Resource>);

impl Resources {
    /// Create an empty resource collection.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.0.iter()
    }

    /// Append an entry to the collection.
    pub fn push(&mut self, resource: Resource) {
        self.0.push(resource);
    }

    /// Sum of all scalar entries with the given name.
    ///
    /// Returns `None` when no scalar entry with that name exists, so callers
    /// can distinguish "absent" from "present with quantity zero".
    pub fn scalar(&self, name: &str) -> Option<f64> {
        let mut total = None;
        for resource in &self.0 {
            if resource.kind == ResourceKind::Scalar && resource.name == name {
                *total.get_or_insert(0.0) += resource.value;
            }
        }
        total
    }

    /// Total `cpus` quantity.
    pub fn cpus(&self) -> Option<f64> {
        self.scalar(CPUS)
    }

    /// Total `mem` quantity, in megabytes.
    pub fn mem(&self) -> Option<f64> {
        self.scalar(MEM)
    }

    /// Total `disk` quantity, in megabytes.
    pub fn disk(&self) -> Option<f64> {
        self.scalar(DISK)
    }

    /// Total `gpus` quantity.
    pub fn gpus(&self) -> Option<f64> {
        self.scalar(GPUS)
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Resource> for Resources {
    fn from_iter<I: IntoIterator<Item = Resource>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
