use serde::{Deserialize, Serialize};

use crate::Volume;

/// Container runtime configuration attached to a task or executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContainerInfo {
    /// Volumes mounted into the container, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<Volume>,
    /// Hostname visible inside the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_parses_from_empty_object() {
        let container: ContainerInfo = serde_json::from_str("{}").unwrap();
        assert!(container.volumes.is_empty());
        assert!(container.hostname.is_none());
    }

    #[test]
    fn container_serde_roundtrip() {
        let container = ContainerInfo {
            volumes: vec![Volume::host_path("/data", "/var/lib/data")],
            hostname: Some("worker-1".to_string()),
        };

        let json = serde_json::to_string(&container).unwrap();
        let back: ContainerInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, container);
    }
}
