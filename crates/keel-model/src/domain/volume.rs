use serde::{Deserialize, Serialize};

use crate::Secret;

/// Access mode of a mounted volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VolumeMode {
    ReadWrite,
    ReadOnly,
}

/// Container image backing a volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Image reference (e.g. `"docker.io/library/redis:7"`).
    pub name: String,
}

impl Image {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Declared kind of a [`VolumeSource`].
///
/// This enumeration is open: peers may send source kinds this build has never
/// heard of, which land on `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VolumeSourceKind {
    DockerVolume,
    HostPath,
    SandboxPath,
    Secret,
    #[serde(other)]
    Unknown,
}

/// Docker-volume-driver backed source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerVolume {
    /// Volume driver plugin; the runtime default driver is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    /// Name of the volume known to the driver.
    pub name: String,
}

/// Host-directory backed source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostPathSource {
    pub path: String,
}

/// Source rooted inside the task or parent executor sandbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SandboxPathSource {
    pub path: String,
}

/// Typed source mechanism of a [`Volume`].
///
/// Like [`Secret`], the declared kind and the payload fields travel
/// independently on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSource {
    pub kind: VolumeSourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_volume: Option<DockerVolume>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_path: Option<HostPathSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox_path: Option<SandboxPathSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<Secret>,
}

/// A storage mount attached to a container.
///
/// Exactly one of `host_path`, `image` and `source` describes where the mount
/// comes from; agreement is checked at admission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    /// Path at which the volume is visible inside the container.
    pub container_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<VolumeMode>,
    /// Absolute or sandbox-relative path on the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<VolumeSource>,
}

impl Volume {
    /// Build a host-path backed volume.
    pub fn host_path(container_path: impl Into<String>, host_path: impl Into<String>) -> Self {
        Self {
            container_path: container_path.into(),
            mode: None,
            host_path: Some(host_path.into()),
            image: None,
            source: None,
        }
    }

    /// Build an image backed volume.
    pub fn image(container_path: impl Into<String>, image: Image) -> Self {
        Self {
            container_path: container_path.into(),
            mode: None,
            host_path: None,
            image: Some(image),
            source: None,
        }
    }

    /// Build a volume with a typed source mechanism.
    pub fn with_source(container_path: impl Into<String>, source: VolumeSource) -> Self {
        Self {
            container_path: container_path.into(),
            mode: None,
            host_path: None,
            image: None,
            source: Some(source),
        }
    }
}
