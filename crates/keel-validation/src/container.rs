use keel_model::{ContainerInfo, Volume, VolumeSourceKind};
use tracing::debug;

use crate::error::{ValidationError, ValidationResult};

/// Validate a single volume description.
///
/// Checks that exactly one source mechanism is declared and that a typed
/// source carries the payload its kind requires. Path contents are not
/// inspected here; the containerizer resolves and checks paths when it
/// materializes the mount.
pub fn validate_volume(volume: &Volume) -> ValidationResult {
    // hostPath, image and source are mutually exclusive mechanisms.
    let count = usize::from(volume.host_path.is_some())
        + usize::from(volume.image.is_some())
        + usize::from(volume.source.is_some());

    if count != 1 {
        return Err(ValidationError::new(
            "exactly one of 'hostPath', 'image' and 'source' must be set",
        ));
    }

    if let Some(source) = &volume.source {
        match source.kind {
            VolumeSourceKind::DockerVolume => {
                if source.docker_volume.is_none() {
                    return Err(ValidationError::new(
                        "'source.dockerVolume' is not set for a 'dockerVolume' source",
                    ));
                }
            }

            VolumeSourceKind::HostPath => {
                if source.host_path.is_none() {
                    return Err(ValidationError::new(
                        "'source.hostPath' is not set for a 'hostPath' source",
                    ));
                }
            }

            VolumeSourceKind::SandboxPath => {
                if source.sandbox_path.is_none() {
                    return Err(ValidationError::new(
                        "'source.sandboxPath' is not set for a 'sandboxPath' source",
                    ));
                }
            }

            VolumeSourceKind::Secret => {
                if source.secret.is_none() {
                    return Err(ValidationError::new(
                        "'source.secret' is not set for a 'secret' source",
                    ));
                }
            }

            // Reached whenever a peer sends a source kind this build does not
            // know: ordinary bad input, not a programming error.
            VolumeSourceKind::Unknown => {
                return Err(ValidationError::new("'source.kind' is unknown"));
            }
        }
    }

    Ok(())
}

/// Validate every volume of a container configuration, in declaration order.
///
/// Stops at the first invalid volume and wraps its error.
pub fn validate_container_info(container: &ContainerInfo) -> ValidationResult {
    for volume in &container.volumes {
        if let Err(error) = validate_volume(volume) {
            debug!(
                target: "keel_validation::container",
                container_path = %volume.container_path,
                %error,
                "rejecting container info"
            );
            return Err(ValidationError::new(format!("invalid volume: {error}")));
        }
    }

    Ok(())
}
