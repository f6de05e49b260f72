use keel_model::{Secret, SecretKind};

use crate::error::{ValidationError, ValidationResult};

/// Validate that a secret's payload agrees with its declared kind.
///
/// A reference secret must carry only the `reference` payload, an inline
/// secret only the `value` payload. `Unknown` kinds pass unchanged so that a
/// component built before a new kind existed can still carry the secret
/// through.
pub fn validate_secret(secret: &Secret) -> ValidationResult {
    match secret.kind {
        SecretKind::Reference => {
            let Some(reference) = &secret.reference else {
                return Err(ValidationError::new(
                    "secret of kind 'reference' must have the 'reference' field set",
                ));
            };

            if secret.value.is_some() {
                return Err(ValidationError::new(format!(
                    "secret '{}' of kind 'reference' must not have the 'value' field set",
                    reference.name
                )));
            }
        }

        SecretKind::Value => {
            if secret.value.is_none() {
                return Err(ValidationError::new(
                    "secret of kind 'value' must have the 'value' field set",
                ));
            }

            if secret.reference.is_some() {
                return Err(ValidationError::new(
                    "secret of kind 'value' must not have the 'reference' field set",
                ));
            }
        }

        SecretKind::Unknown => {}
    }

    Ok(())
}
