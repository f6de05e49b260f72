use keel_model::{Environment, Variable, VariableKind};
use tracing::debug;

use crate::error::{ValidationError, ValidationResult};
use crate::secret::validate_secret;

/// Validate every variable of an environment, in declaration order.
///
/// Stops at the first invalid variable.
pub fn validate_environment(environment: &Environment) -> ValidationResult {
    for variable in environment.iter() {
        if let Err(error) = validate_variable(variable) {
            debug!(
                target: "keel_validation::environment",
                variable = %variable.name,
                %error,
                "rejecting environment"
            );
            return Err(error);
        }
    }

    Ok(())
}

fn validate_variable(variable: &Variable) -> ValidationResult {
    match variable.kind {
        VariableKind::Secret => {
            let Some(secret) = &variable.secret else {
                return Err(ValidationError::new(format!(
                    "environment variable '{}' of kind 'secret' must have a secret set",
                    variable.name
                )));
            };

            if variable.value.is_some() {
                return Err(ValidationError::new(format!(
                    "environment variable '{}' of kind 'secret' must not have a value set",
                    variable.name
                )));
            }

            if let Err(error) = validate_secret(secret) {
                return Err(ValidationError::new(format!(
                    "environment variable '{}' specifies an invalid secret: {error}",
                    variable.name
                )));
            }

            // A reference is resolved later by the secret store; only inline
            // bytes can put a null into the process environment here.
            if let Some(value) = &secret.value
                && value.data().contains(&0)
            {
                return Err(ValidationError::new(format!(
                    "environment variable '{}' specifies a secret containing null bytes, \
                     which is not allowed in the environment",
                    variable.name
                )));
            }
        }

        VariableKind::Value => {
            if variable.value.is_none() {
                return Err(ValidationError::new(format!(
                    "environment variable '{}' of kind 'value' must have a value set",
                    variable.name
                )));
            }

            if variable.secret.is_some() {
                return Err(ValidationError::new(format!(
                    "environment variable '{}' of kind 'value' must not have a secret set",
                    variable.name
                )));
            }
        }

        VariableKind::Unknown => {
            return Err(ValidationError::new(format!(
                "environment variable '{}' of kind 'unknown' is not allowed",
                variable.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_model::{Secret, SecretKind, SecretReference, SecretValue};

    fn env(variables: Vec<Variable>) -> Environment {
        Environment(variables)
    }

    #[test]
    fn empty_environment_accepted() {
        assert!(validate_environment(&Environment::new()).is_ok());
    }

    #[test]
    fn literal_variables_accepted() {
        let environment = env(vec![
            Variable::value("PATH", "/usr/bin"),
            Variable::value("LANG", "C"),
        ]);
        assert!(validate_environment(&environment).is_ok());
    }

    #[test]
    fn secret_variable_accepted() {
        let environment = env(vec![Variable::secret(
            "TOKEN",
            Secret::with_reference(SecretReference::new("api-token")),
        )]);
        assert!(validate_environment(&environment).is_ok());
    }

    #[test]
    fn secret_variable_without_secret_rejected() {
        let variable = Variable {
            secret: None,
            ..Variable::secret("TOKEN", Secret::with_value(b"t".to_vec()))
        };

        let error = validate_environment(&env(vec![variable])).unwrap_err();
        assert!(error.message().contains("'TOKEN'"));
        assert!(error.message().contains("must have a secret set"));
    }

    #[test]
    fn secret_variable_with_value_rejected() {
        let variable = Variable {
            value: Some("plaintext".to_string()),
            ..Variable::secret("X", Secret::with_value(b"t".to_vec()))
        };

        let error = validate_environment(&env(vec![variable])).unwrap_err();
        assert!(error.message().contains("'X'"));
        assert!(error.message().contains("must not have a value set"));
    }

    #[test]
    fn value_variable_without_value_rejected() {
        let variable = Variable {
            value: None,
            ..Variable::value("EMPTY", "x")
        };

        let error = validate_environment(&env(vec![variable])).unwrap_err();
        assert!(error.message().contains("'EMPTY'"));
        assert!(error.message().contains("must have a value set"));
    }

    #[test]
    fn value_variable_with_secret_rejected() {
        let variable = Variable {
            secret: Some(Secret::with_value(b"t".to_vec())),
            ..Variable::value("MIXED", "x")
        };

        let error = validate_environment(&env(vec![variable])).unwrap_err();
        assert!(error.message().contains("'MIXED'"));
        assert!(error.message().contains("must not have a secret set"));
    }

    #[test]
    fn unknown_kind_rejected() {
        let variable = Variable {
            name: "FUTURE".to_string(),
            kind: VariableKind::Unknown,
            value: None,
            secret: None,
        };

        let error = validate_environment(&env(vec![variable])).unwrap_err();
        assert!(error.message().contains("'unknown' is not allowed"));
    }

    #[test]
    fn invalid_embedded_secret_wrapped_with_variable_name() {
        let malformed = Secret {
            kind: SecretKind::Value,
            reference: None,
            value: None,
        };

        let error = validate_environment(&env(vec![Variable::secret("KEY", malformed)])).unwrap_err();
        assert!(error.message().contains("'KEY'"));
        assert!(error.message().contains("invalid secret"));
        assert!(error.message().contains("must have the 'value' field set"));
    }

    #[test]
    fn null_byte_in_inline_secret_rejected() {
        let secret = Secret::with_value(b"before\0after".to_vec());

        let error = validate_environment(&env(vec![Variable::secret("NULLED", secret)])).unwrap_err();
        assert!(error.message().contains("'NULLED'"));
        assert!(error.message().contains("null bytes"));
    }

    #[test]
    fn null_byte_check_applies_to_unknown_kind_payloads() {
        // An unknown-kind secret passes secret validation, but inline bytes
        // still cannot carry nulls into the environment.
        let secret = Secret {
            kind: SecretKind::Unknown,
            reference: None,
            value: Some(SecretValue::new(b"\0".to_vec())),
        };

        let error = validate_environment(&env(vec![Variable::secret("ODD", secret)])).unwrap_err();
        assert!(error.message().contains("null bytes"));
    }

    #[test]
    fn first_invalid_variable_wins() {
        let environment = env(vec![
            Variable::value("GOOD", "ok"),
            Variable {
                value: None,
                ..Variable::value("FIRST_BAD", "x")
            },
            Variable {
                name: "SECOND_BAD".to_string(),
                kind: VariableKind::Unknown,
                value: None,
                secret: None,
            },
        ]);

        let error = validate_environment(&environment).unwrap_err();
        assert!(error.message().contains("'FIRST_BAD'"));
    }
}
