use keel_model::CommandInfo;

use crate::environment::validate_environment;
use crate::error::ValidationResult;

/// Validate a command specification.
///
/// Only the embedded environment is checked here; the remaining fields are
/// validated by the components that consume them.
pub fn validate_command_info(command: &CommandInfo) -> ValidationResult {
    validate_environment(&command.environment)
}
