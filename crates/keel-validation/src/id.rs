use keel_model::{AgentId, ExecutorId, FrameworkId, TaskId};

use crate::error::{ValidationError, ValidationResult};

/// Maximum length in bytes of a single path component (POSIX `NAME_MAX`).
pub const NAME_MAX: usize = 255;

const POSIX_PATH_SEPARATOR: char = '/';
const WINDOWS_PATH_SEPARATOR: char = '\\';

/// Validate a raw identifier string.
///
/// Identifiers name tasks, executors, agents and frameworks, and agents map
/// them to directory names, so they carry filesystem-safe constraints:
/// non-empty, at most [`NAME_MAX`] bytes, not `.` or `..`, and free of
/// control characters and path separators. Both the POSIX and the Windows
/// separator are rejected on every host to keep identifiers portable.
///
/// The string is taken as-is: no normalization, case folding or encoding
/// checks.
pub fn validate_id(id: &str) -> ValidationResult {
    if id.is_empty() {
        return Err(ValidationError::new("id must not be empty"));
    }

    if id.len() > NAME_MAX {
        return Err(ValidationError::new(format!(
            "id must not be longer than {NAME_MAX} characters"
        )));
    }

    // The special path components, exactly.
    if id == "." || id == ".." {
        return Err(ValidationError::new(format!("'{id}' is disallowed")));
    }

    let invalid_character =
        |c: char| c.is_control() || c == POSIX_PATH_SEPARATOR || c == WINDOWS_PATH_SEPARATOR;

    if id.chars().any(invalid_character) {
        return Err(ValidationError::new(format!(
            "'{id}' contains invalid characters"
        )));
    }

    Ok(())
}

// The four wrappers below apply exactly the same rules; they exist so call
// sites say which entity the string labels.

/// Validate a task identifier.
pub fn validate_task_id(id: &TaskId) -> ValidationResult {
    validate_id(id.value())
}

/// Validate an executor identifier.
pub fn validate_executor_id(id: &ExecutorId) -> ValidationResult {
    validate_id(id.value())
}

/// Validate an agent identifier.
pub fn validate_agent_id(id: &AgentId) -> ValidationResult {
    validate_id(id.value())
}

/// Validate a framework identifier.
pub fn validate_framework_id(id: &FrameworkId) -> ValidationResult {
    validate_id(id.value())
}
