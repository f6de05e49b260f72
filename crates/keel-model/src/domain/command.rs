use serde::{Deserialize, Serialize};

use crate::Environment;

/// Specification of the command an executor runs for a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommandInfo {
    /// Run `value` through a shell instead of exec'ing it directly.
    #[serde(default)]
    pub shell: bool,
    /// Command line (shell mode) or executable path (exec mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Arguments passed to the executable in exec mode.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<String>,
    /// User to run the command as.
    ///
    /// If `None`, the command inherits the user of the agent process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Environment variables for the command.
    #[serde(default, skip_serializing_if = "Environment::is_empty")]
    pub environment: Environment,
}
