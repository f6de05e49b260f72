//! Field-level validation for keel messages.
//!
//! One pure function per message kind, each returning `Ok(())` or a
//! descriptive [`ValidationError`]. Validation is fail-fast: composite
//! validators stop at the first invalid member and wrap the inner message
//! with the identity of the offending member. No function mutates its input,
//! performs I/O, or keeps state across calls, so all of them can be invoked
//! concurrently without coordination.

mod error;
pub use error::{ValidationError, ValidationResult};

mod id;
pub use id::{
    NAME_MAX, validate_agent_id, validate_executor_id, validate_framework_id, validate_id,
    validate_task_id,
};

mod secret;
pub use secret::validate_secret;

mod environment;
pub use environment::validate_environment;

mod command;
pub use command::validate_command_info;

mod container;
pub use container::{validate_container_info, validate_volume};

mod resources;
pub use resources::validate_gpus;

pub mod prelude {
    pub use crate::error::{ValidationError, ValidationResult};
    pub use crate::{
        validate_agent_id, validate_command_info, validate_container_info, validate_environment,
        validate_executor_id, validate_framework_id, validate_gpus, validate_id, validate_secret,
        validate_task_id, validate_volume,
    };
}
