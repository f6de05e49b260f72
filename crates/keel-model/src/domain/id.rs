use std::fmt;

use serde::{Deserialize, Serialize};

// The four identifier kinds share one representation and one constraint set;
// they are separate types so a task id cannot be passed where an agent id is
// expected.
macro_rules! identifier {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// The raw string this identifier wraps.
            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

identifier! {
    /// Identifier of a task submitted to the cluster.
    TaskId
}

identifier! {
    /// Identifier of the executor that runs tasks on an agent.
    ExecutorId
}

identifier! {
    /// Identifier of an agent node in the cluster.
    AgentId
}

identifier! {
    /// Identifier of a framework registered with the cluster.
    FrameworkId
}
