mod id;
pub use id::{AgentId, ExecutorId, FrameworkId, TaskId};

mod secret;
pub use secret::{Secret, SecretKind, SecretReference, SecretValue};

mod environment;
pub use environment::{Environment, Variable, VariableKind};

mod command;
pub use command::CommandInfo;

mod volume;
pub use volume::{
    DockerVolume, HostPathSource, Image, SandboxPathSource, Volume, VolumeMode, VolumeSource,
    VolumeSourceKind,
};

mod container;
pub use container::ContainerInfo;

mod resource;
pub use resource::{Resource, ResourceKind, Resources};
