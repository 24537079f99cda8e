//! External collaborators for botlift.
//!
//! Everything here is an opaque external: the `gcloud` and `docker` CLIs are
//! reached through the [`CommandExecutor`] abstraction, the artifact source
//! through HTTP. The clients translate operations into argv and map exit
//! status to typed errors — nothing more.

pub mod command;
pub mod docker;
pub mod executor;
pub mod fetch;
pub mod gcloud;

pub use command::CommandError;
pub use docker::{DockerClient, DockerError};
pub use executor::{CommandExecutor, RealExecutor};
pub use fetch::{ArtifactFetcher, FetchError};
pub use gcloud::{DeployError, GcloudClient, IamError, ServiceUsageError};
